//! Format conversion command handler.
//!
//! One-shot conversions between the supported notations: GLYCAM → IUPAC,
//! IUPAC → WURCS (through the external converter), WURCS anomer derivation,
//! WURCS structural breakdown and the SMILES fallback.

use crate::convert::{IupacConverter, SmilesConverter};
use crate::grammar;
use anyhow::Result;
use serde::Serialize;

/// Which conversion to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertTarget {
    /// GLYCAM linear name → condensed IUPAC
    GlycamToIupac,
    /// IUPAC → (GlyTouCan, WURCS) via the external converter
    IupacToWurcs,
    /// WURCS → alpha/beta anomer variants
    AnomerVariants,
    /// WURCS → structural breakdown
    WurcsSplit,
    /// SMILES → WURCS via MolWURCS
    SmilesToWurcs,
}

#[derive(Serialize)]
struct AnomerOutput<'a> {
    input: &'a str,
    alpha: String,
    beta: String,
}

#[derive(Serialize)]
struct IupacOutput<'a> {
    input: &'a str,
    glytoucan: Option<String>,
    wurcs: Option<String>,
}

/// Run a conversion and print the result as JSON on stdout.
///
/// Returns the process exit code: 0 on success, 1 when the conversion
/// produced no output (a negative result, not an error).
pub fn run_convert(
    target: ConvertTarget,
    input: &str,
    iupac_converter: &dyn IupacConverter,
    smiles_converter: &dyn SmilesConverter,
) -> Result<i32> {
    match target {
        ConvertTarget::GlycamToIupac => {
            let iupac = grammar::to_iupac(grammar::tidy(input));
            println!("{}", serde_json::to_string_pretty(&serde_json::json!({
                "input": input,
                "iupac": iupac,
            }))?);
            Ok(0)
        }
        ConvertTarget::IupacToWurcs => {
            let conversion = iupac_converter.iupac_to_wurcs(input)?;
            let empty = conversion.glytoucan.is_none() && conversion.wurcs.is_none();
            let output = IupacOutput {
                input,
                glytoucan: conversion.glytoucan,
                wurcs: conversion.wurcs,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(i32::from(empty))
        }
        ConvertTarget::AnomerVariants => {
            let (alpha, beta) = grammar::anomer_variants(input);
            let output = AnomerOutput {
                input,
                alpha,
                beta,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(0)
        }
        ConvertTarget::WurcsSplit => {
            let breakdown = grammar::wurcs_split(input)?;
            println!("{}", serde_json::to_string_pretty(&serde_json::json!({
                "input": input,
                "version": breakdown.version,
                "unique_residue_count": breakdown.unique_residue_count,
                "residue_count": breakdown.residue_count,
                "linkage_count": breakdown.linkage_count,
                "unique_residues": breakdown.unique_residues,
                "residue_sequence": breakdown.residue_sequence,
                "linkages": breakdown.linkages,
            }))?);
            Ok(0)
        }
        ConvertTarget::SmilesToWurcs => {
            let wurcs = smiles_converter.smiles_to_wurcs(input)?;
            println!("{}", serde_json::to_string_pretty(&serde_json::json!({
                "input": input,
                "wurcs": wurcs,
            }))?);
            Ok(0)
        }
    }
}
