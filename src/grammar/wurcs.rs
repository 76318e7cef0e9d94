//! WURCS structural parsing and anomer derivation.
//!
//! A WURCS string has the shape
//! `WURCS=<version>/<a>,<b>,<c>/[res1][res2].../<sequence>/<linkages>` where
//! `a` counts unique residue descriptors, `b` counts residue sequence
//! positions and `c` counts linkages. Parsing here checks structural
//! well-formedness only; whether a linkage actually points at a valid
//! sequence position is not validated.

use crate::error::{GlycanToolsError, ParseErrorKind, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Structural breakdown of a WURCS string.
///
/// Derived per request, never stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WurcsBreakdown {
    /// Format version from the `WURCS=<version>/` prefix, e.g. `2.0`.
    pub version: String,
    /// Declared count of unique residue descriptors.
    pub unique_residue_count: usize,
    /// Declared count of residue sequence positions.
    pub residue_count: usize,
    /// Declared count of linkages.
    pub linkage_count: usize,
    /// Unique residue descriptors, outer brackets removed.
    pub unique_residues: Vec<String>,
    /// Residue sequence: 1-based indices into `unique_residues`.
    pub residue_sequence: Vec<u32>,
    /// Linkage descriptors, e.g. `a4-b1`.
    pub linkages: Vec<String>,
}

impl WurcsBreakdown {
    /// Space-joined unique residue list, as scored by the similarity search.
    #[must_use]
    pub fn residues_joined(&self) -> String {
        self.unique_residues.join(" ")
    }

    /// Hyphen-joined residue sequence.
    #[must_use]
    pub fn sequence_joined(&self) -> String {
        self.residue_sequence
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Space-joined linkage list.
    #[must_use]
    pub fn linkages_joined(&self) -> String {
        self.linkages.join(" ")
    }
}

static HEADER_COUNTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+),(\d+),(\d+)$").expect("static regex"));

/// Derive the alpha and beta anomer variants of a WURCS string.
///
/// Anomeric configuration left underdetermined by the source notation shows
/// up as the placeholder `x` in ring descriptors; the variants substitute it
/// with `a` and `b` respectively. Pure literal substitution, no external
/// calls.
#[must_use]
pub fn anomer_variants(wurcs: &str) -> (String, String) {
    let alpha = wurcs.replace('x', "a");
    let beta = wurcs.replace('x', "b");
    (alpha, beta)
}

/// Parse a WURCS string into its structural breakdown.
///
/// Rejects anything that violates the `a,b,c/.../.../...` structure or whose
/// list lengths disagree with the declared counts. Malformed input is a parse
/// failure, never a partial result.
pub fn split(wurcs: &str) -> Result<WurcsBreakdown> {
    let parse_err = |kind| GlycanToolsError::parse(format!("WURCS {wurcs:?}"), kind);

    let trimmed = wurcs.trim();
    if trimmed.is_empty() {
        return Err(parse_err(ParseErrorKind::EmptyInput));
    }
    let body = trimmed
        .strip_prefix("WURCS=")
        .ok_or_else(|| parse_err(ParseErrorKind::MissingWurcsPrefix))?;

    let (version, rest) = body
        .split_once('/')
        .ok_or_else(|| parse_err(ParseErrorKind::InvalidWurcsHeader("no sections".into())))?;
    let (counts, rest) = rest
        .split_once('/')
        .ok_or_else(|| parse_err(ParseErrorKind::InvalidWurcsHeader("no counts section".into())))?;

    let caps = HEADER_COUNTS
        .captures(counts)
        .ok_or_else(|| parse_err(ParseErrorKind::InvalidWurcsHeader(counts.to_string())))?;
    let unique_residue_count: usize = caps[1]
        .parse()
        .map_err(|_| parse_err(ParseErrorKind::InvalidWurcsHeader(counts.to_string())))?;
    let residue_count: usize = caps[2]
        .parse()
        .map_err(|_| parse_err(ParseErrorKind::InvalidWurcsHeader(counts.to_string())))?;
    let linkage_count: usize = caps[3]
        .parse()
        .map_err(|_| parse_err(ParseErrorKind::InvalidWurcsHeader(counts.to_string())))?;

    let (unique_residues, after_residues) = extract_residues(rest, unique_residue_count)
        .map_err(|kind| parse_err(kind))?;

    // Exactly a sequence section and a linkage section must follow the
    // residue descriptors.
    let sections: Vec<&str> = after_residues.split('/').collect();
    if sections.len() != 3 || !sections[0].is_empty() {
        return Err(parse_err(ParseErrorKind::SectionCountMismatch {
            found: sections.len(),
        }));
    }

    let residue_sequence = sections[1]
        .split('-')
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .map_err(|_| parse_err(ParseErrorKind::InvalidSequenceEntry(s.to_string())))
        })
        .collect::<Result<Vec<_>>>()?;

    let linkages: Vec<String> = sections[2]
        .split('_')
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect();

    if residue_sequence.len() != residue_count {
        return Err(parse_err(ParseErrorKind::LengthMismatch {
            field: "residue sequence",
            expected: residue_count,
            found: residue_sequence.len(),
        }));
    }
    if linkages.len() != linkage_count {
        return Err(parse_err(ParseErrorKind::LengthMismatch {
            field: "linkage list",
            expected: linkage_count,
            found: linkages.len(),
        }));
    }

    Ok(WurcsBreakdown {
        version: version.to_string(),
        unique_residue_count,
        residue_count,
        linkage_count,
        unique_residues,
        residue_sequence,
        linkages,
    })
}

/// Extract exactly `count` bracketed residue descriptors from the front of
/// `input`, matching balanced outer brackets. Residue descriptors may contain
/// nested brackets, so a non-greedy scan over `]` would split them wrongly.
fn extract_residues(
    input: &str,
    count: usize,
) -> std::result::Result<(Vec<String>, &str), ParseErrorKind> {
    let bytes = input.as_bytes();
    let mut residues = Vec::with_capacity(count);
    let mut pos = 0;

    for _ in 0..count {
        if pos >= bytes.len() || bytes[pos] != b'[' {
            return Err(ParseErrorKind::ResidueCountMismatch {
                expected: count,
                found: residues.len(),
            });
        }
        let start = pos;
        let mut depth = 0usize;
        let mut end = None;
        for (offset, &byte) in bytes[pos..].iter().enumerate() {
            match byte {
                b'[' => depth += 1,
                b']' => {
                    depth -= 1;
                    if depth == 0 {
                        end = Some(pos + offset);
                        break;
                    }
                }
                _ => {}
            }
        }
        let end = end.ok_or(ParseErrorKind::UnbalancedBrackets(start))?;
        residues.push(input[start + 1..end].to_string());
        pos = end + 1;
    }

    Ok((residues, &input[pos..]))
}
