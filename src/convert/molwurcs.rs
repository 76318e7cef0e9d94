//! MolWURCS subprocess wrapper for SMILES → WURCS conversion.
//!
//! MolWURCS ships as a Java jar; this wrapper shells out to it. Used only as
//! the structural fallback path when no name-based identification is
//! possible.

use super::traits::SmilesConverter;
use crate::error::{ConversionErrorKind, GlycanToolsError, Result};
use std::path::PathBuf;
use std::process::Command;

/// SMILES → WURCS converter backed by the MolWURCS jar.
#[derive(Debug, Clone)]
pub struct MolWurcsConverter {
    jar_path: PathBuf,
    java_binary: String,
}

impl MolWurcsConverter {
    /// Create a converter for a MolWURCS jar on disk.
    #[must_use]
    pub fn new(jar_path: impl Into<PathBuf>) -> Self {
        Self {
            jar_path: jar_path.into(),
            java_binary: "java".to_string(),
        }
    }

    /// Override the java binary (e.g. a pinned JRE path).
    #[must_use]
    pub fn with_java_binary(mut self, java_binary: impl Into<String>) -> Self {
        self.java_binary = java_binary.into();
        self
    }
}

impl SmilesConverter for MolWurcsConverter {
    fn smiles_to_wurcs(&self, smiles: &str) -> Result<String> {
        let output = Command::new(&self.java_binary)
            .arg("-jar")
            .arg(&self.jar_path)
            .args(["--in", "smi", "--out", "wurcs"])
            .arg(smiles)
            .output()
            .map_err(|e| {
                GlycanToolsError::conversion(
                    "SMILES to WURCS",
                    ConversionErrorKind::Unavailable(format!(
                        "failed to launch {}: {e}",
                        self.java_binary
                    )),
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GlycanToolsError::conversion(
                "SMILES to WURCS",
                ConversionErrorKind::ToolFailed(stderr.trim().to_string()),
            ));
        }

        let wurcs = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if wurcs.is_empty() {
            return Err(GlycanToolsError::conversion(
                "SMILES to WURCS",
                ConversionErrorKind::InvalidResponse("empty output".to_string()),
            ));
        }
        Ok(wurcs)
    }

    fn name(&self) -> &'static str {
        "MolWURCS"
    }
}
