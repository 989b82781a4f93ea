//! Batch driver: convert every configured document, one at a time.
//!
//! A failing document is logged and recorded in the [`BatchReport`]; the
//! remaining documents are still converted.

use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info};

use crate::config::{Config, DocumentConfig, OutputFormat};
use crate::error::{Error, Result};

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Read `input`, convert it, and write the result to `output`.
pub fn convert_file(input: &Path, output: &Path, format: OutputFormat, config: &Config) -> Result<()> {
    let markdown = fs::read_to_string(input).map_err(|source| Error::Io {
        path: input.to_path_buf(),
        source,
    })?;

    let bytes = crate::convert(&markdown, format, config)?;

    if let Some(dir) = output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| Error::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    fs::write(output, bytes).map_err(|source| Error::Io {
        path: output.to_path_buf(),
        source,
    })
}

/// Convert each document in order. Never stops early.
pub fn run(documents: &[DocumentConfig], config: &Config) -> BatchReport {
    let mut report = BatchReport::default();

    for doc in documents {
        match convert_file(&doc.input, &doc.output, doc.format(), config) {
            Ok(()) => {
                info!("{} -> {}", doc.input.display(), doc.output.display());
                report.converted.push(doc.output.clone());
            }
            Err(e) => {
                error!("failed to convert {}: {}", doc.input.display(), e);
                report.failed.push((doc.input.clone(), e.to_string()));
            }
        }
    }

    info!(
        "{} converted, {} failed",
        report.converted.len(),
        report.failed.len()
    );
    report
}
