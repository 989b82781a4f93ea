//! Error types for md2docx operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading config, converting, or writing documents.
///
/// The markdown transform itself never fails; everything here comes from
/// the filesystem, the config file, or a serializer.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("docx packaging failed: {0}")]
    Docx(String),

    #[error("Typst compilation failed: {0}")]
    Typst(String),

    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

pub type Result<T> = std::result::Result<T, Error>;
