use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub style: StyleConfig,
    pub page: PageConfig,
    pub documents: Vec<DocumentConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub font: String,
    pub body_size: usize,
    pub h1_size: usize,
    pub h2_size: usize,
    pub h3_size: usize,
    pub table_header_bold: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font: "Calibri".to_string(),
            body_size: 11,
            h1_size: 20,
            h2_size: 16,
            h3_size: 13,
            table_header_bold: true,
        }
    }
}

impl StyleConfig {
    /// Point size for a heading level, falling back to the body size.
    pub fn heading_size(&self, level: u8) -> usize {
        match level {
            1 => self.h1_size,
            2 => self.h2_size,
            3 => self.h3_size,
            _ => self.body_size,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct PageConfig {
    pub numbers: bool,
}

/// Output format of a conversion.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Docx,
    Pdf,
}

impl OutputFormat {
    /// Guess from an output path, `.pdf` meaning PDF and anything else docx.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => OutputFormat::Pdf,
            _ => OutputFormat::Docx,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Docx => "docx",
            OutputFormat::Pdf => "pdf",
        }
    }
}

/// One entry of the batch list.
#[derive(Debug, Deserialize, Clone)]
pub struct DocumentConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: Option<OutputFormat>,
}

impl DocumentConfig {
    pub fn format(&self) -> OutputFormat {
        self.format
            .unwrap_or_else(|| OutputFormat::from_path(&self.output))
    }
}

impl Config {
    /// The config bundled into the binary.
    pub fn compiled_default() -> Self {
        // Validated by build.rs
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Parse config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from a TOML file, or return the compiled default if not found.
    /// Relative document paths are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::compiled_default()),
            Err(source) => {
                return Err(Error::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut config = Self::from_toml(&content)?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    fn resolve_paths(&mut self, base: &Path) {
        for doc in &mut self.documents {
            if doc.input.is_relative() {
                doc.input = base.join(&doc.input);
            }
            if doc.output.is_relative() {
                doc.output = base.join(&doc.output);
            }
        }
    }
}
