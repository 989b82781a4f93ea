pub mod batch;
mod config;
mod docx;
mod error;
mod node;
mod parser;
mod patterns;
mod typst;

pub use batch::{BatchReport, convert_file};
pub use config::{Config, DocumentConfig, OutputFormat, PageConfig, StyleConfig};
pub use error::{Error, Result};
pub use node::{BULLET, DocumentNode, Table, TableError};
pub use parser::parse_lines;

use log::debug;

/// Parse markdown text into a vector of document nodes.
pub fn parse(markdown: &str) -> Vec<DocumentNode> {
    let nodes = parser::parse(markdown);
    debug!("parsed {} nodes", nodes.len());
    nodes
}

/// Convert markdown to docx bytes using default config.
pub fn markdown_to_docx(markdown: &str) -> Result<Vec<u8>> {
    markdown_to_docx_with_config(markdown, &Config::compiled_default())
}

/// Convert markdown to docx bytes with custom config.
pub fn markdown_to_docx_with_config(markdown: &str, config: &Config) -> Result<Vec<u8>> {
    docx::nodes_to_docx(&parse(markdown), &config.style)
}

/// Convert markdown to Typst markup with custom config.
pub fn markdown_to_typst_with_config(markdown: &str, config: &Config) -> String {
    typst::nodes_to_typst(&parse(markdown), config)
}

/// Convert markdown to PDF bytes using default config.
pub fn markdown_to_pdf(markdown: &str) -> Result<Vec<u8>> {
    markdown_to_pdf_with_config(markdown, &Config::compiled_default())
}

/// Convert markdown to PDF bytes with custom config.
pub fn markdown_to_pdf_with_config(markdown: &str, config: &Config) -> Result<Vec<u8>> {
    typst::nodes_to_pdf(&parse(markdown), config)
}

/// Convert markdown to the bytes of the requested format.
pub fn convert(markdown: &str, format: OutputFormat, config: &Config) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Docx => markdown_to_docx_with_config(markdown, config),
        OutputFormat::Pdf => markdown_to_pdf_with_config(markdown, config),
    }
}
