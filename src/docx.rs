use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run, RunFonts, Style, StyleType, Table as DocxTable, TableCell, TableRow};

use crate::config::StyleConfig;
use crate::error::{Error, Result};
use crate::node::{DocumentNode, Table};

/// docx sizes are in half-points
fn half_points(pt: usize) -> usize {
    pt.saturating_mul(2)
}

fn heading_style_id(level: u8) -> String {
    format!("Heading{}", level)
}

/// Build a docx document from nodes
pub fn build(nodes: &[DocumentNode], style: &StyleConfig) -> Docx {
    let fonts = RunFonts::new().ascii(&style.font).hi_ansi(&style.font);
    let mut doc = Docx::new()
        .default_fonts(fonts)
        .default_size(half_points(style.body_size));

    for level in 1..=3u8 {
        doc = doc.add_style(
            Style::new(heading_style_id(level), StyleType::Paragraph)
                .name(format!("Heading {}", level))
                .bold()
                .size(half_points(style.heading_size(level))),
        );
    }

    for node in nodes {
        doc = match node {
            DocumentNode::Heading { level, text } => doc.add_paragraph(
                Paragraph::new()
                    .style(&heading_style_id(*level))
                    .add_run(
                        Run::new()
                            .add_text(text)
                            .bold()
                            .size(half_points(style.heading_size(*level))),
                    ),
            ),
            // List text already carries its bullet or numeral
            DocumentNode::Paragraph { text } | DocumentNode::ListItem { text, .. } => {
                doc.add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
            }
            DocumentNode::Table(table) => doc.add_table(table_to_docx(table, style)),
        };
    }

    doc
}

fn table_to_docx(table: &Table, style: &StyleConfig) -> DocxTable {
    let columns = table.columns();
    let rows = table
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let bold = i == 0 && style.table_header_bold;
            let cells = (0..columns)
                .map(|col| {
                    let text = row.get(col).map(String::as_str).unwrap_or("");
                    let mut run = Run::new().add_text(text);
                    if bold {
                        run = run.bold();
                    }
                    TableCell::new().add_paragraph(Paragraph::new().add_run(run))
                })
                .collect();
            TableRow::new(cells)
        })
        .collect();
    DocxTable::new(rows)
}

/// Serialize nodes to docx bytes.
pub fn nodes_to_docx(nodes: &[DocumentNode], style: &StyleConfig) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    build(nodes, style)
        .build()
        .pack(&mut buf)
        .map_err(|e| Error::Docx(e.to_string()))?;
    Ok(buf.into_inner())
}
