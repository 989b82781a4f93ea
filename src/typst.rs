use typst_as_lib::TypstEngine;
use typst_as_lib::typst_kit_options::TypstKitFontOptions;
use typst_library::layout::PagedDocument;
use typst_pdf::PdfOptions;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::node::{DocumentNode, Table};

/// Convert nodes to Typst markup
pub fn nodes_to_typst(nodes: &[DocumentNode], config: &Config) -> String {
    let mut out = String::new();

    out.push_str("#set par(linebreaks: \"optimized\")\n");
    out.push_str(&format!("#set text(size: {}pt)\n", config.style.body_size));
    if config.page.numbers {
        out.push_str("#set page(numbering: \"1\")\n");
    }
    out.push('\n');

    let mut i = 0;
    while i < nodes.len() {
        let node = &nodes[i];

        match node {
            DocumentNode::Heading { .. } => {
                // Keep heading with following content using a block that prevents breaks
                out.push_str("#block(breakable: false)[\n");
                emit_node(node, config, &mut out);

                if i + 1 < nodes.len() {
                    i += 1;
                    emit_node(&nodes[i], config, &mut out);
                }
                out.push_str("]\n\n");
            }
            _ => {
                emit_node(node, config, &mut out);
            }
        }

        i += 1;
    }

    out
}

fn emit_node(node: &DocumentNode, config: &Config, out: &mut String) {
    match node {
        DocumentNode::Heading { level, text } => {
            for _ in 0..*level {
                out.push('=');
            }
            out.push(' ');
            escape_markup(text, out);
            out.push_str("\n\n");
        }
        DocumentNode::Paragraph { text } => {
            escape_markup(text, out);
            out.push_str("\n\n");
        }
        DocumentNode::ListItem { text, .. } => {
            // A string literal, so "1." is not read as an enum marker
            out.push_str("#text(");
            string_literal(text, out);
            out.push_str(")\n\n");
        }
        DocumentNode::Table(table) => {
            out.push_str("#block(breakable: false)[\n");
            table_to_typst(table, config, out);
            out.push_str("]\n\n");
        }
    }
}

fn escape_markup(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '#' | '*' | '_' | '@' | '$' | '\\' | '`' | '<' | '>' | '[' | ']' | '=' | '-' | '+'
            | '/' | '~' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
}

fn string_literal(text: &str, out: &mut String) {
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out.push('"');
}

fn table_to_typst(table: &Table, config: &Config, out: &mut String) {
    let columns = table.columns();

    out.push_str("#table(\n");
    out.push_str(&format!("  columns: {},\n", columns));

    for (i, row) in table.rows().iter().enumerate() {
        let bold = i == 0 && config.style.table_header_bold;
        for col in 0..columns {
            let cell = row.get(col).map(String::as_str).unwrap_or("");
            out.push_str(if bold { "  [*" } else { "  [" });
            escape_markup(cell, out);
            out.push_str(if bold { "*],\n" } else { "],\n" });
        }
    }

    out.push_str(")\n");
}

/// Compile nodes into PDF bytes.
pub fn nodes_to_pdf(nodes: &[DocumentNode], config: &Config) -> Result<Vec<u8>> {
    let typst_content = nodes_to_typst(nodes, config);

    let font_options = TypstKitFontOptions::new()
        .include_embedded_fonts(true)
        .include_system_fonts(false);

    let engine = TypstEngine::builder()
        .main_file(typst_content)
        .search_fonts_with(font_options)
        .build();

    let doc: PagedDocument = engine
        .compile()
        .output
        .map_err(|e| Error::Typst(format!("{:?}", e)))?;

    typst_pdf::pdf(&doc, &PdfOptions::default()).map_err(|e| Error::Pdf(format!("{:?}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    const PREAMBLE: &str = "#set par(linebreaks: \"optimized\")\n#set text(size: 11pt)\n\n";

    fn to_typst(md: &str) -> String {
        nodes_to_typst(&parse(md), &Config::default())
    }

    #[test]
    fn heading() {
        assert_eq!(
            to_typst("# Hello"),
            format!("{PREAMBLE}#block(breakable: false)[\n= Hello\n\n]\n\n")
        );
    }

    #[test]
    fn heading_with_following_content() {
        let result = to_typst("## Title\n\nSome text.");
        assert!(result.contains("#block(breakable: false)[\n== Title\n\nSome text.\n\n]\n\n"));
    }

    #[test]
    fn paragraph_is_escaped() {
        assert_eq!(to_typst("a # b"), format!("{PREAMBLE}a \\# b\n\n"));
        assert_eq!(to_typst("C#_net"), format!("{PREAMBLE}C\\#\\_net\n\n"));
    }

    #[test]
    fn list_items_are_literal_text() {
        assert_eq!(
            to_typst("1. First \"step\""),
            format!("{PREAMBLE}#text(\"1. First \\\"step\\\"\")\n\n")
        );
        assert_eq!(
            to_typst("- one"),
            format!("{PREAMBLE}#text(\"• one\")\n\n")
        );
    }

    #[test]
    fn table_with_bold_first_row() {
        let md = "| A | B |\n|---|---|\n| 1 |";
        let expected = format!(
            "{PREAMBLE}#block(breakable: false)[\n#table(\n  columns: 2,\n  [*A*],\n  [*B*],\n  [1],\n  [],\n)\n]\n\n"
        );
        assert_eq!(to_typst(md), expected);
    }

    #[test]
    fn page_numbers_from_config() {
        let mut config = Config::default();
        config.page.numbers = true;
        assert!(nodes_to_typst(&[], &config).contains("#set page(numbering: \"1\")\n"));
    }

    #[test]
    fn compiles_to_pdf() {
        let nodes = parse("# Jane Doe\n\n- Rust\n1. Shipped\n\n|Skill|Years|\n|---|---|\n|Rust|\n");
        let mut config = Config::default();
        config.page.numbers = true;
        let bytes = nodes_to_pdf(&nodes, &config).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
