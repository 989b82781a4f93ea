use log::warn;

use crate::node::{BULLET, DocumentNode, Table};
use crate::patterns::{BULLET_MARKER_RE, ORDERED_ITEM_RE, strip_inline};

/// Parse markdown text into a list of document nodes
pub fn parse(markdown: &str) -> Vec<DocumentNode> {
    parse_lines(markdown.split('\n'))
}

/// Parse an already split sequence of lines.
pub fn parse_lines<'a, I>(lines: I) -> Vec<DocumentNode>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .fold(Scanner::default(), |scanner, (index, line)| scanner.step(index + 1, line))
        .finish()
}

/// What a single line is, before the table state is taken into account.
/// Variant order is match priority.
#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    Blank,
    TableDivider,
    TableRow(Vec<String>),
    Heading { level: u8, text: &'a str },
    Rule,
    Bullet(&'a str),
    Numbered(&'a str),
    Text(&'a str),
}

fn classify(line: &str) -> LineKind<'_> {
    if line.is_empty() {
        return LineKind::Blank;
    }
    if line.starts_with('|') {
        if line.contains("---") {
            return LineKind::TableDivider;
        }
        return LineKind::TableRow(split_cells(line));
    }
    if let Some(text) = line.strip_prefix("# ") {
        return LineKind::Heading { level: 1, text };
    }
    if let Some(text) = line.strip_prefix("## ") {
        return LineKind::Heading { level: 2, text };
    }
    if let Some(text) = line.strip_prefix("### ") {
        return LineKind::Heading { level: 3, text };
    }
    if line.starts_with("---") {
        return LineKind::Rule;
    }
    if line.starts_with("- ") || line.starts_with("* ") {
        let marker = BULLET_MARKER_RE.find(line).map_or(0, |m| m.end());
        return LineKind::Bullet(&line[marker..]);
    }
    if ORDERED_ITEM_RE.is_match(line) {
        return LineKind::Numbered(line);
    }
    LineKind::Text(line)
}

fn split_cells(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Default)]
enum ScanState {
    #[default]
    Scanning,
    InTable {
        rows: Vec<Vec<String>>,
    },
}

#[derive(Debug, Default)]
struct Scanner {
    line_no: usize,
    state: ScanState,
    nodes: Vec<DocumentNode>,
}

impl Scanner {
    fn step(mut self, line_no: usize, line: &str) -> Self {
        self.line_no = line_no;
        // Both ends trimmed: indented lines classify as flush-left ones, so a
        // numbered item keeps its text minus surrounding whitespace
        match classify(line.trim()) {
            LineKind::TableDivider => {
                self.open_table();
            }
            LineKind::TableRow(cells) => {
                self.open_table();
                if let ScanState::InTable { rows } = &mut self.state {
                    rows.push(cells);
                }
            }
            // Any other line ends the table, then is handled on its own
            kind => {
                self.close_table();
                self.emit(kind);
            }
        }
        self
    }

    fn finish(mut self) -> Vec<DocumentNode> {
        self.close_table();
        self.nodes
    }

    fn open_table(&mut self) {
        if let ScanState::Scanning = self.state {
            self.state = ScanState::InTable { rows: Vec::new() };
        }
    }

    fn close_table(&mut self) {
        let ScanState::InTable { rows } = std::mem::take(&mut self.state) else {
            return;
        };
        if rows.is_empty() {
            return;
        }
        // A table that cannot be built is dropped; the rest of the document survives
        match Table::try_from(rows) {
            Ok(table) => self.nodes.push(DocumentNode::Table(table)),
            Err(e) => warn!("dropping table closed at line {}: {}", self.line_no, e),
        }
    }

    fn emit(&mut self, kind: LineKind<'_>) {
        let node = match kind {
            LineKind::Blank | LineKind::Rule => return,
            LineKind::TableDivider | LineKind::TableRow(_) => return,
            LineKind::Heading { level, text } => DocumentNode::Heading {
                level,
                text: text.to_string(),
            },
            LineKind::Bullet(text) => DocumentNode::ListItem {
                text: format!("{BULLET}{text}"),
                ordered: false,
            },
            LineKind::Numbered(line) => DocumentNode::ListItem {
                text: line.to_string(),
                ordered: true,
            },
            LineKind::Text(line) => {
                let text = strip_inline(line);
                let text = text.trim();
                if text.is_empty() {
                    return;
                }
                DocumentNode::Paragraph {
                    text: text.to_string(),
                }
            }
        };
        self.nodes.push(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(level: u8, text: &str) -> DocumentNode {
        DocumentNode::Heading {
            level,
            text: text.to_string(),
        }
    }

    fn paragraph(text: &str) -> DocumentNode {
        DocumentNode::Paragraph {
            text: text.to_string(),
        }
    }

    fn table(rows: &[&[&str]]) -> DocumentNode {
        let rows = rows
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect::<Vec<Vec<String>>>();
        DocumentNode::Table(Table::try_from(rows).unwrap())
    }

    #[test]
    fn headings() {
        assert_eq!(parse("# Title"), vec![heading(1, "Title")]);
        assert_eq!(parse("## Sub"), vec![heading(2, "Sub")]);
        assert_eq!(parse("### Deep"), vec![heading(3, "Deep")]);
    }

    #[test]
    fn deep_heading_stays_literal_paragraph() {
        assert_eq!(parse("#### Four"), vec![paragraph("#### Four")]);
    }

    #[test]
    fn heading_text_keeps_emphasis_markers() {
        assert_eq!(parse("## **Skills**"), vec![heading(2, "**Skills**")]);
    }

    #[test]
    fn blank_lines_produce_nothing() {
        assert!(parse("").is_empty());
        assert!(parse("\n   \n\t\n").is_empty());
        assert_eq!(parse("a\n\n\nb"), vec![paragraph("a"), paragraph("b")]);
    }

    #[test]
    fn table_with_divider() {
        assert_eq!(
            parse("|A|B|\n|---|---|\n|1|2|"),
            vec![table(&[&["A", "B"], &["1", "2"]])]
        );
    }

    #[test]
    fn table_cells_are_trimmed() {
        assert_eq!(
            parse("| Role | Years |\n| :--- | ---: |\n| Lead | 3 |"),
            vec![table(&[&["Role", "Years"], &["Lead", "3"]])]
        );
    }

    #[test]
    fn table_ends_at_blank_line_or_eof_alike() {
        let src = "|A|B|\n|---|---|\n|1|2|";
        let at_eof = parse(src);
        let at_blank = parse(&format!("{src}\n"));
        assert_eq!(at_eof, at_blank);
        assert_eq!(at_eof.len(), 1);
    }

    #[test]
    fn blank_line_flushes_exactly_one_table() {
        let nodes = parse("|A|\n\n\n|B|");
        assert_eq!(nodes, vec![table(&[&["A"]]), table(&[&["B"]])]);
    }

    #[test]
    fn non_pipe_line_flushes_then_is_classified() {
        assert_eq!(
            parse("|A|B|\n## Next"),
            vec![table(&[&["A", "B"]]), heading(2, "Next")]
        );
        assert_eq!(
            parse("|A|\nplain"),
            vec![table(&[&["A"]]), paragraph("plain")]
        );
    }

    #[test]
    fn divider_only_table_emits_nothing() {
        assert_eq!(parse("|---|---|\n\ntext"), vec![paragraph("text")]);
    }

    #[test]
    fn table_with_cellless_row_is_dropped() {
        assert_eq!(
            parse("# Before\n|A|\n| |\n\nAfter"),
            vec![heading(1, "Before"), paragraph("After")]
        );
    }

    #[test]
    fn horizontal_rule_is_skipped() {
        assert_eq!(parse("a\n---\nb"), vec![paragraph("a"), paragraph("b")]);
        assert!(parse("-----").is_empty());
    }

    #[test]
    fn unordered_items_carry_bullet_glyph() {
        assert_eq!(
            parse("- item one\n*   item two"),
            vec![
                DocumentNode::ListItem {
                    text: format!("{BULLET}item one"),
                    ordered: false,
                },
                DocumentNode::ListItem {
                    text: format!("{BULLET}item two"),
                    ordered: false,
                },
            ]
        );
    }

    #[test]
    fn ordered_item_is_verbatim() {
        assert_eq!(
            parse("1. First"),
            vec![DocumentNode::ListItem {
                text: "1. First".to_string(),
                ordered: true,
            }]
        );
    }

    #[test]
    fn paragraph_strips_emphasis() {
        assert_eq!(
            parse("This is **bold** and *italic* and `code` and [link](http://x)"),
            vec![paragraph("This is bold and italic and code and link")]
        );
    }

    #[test]
    fn pictograph_only_line_is_suppressed() {
        assert!(parse("\u{2705} \u{1F680}").is_empty());
    }

    #[test]
    fn indented_lines_are_trimmed_before_classifying() {
        assert_eq!(
            parse("  2. Second  \n  |A|"),
            vec![
                DocumentNode::ListItem {
                    text: "2. Second".to_string(),
                    ordered: true,
                },
                table(&[&["A"]]),
            ]
        );
    }

    #[test]
    fn crlf_lines() {
        assert_eq!(
            parse("# Title\r\n\r\nBody\r\n"),
            vec![heading(1, "Title"), paragraph("Body")]
        );
    }

    #[test]
    fn classify_priority() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify("|---|"), LineKind::TableDivider);
        assert_eq!(classify("--- |"), LineKind::Rule);
        assert_eq!(classify("* item"), LineKind::Bullet("item"));
        assert_eq!(classify("**bold** start"), LineKind::Text("**bold** start"));
        assert_eq!(classify("#hashtag"), LineKind::Text("#hashtag"));
    }

    #[test]
    fn order_is_preserved() {
        let md = "# Jane Doe\nEngineer\n\n## Experience\n- Built things\n1. Step\n|K|V|";
        let kinds: Vec<_> = parse(md).iter().map(DocumentNode::kind).collect();
        assert_eq!(
            kinds,
            ["heading", "paragraph", "heading", "list-item", "list-item", "table"]
        );
    }
}
