use thiserror::Error;

/// Prefix carried in the text of every unordered list item.
pub const BULLET: &str = "• ";

/// Why a run of table rows could not become a [`Table`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("table has no rows")]
    Empty,

    #[error("table row {index} has no cells")]
    EmptyRow { index: usize },
}

/// A grid of plain-text cells. Always has at least one row, and every row
/// has at least one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Width of the widest row.
    pub fn columns(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

impl TryFrom<Vec<Vec<String>>> for Table {
    type Error = TableError;

    fn try_from(rows: Vec<Vec<String>>) -> Result<Self, Self::Error> {
        if rows.is_empty() {
            return Err(TableError::Empty);
        }
        if let Some(index) = rows.iter().position(Vec::is_empty) {
            return Err(TableError::EmptyRow { index });
        }
        Ok(Self { rows })
    }
}

/// Block-level nodes produced from the source lines, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentNode {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    ListItem { text: String, ordered: bool },
    Table(Table),
}

impl DocumentNode {
    /// Shorthand used by the dump output and logging.
    pub fn kind(&self) -> &'static str {
        match self {
            DocumentNode::Heading { .. } => "heading",
            DocumentNode::Paragraph { .. } => "paragraph",
            DocumentNode::ListItem { .. } => "list-item",
            DocumentNode::Table(_) => "table",
        }
    }
}
