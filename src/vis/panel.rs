//! Renderable panels
//!
//! A [`Panel`] is a titled leaf of the output tree. Its body is either a
//! block of text lines or a table of pre-formatted cells. Styles are
//! semantic markers; turning them into colors is left to the display sink.

/// Semantic style marker for a cell or text block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellStyle {
    #[default]
    Plain,
    Bold,
    Dim,
    /// Yellow label text
    Highlight,
    /// Yellow advisory message
    Warning,
    /// Red error message
    Error,
    /// Bold red emphasis
    Strong,
    /// Bold cyan table header
    Heading,
    /// Bold magenta table header
    HeadingAlt,
    /// Bold bright blue title
    Title,
}

/// Border color of a panel frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderStyle {
    #[default]
    Default,
    Green,
    Blue,
    Cyan,
    Magenta,
}

/// Horizontal alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Justify {
    #[default]
    Left,
    Right,
    Center,
}

/// What a panel was built to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Header,
    Summary,
    BarChart,
    Table,
    Correlation,
    /// Explicit "nothing to show" message
    Placeholder,
}

/// A pre-formatted table cell
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: String,
    pub style: CellStyle,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Cell {
            text: text.into(),
            style: CellStyle::Plain,
        }
    }

    pub fn styled(text: impl Into<String>, style: CellStyle) -> Self {
        Cell {
            text: text.into(),
            style,
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::new(text)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::new(text)
    }
}

/// Column definition of a table
#[derive(Debug, Clone, PartialEq)]
pub struct TableColumn {
    pub header: String,
    pub justify: Justify,
    /// Overflowing cells are cut with an ellipsis
    pub max_width: Option<usize>,
    /// Default style for cells left `Plain`
    pub style: CellStyle,
}

impl TableColumn {
    pub fn new(header: impl Into<String>) -> Self {
        TableColumn {
            header: header.into(),
            justify: Justify::Left,
            max_width: None,
            style: CellStyle::Plain,
        }
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn style(mut self, style: CellStyle) -> Self {
        self.style = style;
        self
    }
}

/// Header row plus cell matrix
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub header_style: CellStyle,
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header_style(mut self, style: CellStyle) -> Self {
        self.header_style = style;
        self
    }

    pub fn add_column(&mut self, column: TableColumn) {
        self.columns.push(column);
    }

    /// Append a row; short rows are padded with empty cells, long rows cut
    pub fn add_row(&mut self, mut cells: Vec<Cell>) {
        cells.resize(self.columns.len(), Cell::new(""));
        self.rows.push(cells);
    }

    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.header.as_str()).collect()
    }

    /// Text of row `row`, column `col`
    pub fn cell_text(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(|c| c.text.as_str())
    }

    /// Find the first row whose first cell equals `label`
    pub fn row_by_label(&self, label: &str) -> Option<&[Cell]> {
        self.rows
            .iter()
            .find(|r| r.first().map(|c| c.text.as_str()) == Some(label))
            .map(|r| r.as_slice())
    }
}

/// Line-oriented text block
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextBlock {
    pub lines: Vec<String>,
    pub style: CellStyle,
    pub justify: Justify,
}

/// Body of a panel
#[derive(Debug, Clone, PartialEq)]
pub enum PanelBody {
    Text(TextBlock),
    Table(Table),
}

/// A titled renderable leaf
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: Option<String>,
    pub border: BorderStyle,
    pub kind: PanelKind,
    pub body: PanelBody,
}

impl Panel {
    /// Text panel with plain lines
    pub fn text(kind: PanelKind, title: Option<&str>, lines: Vec<String>) -> Self {
        Panel {
            title: title.map(str::to_string),
            border: BorderStyle::Default,
            kind,
            body: PanelBody::Text(TextBlock {
                lines,
                ..Default::default()
            }),
        }
    }

    /// Table panel
    pub fn table(kind: PanelKind, title: Option<&str>, table: Table) -> Self {
        Panel {
            title: title.map(str::to_string),
            border: BorderStyle::Default,
            kind,
            body: PanelBody::Table(table),
        }
    }

    /// Single styled message standing in for content that cannot be shown
    pub fn placeholder(title: Option<&str>, message: &str, style: CellStyle) -> Self {
        Panel {
            title: title.map(str::to_string),
            border: BorderStyle::Default,
            kind: PanelKind::Placeholder,
            body: PanelBody::Text(TextBlock {
                lines: vec![message.to_string()],
                style,
                justify: Justify::Left,
            }),
        }
    }

    pub fn with_border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    pub fn is_placeholder(&self) -> bool {
        self.kind == PanelKind::Placeholder
    }

    /// Text lines when the body is a text block
    pub fn lines(&self) -> Option<&[String]> {
        match &self.body {
            PanelBody::Text(block) => Some(&block.lines),
            PanelBody::Table(_) => None,
        }
    }

    /// Table when the body is a table
    pub fn as_table(&self) -> Option<&Table> {
        match &self.body {
            PanelBody::Table(table) => Some(table),
            PanelBody::Text(_) => None,
        }
    }

    /// Placeholder message, if this panel is one
    pub fn message(&self) -> Option<&str> {
        if !self.is_placeholder() {
            return None;
        }
        self.lines().and_then(|l| l.first()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder() {
        let panel = Panel::placeholder(Some("Sales"), "No data available", CellStyle::Error);
        assert!(panel.is_placeholder());
        assert_eq!(panel.message(), Some("No data available"));
        assert_eq!(panel.title.as_deref(), Some("Sales"));
        assert!(panel.as_table().is_none());
    }

    #[test]
    fn test_table_rows_are_rectangular() {
        let mut table = Table::new();
        table.add_column(TableColumn::new("Metric"));
        table.add_column(TableColumn::new("Value").justify(Justify::Right));
        table.add_row(vec![Cell::new("Columns")]);
        table.add_row(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(table.rows[0].len(), 2);
        assert_eq!(table.rows[1].len(), 2);
        assert_eq!(table.cell_text(0, 1), Some(""));
        assert_eq!(table.headers(), vec!["Metric", "Value"]);
        assert!(table.row_by_label("a").is_some());
    }
}
