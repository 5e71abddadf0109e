//! Display sinks
//!
//! A sink turns a [`RenderedArtifact`] into output. [`TextSink`] draws boxed
//! panels with Unicode line characters onto any writer, optionally colored
//! with ANSI escapes; [`MemorySink`] keeps the plain text in memory.

use std::io::Write;

use super::RenderedArtifact;
use crate::error::Result;
use crate::format::{center, display_width, pad_left, pad_right, truncate_ellipsis};
use crate::vis::layout::{Layout, LayoutContent, LayoutSize, Orientation};
use crate::vis::panel::{BorderStyle, CellStyle, Justify, Panel, PanelBody, Table};

/// Terminal width assumed when none is given
pub const DEFAULT_WIDTH: usize = 120;

/// Narrowest frame that still has room for content
const MIN_FRAME_WIDTH: usize = 5;

/// Columns of a table are separated by this
const COLUMN_GAP: &str = "  ";

/// Destination for rendered artifacts
pub trait DisplaySink {
    fn display(&mut self, artifact: &RenderedArtifact) -> Result<()>;
}

/// Draws artifacts as text onto a writer
pub struct TextSink<W: Write> {
    writer: W,
    width: usize,
    ansi: bool,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        TextSink {
            writer,
            width: DEFAULT_WIDTH,
            ansi: false,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(MIN_FRAME_WIDTH);
        self
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DisplaySink for TextSink<W> {
    fn display(&mut self, artifact: &RenderedArtifact) -> Result<()> {
        let painter = Painter { ansi: self.ansi };
        for line in painter.artifact(artifact, self.width) {
            writeln!(self.writer, "{}", line)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps every displayed artifact and its plain-text rendering
#[derive(Debug, Default)]
pub struct MemorySink {
    width: usize,
    artifacts: Vec<RenderedArtifact>,
    output: String,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::with_width(DEFAULT_WIDTH)
    }

    pub fn with_width(width: usize) -> Self {
        MemorySink {
            width: width.max(MIN_FRAME_WIDTH),
            ..Default::default()
        }
    }

    pub fn artifacts(&self) -> &[RenderedArtifact] {
        &self.artifacts
    }

    pub fn output(&self) -> &str {
        &self.output
    }
}

impl DisplaySink for MemorySink {
    fn display(&mut self, artifact: &RenderedArtifact) -> Result<()> {
        let painter = Painter { ansi: false };
        for line in painter.artifact(artifact, self.width) {
            self.output.push_str(&line);
            self.output.push('\n');
        }
        self.artifacts.push(artifact.clone());
        Ok(())
    }
}

/// Plain-text rendering of an artifact at the given width
pub fn render_text(artifact: &RenderedArtifact, width: usize) -> String {
    let painter = Painter { ansi: false };
    let mut out = String::new();
    for line in painter.artifact(artifact, width.max(MIN_FRAME_WIDTH)) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

// Every line produced by a Painter is exactly `width` display columns.
struct Painter {
    ansi: bool,
}

impl Painter {
    fn artifact(&self, artifact: &RenderedArtifact, width: usize) -> Vec<String> {
        match artifact {
            RenderedArtifact::Panel(panel) => self.panel(panel, width),
            RenderedArtifact::Layout(layout) => self.layout(layout, width),
        }
    }

    fn layout(&self, layout: &Layout, width: usize) -> Vec<String> {
        match &layout.content {
            LayoutContent::Leaf(Some(panel)) => self.panel(panel, width),
            LayoutContent::Leaf(None) => self.frame(
                Some(layout.name.as_str()),
                BorderStyle::Default,
                vec![" ".repeat(width.saturating_sub(4))],
                width,
            ),
            LayoutContent::Split {
                orientation: Orientation::Vertical,
                children,
            } => {
                let mut lines = Vec::new();
                for child in children {
                    let mut block = self.layout(child, width);
                    if let LayoutSize::Fixed(height) = child.size {
                        while block.len() < height {
                            block.push(" ".repeat(width));
                        }
                    }
                    lines.extend(block);
                }
                lines
            }
            LayoutContent::Split {
                orientation: Orientation::Horizontal,
                children,
            } => {
                let sizes: Vec<LayoutSize> = children.iter().map(|c| c.size).collect();
                // children squeezed out by the minimums get zero width and are skipped
                let (children, widths): (Vec<&Layout>, Vec<usize>) = children
                    .iter()
                    .zip(split_widths(&sizes, width))
                    .filter(|(_, w)| *w > 0)
                    .unzip();
                let blocks: Vec<Vec<String>> = children
                    .iter()
                    .zip(&widths)
                    .map(|(child, w)| self.layout(child, *w))
                    .collect();

                let height = blocks.iter().map(Vec::len).max().unwrap_or(0);
                (0..height)
                    .map(|row| {
                        blocks
                            .iter()
                            .zip(&widths)
                            .map(|(block, w)| match block.get(row) {
                                Some(line) => line.clone(),
                                None => " ".repeat(*w),
                            })
                            .collect::<String>()
                    })
                    .collect()
            }
        }
    }

    fn panel(&self, panel: &Panel, width: usize) -> Vec<String> {
        let inner = width.saturating_sub(4);
        let body: Vec<String> = match &panel.body {
            PanelBody::Text(block) => block
                .lines
                .iter()
                .map(|line| {
                    let text = truncate_ellipsis(line, inner);
                    self.paint(&justify(&text, inner, block.justify), block.style)
                })
                .collect(),
            PanelBody::Table(table) => self.table(table, inner),
        };
        self.frame(panel.title.as_deref(), panel.border, body, width)
    }

    fn table(&self, table: &Table, inner: usize) -> Vec<String> {
        let widths = column_widths(table, inner);
        let mut lines = Vec::with_capacity(table.rows.len() + 2);

        let header: Vec<String> = table
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, w)| {
                let text = truncate_ellipsis(&col.header, *w);
                self.paint(&justify(&text, *w, col.justify), table.header_style)
            })
            .collect();
        lines.push(self.pad_row(header.join(COLUMN_GAP), &widths, inner));

        let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
        lines.push(self.pad_row(rule.join(COLUMN_GAP), &widths, inner));

        for row in &table.rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&table.columns)
                .zip(&widths)
                .map(|((cell, col), w)| {
                    let style = if cell.style == CellStyle::Plain {
                        col.style
                    } else {
                        cell.style
                    };
                    let text = truncate_ellipsis(&cell.text, *w);
                    self.paint(&justify(&text, *w, col.justify), style)
                })
                .collect();
            lines.push(self.pad_row(cells.join(COLUMN_GAP), &widths, inner));
        }

        lines
    }

    // Pad a joined row out to the inner width; `widths` gives its visible length.
    fn pad_row(&self, row: String, widths: &[usize], inner: usize) -> String {
        let used = widths.iter().sum::<usize>() + COLUMN_GAP.len() * widths.len().saturating_sub(1);
        format!("{}{}", row, " ".repeat(inner.saturating_sub(used)))
    }

    fn frame(
        &self,
        title: Option<&str>,
        border: BorderStyle,
        body: Vec<String>,
        width: usize,
    ) -> Vec<String> {
        let inner = width.saturating_sub(4);
        let span = width.saturating_sub(2);

        let top = match title {
            Some(title) if !title.is_empty() => {
                let title = truncate_ellipsis(title, span.saturating_sub(4));
                let label = format!("─ {} ", title);
                format!(
                    "┌{}{}┐",
                    label,
                    "─".repeat(span.saturating_sub(display_width(&label)))
                )
            }
            _ => format!("┌{}┐", "─".repeat(span)),
        };

        let mut lines = Vec::with_capacity(body.len() + 2);
        lines.push(self.paint_border(&top, border));
        let side = self.paint_border("│", border);
        for line in body {
            lines.push(format!("{} {} {}", side, line, side));
        }
        if lines.len() == 1 {
            lines.push(format!("{} {} {}", side, " ".repeat(inner), side));
        }
        lines.push(self.paint_border(&format!("└{}┘", "─".repeat(span)), border));
        lines
    }

    fn paint(&self, text: &str, style: CellStyle) -> String {
        match style_code(style) {
            Some(code) if self.ansi => format!("\x1b[{}m{}\x1b[0m", code, text),
            _ => text.to_string(),
        }
    }

    fn paint_border(&self, text: &str, border: BorderStyle) -> String {
        match border_code(border) {
            Some(code) if self.ansi => format!("\x1b[{}m{}\x1b[0m", code, text),
            _ => text.to_string(),
        }
    }
}

fn justify(text: &str, width: usize, justify: Justify) -> String {
    match justify {
        Justify::Left => pad_right(text, width),
        Justify::Right => pad_left(text, width),
        Justify::Center => center(text, width),
    }
}

fn style_code(style: CellStyle) -> Option<&'static str> {
    match style {
        CellStyle::Plain => None,
        CellStyle::Bold => Some("1"),
        CellStyle::Dim => Some("2"),
        CellStyle::Highlight | CellStyle::Warning => Some("33"),
        CellStyle::Error => Some("31"),
        CellStyle::Strong => Some("1;31"),
        CellStyle::Heading => Some("1;36"),
        CellStyle::HeadingAlt => Some("1;35"),
        CellStyle::Title => Some("1;94"),
    }
}

fn border_code(border: BorderStyle) -> Option<&'static str> {
    match border {
        BorderStyle::Default => None,
        BorderStyle::Green => Some("32"),
        BorderStyle::Blue => Some("34"),
        BorderStyle::Cyan => Some("36"),
        BorderStyle::Magenta => Some("35"),
    }
}

/// Divide `total` columns among children: fixed sizes first, the rest by ratio.
///
/// Every child gets at least `MIN_FRAME_WIDTH`. When those minimums overflow
/// `total`, the widest children give up columns first and trailing children
/// that still do not fit get zero. The widths always sum to `total`.
fn split_widths(sizes: &[LayoutSize], total: usize) -> Vec<usize> {
    let fixed: usize = sizes
        .iter()
        .map(|s| match s {
            LayoutSize::Fixed(n) => *n,
            LayoutSize::Ratio(_) => 0,
        })
        .sum();
    let weights: usize = sizes
        .iter()
        .map(|s| match s {
            LayoutSize::Ratio(r) => *r,
            LayoutSize::Fixed(_) => 0,
        })
        .sum();

    let mut remaining = total.saturating_sub(fixed);
    let mut weight_left = weights;
    let mut widths = sizes
        .iter()
        .map(|s| match s {
            LayoutSize::Fixed(n) => (*n).max(MIN_FRAME_WIDTH),
            LayoutSize::Ratio(r) => {
                // the last ratio child absorbs the rounding remainder
                let share = if weight_left == 0 {
                    0
                } else if *r == weight_left {
                    remaining
                } else {
                    remaining * r / weight_left
                };
                remaining -= share;
                weight_left -= r;
                share.max(MIN_FRAME_WIDTH)
            }
        })
        .collect::<Vec<usize>>();

    while widths.iter().sum::<usize>() > total {
        match widths
            .iter_mut()
            .filter(|w| **w > MIN_FRAME_WIDTH)
            .max_by_key(|w| **w)
        {
            Some(widest) => *widest -= 1,
            None => match widths.iter_mut().rev().find(|w| **w > 0) {
                Some(last) => *last = 0,
                None => break,
            },
        }
    }
    // leftover columns go to the last visible child
    let used = widths.iter().sum::<usize>();
    if let Some(last) = widths.iter_mut().rev().find(|w| **w > 0) {
        *last += total.saturating_sub(used);
    }
    widths
}

/// Natural column widths, capped by each column's maximum and shrunk until
/// the row fits `inner`.
///
/// Columns are never narrower than one; trailing columns that cannot fit
/// even then are dropped, so the result may be shorter than `table.columns`.
fn column_widths(table: &Table, inner: usize) -> Vec<usize> {
    let mut widths: Vec<usize> = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            let natural = table
                .rows
                .iter()
                .filter_map(|r| r.get(i))
                .map(|c| display_width(&c.text))
                .chain(std::iter::once(display_width(&col.header)))
                .max()
                .unwrap_or(0)
                .max(1);
            match col.max_width {
                Some(max) => natural.min(max.max(1)),
                None => natural,
            }
        })
        .collect();

    let row_width = |widths: &[usize]| {
        widths.iter().sum::<usize>() + COLUMN_GAP.len() * widths.len().saturating_sub(1)
    };
    while row_width(&widths) > inner {
        match widths.iter_mut().filter(|w| **w > 1).max_by_key(|w| **w) {
            Some(widest) => *widest -= 1,
            None => {
                if widths.pop().is_none() {
                    break;
                }
            }
        }
    }
    widths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vis::layout::Layout;
    use crate::vis::panel::{Cell, PanelKind, TableColumn};

    fn widths_of(text: &str) -> Vec<usize> {
        text.lines().map(display_width).collect()
    }

    #[test]
    fn test_panel_frame() {
        let panel = Panel::text(PanelKind::BarChart, Some("Sales"), vec!["abc".into()]);
        let text = render_text(&RenderedArtifact::Panel(panel), 20);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "┌─ Sales ──────────┐");
        assert_eq!(lines[1], "│ abc              │");
        assert_eq!(lines[2], "└──────────────────┘");
        assert!(widths_of(&text).iter().all(|w| *w == 20));
    }

    #[test]
    fn test_table_cells_truncated_with_ellipsis() {
        let mut table = Table::new();
        table.add_column(TableColumn::new("name").max_width(5));
        table.add_column(TableColumn::new("n").justify(Justify::Right));
        table.add_row(vec![Cell::new("abcdefgh"), Cell::new("7")]);
        let panel = Panel::table(PanelKind::Table, Some("T"), table);
        let text = render_text(&RenderedArtifact::Panel(panel), 30);
        assert!(text.contains("abcd…  7"));
        assert!(widths_of(&text).iter().all(|w| *w == 30));
    }

    #[test]
    fn test_split_row_side_by_side() {
        let mut layout = Layout::split_row("body", vec![Layout::leaf("left"), Layout::leaf("right")]);
        layout.update(
            "left",
            Panel::text(PanelKind::BarChart, Some("L"), vec!["1".into(), "2".into()]),
        );
        let text = render_text(&RenderedArtifact::Layout(layout), 40);
        let lines: Vec<&str> = text.lines().collect();
        // left panel is taller; the empty right leaf is framed with its name
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("┌─ L "));
        assert!(lines[0].contains("┌─ right "));
        assert!(widths_of(&text).iter().all(|w| *w == 40));
    }

    #[test]
    fn test_wide_characters_keep_frame_aligned() {
        let panel = Panel::text(
            PanelKind::Table,
            Some("都市"),
            vec!["東京都庁".into(), "abcd".into(), "東京都庁東京都庁東京都庁".into()],
        );
        let text = render_text(&RenderedArtifact::Panel(panel), 20);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], format!("│ 東京都庁{} │", " ".repeat(8)));
        assert_eq!(lines[3], "│ 東京都庁東京都…  │");
        assert!(widths_of(&text).iter().all(|w| *w == 20));

        let mut table = Table::new();
        table.add_column(TableColumn::new("都市"));
        table.add_column(TableColumn::new("n").justify(Justify::Right));
        table.add_row(vec![Cell::new("大阪"), Cell::new("3")]);
        let panel = Panel::table(PanelKind::Table, None, table);
        let text = render_text(&RenderedArtifact::Panel(panel), 16);
        assert!(widths_of(&text).iter().all(|w| *w == 16));
    }

    #[test]
    fn test_too_many_columns_are_dropped() {
        let mut table = Table::new();
        for name in ["a", "b", "c", "d", "e"] {
            table.add_column(TableColumn::new(name));
        }
        table.add_row(vec![Cell::new("1"); 5]);
        // inner width 4 holds "1  1" and nothing more
        assert_eq!(column_widths(&table, 4), vec![1, 1]);

        let panel = Panel::table(PanelKind::Table, None, table);
        let text = render_text(&RenderedArtifact::Panel(panel), 8);
        assert!(widths_of(&text).iter().all(|w| *w == 8));
    }

    #[test]
    fn test_split_minimums_never_overflow() {
        let sizes = [LayoutSize::Fixed(30), LayoutSize::Ratio(1)];
        let widths = split_widths(&sizes, 20);
        assert_eq!(widths.iter().sum::<usize>(), 20);
        assert_eq!(widths, vec![15, 5]);

        let sizes = vec![LayoutSize::Ratio(1); 5];
        assert_eq!(split_widths(&sizes, 12), vec![5, 7, 0, 0, 0]);

        let layout = Layout::split_row(
            "row",
            (0..5).map(|i| Layout::leaf(format!("p{}", i))).collect(),
        );
        let text = render_text(&RenderedArtifact::Layout(layout), 12);
        assert!(widths_of(&text).iter().all(|w| *w == 12));
    }

    #[test]
    fn test_split_widths() {
        let sizes = [LayoutSize::Ratio(1), LayoutSize::Ratio(1)];
        assert_eq!(split_widths(&sizes, 41), vec![20, 21]);
        let sizes = [LayoutSize::Fixed(10), LayoutSize::Ratio(2), LayoutSize::Ratio(1)];
        assert_eq!(split_widths(&sizes, 40), vec![10, 20, 10]);
    }

    #[test]
    fn test_ansi_styles() {
        let panel = Panel::placeholder(Some("x"), "oops", CellStyle::Error)
            .with_border(BorderStyle::Green);
        let mut sink = TextSink::new(Vec::new()).with_width(20).with_ansi(true);
        sink.display(&RenderedArtifact::Panel(panel)).unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert!(out.contains("\x1b[31moops"));
        assert!(out.starts_with("\x1b[32m┌"));
    }

    #[test]
    fn test_memory_sink_records_artifacts() {
        let mut sink = MemorySink::with_width(20);
        let panel = Panel::placeholder(None, "hi", CellStyle::Warning);
        sink.display(&RenderedArtifact::Panel(panel)).unwrap();
        assert_eq!(sink.artifacts().len(), 1);
        assert!(sink.output().contains("│ hi"));
    }
}
