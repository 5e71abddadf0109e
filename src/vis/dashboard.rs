//! Multi-pane dashboard
//!
//! The skeleton is fixed:
//!
//! ```text
//! root
//! ├── header        (3 lines)
//! └── body
//!     ├── left
//!     │   ├── stats
//!     │   └── preview
//!     └── right
//!         ├── chart1
//!         └── chart2
//! ```
//!
//! Which charts fill the right column depends only on how many numeric and
//! text columns the dataset has; see [`plan_charts`].

use super::bar_chart::bar_chart;
use super::correlation::{correlation, DEFAULT_TITLE as CORRELATION_TITLE};
use super::distribution::{distribution_with, top_values};
use super::layout::{Layout, LayoutSize};
use super::panel::{BorderStyle, CellStyle, Justify, Panel, PanelBody, PanelKind, TextBlock};
use super::table::data_table_with;
use crate::config::VizConfig;
use crate::dataset::Dataset;
use crate::stats::summarize_with_limits;

/// Rows in the preview pane
pub const DEFAULT_PREVIEW_ROWS: usize = 10;

/// Bars in a top-values chart
pub const DEFAULT_TOP_VALUES: usize = 10;

/// Height of the header pane
pub const HEADER_HEIGHT: usize = 3;

const STATS_TITLE: &str = "Dataset Overview";
const PREVIEW_TITLE: &str = "Data Preview";
const INFO_MESSAGE: &str = "Add more data for additional charts";

/// Content chosen for one chart pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartPlan {
    /// Histogram of the named numeric column
    Distribution(String),
    /// Correlation matrix over all numeric columns
    Correlation,
    /// Most frequent values of the named text column
    TopValues(String),
    /// Hint that more data would enable more charts
    Info,
    /// Pane left unpopulated
    Empty,
}

/// Choose the contents of both chart panes.
///
/// Depends only on the numeric and text column counts; the first columns of
/// each kind in declaration order are the ones charted.
pub fn plan_charts(dataset: &Dataset) -> (ChartPlan, ChartPlan) {
    let numeric: Vec<String> = dataset
        .numeric_columns()
        .iter()
        .map(|c| c.name().to_string())
        .collect();
    let text: Vec<String> = dataset
        .text_columns()
        .iter()
        .map(|c| c.name().to_string())
        .collect();

    if let Some(first_numeric) = numeric.first() {
        let chart1 = ChartPlan::Distribution(first_numeric.clone());
        let chart2 = if numeric.len() >= 2 {
            ChartPlan::Correlation
        } else if let Some(first_text) = text.first() {
            ChartPlan::TopValues(first_text.clone())
        } else {
            ChartPlan::Info
        };
        return (chart1, chart2);
    }

    match text.as_slice() {
        [first, second, ..] => (
            ChartPlan::TopValues(first.clone()),
            ChartPlan::TopValues(second.clone()),
        ),
        [only] => (ChartPlan::TopValues(only.clone()), ChartPlan::Info),
        [] => (ChartPlan::Empty, ChartPlan::Empty),
    }
}

/// The empty dashboard skeleton
pub fn skeleton() -> Layout {
    Layout::split_column(
        "root",
        vec![
            Layout::leaf("header").with_size(LayoutSize::Fixed(HEADER_HEIGHT)),
            Layout::split_row(
                "body",
                vec![
                    Layout::split_column(
                        "left",
                        vec![Layout::leaf("stats"), Layout::leaf("preview")],
                    ),
                    Layout::split_column(
                        "right",
                        vec![Layout::leaf("chart1"), Layout::leaf("chart2")],
                    ),
                ],
            ),
        ],
    )
}

/// Dashboard with the default configuration and no header caption
pub fn dashboard(dataset: &Dataset, title: &str) -> Layout {
    dashboard_with(dataset, title, &VizConfig::default(), None)
}

/// Build and populate the dashboard.
///
/// `caption` is shown under the title in the header, typically a
/// generation timestamp supplied by the caller.
pub fn dashboard_with(
    dataset: &Dataset,
    title: &str,
    config: &VizConfig,
    caption: Option<&str>,
) -> Layout {
    let mut layout = skeleton();

    layout.update("header", header_panel(title, caption));
    layout.update(
        "stats",
        summarize_with_limits(
            dataset,
            STATS_TITLE,
            config.numeric_summary_limit,
            config.text_summary_limit,
        ),
    );
    layout.update(
        "preview",
        data_table_with(
            dataset,
            PREVIEW_TITLE,
            config.preview_rows,
            config.cell_max_chars,
        ),
    );

    let (plan1, plan2) = plan_charts(dataset);
    log::debug!("dashboard charts: {:?} / {:?}", plan1, plan2);

    if let Some(panel) = chart_panel(dataset, &plan1, config) {
        layout.update("chart1", panel);
    }
    if let Some(panel) = chart_panel(dataset, &plan2, config) {
        layout.update("chart2", panel);
    }

    layout
}

fn header_panel(title: &str, caption: Option<&str>) -> Panel {
    let mut lines = vec![title.to_string()];
    if let Some(caption) = caption {
        lines.push(format!("Generated: {}", caption));
    }
    Panel {
        title: None,
        border: BorderStyle::Blue,
        kind: PanelKind::Header,
        body: PanelBody::Text(TextBlock {
            lines,
            style: CellStyle::Title,
            justify: Justify::Center,
        }),
    }
}

fn chart_panel(dataset: &Dataset, plan: &ChartPlan, config: &VizConfig) -> Option<Panel> {
    match plan {
        ChartPlan::Distribution(name) => {
            let column = dataset.column(name)?;
            Some(distribution_with(
                column,
                &format!("{} Distribution", name),
                config.bins,
                config.max_bars,
            ))
        }
        ChartPlan::Correlation => Some(correlation(dataset, CORRELATION_TITLE)),
        ChartPlan::TopValues(name) => {
            let column = dataset.column(name)?;
            Some(bar_chart(
                top_values(column.values(), config.top_values),
                &format!("Top {} Values", name),
                config.max_bars,
            ))
        }
        ChartPlan::Info => Some(Panel::placeholder(None, INFO_MESSAGE, CellStyle::Warning)),
        ChartPlan::Empty => None,
    }
}
