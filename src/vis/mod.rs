//! Module providing the text visualizations
//!
//! Every view turns a [`Dataset`](crate::dataset::Dataset) into a
//! [`Panel`] or a composed [`Layout`]:
//!
//! - Bar charts, the primitive shared by every chart below
//! - Distributions (histograms and value frequencies)
//! - Correlation matrices
//! - Row previews
//! - Multi-pane dashboards

pub mod bar_chart;
pub mod correlation;
pub mod dashboard;
pub mod distribution;
pub mod layout;
pub mod panel;
pub mod table;

pub use self::bar_chart::{bar_chart, Bar, ChartEntry, ChartSpec, BAR_WIDTH};
pub use self::correlation::{correlation, CorrelationMatrix, Tier};
pub use self::dashboard::{dashboard, dashboard_with, plan_charts, ChartPlan};
pub use self::distribution::{distribution, HistogramBin, HistogramSpec};
pub use self::layout::{Layout, LayoutContent, LayoutSize, Orientation};
pub use self::panel::{
    BorderStyle, Cell, CellStyle, Justify, Panel, PanelBody, PanelKind, Table, TableColumn,
    TextBlock,
};
pub use self::table::data_table;

/// Common trait for line-based charts
pub trait Chart {
    /// Chart body, one string per line
    fn lines(&self) -> Vec<String>;

    /// Render the chart to a single string
    fn render(&self) -> String {
        self.lines().join("\n")
    }
}
