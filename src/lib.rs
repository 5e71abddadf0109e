pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod io;
pub mod render;
pub mod stats;
pub mod vis;

// Re-export commonly used types
pub use config::VizConfig;
pub use dataset::{sample_dataset, Column, ColumnType, Dataset, Field, RawInput, Record, Scalar};
pub use error::{Error, Result};
pub use render::{render, DisplaySink, MemorySink, RenderedArtifact, Renderer, TextSink, ViewType};
pub use stats::{summarize, SummaryRecord};
pub use vis::{
    bar_chart, correlation, dashboard, data_table, distribution, Layout, Panel, PanelKind,
};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
