//! Render dispatcher
//!
//! [`Renderer::render`] is the single entry point: it normalizes the input,
//! short-circuits empty datasets to a placeholder and hands the dataset to
//! the requested view.

pub mod sink;

pub use sink::{render_text, DisplaySink, MemorySink, TextSink};

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::config::VizConfig;
use crate::dataset::RawInput;
use crate::error::{Error, Result};
use crate::stats::summarize_with_limits;
use crate::vis::correlation::correlation;
use crate::vis::dashboard::dashboard_with;
use crate::vis::layout::Layout;
use crate::vis::panel::{CellStyle, Panel};
use crate::vis::table::data_table_with;

/// Rendering strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewType {
    #[default]
    Dashboard,
    Summary,
    Table,
    Correlation,
}

impl ViewType {
    /// Parse a view tag; unknown tags fall back to the dashboard
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "dashboard" => ViewType::Dashboard,
            "summary" => ViewType::Summary,
            "table" => ViewType::Table,
            "correlation" => ViewType::Correlation,
            other => {
                log::warn!("unknown view type '{}', using dashboard", other);
                ViewType::Dashboard
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewType::Dashboard => "dashboard",
            ViewType::Summary => "summary",
            ViewType::Table => "table",
            ViewType::Correlation => "correlation",
        }
    }
}

impl FromStr for ViewType {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ViewType::parse(s))
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of a render call
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedArtifact {
    Panel(Panel),
    Layout(Layout),
}

impl RenderedArtifact {
    pub fn as_panel(&self) -> Option<&Panel> {
        match self {
            RenderedArtifact::Panel(panel) => Some(panel),
            RenderedArtifact::Layout(_) => None,
        }
    }

    pub fn as_layout(&self) -> Option<&Layout> {
        match self {
            RenderedArtifact::Layout(layout) => Some(layout),
            RenderedArtifact::Panel(_) => None,
        }
    }

    /// True for a single placeholder panel
    pub fn is_placeholder(&self) -> bool {
        self.as_panel().map_or(false, Panel::is_placeholder)
    }
}

impl From<Panel> for RenderedArtifact {
    fn from(panel: Panel) -> Self {
        RenderedArtifact::Panel(panel)
    }
}

impl From<Layout> for RenderedArtifact {
    fn from(layout: Layout) -> Self {
        RenderedArtifact::Layout(layout)
    }
}

/// Renders datasets with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: VizConfig,
    caption: Option<String>,
}

impl Renderer {
    pub fn new(config: VizConfig) -> Self {
        Renderer {
            config,
            caption: None,
        }
    }

    /// Caption shown in the dashboard header, e.g. a generation time
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn config(&self) -> &VizConfig {
        &self.config
    }

    /// Normalize `input` and render it with `view`.
    ///
    /// Only input that cannot be made tabular is an error; an empty dataset
    /// renders as a placeholder for every view.
    pub fn render(
        &self,
        input: impl Into<RawInput>,
        view: ViewType,
        title: &str,
    ) -> Result<RenderedArtifact> {
        let dataset = input.into().normalize()?;

        if dataset.is_empty() {
            log::debug!("empty dataset, rendering placeholder for '{}'", title);
            return Ok(Panel::placeholder(
                Some(title),
                "No data available for analytics",
                CellStyle::Warning,
            )
            .into());
        }

        log::debug!(
            "rendering {} view of {} rows x {} columns",
            view,
            dataset.row_count(),
            dataset.column_count()
        );

        let config = &self.config;
        let artifact = match view {
            ViewType::Dashboard => {
                dashboard_with(&dataset, title, config, self.caption.as_deref()).into()
            }
            ViewType::Summary => summarize_with_limits(
                &dataset,
                title,
                config.numeric_summary_limit,
                config.text_summary_limit,
            )
            .into(),
            ViewType::Table => {
                data_table_with(&dataset, title, config.table_rows, config.cell_max_chars).into()
            }
            ViewType::Correlation => correlation(&dataset, title).into(),
        };
        Ok(artifact)
    }

    /// Render with a free-form view tag
    pub fn render_tag(
        &self,
        input: impl Into<RawInput>,
        tag: &str,
        title: &str,
    ) -> Result<RenderedArtifact> {
        self.render(input, ViewType::parse(tag), title)
    }

    /// Render and hand the result to `sink`.
    ///
    /// Unsupported input still produces an error panel on the sink before the
    /// error is returned.
    pub fn display<S: DisplaySink + ?Sized>(
        &self,
        sink: &mut S,
        input: impl Into<RawInput>,
        view: ViewType,
        title: &str,
    ) -> Result<()> {
        match self.render(input, view, title) {
            Ok(artifact) => sink.display(&artifact),
            Err(e @ Error::UnsupportedInputKind(_)) => {
                log::warn!("cannot render input: {}", e);
                let panel = Panel::placeholder(
                    Some("Error"),
                    "Unsupported data type for analytics",
                    CellStyle::Error,
                );
                sink.display(&panel.into())?;
                Err(e)
            }
            Err(e) => Err(e),
        }
    }
}

/// Render with the default configuration
pub fn render(
    input: impl Into<RawInput>,
    view: ViewType,
    title: &str,
) -> Result<RenderedArtifact> {
    Renderer::default().render(input, view, title)
}
