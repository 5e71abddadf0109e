use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use termlytics::io::read_path;
use termlytics::render::{Renderer, TextSink, ViewType};
use termlytics::{sample_dataset, RawInput, VizConfig};

#[derive(Parser)]
#[command(name = "termlytics")]
#[command(about = "Terminal analytics: summaries, charts and dashboards for tabular data")]
#[command(version)]
struct Cli {
    /// CSV or JSON file to analyze
    file: Option<PathBuf>,

    /// View to render: dashboard, summary, table or correlation
    #[arg(long, short = 'v', default_value = "dashboard")]
    view: String,

    /// Title of the rendered view
    #[arg(long, short = 't', default_value = "Data Analysis")]
    title: String,

    /// Configuration file (.toml, .yaml or .json)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Render the built-in sample dataset
    #[arg(long, conflicts_with = "file")]
    sample: bool,

    /// Color the output with ANSI escapes
    #[arg(long)]
    ansi: bool,

    /// Output width in characters
    #[arg(long, short = 'w', default_value_t = 120)]
    width: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => VizConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => VizConfig::default(),
    };

    let input = match (&cli.file, cli.sample) {
        (Some(path), _) => {
            read_path(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        (None, true) => RawInput::Table(sample_dataset()),
        (None, false) => anyhow::bail!("no input: pass a FILE or --sample"),
    };

    let ansi = cli.ansi || config.ansi;
    let caption = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let renderer = Renderer::new(config).with_caption(caption);

    let mut sink = TextSink::new(io::stdout().lock())
        .with_width(cli.width)
        .with_ansi(ansi);
    renderer.display(&mut sink, input, ViewType::parse(&cli.view), &cli.title)?;

    Ok(())
}
