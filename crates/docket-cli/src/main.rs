use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use docket_core::domain::Confidence;
use docket_core::impls::{
    ChunkSplitter, DEFAULT_MARKER, JsonLinesSink, LineSplitter, MarkerTrigger, ParagraphSplitter,
    ThresholdAdjudicator, TracingSink,
};
use docket_core::ports::{EventSink, ShardSource};
use docket_core::{RunConfig, SchedulerBuilder};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Split {
    Lines,
    Paragraphs,
    Chunks,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Events {
    /// One JSON object per event on stdout.
    Json,
    /// Human-readable lines through the logger (stderr).
    Log,
}

/// Split text into shards and adjudicate them with bounded retry and a
/// deferred finalization pass.
#[derive(Debug, Parser)]
#[command(name = "docket", version, about)]
struct Cli {
    /// Input file; reads stdin when omitted.
    input: Option<PathBuf>,

    /// JSON run config. Flags below override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    max_attempts: Option<u32>,

    #[arg(long)]
    primary_confidence: Option<f64>,

    #[arg(long)]
    final_confidence: Option<f64>,

    /// Pause after each attempt.
    #[arg(long)]
    pacing_ms: Option<u64>,

    /// Minimum confidence the reference adjudicator accepts as valid.
    #[arg(long, default_value_t = 1.0)]
    threshold: f64,

    /// Shards containing this marker are forced to fail in phase 1.
    #[arg(long, default_value = DEFAULT_MARKER)]
    marker: String,

    #[arg(long, value_enum, default_value_t = Split::Paragraphs)]
    split: Split,

    /// Characters per shard for `--split chunks`.
    #[arg(long, default_value_t = 512)]
    chunk_size: usize,

    #[arg(long, value_enum, default_value_t = Events::Log)]
    events: Events,
}

impl Cli {
    /// Defaults, then the config file, then flags.
    fn run_config(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };
        if let Some(n) = self.max_attempts {
            config.max_attempts = n;
        }
        if let Some(c) = self.primary_confidence {
            config.primary_confidence = Confidence::new(c).context("--primary-confidence")?;
        }
        if let Some(c) = self.final_confidence {
            config.final_confidence = Confidence::new(c).context("--final-confidence")?;
        }
        if let Some(ms) = self.pacing_ms {
            config.pacing_ms = ms;
        }
        config.validate()?;
        Ok(config)
    }

    fn source(&self) -> Box<dyn ShardSource> {
        match self.split {
            Split::Lines => Box::new(LineSplitter),
            Split::Paragraphs => Box::new(ParagraphSplitter),
            Split::Chunks => Box::new(ChunkSplitter::new(self.chunk_size)),
        }
    }

    fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read stdin")?;
                Ok(buf)
            }
        }
    }
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();
    let cli = Cli::parse();

    let config = cli.run_config()?;
    tracing::debug!(?config, "run config");
    let raw = cli.read_input()?;

    let sink: Arc<dyn EventSink> = match cli.events {
        Events::Json => Arc::new(JsonLinesSink::new(std::io::stdout())),
        Events::Log => Arc::new(TracingSink),
    };

    let scheduler = SchedulerBuilder::new()
        .config(config)
        .adjudicator(ThresholdAdjudicator::new(cli.threshold))
        .trigger(MarkerTrigger::new(cli.marker.clone()))
        .sink(sink)
        .build()?;

    let report = scheduler.run_source(cli.source().as_ref(), &raw).await;

    let s = &report.summary;
    eprintln!(
        "{}: {} shards, {} completed, {} finalized, {} retries, {} attempts",
        report.run_id, s.total_shards, s.completed, s.finalized, s.retries, s.total_attempts
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from(["docket", "--max-attempts", "5", "--final-confidence", "0.1"])
            .unwrap();
        let config = cli.run_config().unwrap();
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.final_confidence.value(), 0.1);
        assert_eq!(config.primary_confidence, Confidence::FULL);
    }

    #[test]
    fn invalid_flags_are_rejected() {
        let cli = Cli::try_parse_from(["docket", "--primary-confidence", "3"]).unwrap();
        assert!(cli.run_config().is_err());

        let cli = Cli::try_parse_from(["docket", "--max-attempts", "0"]).unwrap();
        assert!(cli.run_config().is_err());
    }

    #[test]
    fn default_marker_and_split() {
        let cli = Cli::try_parse_from(["docket", "input.txt"]).unwrap();
        assert_eq!(cli.marker, DEFAULT_MARKER);
        assert!(matches!(cli.split, Split::Paragraphs));
        assert_eq!(cli.source().split("a\n\nb").len(), 2);
    }
}
