use anyhow::{bail, Result};
use clap::Parser;

use crate::github::source::ActivitySource;
use crate::summarize::DEFAULT_MODEL;

#[derive(Parser, Debug)]
#[command(
    name = "daily-dev-post",
    version,
    about = "Summarize today's significant GitHub commits into a LinkedIn post",
    long_about = None
)]
pub struct Cli {
  /// Print the post instead of publishing it
  #[arg(long)]
  pub dry_run: bool,

  /// Skip the text-generation service and post a templated digest
  #[arg(long)]
  pub no_ai: bool,

  /// Where repository activity is read from
  #[arg(long, value_enum, default_value_t = ActivitySource::Repos)]
  pub source: ActivitySource,

  /// How far back to look for commits, in hours
  #[arg(long, default_value_t = 24, allow_negative_numbers = true)]
  pub lookback_hours: i64,

  /// Number of most active repositories to include
  #[arg(long, default_value_t = 3)]
  pub top_repos: usize,

  /// Maximum commits listed per repository
  #[arg(long, default_value_t = 4)]
  pub max_per_repo: usize,

  /// Minimum significance score for a commit to be kept
  #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
  pub min_score: i32,

  /// Text-generation model identifier
  #[arg(long, default_value = DEFAULT_MODEL)]
  pub model: String,

  /// Debug-level logging (RUST_LOG takes precedence)
  #[arg(short, long)]
  pub verbose: bool,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,

  /// Override the "now" instant the lookback is measured from (hidden; tests only)
  #[arg(long = "now-override", hide = true)]
  pub now_override: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EffectiveConfig {
  pub dry_run: bool,
  pub use_ai: bool,
  pub source: ActivitySource,
  pub lookback_hours: i64,
  pub top_repos: usize,
  pub max_per_repo: usize,
  pub min_score: i32,
  pub model: String,
  pub now_override: Option<String>,
}

pub fn normalize(cli: Cli) -> Result<EffectiveConfig> {
  if cli.lookback_hours <= 0 {
    bail!("--lookback-hours must be a positive number of hours");
  }
  if cli.top_repos == 0 {
    bail!("--top-repos must be at least 1");
  }
  if cli.max_per_repo == 0 {
    bail!("--max-per-repo must be at least 1");
  }
  if cli.now_override.is_some() && crate::window::parse_now_override(cli.now_override.as_deref()).is_none() {
    bail!("--now-override expects RFC3339 or %Y-%m-%dT%H:%M:%S");
  }

  Ok(EffectiveConfig {
    dry_run: cli.dry_run,
    use_ai: !cli.no_ai,
    source: cli.source,
    lookback_hours: cli.lookback_hours,
    top_repos: cli.top_repos,
    max_per_repo: cli.max_per_repo,
    min_score: cli.min_score,
    model: cli.model,
    now_override: cli.now_override,
  })
}
