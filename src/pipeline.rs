// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Orchestrate one run: collect activity, rank repos, score and select commits, assemble and publish the post
// role: processing/orchestrator
// inputs: EffectiveConfig, Config, TimeWindow, Collaborators (GitHub, optional summarizer, optional publisher)
// outputs: Outcome (NoActivity | NothingSignificant | DryRun | Published)
// side_effects: Network calls through the collaborators only
// invariants:
// - empty aggregation short-circuits before any commit fetch
// - empty selection short-circuits before summarization/publishing
// - dry-run never touches the publisher
// errors: Core InvalidArgument, UnexpectedResponseShape and collaborator failures propagate; non-2xx publish is an error
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use crate::activity::aggregate;
use crate::cli::EffectiveConfig;
use crate::config::Config;
use crate::github::api::GithubApi;
use crate::github::source::{collect_push_events, fetch_commits};
use crate::model::{Outcome, ScoredCommit};
use crate::publish::Publisher;
use crate::render::{build_prompt, compose_post, render_digest, PostFooter};
use crate::scoring::matched_rules;
use crate::select::select;
use crate::summarize::Summarizer;
use crate::window::TimeWindow;

pub struct Collaborators<'a> {
  pub github: &'a dyn GithubApi,
  pub summarizer: Option<&'a dyn Summarizer>,
  pub publisher: Option<&'a dyn Publisher>,
}

pub fn run_pipeline(
  cfg: &EffectiveConfig,
  config: &Config,
  window: &TimeWindow,
  collab: &Collaborators<'_>,
) -> Result<Outcome> {
  // Phase 1: rank repositories by activity inside the window
  let events = collect_push_events(collab.github, cfg.source, &config.hub_user, window)?;
  let top_repos = aggregate(&events, window.cutoff, cfg.top_repos)?;

  if top_repos.is_empty() {
    info!(lookback_hours = window.lookback_hours, "No commits in the window, nothing to post.");
    return Ok(Outcome::NoActivity);
  }
  info!(repos = ?top_repos, "most active repositories");

  // Phase 2: score subjects and keep the significant ones
  let scored: Vec<ScoredCommit> = fetch_commits(collab.github, &top_repos, window)?
    .iter()
    .map(ScoredCommit::from_raw)
    .collect();

  for c in &scored {
    debug!(repo = c.repo.as_str(), score = c.score, rules = ?matched_rules(&c.message), "{}", c.message);
  }

  let selected = select(scored, cfg.min_score, cfg.max_per_repo)?;

  if selected.is_empty() {
    info!("No significant commits to post today.");
    return Ok(Outcome::NothingSignificant);
  }
  info!(count = selected.len(), "significant commits selected");

  // Phase 3: text
  let post = assemble_post(cfg, config, &selected, collab.summarizer)?;

  if cfg.dry_run {
    return Ok(Outcome::DryRun { post });
  }

  // Phase 4: publish
  let publisher = collab.publisher.context("no publisher configured for a non-dry run")?;
  let status = publisher.publish(&post)?;

  if !(200..300).contains(&status) {
    bail!("LinkedIn rejected the post with status {}", status);
  }

  Ok(Outcome::Published { status })
}

pub fn assemble_post(
  cfg: &EffectiveConfig,
  config: &Config,
  selected: &[ScoredCommit],
  summarizer: Option<&dyn Summarizer>,
) -> Result<String> {
  let footer = PostFooter {
    user: &config.hub_user,
    portfolio_url: config.portfolio_url.as_deref(),
    automation_note: cfg.use_ai,
  };

  let body = if cfg.use_ai {
    let summarizer = summarizer.context("no summarizer configured")?;
    summarizer.summarize(&build_prompt(&config.hub_user, selected))?
  } else {
    render_digest(selected)
  };

  Ok(compose_post(&body, &footer))
}
