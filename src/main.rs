use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

mod activity;
mod cli;
mod config;
mod error;
mod ext;
mod github;
mod model;
mod pipeline;
mod publish;
mod render;
mod scoring;
mod select;
mod summarize;
mod util;
mod window;

use crate::cli::{normalize, Cli, EffectiveConfig};
use crate::config::{Config, Requirements};
use crate::model::Outcome;
use crate::pipeline::Collaborators;
use crate::publish::{LinkedInPublisher, Publisher};
use crate::window::TimeWindow;

fn main() -> Result<()> {
  let cli = Cli::parse();

  if cli.gen_man {
    let page = util::render_man_page::<Cli>()?;
    print!("{}", page);
    return Ok(());
  }

  util::init_logging(cli.verbose);
  dotenvy::dotenv().ok();

  let result = normalize(cli).and_then(|cfg| run(&cfg));
  if let Err(err) = &result {
    error!("{:#}", err);
  }

  result
}

fn run(cfg: &EffectiveConfig) -> Result<()> {
  // Phase 1: configuration and window, built once
  let config = Config::from_env(Requirements {
    publish: !cfg.dry_run,
    summarize: cfg.use_ai,
  })?;

  let now = util::effective_now(window::parse_now_override(cfg.now_override.as_deref()));
  let window = TimeWindow::new(cfg.lookback_hours, now)?;
  info!(user = config.hub_user.as_str(), since = %window.since_param(), "collecting activity");

  // Phase 2: collaborators
  let github = github::api::build_api(&config.github_token);
  let summarizer = if cfg.use_ai {
    Some(summarize::build_summarizer(
      config.hf_api_key.as_deref().unwrap_or_default(),
      &cfg.model,
    ))
  } else {
    None
  };
  let publisher: Option<Box<dyn Publisher>> = match (&config.linkedin_token, &config.linkedin_author) {
    (Some(token), Some(author)) if !cfg.dry_run => Some(Box::new(LinkedInPublisher::new(token.clone(), author.clone()))),
    _ => None,
  };

  let collab = Collaborators {
    github: github.as_ref(),
    summarizer: summarizer.as_deref(),
    publisher: publisher.as_deref(),
  };

  // Phase 3: run and report
  match pipeline::run_pipeline(cfg, &config, &window, &collab)? {
    Outcome::DryRun { post } => {
      println!("🧪 DRY RUN: LinkedIn post would be:\n");
      println!("{}", post);
    }
    Outcome::Published { status } => info!(status, "LinkedIn post published"),
    Outcome::NoActivity | Outcome::NothingSignificant => {}
  }

  Ok(())
}
