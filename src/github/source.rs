// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Interpret GitHub payloads as push observations and raw commits for the pipeline core
// role: github/activity-source
// inputs: GithubApi backend, GitHub user, TimeWindow, selected repo names
// outputs: Vec<PushEvent> for aggregation; Vec<RawCommit> for scoring
// side_effects: Network calls through GithubApi; per-repo listings fetched in parallel
// invariants:
// - parallel fetches are collected in request order (indexed rayon collect)
// - a payload that is not a JSON array is UnexpectedResponseShape
// - malformed items inside an array are skipped with a warning, never a panic
// errors: Transport/decoding failures from GithubApi propagate
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::PipelineError;
use crate::ext::serde_json::JsonFetch;
use crate::github::api::GithubApi;
use crate::model::{PushEvent, RawCommit};
use crate::window::TimeWindow;

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ActivitySource {
  /// Owned repositories, counting commits listed since the cutoff
  Repos,
  /// The user's public events feed, counting PushEvent commits
  Events,
}

fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.with_timezone(&Utc))
}

fn items<'a>(payload: &'a serde_json::Value, what: &str) -> crate::error::Result<&'a [serde_json::Value]> {
  payload
    .as_array()
    .map(Vec::as_slice)
    .ok_or_else(|| PipelineError::UnexpectedResponseShape(format!("expected a JSON array of {}, got {}", what, payload)))
}

/// PushEvent items from a `/users/{user}/events` payload.
pub fn push_events_from_feed(feed: &serde_json::Value) -> crate::error::Result<Vec<PushEvent>> {
  let mut out = Vec::new();

  for item in items(feed, "events")? {
    if item.fetch("type").as_text() != Some("PushEvent") {
      continue;
    }

    let (Some(repo), Some(occurred_at)) = (
      item.fetch("repo.name").as_text(),
      item.fetch("created_at").as_text().and_then(parse_instant),
    ) else {
      warn!("skipping push event without repo name or timestamp");
      continue;
    };

    let commit_count = item
      .fetch("payload.commits")
      .value()
      .and_then(|v| v.as_array())
      .map(|a| a.len() as u64)
      .or_else(|| item.fetch("payload.size").to::<u64>());

    out.push(PushEvent {
      repo_full_name: repo.to_string(),
      commit_count,
      occurred_at,
    });
  }

  Ok(out)
}

/// `owner/repo` names from a `/users/{user}/repos` payload.
pub fn repo_names_from_listing(listing: &serde_json::Value) -> crate::error::Result<Vec<String>> {
  let names = items(listing, "repos")?
    .iter()
    .filter_map(|repo| {
      repo.fetch("full_name").as_text().map(str::to_string).or_else(|| {
        match (repo.fetch("owner.login").as_text(), repo.fetch("name").as_text()) {
          (Some(owner), Some(name)) => Some(format!("{}/{}", owner, name)),
          _ => None,
        }
      })
    })
    .collect();

  Ok(names)
}

/// Raw commits from a `/repos/{owner}/{repo}/commits` payload.
pub fn raw_commits_from_listing(full_name: &str, listing: &serde_json::Value) -> crate::error::Result<Vec<RawCommit>> {
  Ok(
    items(listing, "commits")?
      .iter()
      .map(|c| RawCommit {
        repo: full_name.to_string(),
        message: c.fetch("commit.message").to_or_default::<String>(),
      })
      .collect(),
  )
}

/// One single-commit observation per listed commit, stamped with its commit date.
pub fn commit_observations(
  full_name: &str,
  listing: &serde_json::Value,
  fallback: DateTime<Utc>,
) -> crate::error::Result<Vec<PushEvent>> {
  let observations = items(listing, "commits")?
    .iter()
    .map(|c| {
      let occurred_at = c
        .fetch("commit.committer.date")
        .as_text()
        .or_else(|| c.fetch("commit.author.date").as_text())
        .and_then(parse_instant)
        .unwrap_or(fallback);

      PushEvent {
        repo_full_name: full_name.to_string(),
        commit_count: Some(1),
        occurred_at,
      }
    })
    .collect();

  Ok(observations)
}

/// Gather push observations for `user` from the chosen source.
pub fn collect_push_events(
  api: &dyn GithubApi,
  source: ActivitySource,
  user: &str,
  window: &TimeWindow,
) -> Result<Vec<PushEvent>> {
  match source {
    ActivitySource::Events => {
      let feed = api.list_user_events_json(user)?;
      Ok(push_events_from_feed(&feed)?)
    }
    ActivitySource::Repos => {
      let repos = repo_names_from_listing(&api.list_user_repos_json(user)?)?;
      debug!(count = repos.len(), "owned repositories");

      let since = window.since_param();
      let per_repo: Vec<Vec<PushEvent>> = repos
        .par_iter()
        .map(|name| -> Result<Vec<PushEvent>> {
          let listing = api.list_commits_since_json(name, &since)?;
          Ok(commit_observations(name, &listing, window.reference)?)
        })
        .collect::<Result<_>>()?;

      Ok(per_repo.into_iter().flatten().collect())
    }
  }
}

/// Fetch commits since the cutoff for each selected repo, in `repos` order.
pub fn fetch_commits(api: &dyn GithubApi, repos: &[String], window: &TimeWindow) -> Result<Vec<RawCommit>> {
  let since = window.since_param();

  let per_repo: Vec<Vec<RawCommit>> = repos
    .par_iter()
    .map(|name| -> Result<Vec<RawCommit>> {
      let listing = api.list_commits_since_json(name, &since)?;
      let commits = raw_commits_from_listing(name, &listing)?;
      debug!(repo = name.as_str(), count = commits.len(), "commits before scoring");
      Ok(commits)
    })
    .collect::<Result<_>>()?;

  Ok(per_repo.into_iter().flatten().collect())
}
