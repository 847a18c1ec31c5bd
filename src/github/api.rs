// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: GitHub REST access for activity collection (token discovery, events feed, owned repos, commit listings)
// role: github/api
// inputs: env GITHUB_TOKEN / GH_TOKEN; optional `gh` CLI for token fallback; DDP_TEST_* fixtures and statuses in tests
// outputs: Raw serde_json::Value payloads; interpretation lives in github::source
// side_effects: Network calls to api.github.com; spawns `gh` subprocess when needed
// invariants:
// - Token discovery prefers GITHUB_TOKEN, then GH_TOKEN, then `gh auth token`
// - non-2xx replies are errors carrying the status and GitHub's message
// - 409 on a commit listing means an empty repository and reads as `[]`
// - Fixture backend is chosen whenever any DDP_TEST_* GitHub fixture is set
// errors: Transport and JSON decoding failures propagate with the URL as context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::{bail, Context, Result};
use tracing::{debug, warn};

use crate::ext::serde_json::JsonFetch;

const API_ROOT: &str = "https://api.github.com";
const USER_AGENT: &str = "daily-summary-bot";

pub const ENV_EVENTS_FIXTURE: &str = "DDP_TEST_EVENTS_JSON";
pub const ENV_REPOS_FIXTURE: &str = "DDP_TEST_REPOS_JSON";
pub const ENV_COMMITS_FIXTURE: &str = "DDP_TEST_COMMITS_JSON";

const EMPTY_REPOSITORY_STATUS: u16 = 409;

/// Discover a GitHub token: env vars first, then `gh auth token` if available.
pub fn get_github_token() -> Option<String> {
  for key in ["GITHUB_TOKEN", "GH_TOKEN"] {
    if let Ok(t) = std::env::var(key) {
      if !t.trim().is_empty() {
        return Some(t);
      }
    }
  }

  if let Ok(output) = std::process::Command::new("gh").args(["auth", "token"]).output() {
    if output.status.success() {
      let t = String::from_utf8_lossy(&output.stdout).trim().to_string();

      if !t.is_empty() {
        return Some(t);
      }
    }
  }

  None
}

// --- Trait seam for GitHub API ---
pub trait GithubApi: Send + Sync {
  fn list_user_events_json(&self, user: &str) -> Result<serde_json::Value>;
  fn list_user_repos_json(&self, user: &str) -> Result<serde_json::Value>;
  fn list_commits_since_json(&self, full_name: &str, since: &str) -> Result<serde_json::Value>;
}

struct GithubHttpApi {
  agent: ureq::Agent,
  token: String,
}

impl GithubHttpApi {
  fn new(token: String) -> Self {
    let agent: ureq::Agent = ureq::Agent::config_builder().http_status_as_error(false).build().into();
    Self { agent, token }
  }

  fn get_json(&self, url: &str, empty_ok: bool) -> Result<serde_json::Value> {
    debug!(url, "github GET");

    let mut resp = self
      .agent
      .get(url)
      .header("Accept", "application/vnd.github+json")
      .header("User-Agent", USER_AGENT)
      .header("Authorization", &format!("Bearer {}", self.token))
      .call()
      .with_context(|| format!("GET {}", url))?;

    let status = resp.status().as_u16();
    let raw = resp
      .body_mut()
      .read_to_string()
      .with_context(|| format!("reading body from {}", url))?;

    interpret_reply(status, url, &raw, empty_ok)
  }
}

/// Decode a 2xx body, or fail with the status and GitHub's `message`.
fn interpret_reply(status: u16, source: &str, raw: &str, empty_ok: bool) -> Result<serde_json::Value> {
  if (200..300).contains(&status) {
    return serde_json::from_str(raw).with_context(|| format!("decoding JSON from {}", source));
  }

  if empty_ok && status == EMPTY_REPOSITORY_STATUS {
    debug!(source, "repository is empty");
    return Ok(serde_json::json!([]));
  }

  let message = serde_json::from_str::<serde_json::Value>(raw)
    .ok()
    .and_then(|body| body.fetch("message").as_text().map(str::to_string))
    .unwrap_or_else(|| raw.trim().to_string());
  warn!(source, status, "github request failed");

  bail!("GitHub returned {} for {}: {}", status, source, message)
}

impl GithubApi for GithubHttpApi {
  fn list_user_events_json(&self, user: &str) -> Result<serde_json::Value> {
    self.get_json(&format!("{}/users/{}/events", API_ROOT, user), false)
  }

  fn list_user_repos_json(&self, user: &str) -> Result<serde_json::Value> {
    self.get_json(&format!("{}/users/{}/repos?per_page=30", API_ROOT, user), false)
  }

  fn list_commits_since_json(&self, full_name: &str, since: &str) -> Result<serde_json::Value> {
    self.get_json(&format!("{}/repos/{}/commits?since={}", API_ROOT, full_name, since), true)
  }
}

/// Serves payloads from DDP_TEST_* environment variables; absent fixtures read as `[]`.
///
/// `DDP_TEST_{EVENTS,REPOS,COMMITS}_STATUS` sets the HTTP status the matching fixture is served with.
struct GithubEnvApi;

fn fixture_status(key: &str) -> Result<u16> {
  let status_key = format!("{}_STATUS", key.trim_end_matches("_JSON"));

  match std::env::var(&status_key) {
    Ok(s) => s.trim().parse::<u16>().with_context(|| format!("parsing {}", status_key)),
    Err(_) => Ok(200),
  }
}

fn env_reply(key: &str, empty_ok: bool) -> Result<serde_json::Value> {
  let raw = std::env::var(key).unwrap_or_else(|_| "[]".to_string());
  interpret_reply(fixture_status(key)?, key, &raw, empty_ok)
}

impl GithubApi for GithubEnvApi {
  fn list_user_events_json(&self, _user: &str) -> Result<serde_json::Value> {
    env_reply(ENV_EVENTS_FIXTURE, false)
  }

  fn list_user_repos_json(&self, _user: &str) -> Result<serde_json::Value> {
    env_reply(ENV_REPOS_FIXTURE, false)
  }

  fn list_commits_since_json(&self, full_name: &str, since: &str) -> Result<serde_json::Value> {
    // Fixture shape: { "owner/repo": [ ...commits ] }
    let listing = env_reply(ENV_COMMITS_FIXTURE, true)?
      .get(full_name)
      .cloned()
      .unwrap_or_else(|| serde_json::json!([]));

    Ok(filter_since(listing, since))
  }
}

/// Drop listed commits dated before `since`, as the commits endpoint does; undated commits stay.
fn filter_since(listing: serde_json::Value, since: &str) -> serde_json::Value {
  let parse = |s: &str| chrono::DateTime::parse_from_rfc3339(s).ok();
  let Some(cutoff) = parse(since) else {
    return listing;
  };

  match listing {
    serde_json::Value::Array(items) => serde_json::Value::Array(
      items
        .into_iter()
        .filter(|c| {
          c.fetch("commit.committer.date")
            .as_text()
            .or_else(|| c.fetch("commit.author.date").as_text())
            .and_then(parse)
            .map_or(true, |date| date >= cutoff)
        })
        .collect(),
    ),
    other => other,
  }
}

pub fn env_wants_mock() -> bool {
  [ENV_EVENTS_FIXTURE, ENV_REPOS_FIXTURE, ENV_COMMITS_FIXTURE]
    .iter()
    .any(|k| std::env::var(k).is_ok())
}

pub fn build_api(token: &str) -> Box<dyn GithubApi> {
  if env_wants_mock() {
    debug!("using GitHub fixtures from environment");
    Box::new(GithubEnvApi)
  } else {
    Box::new(GithubHttpApi::new(token.to_string()))
  }
}

// Public constructors for dependency injection in higher layers/tests.
#[cfg(any(test, feature = "testutil"))]
pub fn make_env_api() -> Box<dyn GithubApi> {
  Box::new(GithubEnvApi)
}
