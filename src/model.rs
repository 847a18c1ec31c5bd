// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Define the per-run data model (push observations, repo activity, raw and scored commits, run outcome)
// role: model/types
// outputs: Plain structs shared by the core pipeline and the adapters
// invariants: ScoredCommit.message is a single line; entities live for one run only
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::{DateTime, Utc};

use crate::scoring;

/// A push-like observation: some commits landed in a repository at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushEvent {
  pub repo_full_name: String,
  pub commit_count: Option<u64>,
  pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoActivity {
  pub full_name: String,
  pub commit_count: u64,
}

/// A commit as listed by the activity source; `message` may span several lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommit {
  pub repo: String,
  pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCommit {
  pub repo: String,
  pub message: String,
  pub score: i32,
}

impl ScoredCommit {
  /// Score the subject line of a raw commit.
  pub fn from_raw(raw: &RawCommit) -> Self {
    let message = first_line(&raw.message).to_string();
    let score = scoring::score(&message);

    Self {
      repo: raw.repo.clone(),
      message,
      score,
    }
  }
}

/// How a run ended. The two "nothing" variants are successful outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  NoActivity,
  NothingSignificant,
  DryRun { post: String },
  Published { status: u16 },
}

pub fn first_line(message: &str) -> &str {
  message.lines().next().unwrap_or("")
}

/// `owner/repo` -> `repo`; names without an owner are returned unchanged.
pub fn short_repo_name(full_name: &str) -> &str {
  full_name.rsplit_once('/').map(|(_, name)| name).unwrap_or(full_name)
}
