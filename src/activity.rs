// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Aggregate push observations into per-repo commit totals and pick the most active repositories
// role: aggregation/ranking
// inputs: PushEvent sequence, cutoff instant, top_n
// outputs: RepoActivity totals (first-seen order); top-N repo names, busiest first
// invariants:
// - events strictly before the cutoff are ignored; missing counts are 0
// - ordering is a stable descending sort, ties keep first-seen order
// - an empty result is a valid "nothing to do" signal, not an error
// errors: InvalidArgument when top_n is 0
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::error::{PipelineError, Result};
use crate::model::{PushEvent, RepoActivity};

/// Sum commit counts per repository for events at or after `cutoff`.
pub fn tally(events: &[PushEvent], cutoff: DateTime<Utc>) -> Vec<RepoActivity> {
  let mut out: Vec<RepoActivity> = Vec::new();
  let mut index: HashMap<&str, usize> = HashMap::new();

  for event in events.iter().filter(|e| e.occurred_at >= cutoff) {
    let count = event.commit_count.unwrap_or(0);

    match index.get(event.repo_full_name.as_str()) {
      Some(&i) => out[i].commit_count += count,
      None => {
        index.insert(event.repo_full_name.as_str(), out.len());
        out.push(RepoActivity {
          full_name: event.repo_full_name.clone(),
          commit_count: count,
        });
      }
    }
  }

  out
}

/// Rank repositories by commit volume and keep the `top_n` busiest.
pub fn aggregate(events: &[PushEvent], cutoff: DateTime<Utc>, top_n: usize) -> Result<Vec<String>> {
  if top_n == 0 {
    return Err(PipelineError::InvalidArgument("top repo count must be positive".into()));
  }

  let mut totals = tally(events, cutoff);
  totals.sort_by(|a, b| b.commit_count.cmp(&a.commit_count));

  Ok(totals.into_iter().take(top_n).map(|a| a.full_name).collect())
}
