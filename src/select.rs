use std::collections::HashMap;

use crate::error::{PipelineError, Result};
use crate::model::ScoredCommit;

/// Keep commits scoring at least `min_score`, at most `max_per_repo` per repository.
///
/// Repositories appear in the order they first occur in `commits`; within a
/// repository the highest scores come first and equal scores keep their input order.
/// An empty result means nothing significant happened, which is not an error.
pub fn select(commits: Vec<ScoredCommit>, min_score: i32, max_per_repo: usize) -> Result<Vec<ScoredCommit>> {
  if max_per_repo == 0 {
    return Err(PipelineError::InvalidArgument("max commits per repo must be positive".into()));
  }

  let mut groups: Vec<Vec<ScoredCommit>> = Vec::new();
  let mut index: HashMap<String, usize> = HashMap::new();

  for commit in commits.into_iter().filter(|c| c.score >= min_score) {
    match index.get(&commit.repo) {
      Some(&i) => groups[i].push(commit),
      None => {
        index.insert(commit.repo.clone(), groups.len());
        groups.push(vec![commit]);
      }
    }
  }

  Ok(
    groups
      .into_iter()
      .flat_map(|mut group| {
        group.sort_by(|a, b| b.score.cmp(&a.score));
        group.truncate(max_per_repo);
        group
      })
      .collect(),
  )
}
