// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Score a commit subject by summing the weights of every matching keyword rule
// role: scoring/heuristics
// inputs: A single-line commit subject
// outputs: Signed integer score; list of matched rules for diagnostics
// invariants:
// - Pure and deterministic; every matching rule contributes (no first-match-wins)
// - Rule table is fixed at compile time and case-insensitive
// - Input is scanned as given; callers pass the first line
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use once_cell::sync::Lazy;
use regex::Regex;

pub struct ScoreRule {
  pub name: &'static str,
  pub pattern: Regex,
  pub weight: i32,
}

impl ScoreRule {
  fn new(name: &'static str, pattern: &str, weight: i32) -> Self {
    Self {
      name,
      pattern: Regex::new(pattern).unwrap(),
      weight,
    }
  }

  pub fn matches(&self, message: &str) -> bool {
    self.pattern.is_match(message)
  }
}

pub static SCORE_RULES: Lazy<Vec<ScoreRule>> = Lazy::new(|| {
  vec![
    ScoreRule::new("feature", r"(?i)^feat:", 5),
    ScoreRule::new("fix", r"(?i)^fix:", 4),
    ScoreRule::new("additive", r"(?i)\b(?:add|implement|support)\b", 2),
    ScoreRule::new("tests", r"(?i)\btests?\b", -1),
    ScoreRule::new("housekeeping", r"(?i)\b(?:chore|lint|format|ci|docs|merge)\b", -2),
  ]
});

pub fn score(message: &str) -> i32 {
  SCORE_RULES
    .iter()
    .filter(|rule| rule.matches(message))
    .map(|rule| rule.weight)
    .sum()
}

/// Names of the rules that fire for `message`, in table order.
pub fn matched_rules(message: &str) -> Vec<&'static str> {
  SCORE_RULES
    .iter()
    .filter(|rule| rule.matches(message))
    .map(|rule| rule.name)
    .collect()
}
