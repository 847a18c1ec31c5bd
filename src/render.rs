// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Turn selected commits into display text (decorated lines, summarization prompt, templated digest, post footer)
// role: rendering/text
// inputs: ScoredCommit selections, GitHub user, optional portfolio URL, generated summary text
// outputs: Plain strings ready for the summarizer, the publisher, or stdout
// invariants:
// - format_commit_message is total and not idempotent (bullet lines gain another bullet)
// - digest groups lines per repo in selection order
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{short_repo_name, ScoredCommit};

pub const FEATURE_MARKER: &str = "✨";
pub const BUGFIX_MARKER: &str = "🐛";
pub const BULLET_MARKER: &str = "•";

static RE_FEAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^feat:\s*").unwrap());
static RE_FIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^fix:\s*").unwrap());

/// Decorate a commit subject with a marker for its category.
pub fn format_commit_message(message: &str) -> String {
  if let Some(m) = RE_FEAT.find(message) {
    return format!("{} {}", FEATURE_MARKER, &message[m.end()..]);
  }

  if let Some(m) = RE_FIX.find(message) {
    return format!("{} {}", BUGFIX_MARKER, &message[m.end()..]);
  }

  format!("{} {}", BULLET_MARKER, message)
}

pub fn repo_url(full_name: &str) -> String {
  format!("https://github.com/{}", full_name)
}

/// Prompt handed to the summarizer; one `repo: subject` line per commit, repo without its owner.
pub fn build_prompt(user: &str, commits: &[ScoredCommit]) -> String {
  let commits_text = commits
    .iter()
    .map(|c| format!("{}: {}", short_repo_name(&c.repo), c.message))
    .collect::<Vec<_>>()
    .join("\n");

  format!(
    "Write a concise LinkedIn post summarizing the following commits from my GitHub repositories. The GitHub user is {user}.\n\
     Make it professional, readable and engaging. Use emojis for features and fixes.\n\
     Keep it short and include clickable repository URLs where possible.\n\
     Always put a space after every emoji.\n\
     Commits:\n\
     {commits_text}"
  )
}

/// Templated post body used when no summarizer is involved.
pub fn render_digest(commits: &[ScoredCommit]) -> String {
  let mut out = String::from("🛠 Daily dev update\n\nToday's progress:\n");
  let mut current: Option<&str> = None;

  for c in commits {
    if current != Some(c.repo.as_str()) {
      if current.is_some() {
        out.push('\n');
      }
      out.push_str(&format!("📦 {}: {}\n", short_repo_name(&c.repo), repo_url(&c.repo)));
      current = Some(c.repo.as_str());
    }

    out.push_str(&format_commit_message(&c.message));
    out.push('\n');
  }

  if current.is_some() {
    out.push('\n');
  }

  out
}

pub struct PostFooter<'a> {
  pub user: &'a str,
  pub portfolio_url: Option<&'a str>,
  pub automation_note: bool,
}

impl PostFooter<'_> {
  pub fn render(&self) -> String {
    let mut lines: Vec<String> = Vec::new();

    if self.automation_note {
      lines.push(
        "📝 This post was automated with the LinkedIn API; the code that writes it is on my GitHub.".to_string(),
      );
    }
    lines.push(format!("🔗 My GitHub: https://github.com/{}", self.user));

    if let Some(url) = self.portfolio_url {
      lines.push(format!("🔗 My Portfolio: {}", url));
    }

    lines.join("\n")
  }
}

/// Join a post body and its footer, separated by one blank line.
pub fn compose_post(body: &str, footer: &PostFooter<'_>) -> String {
  format!("{}\n\n{}", body.trim_end(), footer.render())
}
