use predicates::prelude::*;

use crate::common::fixture_cmd;

const DIGEST: &str = "🛠 Daily dev update

Today's progress:
📦 api: https://github.com/octo/api
✨ add OAuth login
✨ implement refresh tokens
🐛 handle expired tokens
• add support for passkeys

📦 web: https://github.com/octo/web
🐛 align header on mobile

🔗 My GitHub: https://github.com/octo
🔗 My Portfolio: https://octo.dev";

#[test]
fn no_ai_dry_run_prints_ranked_digest() {
  let out = fixture_cmd().args(["--dry-run", "--no-ai"]).output().unwrap();
  assert!(out.status.success(), "cli run failed: {}", String::from_utf8_lossy(&out.stderr));

  let stdout = String::from_utf8_lossy(&out.stdout);
  assert!(stdout.starts_with("🧪 DRY RUN: LinkedIn post would be:\n\n"));
  assert!(stdout.contains(DIGEST), "stdout was:\n{}", stdout);
}

#[test]
fn low_scoring_and_out_of_window_commits_are_left_out() {
  fixture_cmd()
    .args(["--dry-run", "--no-ai"])
    .assert()
    .success()
    .stdout(predicate::str::contains("bump deps").not())
    .stdout(predicate::str::contains("refactor session store").not())
    .stdout(predicate::str::contains("add tests for login").not())
    .stdout(predicate::str::contains("update readme").not())
    .stdout(predicate::str::contains("quiet").not());
}

#[test]
fn events_source_ranks_the_same_repos() {
  fixture_cmd()
    .args(["--dry-run", "--no-ai", "--source", "events"])
    .assert()
    .success()
    .stdout(predicate::str::contains(DIGEST))
    .stdout(predicate::str::contains("octo/old").not());
}

#[test]
fn knobs_narrow_the_selection() {
  let out = fixture_cmd()
    .args(["--dry-run", "--no-ai", "--top-repos", "1", "--max-per-repo", "2", "--min-score", "5"])
    .output()
    .unwrap();
  assert!(out.status.success());

  let stdout = String::from_utf8_lossy(&out.stdout);
  assert!(stdout.contains("📦 api: https://github.com/octo/api\n✨ add OAuth login\n✨ implement refresh tokens\n\n"));
  assert!(!stdout.contains("handle expired tokens"));
  assert!(!stdout.contains("📦 web"));
}

#[test]
fn no_activity_in_window_exits_cleanly() {
  fixture_cmd()
    .env("DDP_TEST_REPOS_JSON", "[]")
    .args(["--dry-run", "--no-ai"])
    .assert()
    .success()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("nothing to post"));
}

#[test]
fn nothing_significant_exits_cleanly() {
  fixture_cmd()
    .env(
      "DDP_TEST_COMMITS_JSON",
      r#"{ "octo/api": [{ "commit": { "message": "chore: lint", "committer": { "date": "2026-01-08T10:00:00Z" } } }] }"#,
    )
    .args(["--dry-run", "--no-ai"])
    .assert()
    .success()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("No significant commits"));
}

#[test]
fn short_lookback_moves_the_cutoff() {
  // 18:00 minus 3h leaves only commits from 15:00 on: "test: add tests for login" (1) and passkeys (2)
  fixture_cmd()
    .args(["--dry-run", "--no-ai", "--lookback-hours", "3"])
    .assert()
    .success()
    .stdout(predicate::str::contains("• add support for passkeys\n• test: add tests for login\n"))
    .stdout(predicate::str::contains("OAuth").not());
}

#[test]
fn dotenv_file_in_working_dir_supplies_identity() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::write(dir.path().join(".env"), "HUB_USER=octo\n").unwrap();

  fixture_cmd()
    .current_dir(dir.path())
    .env_remove("HUB_USER")
    .env_remove("GITHUB_USER")
    .args(["--dry-run", "--no-ai"])
    .assert()
    .success()
    .stdout(predicate::str::contains("🔗 My GitHub: https://github.com/octo"));
}
