use predicates::prelude::*;

use crate::common::fixture_cmd;

#[test]
fn missing_user_is_reported_by_name() {
  fixture_cmd()
    .env_remove("HUB_USER")
    .env_remove("GITHUB_USER")
    .args(["--dry-run", "--no-ai"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Missing env variables: HUB_USER"));
}

#[test]
fn publishing_requires_linkedin_credentials() {
  fixture_cmd()
    .arg("--no-ai")
    .assert()
    .failure()
    .stderr(predicate::str::contains("LINKEDIN_ACCESS_TOKEN"))
    .stderr(predicate::str::contains("LINKEDIN_AUTHOR_URN"));
}

#[test]
fn ai_mode_requires_a_hugging_face_key() {
  fixture_cmd()
    .env_remove("HUGGINGFACE_API_KEY")
    .arg("--dry-run")
    .assert()
    .failure()
    .stderr(predicate::str::contains("HUGGINGFACE_API_KEY"));
}

#[test]
fn non_positive_lookback_is_rejected() {
  fixture_cmd()
    .args(["--dry-run", "--no-ai", "--lookback-hours", "0"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("--lookback-hours"));
}

#[test]
fn zero_per_repo_cap_is_rejected() {
  fixture_cmd()
    .args(["--dry-run", "--no-ai", "--max-per-repo", "0"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("--max-per-repo"));
}

#[test]
fn unknown_source_is_a_usage_error() {
  fixture_cmd()
    .args(["--dry-run", "--source", "gists"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("gists"));
}

#[test]
fn github_error_status_fails_instead_of_reporting_no_activity() {
  fixture_cmd()
    .env(
      "DDP_TEST_REPOS_JSON",
      r#"{ "message": "Bad credentials", "documentation_url": "https://docs.github.com/rest" }"#,
    )
    .env("DDP_TEST_REPOS_STATUS", "401")
    .args(["--dry-run", "--no-ai"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("GitHub returned 401"))
    .stderr(predicate::str::contains("Bad credentials"))
    .stderr(predicate::str::contains("nothing to post").not());
}

#[test]
fn rate_limited_events_feed_fails() {
  fixture_cmd()
    .env("DDP_TEST_EVENTS_JSON", r#"{ "message": "API rate limit exceeded" }"#)
    .env("DDP_TEST_EVENTS_STATUS", "403")
    .args(["--dry-run", "--no-ai", "--source", "events"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("API rate limit exceeded"));
}

#[test]
fn non_array_listing_is_an_unexpected_shape() {
  fixture_cmd()
    .env("DDP_TEST_REPOS_JSON", r#"{ "message": "Bad credentials" }"#)
    .args(["--dry-run", "--no-ai"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("unexpected response shape"));
}

#[test]
fn empty_repositories_are_no_activity() {
  fixture_cmd()
    .env("DDP_TEST_COMMITS_JSON", r#"{ "message": "Git Repository is empty." }"#)
    .env("DDP_TEST_COMMITS_STATUS", "409")
    .args(["--dry-run", "--no-ai"])
    .assert()
    .success()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("nothing to post"));
}
