use assert_cmd::Command;

pub const NOW: &str = "2026-01-08T18:00:00Z";

/// Binary preloaded with credentials, a fixed "now", and GitHub fixtures from tests/fixtures.
///
/// LinkedIn credentials are removed so a missing `--dry-run` fails fast instead of posting.
#[allow(dead_code)]
pub fn fixture_cmd() -> Command {
  let mut cmd = test_support::cmd_bin("daily-dev-post");
  cmd
    .env_remove("RUST_LOG")
    .env_remove("LINKEDIN_ACCESS_TOKEN")
    .env_remove("LINKEDIN_AUTHOR_URN")
    .env_remove("DDP_TEST_SUMMARY_JSON")
    .env_remove("DDP_TEST_EVENTS_STATUS")
    .env_remove("DDP_TEST_REPOS_STATUS")
    .env_remove("DDP_TEST_COMMITS_STATUS")
    .env("GITHUB_TOKEN", "test-token")
    .env("HUB_USER", "octo")
    .env("HUGGINGFACE_API_KEY", "hf-test")
    .env("PORTFOLIO_URL", "https://octo.dev")
    .env("DDP_TEST_REPOS_JSON", test_support::read_fixture_text("repos.json"))
    .env("DDP_TEST_EVENTS_JSON", test_support::read_fixture_text("events.json"))
    .env("DDP_TEST_COMMITS_JSON", test_support::read_fixture_text("commits.json"))
    .args(["--now-override", NOW]);
  cmd
}
