use predicates::prelude::*;

use crate::common::fixture_cmd;

#[test]
fn ai_dry_run_uses_generated_text_and_automation_footer() {
  let reply: serde_json::Value = test_support::read_fixture_json("summary_chat.json");
  let text = reply["choices"][0]["message"]["content"].as_str().unwrap().to_string();

  let out = fixture_cmd()
    .env("DDP_TEST_SUMMARY_JSON", reply.to_string())
    .arg("--dry-run")
    .output()
    .unwrap();
  assert!(out.status.success(), "cli run failed: {}", String::from_utf8_lossy(&out.stderr));

  let stdout = String::from_utf8_lossy(&out.stdout);
  assert!(stdout.contains(&format!("{}\n\n📝 ", text)), "stdout was:\n{}", stdout);
  assert!(stdout.contains("🔗 My GitHub: https://github.com/octo\n🔗 My Portfolio: https://octo.dev"));
  assert!(!stdout.contains("Today's progress"));
}

#[test]
fn unexpected_summary_shape_fails_the_run() {
  fixture_cmd()
    .env("DDP_TEST_SUMMARY_JSON", test_support::read_fixture_text("summary_unexpected.json"))
    .arg("--dry-run")
    .assert()
    .failure()
    .stderr(predicate::str::contains("unexpected response shape"))
    .stdout(predicate::str::contains("DRY RUN").not());
}
