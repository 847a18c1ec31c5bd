use test_support::cmd_bin;

#[test]
fn gen_man_outputs_troff() {
  let out = cmd_bin("daily-dev-post").arg("--gen-man").output().unwrap();
  assert!(out.status.success());
  let s = String::from_utf8_lossy(&out.stdout);
  assert!(s.contains(".TH"));
  assert!(s.contains("LinkedIn"));
}
