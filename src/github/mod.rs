// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Namespace for the GitHub activity source (REST backends and payload interpretation)
// role: github/namespace
// outputs: Public submodules `api` and `source`
// invariants: All GitHub IO goes through the GithubApi trait
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

pub mod api;
pub mod source;
