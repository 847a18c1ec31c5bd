// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Small process-level helpers (effective "now", logging setup, man page rendering)
// role: utilities/helpers
// inputs: Optional now override; verbosity flag; clap CommandFactory
// outputs: Reference instant, initialized tracing subscriber, man page text
// side_effects: init_logging installs the global tracing subscriber (first call wins)
// invariants: logs go to stderr so stdout carries only the post in dry-run mode
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::{DateTime, Utc};
use clap::CommandFactory;
use tracing_subscriber::{fmt, EnvFilter};

/// Returns the effective "now" given an optional override.
///
/// When `override_now` is `Some`, that instant is returned; otherwise
/// the current UTC time is used.
pub fn effective_now(override_now: Option<DateTime<Utc>>) -> DateTime<Utc> {
  override_now.unwrap_or_else(Utc::now)
}

/// Install the global subscriber, honoring `RUST_LOG` when set.
pub fn init_logging(verbose: bool) {
  let level = if verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("warn,daily_dev_post={level}")));

  let _ = fmt()
    .with_env_filter(filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .try_init();
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> anyhow::Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}
