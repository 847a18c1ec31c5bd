// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Typed errors raised by the pure pipeline core and by response-shape extraction
// role: errors
// outputs: PipelineError variants; converted into anyhow::Error at the orchestration layer
// invariants: "nothing to post" is never an error; it is an Outcome
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
  #[error("invalid argument: {0}")]
  InvalidArgument(String),

  #[error("unexpected response shape: {0}")]
  UnexpectedResponseShape(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
