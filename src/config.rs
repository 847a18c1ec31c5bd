// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Credentials and identity settings read once from the environment (after optional .env loading)
// role: configuration
// inputs: GITHUB_TOKEN/GH_TOKEN/gh CLI, HUB_USER/GITHUB_USER, LINKEDIN_ACCESS_TOKEN, LINKEDIN_AUTHOR_URN, HUGGINGFACE_API_KEY, PORTFOLIO_URL
// outputs: Config passed explicitly to adapters; never read by the pure core
// invariants:
// - requirements depend on mode: LinkedIn only when publishing, Hugging Face only when summarizing
// - every missing variable is reported in one error
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::{bail, Result};

use crate::github::api::get_github_token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirements {
  pub publish: bool,
  pub summarize: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
  pub github_token: String,
  pub hub_user: String,
  pub linkedin_token: Option<String>,
  pub linkedin_author: Option<String>,
  pub hf_api_key: Option<String>,
  pub portfolio_url: Option<String>,
}

fn env_non_empty(key: &str) -> Option<String> {
  std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
  pub fn from_env(req: Requirements) -> Result<Self> {
    let github_token = get_github_token();
    let hub_user = env_non_empty("HUB_USER").or_else(|| env_non_empty("GITHUB_USER"));
    let linkedin_token = env_non_empty("LINKEDIN_ACCESS_TOKEN");
    let linkedin_author = env_non_empty("LINKEDIN_AUTHOR_URN");
    let hf_api_key = env_non_empty("HUGGINGFACE_API_KEY");

    let mut missing: Vec<&str> = Vec::new();
    if github_token.is_none() {
      missing.push("GITHUB_TOKEN");
    }
    if hub_user.is_none() {
      missing.push("HUB_USER");
    }
    if req.publish && linkedin_token.is_none() {
      missing.push("LINKEDIN_ACCESS_TOKEN");
    }
    if req.publish && linkedin_author.is_none() {
      missing.push("LINKEDIN_AUTHOR_URN");
    }
    if req.summarize && hf_api_key.is_none() {
      missing.push("HUGGINGFACE_API_KEY");
    }

    let (Some(github_token), Some(hub_user)) = (github_token, hub_user) else {
      bail!("Missing env variables: {}", missing.join(", "));
    };
    if !missing.is_empty() {
      bail!("Missing env variables: {}", missing.join(", "));
    }

    Ok(Self {
      github_token,
      hub_user,
      linkedin_token,
      linkedin_author,
      hf_api_key,
      portfolio_url: env_non_empty("PORTFOLIO_URL"),
    })
  }
}
