// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Publish the assembled post as a LinkedIn UGC share
// role: publishing/client
// inputs: Post text; LINKEDIN_ACCESS_TOKEN and LINKEDIN_AUTHOR_URN via Config
// outputs: HTTP status of the share request
// side_effects: POST to api.linkedin.com
// invariants: Share is PUBLISHED, PUBLIC, text-only (shareMediaCategory NONE)
// errors: Transport failures propagate; status is returned, not interpreted
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::{Context, Result};
use tracing::info;

const UGC_POSTS_URL: &str = "https://api.linkedin.com/v2/ugcPosts";

pub trait Publisher: Send + Sync {
  fn publish(&self, text: &str) -> Result<u16>;
}

pub fn share_body(author: &str, text: &str) -> serde_json::Value {
  serde_json::json!({
    "author": author,
    "lifecycleState": "PUBLISHED",
    "specificContent": {
      "com.linkedin.ugc.ShareContent": {
        "shareCommentary": { "text": text },
        "shareMediaCategory": "NONE",
      },
    },
    "visibility": { "com.linkedin.ugc.MemberNetworkVisibility": "PUBLIC" },
  })
}

pub struct LinkedInPublisher {
  agent: ureq::Agent,
  token: String,
  author: String,
}

impl LinkedInPublisher {
  pub fn new(token: String, author: String) -> Self {
    let agent: ureq::Agent = ureq::Agent::config_builder().http_status_as_error(false).build().into();
    Self { agent, token, author }
  }
}

impl Publisher for LinkedInPublisher {
  fn publish(&self, text: &str) -> Result<u16> {
    let resp = self
      .agent
      .post(UGC_POSTS_URL)
      .header("Authorization", &format!("Bearer {}", self.token))
      .header("X-Restli-Protocol-Version", "2.0.0")
      .header("Content-Type", "application/json")
      .send_json(share_body(&self.author, text))
      .with_context(|| format!("POST {}", UGC_POSTS_URL))?;

    let status = resp.status().as_u16();
    info!(status, "LinkedIn share submitted");

    Ok(status)
  }
}
