//! Build-time settings exported by `build.rs`.

pub const API_URL: &str = env!("PIPS_API_URL");
pub const SITE_URL: &str = env!("PIPS_SITE_URL");
const DEMO_TRADERS: &str = env!("PIPS_DEMO_TRADERS");

/// Rows shown before the first "load more" and added on each one.
pub const PAGE_SIZE: usize = 25;
/// Distance from the bottom of the page (px) that triggers the next page.
pub const SCROLL_THRESHOLD_PX: u32 = 500;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
  pub api_url: String,
  pub site_url: String,
  pub demo_traders: bool,
  pub page_size: usize,
}

impl AppConfig {
  pub fn from_build_env() -> Self {
    Self {
      api_url: API_URL.to_string(),
      site_url: SITE_URL.to_string(),
      demo_traders: parse_flag(DEMO_TRADERS),
      page_size: PAGE_SIZE,
    }
  }

  pub fn profile_share_url(&self, handle: &str) -> String {
    format!("{}/profile/{}", self.site_url, handle)
  }
}

fn parse_flag(raw: &str) -> bool {
  matches!(raw.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn demo_flag_accepts_common_truthy_spellings() {
    assert!(parse_flag("true"));
    assert!(parse_flag(" TRUE "));
    assert!(parse_flag("1"));
    assert!(parse_flag("on"));
    assert!(!parse_flag("false"));
    assert!(!parse_flag(""));
    assert!(!parse_flag("maybe"));
  }

  #[test]
  fn share_url_points_at_profile_route() {
    let config = AppConfig {
      api_url: "http://localhost:3001".to_string(),
      site_url: "https://proofofpips.com".to_string(),
      demo_traders: false,
      page_size: PAGE_SIZE,
    };
    assert_eq!(config.profile_share_url("scalp_king"), "https://proofofpips.com/profile/scalp_king");
  }
}
