use dotenvy::dotenv;

const DEFAULT_API_URL: &str = "https://proof-of-pips-backend-production.up.railway.app";
const DEFAULT_SITE_URL: &str = "https://proofofpips.com";

fn main() {
  // Tell Cargo that if the env file changes, to rerun this build script.
  println!("cargo::rerun-if-changed=.env");
  println!("cargo::rerun-if-env-changed=PIPS_API_URL");
  println!("cargo::rerun-if-env-changed=PIPS_SITE_URL");
  println!("cargo::rerun-if-env-changed=PIPS_DEMO_TRADERS");

  // a missing .env is fine, every key has a default
  let _ = dotenv();

  let api_url = std::env::var("PIPS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
  println!("cargo::rustc-env=PIPS_API_URL={}", api_url.trim_end_matches('/'));

  let site_url = std::env::var("PIPS_SITE_URL").unwrap_or_else(|_| DEFAULT_SITE_URL.to_string());
  println!("cargo::rustc-env=PIPS_SITE_URL={}", site_url.trim_end_matches('/'));

  let demo_traders = std::env::var("PIPS_DEMO_TRADERS").unwrap_or_else(|_| "false".to_string());
  println!("cargo::rustc-env=PIPS_DEMO_TRADERS={}", demo_traders);
}
