use dioxus::logger::tracing::{debug, error};
use reqwest::{RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::server::{AddTraderRequest, AppError, ErrorBody, ExchangeRequest, ExchangeResponse, LinkRequest, MeResponse, ReauthRequest, RegisterResponse};
use super::session::SessionApi;
use super::traders::TraderRecord;

/// The leaderboard endpoint has answered both as a bare array and wrapped.
#[derive(Deserialize)]
#[serde(untagged)]
enum TradersPayload {
  List(Vec<TraderRecord>),
  Wrapped { traders: Vec<TraderRecord> },
}

impl TradersPayload {
  fn into_vec(self) -> Vec<TraderRecord> {
    match self {
      Self::List(list) | Self::Wrapped { traders: list } => list,
    }
  }
}

#[derive(Clone)]
pub struct ApiClient {
  client: reqwest::Client,
  base_url: String,
}

impl ApiClient {
  pub fn new(base_url: &str) -> Self {
    Self { client: reqwest::Client::new(), base_url: base_url.trim_end_matches('/').to_string() }
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.base_url, path)
  }

  /// `path` followed by one percent-encoded segment, e.g. a handle taken from the address bar.
  fn url_with_segment(&self, path: &str, segment: &str) -> Result<Url, AppError> {
    let mut url = Url::parse(&self.url(path)).map_err(|e| AppError::Network(format!("invalid url {}: {}", path, e)))?;
    url.path_segments_mut()
      .map_err(|_| AppError::Network(format!("cannot append to {}", path)))?
      .push(segment);
    Ok(url)
  }

  /// Full-page navigation target that starts the Twitter OAuth dance.
  pub fn login_url(&self) -> String {
    self.url("/api/auth/twitter/login")
  }

  pub async fn traders(&self) -> Result<Vec<TraderRecord>, AppError> {
    let resp = self.client.get(self.url("/api/traders")).send().await.map_err(network)?;
    let payload = decode::<TradersPayload>(resp).await?;
    let traders = payload.into_vec();
    debug!("fetched {} traders", traders.len());
    Ok(traders)
  }

  pub async fn trader_profile(&self, username: &str) -> Result<Option<TraderRecord>, AppError> {
    let resp = self.client.get(self.url_with_segment("/api/traders", username)?).send().await.map_err(network)?;
    if resp.status() == StatusCode::NOT_FOUND {
      return Ok(None);
    }
    decode::<TraderRecord>(resp).await.map(Some)
  }

  pub async fn me(&self) -> Result<MeResponse, AppError> {
    let resp = with_session(self.client.get(self.url("/api/auth/me"))).send().await.map_err(network)?;
    if resp.status() == StatusCode::UNAUTHORIZED {
      return Ok(MeResponse::default());
    }
    decode(resp).await
  }

  /// Legacy flow: trades the one-time OAuth code for a bearer token.
  pub async fn exchange_code(&self, code: &str) -> Result<String, AppError> {
    let body = ExchangeRequest { code: code.to_string() };
    let resp = self.client.post(self.url("/api/auth/exchange")).json(&body).send().await.map_err(network)?;
    let exchanged = decode::<ExchangeResponse>(resp).await.map_err(|e| match e {
      AppError::Backend(msg) => AppError::AuthFailed(msg),
      other => other,
    })?;
    Ok(exchanged.auth_token)
  }

  pub async fn logout(&self) -> Result<(), AppError> {
    let resp = with_session(self.client.post(self.url("/api/auth/logout"))).send().await.map_err(network)?;
    expect_success(resp).await
  }

  /// Creates an unlinked profile for the signed-in user.
  pub async fn register(&self) -> Result<Option<TraderRecord>, AppError> {
    let resp = with_session(self.client.post(self.url("/api/traders/register"))).send().await.map_err(network)?;
    let registered = decode::<RegisterResponse>(resp).await?;
    Ok(registered.trader)
  }

  pub async fn add_trader(&self, req: &AddTraderRequest) -> Result<(), AppError> {
    let resp = self.client.post(self.url("/api/traders/add")).json(req).send().await.map_err(network)?;
    expect_success(resp).await
  }

  pub async fn link_account(&self, req: &LinkRequest) -> Result<(), AppError> {
    let resp = with_session(self.client.post(self.url("/api/traders/link"))).json(req).send().await.map_err(network)?;
    expect_success(resp).await
  }

  pub async fn reauth(&self, req: &ReauthRequest) -> Result<(), AppError> {
    let resp = with_session(self.client.post(self.url("/api/traders/reauth"))).json(req).send().await.map_err(network)?;
    expect_success(resp).await
  }

  pub async fn sync_trader(&self, username: &str) -> Result<(), AppError> {
    let resp = self.client.post(self.url_with_segment("/api/sync/trader", username)?).send().await.map_err(network)?;
    expect_success(resp).await
  }
}

impl SessionApi for ApiClient {
  async fn me(&self) -> Result<MeResponse, AppError> {
    ApiClient::me(self).await
  }

  async fn trader(&self, username: &str) -> Result<Option<TraderRecord>, AppError> {
    self.trader_profile(username).await
  }
}

// the session cookie only travels with fetch credentials on the web target
fn with_session(req: RequestBuilder) -> RequestBuilder {
  #[cfg(target_arch = "wasm32")]
  {
    req.fetch_credentials_include()
  }
  #[cfg(not(target_arch = "wasm32"))]
  {
    req
  }
}

fn network(e: reqwest::Error) -> AppError {
  error!("request failed: {}", e);
  AppError::Network(e.to_string())
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, AppError> {
  let resp = ensure_ok(resp).await?;
  resp.json::<T>().await.map_err(|e| AppError::DeserializeError(e.to_string()))
}

async fn expect_success(resp: Response) -> Result<(), AppError> {
  ensure_ok(resp).await.map(|_| ())
}

async fn ensure_ok(resp: Response) -> Result<Response, AppError> {
  let status = resp.status();
  if status.is_success() {
    return Ok(resp);
  }
  let body = resp.json::<ErrorBody>().await.unwrap_or_default();
  Err(status_error(status, body))
}

fn status_error(status: StatusCode, body: ErrorBody) -> AppError {
  let message = body.into_message().unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
  match status {
    StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::AuthFailed(message),
    StatusCode::NOT_FOUND => AppError::NotFound(message),
    _ => AppError::Backend(message),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn urls_are_joined_without_double_slashes() {
    let api = ApiClient::new("https://api.example.com/");
    assert_eq!(api.login_url(), "https://api.example.com/api/auth/twitter/login");
    assert_eq!(api.url("/api/traders"), "https://api.example.com/api/traders");
  }

  #[test]
  fn backend_validation_message_survives_untouched() {
    let body = ErrorBody { error: Some("Invalid Tradovate credentials".to_string()), message: None };
    let err = status_error(StatusCode::BAD_REQUEST, body);
    assert_eq!(err, AppError::Backend("Invalid Tradovate credentials".to_string()));
    assert_eq!(err.user_message(), "Invalid Tradovate credentials");
  }

  #[test]
  fn missing_resource_message_is_not_reworded() {
    let body = ErrorBody { error: Some("Trader not found".to_string()), message: None };
    let err = status_error(StatusCode::NOT_FOUND, body);
    assert_eq!(err, AppError::NotFound("Trader not found".to_string()));
    assert_eq!(err.user_message(), "Trader not found");
  }

  #[test]
  fn handles_are_encoded_as_a_single_path_segment() {
    let api = ApiClient::new("https://api.example.com");
    let url = api.url_with_segment("/api/traders", "a/b c").unwrap();
    assert_eq!(url.as_str(), "https://api.example.com/api/traders/a%2Fb%20c");
    let sync = api.url_with_segment("/api/sync/trader", "scalp_king").unwrap();
    assert_eq!(sync.as_str(), "https://api.example.com/api/sync/trader/scalp_king");
  }

  #[test]
  fn status_decides_variant_when_body_is_empty() {
    assert_eq!(status_error(StatusCode::UNAUTHORIZED, ErrorBody::default()), AppError::AuthFailed("Request failed with status 401".to_string()));
    assert!(matches!(status_error(StatusCode::BAD_GATEWAY, ErrorBody::default()), AppError::Backend(_)));
  }

  #[test]
  fn trader_list_accepts_both_payload_shapes() {
    let bare: TradersPayload = serde_json::from_value(json!([{"twitter": "a"}, {"twitter": "b"}])).unwrap();
    assert_eq!(bare.into_vec().len(), 2);
    let wrapped: TradersPayload = serde_json::from_value(json!({"traders": [{"twitter": "a"}]})).unwrap();
    assert_eq!(wrapped.into_vec()[0].twitter_handle, "a");
  }
}
