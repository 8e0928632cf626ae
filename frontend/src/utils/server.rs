use std::fmt;
use serde::{Deserialize, Serialize};

use super::traders::{ConnectionType, TraderRecord};

/* Server Requests */
#[derive(Debug, Serialize)]
pub struct ExchangeRequest {
  pub code: String
}

/// Platform credentials for linking; the tag doubles as the backend's `connectionType`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "connectionType", rename_all = "lowercase")]
pub enum LinkCredentials {
  Tradovate {
    #[serde(rename = "tradovateUsername")]
    username: String,
    #[serde(rename = "tradovatePassword")]
    password: String,
    #[serde(rename = "tradovateClientId")]
    client_id: String,
    #[serde(rename = "tradovateSecretKey")]
    secret_key: String
  },
  TradeSyncer {
    #[serde(rename = "tradeSyncerApiKey")]
    api_key: String
  }
}

impl LinkCredentials {
  /// Reads the submitted form fields for the chosen platform.
  /// The error names the first required field that is blank.
  pub fn from_form(connection: ConnectionType, field: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
    let required = |name: &str, label: &str| {
      field(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty()).ok_or_else(|| format!("{} is required", label))
    };
    let optional = |name: &str| field(name).map(|v| v.trim().to_string()).unwrap_or_default();

    match connection {
      ConnectionType::Tradovate => Ok(Self::Tradovate {
        username: required("tradovateUsername", "Tradovate username")?,
        password: required("tradovatePassword", "Tradovate password")?,
        client_id: optional("tradovateClientId"),
        secret_key: optional("tradovateSecretKey"),
      }),
      ConnectionType::TradeSyncer => Ok(Self::TradeSyncer {
        api_key: required("tradeSyncerApiKey", "TradeSyncer API key")?,
      }),
      ConnectionType::None => Err("Choose a connection method".to_string()),
    }
  }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRequest {
  pub prop_firm: String,
  #[serde(flatten)]
  pub credentials: LinkCredentials
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTraderRequest {
  pub twitter_username: String,
  pub auth_token: String,
  pub prop_firm: String,
  #[serde(flatten)]
  pub credentials: LinkCredentials
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReauthRequest {
  pub twitter_username: String,
  /// Only the legacy code flow has a token; cookie sessions omit it.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub auth_token: Option<String>,
  pub tradovate_password: String
}

/* Server Responses */
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
  #[serde(default)]
  pub authenticated: bool,
  pub twitter_username: Option<String>,
  #[serde(default, deserialize_with = "super::traders::opt_string_or_number")]
  pub twitter_id: Option<String>
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeResponse {
  pub auth_token: String
}

#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
  pub trader: Option<TraderRecord>
}

/// Shape of every non-2xx body the backend sends.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
  pub error: Option<String>,
  pub message: Option<String>
}

impl ErrorBody {
  pub fn into_message(self) -> Option<String> {
    self.error.or(self.message).filter(|m| !m.trim().is_empty())
  }
}

// App Errors
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
  Network(String),
  Backend(String),
  NotFound(String),
  AuthFailed(String),
  SerializeError(String),
  DeserializeError(String),
}

impl AppError {
  /// Text for a toast; backend messages are passed through untouched.
  pub fn user_message(&self) -> String {
    match self {
      AppError::Network(_) => "Network error. Please try again.".to_string(),
      AppError::Backend(msg) => msg.clone(),
      AppError::NotFound(msg) => msg.clone(),
      AppError::AuthFailed(msg) => format!("Authentication failed: {}", msg),
      AppError::SerializeError(_) | AppError::DeserializeError(_) => "Something went wrong. Please try again.".to_string(),
    }
  }
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AppError::Network(msg) => write!(f, "Network error: {}", msg),
      AppError::Backend(msg) => write!(f, "Backend error: {}", msg),
      AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
      AppError::AuthFailed(msg) => write!(f, "Authentication failed: {}", msg),
      AppError::SerializeError(msg) => write!(f, "Serialize error: {}", msg),
      AppError::DeserializeError(msg) => write!(f, "Deserialize error: {}", msg),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn link_request_flattens_tradovate_credentials() {
    let req = LinkRequest {
      prop_firm: "apex".to_string(),
      credentials: LinkCredentials::Tradovate {
        username: "jen".to_string(),
        password: "hunter2".to_string(),
        client_id: String::new(),
        secret_key: "sk".to_string()
      }
    };
    let body = serde_json::to_value(&req).unwrap();
    assert_eq!(body, json!({
      "propFirm": "apex",
      "connectionType": "tradovate",
      "tradovateUsername": "jen",
      "tradovatePassword": "hunter2",
      "tradovateClientId": "",
      "tradovateSecretKey": "sk"
    }));
  }

  #[test]
  fn add_request_carries_token_and_tradesyncer_key() {
    let req = AddTraderRequest {
      twitter_username: "bullishbritt".to_string(),
      auth_token: "tok".to_string(),
      prop_firm: "topstep".to_string(),
      credentials: LinkCredentials::TradeSyncer { api_key: "abc".to_string() }
    };
    let body = serde_json::to_value(&req).unwrap();
    assert_eq!(body["connectionType"], "tradesyncer");
    assert_eq!(body["tradeSyncerApiKey"], "abc");
    assert_eq!(body["authToken"], "tok");
    assert_eq!(body["twitterUsername"], "bullishbritt");
  }

  #[test]
  fn reauth_sends_token_only_when_one_exists() {
    let cookie = ReauthRequest {
      twitter_username: "jen".to_string(),
      auth_token: None,
      tradovate_password: "pw".to_string()
    };
    assert_eq!(serde_json::to_value(&cookie).unwrap(), json!({
      "twitterUsername": "jen",
      "tradovatePassword": "pw"
    }));

    let legacy = ReauthRequest { auth_token: Some("tok".to_string()), ..cookie };
    assert_eq!(serde_json::to_value(&legacy).unwrap()["authToken"], "tok");
  }

  #[test]
  fn form_fields_become_credentials() {
    let form = |name: &str| match name {
      "tradovateUsername" => Some(" jen ".to_string()),
      "tradovatePassword" => Some("pw".to_string()),
      _ => None,
    };
    assert_eq!(
      LinkCredentials::from_form(ConnectionType::Tradovate, form),
      Ok(LinkCredentials::Tradovate { username: "jen".to_string(), password: "pw".to_string(), client_id: String::new(), secret_key: String::new() })
    );
    assert_eq!(
      LinkCredentials::from_form(ConnectionType::TradeSyncer, |_| Some("  ".to_string())),
      Err("TradeSyncer API key is required".to_string())
    );
    assert!(LinkCredentials::from_form(ConnectionType::None, |_| None).is_err());
  }

  #[test]
  fn me_response_accepts_numeric_twitter_id() {
    let me: MeResponse = serde_json::from_value(json!({
      "authenticated": true,
      "twitterUsername": "scalp_king",
      "twitterId": 1234567
    })).unwrap();
    assert!(me.authenticated);
    assert_eq!(me.twitter_id.as_deref(), Some("1234567"));
  }

  #[test]
  fn error_body_prefers_error_field_and_skips_blank() {
    let body: ErrorBody = serde_json::from_value(json!({"error": "Already registered", "message": "x"})).unwrap();
    assert_eq!(body.into_message().as_deref(), Some("Already registered"));
    let blank: ErrorBody = serde_json::from_value(json!({"error": "  "})).unwrap();
    assert_eq!(blank.into_message(), None);
  }

  #[test]
  fn backend_messages_are_shown_verbatim() {
    let err = AppError::Backend("Already registered".to_string());
    assert_eq!(err.user_message(), "Already registered");
    assert_eq!(err.to_string(), "Backend error: Already registered");
  }
}
