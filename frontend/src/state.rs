use chrono::Utc;
use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::utils::{
  api::ApiClient,
  placeholders::DemoRoster,
  server::AppError,
  session::{identify, reconcile, Identity, OAuthCallback, PostAuthPrompt, SessionEvent, SessionState, reduce},
  traders::{merge_and_rank, NoPlaceholders, PlaceholderSupply, TraderRecord},
};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
  Loading,
  Ready,
  /// The last fetch failed; whatever list was already loaded stays on screen.
  Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
  Success,
  Error,
  Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
  pub id: Uuid,
  pub kind: ToastKind,
  pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
  /// Link now or join without linking.
  PostAuth,
  LinkAccount,
  /// Token-based add for the legacy code flow.
  AddTrader,
  Reauth,
}

/// Shared, app-wide signals provided by the layout.
#[derive(Clone, Copy)]
pub struct AppState {
  pub traders: Signal<Vec<TraderRecord>>,
  pub load: Signal<LoadState>,
  pub session: Signal<SessionState>,
  /// Bearer token from the legacy code exchange, memory only.
  pub auth_token: Signal<Option<String>>,
  pub toasts: Signal<Vec<Toast>>,
  pub modal: Signal<Option<ModalKind>>,
}

impl AppState {
  pub fn new() -> Self {
    Self {
      traders: Signal::new(vec![]),
      load: Signal::new(LoadState::Loading),
      session: Signal::new(SessionState::Anonymous),
      auth_token: Signal::new(None),
      toasts: Signal::new(vec![]),
      modal: Signal::new(None),
    }
  }

  pub fn toast(&mut self, kind: ToastKind, message: impl Into<String>) {
    self.toasts.write().push(Toast { id: Uuid::new_v4(), kind, message: message.into() });
  }

  pub fn error_toast(&mut self, err: &AppError) {
    self.toast(ToastKind::Error, err.user_message());
  }

  pub fn dismiss(&mut self, id: Uuid) {
    self.toasts.write().retain(|t| t.id != id);
  }

  pub fn apply(&mut self, event: SessionEvent) {
    let current = self.session.peek().clone();
    self.session.set(reduce(current, event));
  }

  /// Handles any OAuth redirect parameters, then resolves the session.
  pub async fn bootstrap_session(mut self, api: ApiClient) {
    let callback = current_href().as_deref().and_then(OAuthCallback::parse);
    if matches!(callback, Some(OAuthCallback::Success { .. }) | Some(OAuthCallback::LegacyCode { .. })) {
      strip_query_string();
    }
    self.apply(SessionEvent::CheckStarted);

    let resolved = match &callback {
      Some(OAuthCallback::Error { message }) => {
        self.toast(ToastKind::Error, format!("Authentication failed: {}", message));
        reconcile(&api).await
      }
      Some(OAuthCallback::LegacyCode { code, username }) => match api.exchange_code(code).await {
        Ok(token) => {
          self.auth_token.set(Some(token));
          identify(&api, Identity::new(username)).await
        }
        Err(e) => {
          self.error_toast(&e);
          reconcile(&api).await
        }
      },
      Some(OAuthCallback::Success { .. }) | None => reconcile(&api).await,
    };
    self.session.set(resolved.clone());

    let signed_in_now = matches!(callback, Some(OAuthCallback::Success { .. }) | Some(OAuthCallback::LegacyCode { .. }));
    if !signed_in_now {
      return;
    }
    let legacy = self.auth_token.peek().is_some();
    match resolved.post_auth_prompt() {
      Some(PostAuthPrompt::Reauth) => self.modal.set(Some(ModalKind::Reauth)),
      Some(PostAuthPrompt::Welcome { username }) => self.toast(ToastKind::Success, format!("Welcome back, @{}!", username)),
      Some(PostAuthPrompt::ChooseLinkOrJoin) if legacy => self.modal.set(Some(ModalKind::AddTrader)),
      Some(PostAuthPrompt::ChooseLinkOrJoin) => self.modal.set(Some(ModalKind::PostAuth)),
      Some(PostAuthPrompt::LinkAccount) => self.modal.set(Some(ModalKind::LinkAccount)),
      None => {}
    }
  }

  pub async fn logout(mut self, api: ApiClient) {
    if let Err(e) = api.logout().await {
      self.error_toast(&e);
      return;
    }
    self.auth_token.set(None);
    self.modal.set(None);
    self.apply(SessionEvent::LoggedOut);
    self.toast(ToastKind::Info, "Signed out");
  }
}

/// Messages for the layout-owned leaderboard loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardCommand {
  /// Fetch again, dropping any fetch still in flight.
  Refresh,
}

/// One fetch + merge; on failure the current list stays, or the placeholders take over.
pub async fn load_traders(mut state: AppState, api: ApiClient, config: AppConfig) {
  state.load.set(LoadState::Loading);
  let supply: Box<dyn PlaceholderSupply> = if config.demo_traders { Box::new(DemoRoster) } else { Box::new(NoPlaceholders) };
  let now = Utc::now();

  match api.traders().await {
    Ok(real) => {
      let merged = merge_and_rank(real, supply.as_ref(), now);
      info!("leaderboard loaded with {} rows", merged.len());
      state.traders.set(merged);
      state.load.set(LoadState::Ready);
    }
    Err(e) => {
      error!("failed to load leaderboard: {}", e);
      if state.traders.peek().is_empty() {
        let fallback = merge_and_rank(vec![], supply.as_ref(), now);
        if !fallback.is_empty() {
          state.traders.set(fallback);
        }
      }
      state.load.set(LoadState::Failed(e.user_message()));
    }
  }
}

/// Full page load, used for the OAuth entry point.
pub fn navigate_external(url: &str) {
  let Some(window) = web_sys::window() else { return };
  if let Err(e) = window.location().set_href(url) {
    error!("navigation to {} failed: {:?}", url, e);
  }
}

fn current_href() -> Option<String> {
  web_sys::window().and_then(|w| w.location().href().ok())
}

fn strip_query_string() {
  let Some(window) = web_sys::window() else { return };
  let path = window.location().pathname().unwrap_or_else(|_| "/".to_string());
  if let Ok(history) = window.history() {
    if let Err(e) = history.replace_state_with_url(&web_sys::wasm_bindgen::JsValue::NULL, "", Some(&path)) {
      error!("could not clear callback parameters: {:?}", e);
    }
  }
}
