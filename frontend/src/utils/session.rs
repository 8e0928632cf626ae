use dioxus::logger::tracing::{info, warn};
use reqwest::Url;

use super::server::{AppError, MeResponse};
use super::traders::TraderRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
  pub twitter_username: String,
  pub twitter_id: Option<String>,
}

impl Identity {
  pub fn new(twitter_username: &str) -> Self {
    Self { twitter_username: twitter_username.to_string(), twitter_id: None }
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
  #[default]
  Anonymous,
  Checking,
  Unregistered { identity: Identity },
  RegisteredUnlinked { identity: Identity },
  Linked { identity: Identity, needs_reauth: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
  CheckStarted,
  NotAuthenticated,
  /// Identity confirmed; `profile` is the trader row if one exists.
  Identified { identity: Identity, profile: Option<TraderRecord> },
  Registered,
  Linked,
  Reauthenticated,
  LoggedOut,
}

/// Flattened view for components that only need flags.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUser {
  pub twitter_username: String,
  pub twitter_id: Option<String>,
  pub is_registered: bool,
  pub is_linked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallToAction {
  Join,
  CompleteSignup,
  LinkAccount,
}

impl CallToAction {
  pub fn label(&self) -> &'static str {
    match self {
      Self::Join => "Join Leaderboard",
      Self::CompleteSignup => "Complete Signup",
      Self::LinkAccount => "Link Account",
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PostAuthPrompt {
  Reauth,
  Welcome { username: String },
  ChooseLinkOrJoin,
  LinkAccount,
}

impl SessionState {
  pub fn identity(&self) -> Option<&Identity> {
    match self {
      Self::Anonymous | Self::Checking => None,
      Self::Unregistered { identity } | Self::RegisteredUnlinked { identity } | Self::Linked { identity, .. } => Some(identity),
    }
  }

  pub fn user(&self) -> Option<SessionUser> {
    let identity = self.identity()?;
    Some(SessionUser {
      twitter_username: identity.twitter_username.clone(),
      twitter_id: identity.twitter_id.clone(),
      is_registered: matches!(self, Self::RegisteredUnlinked { .. } | Self::Linked { .. }),
      is_linked: matches!(self, Self::Linked { .. }),
    })
  }

  pub fn call_to_action(&self) -> Option<CallToAction> {
    match self {
      Self::Anonymous => Some(CallToAction::Join),
      Self::Unregistered { .. } => Some(CallToAction::CompleteSignup),
      Self::RegisteredUnlinked { .. } => Some(CallToAction::LinkAccount),
      Self::Checking | Self::Linked { .. } => None,
    }
  }

  pub fn needs_reauth(&self) -> bool {
    matches!(self, Self::Linked { needs_reauth: true, .. })
  }

  /// Which modal or toast follows a completed sign-in.
  pub fn post_auth_prompt(&self) -> Option<PostAuthPrompt> {
    match self {
      Self::Linked { needs_reauth: true, .. } => Some(PostAuthPrompt::Reauth),
      Self::Linked { identity, .. } => Some(PostAuthPrompt::Welcome { username: identity.twitter_username.clone() }),
      Self::Unregistered { .. } => Some(PostAuthPrompt::ChooseLinkOrJoin),
      Self::RegisteredUnlinked { .. } => Some(PostAuthPrompt::LinkAccount),
      Self::Anonymous | Self::Checking => None,
    }
  }
}

pub fn reduce(state: SessionState, event: SessionEvent) -> SessionState {
  use SessionState as S;
  match (state, event) {
    (_, SessionEvent::LoggedOut) | (_, SessionEvent::NotAuthenticated) => S::Anonymous,
    (_, SessionEvent::CheckStarted) => S::Checking,
    (_, SessionEvent::Identified { identity, profile }) => match profile {
      None => S::Unregistered { identity },
      Some(trader) if trader.is_unlinked() => S::RegisteredUnlinked { identity },
      Some(trader) => S::Linked { identity, needs_reauth: trader.needs_reauth() },
    },
    (S::Unregistered { identity }, SessionEvent::Registered) => S::RegisteredUnlinked { identity },
    (S::Unregistered { identity }, SessionEvent::Linked) | (S::RegisteredUnlinked { identity }, SessionEvent::Linked) => {
      S::Linked { identity, needs_reauth: false }
    }
    (S::Linked { identity, .. }, SessionEvent::Reauthenticated) => S::Linked { identity, needs_reauth: false },
    (state, event) => {
      warn!("ignoring session event {:?} in state {:?}", event, state);
      state
    }
  }
}

/// The two backend calls the reconciler needs.
#[allow(async_fn_in_trait)]
pub trait SessionApi {
  async fn me(&self) -> Result<MeResponse, AppError>;
  /// `Ok(None)` when the backend answers 404.
  async fn trader(&self, username: &str) -> Result<Option<TraderRecord>, AppError>;
}

/// `/api/auth/me` then `/api/traders/{username}`; never fails, only degrades.
pub async fn reconcile<A: SessionApi>(api: &A) -> SessionState {
  let me = match api.me().await {
    Ok(me) => me,
    Err(e) => {
      warn!("session check failed, treating visitor as anonymous: {}", e);
      return reduce(SessionState::Checking, SessionEvent::NotAuthenticated);
    }
  };

  let username = match me.twitter_username.filter(|u| me.authenticated && !u.is_empty()) {
    Some(u) => u,
    None => return reduce(SessionState::Checking, SessionEvent::NotAuthenticated),
  };
  identify(api, Identity { twitter_username: username, twitter_id: me.twitter_id }).await
}

/// Profile lookup for an already known identity.
pub async fn identify<A: SessionApi>(api: &A, identity: Identity) -> SessionState {
  let profile = match api.trader(&identity.twitter_username).await {
    Ok(profile) => profile,
    Err(e) => {
      warn!("profile lookup for @{} failed: {}", identity.twitter_username, e);
      None
    }
  };
  info!("session resolved for @{} (registered: {})", identity.twitter_username, profile.is_some());
  reduce(SessionState::Checking, SessionEvent::Identified { identity, profile })
}

/// What the OAuth redirect left in the query string.
#[derive(Debug, Clone, PartialEq)]
pub enum OAuthCallback {
  Error { message: String },
  Success { username: String },
  LegacyCode { code: String, username: String },
}

impl OAuthCallback {
  /// `None` when the URL carries no callback parameters.
  pub fn parse(href: &str) -> Option<Self> {
    let url = Url::parse(href).ok()?;
    let param = |key: &str| url.query_pairs().find(|(k, _)| k == key).map(|(_, v)| v.into_owned());

    if let Some(message) = param("error") {
      return Some(Self::Error { message });
    }
    let username = param("twitter_username").filter(|u| !u.is_empty());
    if param("auth").as_deref() == Some("success") {
      return username.map(|username| Self::Success { username });
    }
    match (param("code"), username) {
      (Some(code), Some(username)) => Some(Self::LegacyCode { code, username }),
      _ => None,
    }
  }

  pub fn username(&self) -> Option<&str> {
    match self {
      Self::Error { .. } => None,
      Self::Success { username } | Self::LegacyCode { username, .. } => Some(username),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::cell::Cell;
  use futures::executor::block_on;
  use rust_decimal_macros::dec;
  use crate::utils::traders::{tests::trader, AuthStatus, ConnectionType};

  struct FakeApi {
    me: Result<MeResponse, AppError>,
    profile: Result<Option<TraderRecord>, AppError>,
    lookups: Cell<usize>,
  }

  impl FakeApi {
    fn signed_in(profile: Result<Option<TraderRecord>, AppError>) -> Self {
      let me = MeResponse { authenticated: true, twitter_username: Some("jen".to_string()), twitter_id: Some("99".to_string()) };
      Self { me: Ok(me), profile, lookups: Cell::new(0) }
    }
  }

  impl SessionApi for FakeApi {
    async fn me(&self) -> Result<MeResponse, AppError> {
      self.me.clone()
    }

    async fn trader(&self, _username: &str) -> Result<Option<TraderRecord>, AppError> {
      self.lookups.set(self.lookups.get() + 1);
      self.profile.clone()
    }
  }

  fn jen() -> Identity {
    Identity { twitter_username: "jen".to_string(), twitter_id: Some("99".to_string()) }
  }

  #[test]
  fn anonymous_visitor_skips_profile_lookup() {
    let api = FakeApi { me: Ok(MeResponse::default()), profile: Ok(None), lookups: Cell::new(0) };
    let state = block_on(reconcile(&api));
    assert_eq!(state, SessionState::Anonymous);
    assert_eq!(state.call_to_action(), Some(CallToAction::Join));
    assert_eq!(api.lookups.get(), 0);
  }

  #[test]
  fn signed_in_without_profile_is_unregistered() {
    let state = block_on(reconcile(&FakeApi::signed_in(Ok(None))));
    assert_eq!(state, SessionState::Unregistered { identity: jen() });
    assert_eq!(state.call_to_action(), Some(CallToAction::CompleteSignup));
    let user = state.user().unwrap();
    assert!(!user.is_registered && !user.is_linked);
  }

  #[test]
  fn profile_without_connection_is_registered_unlinked() {
    let mut row = trader("jen", dec!(0));
    row.connection_type = ConnectionType::None;
    let state = block_on(reconcile(&FakeApi::signed_in(Ok(Some(row)))));
    assert_eq!(state, SessionState::RegisteredUnlinked { identity: jen() });
    assert_eq!(state.call_to_action(), Some(CallToAction::LinkAccount));
    assert_eq!(state.post_auth_prompt(), Some(PostAuthPrompt::LinkAccount));
  }

  #[test]
  fn linked_profile_hides_cta_and_flags_expired_token() {
    let mut row = trader("jen", dec!(4200));
    row.auth_status = AuthStatus::Expired;
    let state = block_on(reconcile(&FakeApi::signed_in(Ok(Some(row)))));
    assert_eq!(state, SessionState::Linked { identity: jen(), needs_reauth: true });
    assert_eq!(state.call_to_action(), None);
    assert_eq!(state.post_auth_prompt(), Some(PostAuthPrompt::Reauth));
    let user = state.user().unwrap();
    assert!(user.is_registered && user.is_linked);
  }

  #[test]
  fn active_linked_profile_gets_a_welcome() {
    let mut row = trader("jen", dec!(18250));
    row.connection_type = ConnectionType::Tradovate;
    row.auth_status = AuthStatus::Active;
    let api = FakeApi::signed_in(Ok(Some(row)));
    let state = block_on(reconcile(&api));
    assert_eq!(state, SessionState::Linked { identity: jen(), needs_reauth: false });
    assert_eq!(state.call_to_action(), None);
    assert_eq!(state.post_auth_prompt(), Some(PostAuthPrompt::Welcome { username: "jen".to_string() }));
    assert_eq!(api.lookups.get(), 1);
  }

  #[test]
  fn failures_degrade_instead_of_erroring() {
    let down = FakeApi { me: Err(AppError::Network("offline".to_string())), profile: Ok(None), lookups: Cell::new(0) };
    assert_eq!(block_on(reconcile(&down)), SessionState::Anonymous);

    let flaky = FakeApi::signed_in(Err(AppError::Backend("boom".to_string())));
    assert_eq!(block_on(reconcile(&flaky)), SessionState::Unregistered { identity: jen() });
  }

  #[test]
  fn reducer_follows_signup_link_and_reauth() {
    let mut state = reduce(SessionState::Checking, SessionEvent::Identified { identity: jen(), profile: None });
    state = reduce(state, SessionEvent::Registered);
    assert!(matches!(state, SessionState::RegisteredUnlinked { .. }));
    state = reduce(state, SessionEvent::Linked);
    assert_eq!(state.post_auth_prompt(), Some(PostAuthPrompt::Welcome { username: "jen".to_string() }));

    // re-registering a linked account does nothing
    assert_eq!(reduce(state.clone(), SessionEvent::Registered), state);

    let expired = SessionState::Linked { identity: jen(), needs_reauth: true };
    assert!(!reduce(expired, SessionEvent::Reauthenticated).needs_reauth());
    assert_eq!(reduce(state, SessionEvent::LoggedOut), SessionState::Anonymous);
  }

  #[test]
  fn parses_each_callback_shape() {
    assert_eq!(
      OAuthCallback::parse("https://proofofpips.com/?error=access%20denied"),
      Some(OAuthCallback::Error { message: "access denied".to_string() })
    );
    assert_eq!(
      OAuthCallback::parse("https://proofofpips.com/?auth=success&twitter_username=jen"),
      Some(OAuthCallback::Success { username: "jen".to_string() })
    );
    assert_eq!(
      OAuthCallback::parse("https://proofofpips.com/?code=abc&twitter_username=jen"),
      Some(OAuthCallback::LegacyCode { code: "abc".to_string(), username: "jen".to_string() })
    );
    assert_eq!(OAuthCallback::parse("https://proofofpips.com/?code=abc"), None);
    assert_eq!(OAuthCallback::parse("https://proofofpips.com/profile/jen"), None);
  }
}
