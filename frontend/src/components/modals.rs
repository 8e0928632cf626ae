use std::collections::HashMap;
use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::{
  state::{AppState, LeaderboardCommand, ModalKind, ToastKind},
  utils::{
    api::ApiClient,
    server::{AddTraderRequest, LinkCredentials, LinkRequest, ReauthRequest},
    session::SessionEvent,
    traders::{ConnectionType, PROP_FIRMS},
  },
};

#[component]
pub fn ModalHost() -> Element {
  let state = use_context::<AppState>();
  let modal = *state.modal.read();

  match modal {
    Some(ModalKind::PostAuth) => rsx! { PostAuthModal {} },
    Some(ModalKind::LinkAccount) => rsx! { LinkAccountModal {} },
    Some(ModalKind::AddTrader) => rsx! { AddTraderModal {} },
    Some(ModalKind::Reauth) => rsx! { ReauthModal {} },
    None => rsx! {},
  }
}

#[component]
pub fn ModalFrame(title: String, children: Element) -> Element {
  let mut state = use_context::<AppState>();
  rsx! {
    div {
      class: "modal-backdrop",
      onclick: move |_| state.modal.set(None),
      div {
        class: "modal",
        onclick: move |evt| evt.stop_propagation(),
        div {
          class: "modal-header",
          h3 { "{title}" }
          button {
            class: "modal-close",
            title: "Close",
            onclick: move |_| state.modal.set(None),
            "×"
          }
        }
        {children}
      }
    }
  }
}

fn signed_in_username(state: &AppState) -> String {
  state.session.read().identity().map(|i| i.twitter_username.clone()).unwrap_or_default()
}

#[component]
fn PostAuthModal() -> Element {
  let mut state = use_context::<AppState>();
  let api = use_context::<ApiClient>();
  let loader = use_coroutine_handle::<LeaderboardCommand>();
  let mut submitting = use_signal(|| false);
  let username = signed_in_username(&state);

  let join_only = move |_: MouseEvent| {
    let api = api.clone();
    submitting.set(true);
    spawn(async move {
      let result = api.register().await;
      submitting.set(false);
      match result {
        Ok(_) => {
          state.apply(SessionEvent::Registered);
          state.modal.set(None);
          state.toast(ToastKind::Success, "Profile created! Link a trading account anytime to get ranked.");
          loader.send(LeaderboardCommand::Refresh);
        }
        Err(e) => state.error_toast(&e),
      }
    });
  };

  rsx! {
    ModalFrame {
      title: "Welcome, @{username}!",
      p { class: "muted", "Choose how you'd like to join the leaderboard:" }
      div {
        class: "choice-list",
        button {
          class: "choice choice-primary",
          onclick: move |_| state.modal.set(Some(ModalKind::LinkAccount)),
          div { class: "choice-title", "🛡️ Link Trading Account" }
          div { class: "choice-detail", "Connect Tradovate or TradeSyncer to verify your stats and appear on the ranked leaderboard." }
        }
        button {
          class: "choice",
          disabled: submitting(),
          onclick: join_only,
          div { class: "choice-title", if submitting() { "Creating account..." } else { "Join Without Linking" } }
          div { class: "choice-detail", "Create your profile now and link a trading platform later." }
        }
      }
    }
  }
}

/// Firm picker, platform toggle and credential fields shared by the link and add flows.
#[component]
fn AccountForm(submitting: bool, submit_label: String, on_submit: EventHandler<(String, LinkCredentials)>) -> Element {
  let mut state = use_context::<AppState>();
  let mut connection = use_signal(|| ConnectionType::Tradovate);

  let submit = move |evt: FormEvent| {
    evt.prevent_default();
    let values: HashMap<String, String> = evt.values().into_iter().map(|(k, v)| (k, v.as_value())).collect();
    let firm = values.get("propFirm").cloned().unwrap_or_default();
    if firm.is_empty() {
      state.toast(ToastKind::Error, "Select your prop firm");
      return;
    }
    match LinkCredentials::from_form(connection(), |name| values.get(name).cloned()) {
      Ok(credentials) => on_submit.call((firm, credentials)),
      Err(msg) => state.toast(ToastKind::Error, msg),
    }
  };

  rsx! {
    form {
      class: "account-form",
      onsubmit: submit,
      div {
        class: "form-group",
        label { class: "form-label", "Prop Firm" }
        select {
          class: "form-input",
          name: "propFirm",
          required: true,
          option { value: "", "Select your prop firm" }
          for (value, label) in PROP_FIRMS.iter() {
            option { key: "{value}", value: *value, "{label}" }
          }
        }
      }
      div {
        class: "form-group",
        label { class: "form-label", "Connection Method" }
        div {
          class: "segmented",
          for (kind, title, detail) in [(ConnectionType::Tradovate, "Tradovate", "Direct API"), (ConnectionType::TradeSyncer, "TradeSyncer", "API Key")] {
            button {
              key: "{title}",
              r#type: "button",
              class: if connection() == kind { "segment segment-active" } else { "segment" },
              onclick: move |_| connection.set(kind),
              div { class: "segment-title", "{title}" }
              div { class: "segment-detail", "{detail}" }
            }
          }
        }
      }
      if connection() == ConnectionType::Tradovate {
        div {
          class: "form-group",
          label { class: "form-label", "Tradovate Username" }
          input { class: "form-input", name: "tradovateUsername", r#type: "text", autocomplete: "username", required: true }
        }
        div {
          class: "form-group",
          label { class: "form-label", "Tradovate Password" }
          input { class: "form-input", name: "tradovatePassword", r#type: "password", autocomplete: "current-password", required: true }
        }
        details {
          class: "form-advanced",
          summary { "API credentials (optional)" }
          div {
            class: "form-group",
            label { class: "form-label", "Client ID" }
            input { class: "form-input", name: "tradovateClientId", r#type: "text" }
          }
          div {
            class: "form-group",
            label { class: "form-label", "Secret Key" }
            input { class: "form-input", name: "tradovateSecretKey", r#type: "password" }
          }
        }
      } else {
        div {
          class: "form-group",
          label { class: "form-label", "TradeSyncer API Key" }
          input { class: "form-input", name: "tradeSyncerApiKey", r#type: "password", required: true }
        }
      }
      p { class: "form-note", "🔒 Credentials are sent straight to the verification service and never stored in your browser." }
      button {
        class: "button button-primary button-block",
        r#type: "submit",
        disabled: submitting,
        if submitting { "Verifying..." } else { "{submit_label}" }
      }
    }
  }
}

#[component]
fn LinkAccountModal() -> Element {
  let mut state = use_context::<AppState>();
  let api = use_context::<ApiClient>();
  let loader = use_coroutine_handle::<LeaderboardCommand>();
  let mut submitting = use_signal(|| false);
  let username = signed_in_username(&state);

  let link = move |(prop_firm, credentials): (String, LinkCredentials)| {
    let api = api.clone();
    submitting.set(true);
    spawn(async move {
      let req = LinkRequest { prop_firm, credentials };
      let result = api.link_account(&req).await;
      submitting.set(false);
      match result {
        Ok(()) => {
          info!("account linked");
          state.apply(SessionEvent::Linked);
          state.modal.set(None);
          state.toast(ToastKind::Success, "Account linked successfully! Syncing your stats...");
          loader.send(LeaderboardCommand::Refresh);
        }
        Err(e) => state.error_toast(&e),
      }
    });
  };

  rsx! {
    ModalFrame {
      title: "Link Trading Account",
      div { class: "notice", "🛡️ Linking as @{username}" }
      p { class: "muted", "Connect your Tradovate account or TradeSyncer API to verify your stats and appear on the ranked leaderboard." }
      AccountForm { submitting: submitting(), submit_label: "Link Account", on_submit: link }
    }
  }
}

#[component]
fn AddTraderModal() -> Element {
  let mut state = use_context::<AppState>();
  let api = use_context::<ApiClient>();
  let loader = use_coroutine_handle::<LeaderboardCommand>();
  let mut submitting = use_signal(|| false);
  let username = signed_in_username(&state);

  let add = {
    let username = username.clone();
    move |(prop_firm, credentials): (String, LinkCredentials)| {
      let api = api.clone();
      let Some(auth_token) = state.auth_token.read().clone() else {
        state.toast(ToastKind::Error, "Your sign-in expired. Please sign in with Twitter again.");
        return;
      };
      let req = AddTraderRequest { twitter_username: username.clone(), auth_token, prop_firm, credentials };
      submitting.set(true);
      spawn(async move {
        let result = api.add_trader(&req).await;
        submitting.set(false);
        match result {
          Ok(()) => {
            state.apply(SessionEvent::Linked);
            state.modal.set(None);
            state.toast(ToastKind::Success, "You're on the leaderboard! Stats will appear after the first sync.");
            loader.send(LeaderboardCommand::Refresh);
          }
          Err(e) => state.error_toast(&e),
        }
      });
    }
  };

  rsx! {
    ModalFrame {
      title: "Join the Leaderboard",
      div { class: "notice", "✓ Verified as @{username}" }
      AccountForm { submitting: submitting(), submit_label: "Join Leaderboard", on_submit: add }
    }
  }
}

#[component]
fn ReauthModal() -> Element {
  let mut state = use_context::<AppState>();
  let api = use_context::<ApiClient>();
  let loader = use_coroutine_handle::<LeaderboardCommand>();
  let mut submitting = use_signal(|| false);
  let username = signed_in_username(&state);

  let submit = {
    let username = username.clone();
    move |evt: FormEvent| {
      evt.prevent_default();
      let password = evt.values().get("tradovatePassword").map(|v| v.as_value()).unwrap_or_default();
      if password.trim().is_empty() {
        state.toast(ToastKind::Error, "Tradovate password is required");
        return;
      }
      let req = ReauthRequest {
        twitter_username: username.clone(),
        auth_token: state.auth_token.read().clone().filter(|t| !t.is_empty()),
        tradovate_password: password,
      };
      let api = api.clone();
      submitting.set(true);
      spawn(async move {
        let result = api.reauth(&req).await;
        submitting.set(false);
        match result {
          Ok(()) => {
            state.apply(SessionEvent::Reauthenticated);
            state.modal.set(None);
            state.toast(ToastKind::Success, "Reconnected! Your stats will refresh shortly.");
            loader.send(LeaderboardCommand::Refresh);
          }
          Err(e) => state.error_toast(&e),
        }
      });
    }
  };

  rsx! {
    ModalFrame {
      title: "Reconnect Tradovate",
      p { class: "muted", "The Tradovate session for @{username} expired. Enter your password to resume syncing." }
      form {
        class: "account-form",
        onsubmit: submit,
        div {
          class: "form-group",
          label { class: "form-label", "Tradovate Password" }
          input { class: "form-input", name: "tradovatePassword", r#type: "password", autocomplete: "current-password", required: true }
        }
        button {
          class: "button button-primary button-block",
          r#type: "submit",
          disabled: submitting(),
          if submitting() { "Reconnecting..." } else { "Reconnect" }
        }
      }
    }
  }
}
