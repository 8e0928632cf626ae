use chrono::Utc;
use dioxus::{logger::tracing::{info, warn}, prelude::*};

use crate::{
  components::{badge::BadgeChip, plot::ProfitChart},
  config::AppConfig,
  state::{AppState, LeaderboardCommand, LoadState, ModalKind, ToastKind},
  utils::{
    api::ApiClient,
    badges::evaluate,
    chart::realistic_series,
    formatters::{format_currency, format_date, format_percent, format_timestamp, rank_glyph},
    traders::{find_by_handle, TraderRecord},
  },
  Route,
};

const CLIPBOARD_JS: &str = r#"
  const url = await dioxus.recv();
  try {
    await navigator.clipboard.writeText(url);
    dioxus.send(true);
  } catch (e) {
    dioxus.send(false);
  }
"#;

#[component]
pub fn Profile(username: ReadOnlySignal<String>) -> Element {
  let state = use_context::<AppState>();
  let api = use_context::<ApiClient>();
  let handle_now = username();

  let listed = find_by_handle(&state.traders.read(), &handle_now).cloned();
  let still_loading = *state.load.read() == LoadState::Loading;

  // only hit the profile endpoint when the merged list has no row for this handle
  let fetched = use_resource(move || {
    let api = api.clone();
    async move {
      let handle = username();
      if find_by_handle(&state.traders.peek(), &handle).is_some() {
        return Ok(None);
      }
      info!("fetching profile for @{}", handle);
      api.trader_profile(&handle).await.map(|found| found.map(|mut trader| {
        trader.chart = realistic_series(&trader, Utc::now());
        trader
      }))
    }
  });

  let trader = listed.or_else(|| match &*fetched.read() {
    Some(Ok(found)) => found.clone(),
    _ => None,
  });

  match trader {
    Some(trader) => rsx! { ProfileView { trader } },
    None if still_loading || fetched.read().is_none() => rsx! {
      div { class: "profile-page", div { class: "skeleton-bar skeleton-block" } }
    },
    None => {
      let failed = matches!(&*fetched.read(), Some(Err(_)));
      rsx! {
        document::Title { "Trader not found | Proof of Pips" }
        div {
          class: "empty-state",
          h2 { "Trader Not Found" }
          if failed {
            p { class: "muted", "The profile service could not be reached. Try again in a moment." }
          } else {
            p { class: "muted", "No trader named @{handle_now} is on the leaderboard." }
          }
          Link { class: "button button-primary", to: Route::Home {}, "Back to Leaderboard" }
        }
      }
    }
  }
}

#[component]
fn ProfileView(trader: TraderRecord) -> Element {
  let mut state = use_context::<AppState>();
  let api = use_context::<ApiClient>();
  let config = use_context::<AppConfig>();
  let loader = use_coroutine_handle::<LeaderboardCommand>();
  let mut syncing = use_signal(|| false);

  let badges = evaluate(&trader, Utc::now());
  let total = format_currency(trader.total_profit);
  let monthly = format_currency(trader.monthly_profit);
  let win_rate = format_percent(trader.win_rate);
  let rank = rank_glyph(trader.rank);
  let firm = trader.firm_display();
  let member_since = format_date(trader.account_created_at);
  let last_sync = format_timestamp(trader.last_sync);
  let payouts = trader.verified_payouts.unwrap_or(0);
  let accounts = trader.total_accounts_linked.unwrap_or(if trader.is_unlinked() { 0 } else { 1 });
  let title = format!("@{} - {} | Proof of Pips", trader.twitter_handle, total);
  let twitter_url = format!("https://twitter.com/{}", trader.twitter_handle);
  let share_url = config.profile_share_url(&trader.twitter_handle);

  let (is_owner, session_expired) = {
    let session = state.session.read();
    (session.identity().is_some_and(|i| trader.matches_handle(&i.twitter_username)), session.needs_reauth())
  };
  let show_reauth = is_owner && (trader.needs_reauth() || session_expired);

  let sync = {
    let handle = trader.twitter_handle.clone();
    move |_| {
      let (api, handle) = (api.clone(), handle.clone());
      syncing.set(true);
      spawn(async move {
        let result = api.sync_trader(&handle).await;
        syncing.set(false);
        match result {
          Ok(()) => {
            state.toast(ToastKind::Success, "Sync started. Fresh stats will appear shortly.");
            loader.send(LeaderboardCommand::Refresh);
          }
          Err(e) => state.error_toast(&e),
        }
      });
    }
  };

  let share = move |_| {
    let url = share_url.clone();
    spawn(async move {
      let mut clipboard = document::eval(CLIPBOARD_JS);
      let copied = match clipboard.send(url) {
        Ok(()) => clipboard.recv::<bool>().await.unwrap_or(false),
        Err(e) => {
          warn!("clipboard bridge failed: {:?}", e);
          false
        }
      };
      if copied {
        state.toast(ToastKind::Success, "Profile link copied to clipboard!");
      } else {
        state.toast(ToastKind::Error, "Failed to copy link");
      }
    });
  };

  rsx! {
    document::Title { "{title}" }
    div {
      class: "profile-page",
      Link { class: "back-link", to: Route::Home {}, "← Back to Leaderboard" }

      if show_reauth {
        div {
          class: "banner banner-warning",
          span { "Your Tradovate connection expired, so stats are no longer syncing." }
          button {
            class: "button button-primary",
            onclick: move |_| state.modal.set(Some(ModalKind::Reauth)),
            "Reconnect"
          }
        }
      }

      div {
        class: "profile-header",
        div { class: "avatar avatar-xl", "{trader.avatar_glyph}" }
        div {
          class: "profile-identity",
          h1 {
            "@{trader.twitter_handle}"
            if trader.is_unlinked() {
              span { class: "tag tag-muted", "unverified" }
            } else {
              span { class: "verified", title: "Verified via {trader.connection_type}", "✓" }
            }
          }
          div { class: "profile-rank", "Rank {rank} · {firm}" }
          a { class: "twitter-link", href: "{twitter_url}", target: "_blank", rel: "noopener noreferrer", "View on Twitter ↗" }
        }
        div {
          class: "profile-actions",
          button {
            class: "button button-ghost",
            disabled: syncing(),
            onclick: sync,
            if syncing() { "Syncing..." } else { "↻ Sync" }
          }
          button { class: "button button-ghost", onclick: share, "🔗 Share" }
        }
      }

      if !badges.is_empty() {
        div {
          class: "profile-badges",
          for badge in badges {
            BadgeChip { key: "{badge.key}", badge: badge.clone(), large: true }
          }
        }
      }

      div {
        class: "stat-grid",
        StatCard { label: "Total Profit", value: total.clone(), highlight: true }
        StatCard { label: "Monthly Profit", value: monthly }
        StatCard { label: "Win Rate", value: win_rate }
        StatCard { label: "Verified Payouts", value: payouts.to_string() }
        StatCard { label: "Accounts Linked", value: accounts.to_string() }
        StatCard { label: "Member Since", value: member_since }
        StatCard { label: "Last Sync", value: last_sync }
        StatCard { label: "Connection", value: trader.connection_type.to_string() }
      }

      ProfitChart { trader: trader.clone() }
    }
  }
}

#[component]
fn StatCard(label: String, value: String, #[props(default)] highlight: bool) -> Element {
  rsx! {
    div {
      class: if highlight { "stat-card stat-highlight" } else { "stat-card" },
      div { class: "stat-label", "{label}" }
      div { class: "stat-value", "{value}" }
    }
  }
}
