use chrono::Utc;
use dioxus::prelude::*;

use crate::{
  components::badge::BadgeChip,
  utils::{
    badges::evaluate,
    formatters::{format_currency, format_percent, rank_glyph},
    leaderboard::{LeaderboardQuery, SortKey},
    traders::TraderRecord,
  },
  Route,
};

const SKELETON_ROWS: usize = 8;
const ROW_BADGES: usize = 2;

#[component]
pub fn SortHeader(label: String, sort: SortKey, query: Signal<LeaderboardQuery>, #[props(default)] class: String) -> Element {
  let (active, arrow) = {
    let q = query.read();
    (q.sort_key == sort, q.direction.arrow())
  };
  rsx! {
    th {
      class: "{class}",
      button {
        class: if active { "sort-button sort-active" } else { "sort-button" },
        onclick: move |_| query.write().toggle_sort(sort),
        "{label}"
        if active {
          span { class: "sort-arrow", "{arrow}" }
        }
      }
    }
  }
}

#[component]
pub fn TraderRow(trader: TraderRecord, compare_mode: bool, selected: bool, on_toggle: EventHandler<TraderRecord>) -> Element {
  let badges = evaluate(&trader, Utc::now());
  let handle = trader.twitter_handle.clone();
  let row_trader = trader.clone();
  let rank = rank_glyph(trader.rank);
  let total = format_currency(trader.total_profit);
  let win_rate = format_percent(trader.win_rate);
  let monthly = format_currency(trader.monthly_profit);
  let firm = trader.firm_display();

  rsx! {
    tr {
      class: if compare_mode { "row" } else { "row row-link" },
      onclick: move |_| {
        if compare_mode {
          on_toggle.call(row_trader.clone());
        } else {
          navigator().push(Route::Profile { username: handle.clone() });
        }
      },
      if compare_mode {
        td {
          class: "cell-select",
          input {
            r#type: "checkbox",
            checked: selected,
            onclick: move |evt| evt.stop_propagation(),
            onchange: {
              let trader = trader.clone();
              move |_| on_toggle.call(trader.clone())
            },
          }
        }
      }
      td { class: "cell-rank", "{rank}" }
      td {
        class: "cell-trader",
        div {
          class: "trader",
          div { class: "avatar", "{trader.avatar_glyph}" }
          div {
            class: "trader-meta",
            div {
              class: "trader-handle",
              span { "@{trader.twitter_handle}" }
              if trader.is_unlinked() {
                span { class: "tag tag-muted", title: "No trading account linked yet", "unverified" }
              } else {
                span { class: "verified", title: "Verified via {trader.connection_type}", "✓" }
              }
            }
            div {
              class: "trader-badges",
              for badge in badges.into_iter().take(ROW_BADGES) {
                BadgeChip { key: "{badge.key}", badge: badge.clone() }
              }
            }
          }
        }
      }
      td { class: "cell-profit", "{total}" }
      td { class: "cell-win hide-sm", "{win_rate}" }
      td { class: "cell-monthly hide-md", "{monthly}" }
      td { class: "cell-firm hide-lg", "{firm}" }
    }
  }
}

#[component]
pub fn SkeletonRows(columns: usize) -> Element {
  rsx! {
    for idx in 0..SKELETON_ROWS {
      tr {
        key: "{idx}",
        class: "row skeleton",
        for col in 0..columns {
          td { key: "{col}", div { class: "skeleton-bar" } }
        }
      }
    }
  }
}
