use chrono::Utc;
use dioxus::prelude::*;

use crate::{
  components::badge::BadgeChip,
  utils::{
    badges::evaluate,
    compare::CompareSelection,
    formatters::{format_currency, format_percent},
    traders::TraderRecord,
  },
  Route,
};

#[component]
pub fn CompareModal(selection: Signal<CompareSelection>, on_close: EventHandler<()>) -> Element {
  let picked = selection.read().traders().to_vec();
  let columns = if picked.len() == 2 { "compare-grid compare-two" } else { "compare-grid compare-three" };

  rsx! {
    div {
      class: "modal-backdrop",
      onclick: move |_| on_close.call(()),
      div {
        class: "modal modal-wide",
        onclick: move |evt| evt.stop_propagation(),
        div {
          class: "modal-header",
          h3 { "Compare Traders" }
          button {
            class: "modal-close",
            onclick: move |_| selection.write().clear(),
            "Clear"
          }
        }
        div {
          class: columns,
          for trader in picked {
            CompareCard { key: "{trader.id}", trader: trader.clone(), selection }
          }
        }
      }
    }
  }
}

#[component]
fn CompareCard(trader: TraderRecord, selection: Signal<CompareSelection>) -> Element {
  let badges = evaluate(&trader, Utc::now());
  let stats = [
    ("Total Profit", format_currency(trader.total_profit)),
    ("Win Rate", format_percent(trader.win_rate)),
    ("Monthly", format_currency(trader.monthly_profit)),
    ("Payouts", trader.verified_payouts.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string())),
    ("Prop Firm", trader.firm_display()),
  ];
  let handle = trader.twitter_handle.clone();

  rsx! {
    div {
      class: "compare-card",
      div { class: "avatar avatar-large", "{trader.avatar_glyph}" }
      div { class: "compare-handle", "@{trader.twitter_handle}" }
      div { class: "compare-rank", "Rank #{trader.rank}" }
      dl {
        class: "compare-stats",
        for (label, value) in stats {
          dt { key: "{label}", "{label}" }
          dd { "{value}" }
        }
      }
      div {
        class: "trader-badges",
        for badge in badges {
          BadgeChip { key: "{badge.key}", badge: badge.clone() }
        }
      }
      button {
        class: "button button-ghost button-block",
        onclick: move |_| {
          selection.write().clear();
          navigator().push(Route::Profile { username: handle.clone() });
        },
        "View Full Profile"
      }
    }
  }
}
