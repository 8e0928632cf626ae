use chrono::Utc;
use dioxus::{logger::tracing::{info, warn}, prelude::*};

use crate::{
  components::{adbox::AdLayout, compare::CompareModal, cta::CtaButton, table::{SkeletonRows, SortHeader, TraderRow}},
  config::{AppConfig, SCROLL_THRESHOLD_PX},
  state::{AppState, LeaderboardCommand, LoadState, ToastKind},
  utils::{
    compare::{CompareSelection, SelectionChange, MAX_COMPARED},
    export::{export_file_name, leaderboard_csv},
    leaderboard::{LeaderboardQuery, ProfitBracket, SortKey},
    traders::{TraderRecord, PROP_FIRMS},
  },
};

const DOWNLOAD_JS: &str = r#"
  const [name, csv] = await dioxus.recv();
  const blob = new Blob([csv], { type: 'text/csv;charset=utf-8;' });
  const url = URL.createObjectURL(blob);
  const link = document.createElement('a');
  link.href = url;
  link.download = name;
  document.body.appendChild(link);
  link.click();
  document.body.removeChild(link);
  URL.revokeObjectURL(url);
"#;

// one handler at a time; a remount replaces it and unmount removes it
fn scroll_sensor_js(threshold: u32) -> String {
  format!(r#"
    if (window.__pipsScroll) {{
      window.removeEventListener('scroll', window.__pipsScroll);
    }}
    window.__pipsScroll = function() {{
      const remaining = document.documentElement.scrollHeight - (window.innerHeight + window.scrollY);
      if (remaining < {threshold}) {{
        dioxus.send(true);
      }}
    }};
    window.addEventListener('scroll', window.__pipsScroll);
  "#)
}

const REMOVE_SCROLL_SENSOR_JS: &str = r#"
  if (window.__pipsScroll) {
    window.removeEventListener('scroll', window.__pipsScroll);
    window.__pipsScroll = null;
  }
"#;

const TABLE_COLUMNS: usize = 6;

#[component]
pub fn Home() -> Element {
  let mut state = use_context::<AppState>();
  let config = use_context::<AppConfig>();
  let loader = use_coroutine_handle::<LeaderboardCommand>();

  let mut query = use_signal(|| LeaderboardQuery::new(config.page_size));
  let mut compare_mode = use_signal(|| false);
  let mut selection = use_signal(CompareSelection::default);
  let mut compare_open = use_signal(|| false);

  // every scroll event near the bottom widens the window; load_more caps it
  use_future(move || async move {
    let mut sensor = document::eval(&scroll_sensor_js(SCROLL_THRESHOLD_PX));
    while sensor.recv::<bool>().await.is_ok() {
      let total = query.peek().matching_count(&state.traders.peek());
      if query.peek().display_count < total {
        query.write().load_more(total);
      }
    }
  });
  use_drop(|| {
    document::eval(REMOVE_SCROLL_SENSOR_JS);
  });

  let traders = state.traders.read();
  let load = state.load.read().clone();
  let (view, matching) = {
    let q = query.read();
    (q.apply(&traders), q.matching_count(&traders))
  };
  let has_more = matching > view.len();
  let connection_lost = matches!(load, LoadState::Failed(_)) && traders.is_empty();
  let stale = matches!(load, LoadState::Failed(_)) && !traders.is_empty();
  let loading = load == LoadState::Loading && traders.is_empty();
  let trader_count = traders.len();
  drop(traders);

  let on_toggle = move |trader: TraderRecord| {
    match selection.write().toggle(&trader) {
      SelectionChange::Full => state.toast(ToastKind::Error, format!("Maximum {} traders for comparison", MAX_COMPARED)),
      SelectionChange::Added | SelectionChange::Removed => {}
    }
  };

  let export_view = view.clone();
  let export = move |_| {
    let csv = match leaderboard_csv(&export_view) {
      Ok(csv) => csv,
      Err(e) => {
        warn!("{}", e);
        state.error_toast(&e);
        return;
      }
    };
    let name = export_file_name(Utc::now());
    info!("exporting {} rows to {}", export_view.len(), name);
    let download = document::eval(DOWNLOAD_JS);
    if let Err(e) = download.send((name, csv)) {
      warn!("csv download failed: {:?}", e);
      state.toast(ToastKind::Error, "Export failed");
    }
  };

  let firm_count = PROP_FIRMS.len();
  let search = query.read().search.clone();
  let picked = selection.read().len();
  let compare_ready = selection.read().ready();

  rsx! {
    document::Title { "Proof of Pips - Verified Prop Trader Leaderboard" }
    AdLayout {
      section {
        class: "hero",
        h1 { "Verified Prop Trader Leaderboard" }
        p { "Real payouts from real prop firm accounts, synced straight from the trading platform. No screenshots, no edits." }
        div {
          class: "hero-stats",
          div { class: "hero-stat", strong { "{trader_count}" } span { "Traders" } }
          div { class: "hero-stat", strong { "{firm_count}" } span { "Prop firms" } }
        }
        CtaButton { }
      }

      section {
        class: "leaderboard",
        div {
          class: "controls",
          input {
            id: "trader-search",
            class: "form-input search",
            r#type: "search",
            placeholder: "Search traders... (Ctrl+K)",
            value: "{search}",
            oninput: move |evt| {
              let mut q = query.write();
              q.search = evt.value();
              q.display_count = q.page_size;
            },
          }
          select {
            class: "form-input",
            onchange: move |evt| {
              let value = evt.value();
              let mut q = query.write();
              q.firm = if value == "all" { None } else { Some(value) };
              q.display_count = q.page_size;
            },
            option { value: "all", "All firms" }
            for (value, label) in PROP_FIRMS.iter() {
              option { key: "{value}", value: *value, "{label}" }
            }
          }
          select {
            class: "form-input",
            onchange: move |evt| {
              if let Ok(bracket) = evt.value().parse::<ProfitBracket>() {
                let mut q = query.write();
                q.bracket = bracket;
                q.display_count = q.page_size;
              }
            },
            for (bracket, label) in ProfitBracket::ALL.map(|b| (b, b.label())) {
              option { key: "{bracket}", value: "{bracket}", "{label}" }
            }
          }
          button {
            class: "button button-ghost",
            onclick: export,
            "⬇ Export CSV"
          }
          button {
            class: if compare_mode() { "button button-primary" } else { "button button-ghost" },
            onclick: move |_| {
              let next = !compare_mode();
              compare_mode.set(next);
              if !next {
                selection.write().clear();
                compare_open.set(false);
              }
            },
            if compare_mode() { "Exit Compare" } else { "Compare" }
          }
        }

        if stale {
          div {
            class: "banner banner-warning",
            span { "Showing the last loaded rankings. The live leaderboard could not be reached." }
            button {
              class: "button button-ghost",
              onclick: move |_| loader.send(LeaderboardCommand::Refresh),
              "Retry"
            }
          }
        }

        if connection_lost {
          div {
            class: "empty-state",
            div { class: "empty-icon", "📡" }
            h3 { "Connection Lost" }
            p { class: "muted", "We couldn't reach the leaderboard service." }
            button {
              class: "button button-primary",
              onclick: move |_| loader.send(LeaderboardCommand::Refresh),
              "Retry"
            }
          }
        } else {
          div {
            class: "table-wrap",
            table {
              class: "leaderboard-table",
              thead {
                tr {
                  if compare_mode() {
                    th { class: "cell-select" }
                  }
                  th { class: "cell-rank", "Rank" }
                  th { "Trader" }
                  SortHeader { label: "Total Profit", sort: SortKey::TotalProfit, query }
                  SortHeader { label: "Win Rate", sort: SortKey::WinRate, query, class: "hide-sm" }
                  SortHeader { label: "Monthly", sort: SortKey::MonthlyProfit, query, class: "hide-md" }
                  th { class: "hide-lg", "Prop Firm" }
                }
              }
              tbody {
                if loading {
                  SkeletonRows { columns: TABLE_COLUMNS }
                } else {
                  for trader in view {
                    TraderRow {
                      key: "{trader.id}",
                      selected: selection.read().contains(&trader.id),
                      trader: trader.clone(),
                      compare_mode: compare_mode(),
                      on_toggle,
                    }
                  }
                }
              }
            }
            if !loading && matching == 0 {
              div {
                class: "empty-state",
                h3 { "No traders found" }
                p { class: "muted", "Try a different search or loosen the filters." }
              }
            }
          }
          if has_more {
            div {
              class: "center",
              button {
                class: "button button-ghost",
                onclick: move |_| query.write().load_more(matching),
                "Load More ({matching} total)"
              }
            }
          }
        }
      }
    }

    if compare_mode() && picked > 0 {
      button {
        class: "compare-fab",
        disabled: !compare_ready,
        onclick: move |_| compare_open.set(true),
        "Compare ({picked}/{MAX_COMPARED})"
      }
    }
    if compare_open() && compare_ready {
      CompareModal {
        selection,
        on_close: move |_| compare_open.set(false),
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn scroll_sensor_replaces_its_previous_handler() {
    let js = scroll_sensor_js(SCROLL_THRESHOLD_PX);
    let removed = js.find("removeEventListener('scroll', window.__pipsScroll)").unwrap();
    let added = js.find("addEventListener('scroll', window.__pipsScroll)").unwrap();
    assert!(removed < added);
    assert!(js.contains("remaining < 500"));
    assert!(REMOVE_SCROLL_SENSOR_JS.contains("removeEventListener('scroll', window.__pipsScroll)"));
  }
}
