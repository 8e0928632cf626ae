use dioxus::prelude::*;

use crate::{components::cta::CtaButton, Route};

#[component]
fn LegalSection(heading: String, children: Element) -> Element {
  rsx! {
    section {
      class: "legal-section",
      h2 { "{heading}" }
      {children}
    }
  }
}

#[component]
pub fn Privacy() -> Element {
  rsx! {
    document::Title { "Privacy Policy | Proof of Pips" }
    article {
      class: "prose legal",
      h1 { "Privacy Policy" }
      p { class: "muted", "Last updated: November 2024" }
      LegalSection {
        heading: "What we collect",
        p { "Your public Twitter handle and id when you sign in, the prop firm you pick, and trading statistics read from your linked platform: total profit, monthly profit, win rate and payout count." }
      }
      LegalSection {
        heading: "Trading credentials",
        p { "Platform credentials go straight to our verification service over TLS. They are never stored in your browser and are only used to read account performance." }
      }
      LegalSection {
        heading: "What is public",
        p { "Your handle, avatar, firm and verified statistics appear on the leaderboard and on your profile page. Credentials and account numbers are never shown." }
      }
      LegalSection {
        heading: "Removing your data",
        p { "Message @proofofpips on Twitter to unlink your account and delete your profile." }
      }
    }
  }
}

#[component]
pub fn Terms() -> Element {
  rsx! {
    document::Title { "Terms of Service | Proof of Pips" }
    article {
      class: "prose legal",
      h1 { "Terms of Service" }
      p { class: "muted", "Last updated: November 2024" }
      LegalSection {
        heading: "Not financial advice",
        p { "Rankings reflect past results of individual traders. Nothing on this site is a recommendation to trade or to buy any evaluation." }
      }
      LegalSection {
        heading: "Your account",
        p { "You may only link trading accounts you own. Profiles linked with someone else's credentials are removed." }
      }
      LegalSection {
        heading: "Accuracy",
        p { "Statistics are synced from the trading platform as reported. Sync delays and platform outages can leave numbers out of date." }
      }
    }
  }
}

#[component]
pub fn Guide() -> Element {
  let steps = [
    ("1", "Sign in with Twitter", "Your handle becomes your identity on the leaderboard."),
    ("2", "Pick your prop firm", "Choose the firm that funds the account you want ranked."),
    ("3", "Link your platform", "Connect Tradovate with your login, or TradeSyncer with an API key. You can also join first and link later."),
    ("4", "Get ranked", "Stats sync automatically and your row moves as your verified profit grows."),
  ];

  rsx! {
    document::Title { "How It Works | Proof of Pips" }
    article {
      class: "prose guide",
      h1 { "How Proof of Pips Works" }
      p { "Every number on the leaderboard comes from the trading platform itself. No screenshots, no self-reported payouts." }
      ol {
        class: "guide-steps",
        for (num, title, detail) in steps {
          li {
            key: "{num}",
            span { class: "guide-step-num", "{num}" }
            div {
              h3 { "{title}" }
              p { class: "muted", "{detail}" }
            }
          }
        }
      }
      h2 { "Badges" }
      p { "Badges are earned automatically: The GOAT for rank #1, Top Tier for the top ten, Six Figure Club past $100K, monthly Top 5 finishes and profitable-month streaks." }
      h2 { "Keyboard shortcuts" }
      ul {
        li { strong { "Ctrl+K" } " or " strong { "/" } " jumps to trader search" }
        li { strong { "Esc" } " closes any open dialog" }
      }
      div {
        class: "guide-cta",
        CtaButton { }
        Link { class: "button button-ghost", to: Route::Home {}, "Browse the Leaderboard" }
      }
    }
  }
}

#[component]
pub fn PageNotFound(route: Vec<String>) -> Element {
  let path = format!("/{}", route.join("/"));
  rsx! {
    document::Title { "Page not found | Proof of Pips" }
    div {
      class: "empty-state",
      h1 { "Page not found" }
      p { class: "muted", "Nothing lives at {path}." }
      Link { class: "button button-primary", to: Route::Home {}, "Back to Leaderboard" }
    }
  }
}
