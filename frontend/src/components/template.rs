use dioxus::prelude::*;
use futures_util::StreamExt;
use crate::{
  components::{cta::CtaButton, modals::ModalHost, toast::ToastStack},
  config::AppConfig,
  state::{load_traders, AppState, LeaderboardCommand},
  utils::api::ApiClient,
  Route,
};

// Escape closes whatever modal is open; Ctrl/Cmd+K and "/" jump to search.
const KEYBOARD_JS: &str = r#"
  window.addEventListener('keydown', function(e) {
    const search = document.getElementById('trader-search');
    if ((e.ctrlKey || e.metaKey) && e.key === 'k') {
      e.preventDefault();
      if (search) { search.focus(); }
    } else if (e.key === '/' && !['INPUT', 'TEXTAREA', 'SELECT'].includes(e.target.tagName)) {
      e.preventDefault();
      if (search) { search.focus(); }
    } else if (e.key === 'Escape') {
      dioxus.send('escape');
    }
  });
"#;

#[component]
pub fn Template() -> Element {
  static CSS: Asset = asset!("/assets/main.css");

  let config = use_context_provider(AppConfig::from_build_env);
  let api = use_context_provider(|| ApiClient::new(&config.api_url));
  let mut state = use_context_provider(AppState::new);

  let loader = use_coroutine({
    let (api, config) = (api.clone(), config.clone());
    move |mut rx: UnboundedReceiver<LeaderboardCommand>| {
      let (api, config) = (api.clone(), config.clone());
      async move {
        let mut in_flight: Option<Task> = None;
        while let Some(LeaderboardCommand::Refresh) = rx.next().await {
          if let Some(task) = in_flight.take() {
            task.cancel();
          }
          in_flight = Some(spawn(load_traders(state, api.clone(), config.clone())));
        }
      }
    }
  });
  use_hook(move || loader.send(LeaderboardCommand::Refresh));

  use_future(move || {
    let api = api.clone();
    async move { state.bootstrap_session(api).await }
  });

  use_future(move || async move {
    let mut keys = document::eval(KEYBOARD_JS);
    while let Ok(key) = keys.recv::<String>().await {
      if key == "escape" {
        state.modal.set(None);
      }
    }
  });

  rsx! {
    document::Stylesheet { href: CSS },
    Header { }
    main {
      class: "page",
      Outlet::<Route> {}
    }
    Footer { }
    ModalHost { }
    ToastStack { }
  }
}

#[component]
fn Header() -> Element {
  let state = use_context::<AppState>();
  let api = use_context::<ApiClient>();
  let user = state.session.read().user();

  rsx!{
    nav {
      div {
        class: "nav-container",
        Link {
          class: "logo",
          to: Route::Home { },
          span { class: "logo-mark", "✓" }
          "Proof of Pips"
        }
        div {
          class: "nav-links",
          Link {
            active_class: "nav-active",
            to: Route::Home { },
            "Leaderboard"
          },
          Link {
            active_class: "nav-active",
            to: Route::Guide { },
            "Guide"
          },
          Link {
            active_class: "nav-active",
            to: Route::BlogIndex { },
            "Blog"
          },
        }
        div {
          class: "nav-session",
          if let Some(user) = user {
            if user.is_registered {
              Link {
                class: "nav-user",
                to: Route::Profile { username: user.twitter_username.clone() },
                "@{user.twitter_username}"
              }
            } else {
              span { class: "nav-user", "@{user.twitter_username}" }
            }
            button {
              class: "button button-ghost",
              onclick: move |_| {
                let api = api.clone();
                spawn(async move { state.logout(api).await });
              },
              "Log out"
            }
          }
          CtaButton { compact: true }
        }
      }
    }
  }
}

#[component]
fn Footer() -> Element {
  rsx!{
    footer {
      div {
        class: "footer-container",
        div {
          class: "copyright",
          p { "© 2025 Proof of Pips" }
          p { class: "muted", "Verified prop trader rankings. Not financial advice." }
        },
        div {
          class: "footer-links",
          Link { to: Route::Guide { }, "How it works" }
          Link { to: Route::BlogIndex { }, "Blog" }
          Link { to: Route::Privacy { }, "Privacy" }
          Link { to: Route::Terms { }, "Terms" }
          a {
            href: "https://twitter.com/proofofpips",
            target: "_blank",
            class: "social-link",
            title: "Twitter",
            svg {
              xmlns: "http://www.w3.org/2000/svg",
              width: "20",
              height: "20",
              view_box: "0 0 24 24",
              fill: "currentcolor",
              path {
                d: "M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835L1.254 2.25H8.08l4.713 6.231zm-1.161 17.52h1.833L7.084 4.126H5.117z"
              }
            }
          }
        }
      }
    }
  }
}
