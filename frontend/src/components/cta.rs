use dioxus::prelude::*;

use crate::{
  state::{navigate_external, AppState, ModalKind},
  utils::{api::ApiClient, session::CallToAction},
};

/// Join / Complete Signup / Link Account, depending on the session.
#[component]
pub fn CtaButton(#[props(default)] compact: bool) -> Element {
  let mut state = use_context::<AppState>();
  let api = use_context::<ApiClient>();
  let Some(action) = state.session.read().call_to_action() else {
    return rsx! {};
  };

  let class = if compact { "button button-primary button-small" } else { "button button-primary" };
  rsx! {
    button {
      class,
      onclick: move |_| match action {
        CallToAction::Join => {
          navigate_external(&api.login_url());
        }
        CallToAction::CompleteSignup => state.modal.set(Some(ModalKind::PostAuth)),
        CallToAction::LinkAccount => state.modal.set(Some(ModalKind::LinkAccount)),
      },
      if action == CallToAction::Join { "＋ " }
      "{action.label()}"
    }
  }
}
