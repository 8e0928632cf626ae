use std::time::Duration;
use dioxus::prelude::*;
use uuid::Uuid;

use crate::state::{AppState, ToastKind};

const TOAST_MILLIS: u64 = 3_000;

#[component]
pub fn ToastStack() -> Element {
  let state = use_context::<AppState>();

  rsx! {
    div {
      class: "toast-stack",
      for toast in state.toasts.read().iter() {
        ToastItem { key: "{toast.id}", id: toast.id, kind: toast.kind, message: toast.message.clone() }
      }
    }
  }
}

#[component]
fn ToastItem(id: Uuid, kind: ToastKind, message: String) -> Element {
  let mut state = use_context::<AppState>();

  // dropped with the toast, so a manual dismiss also stops the timer
  use_future(move || async move {
    async_std::task::sleep(Duration::from_millis(TOAST_MILLIS)).await;
    state.dismiss(id);
  });

  let (class, icon) = match kind {
    ToastKind::Success => ("toast toast-success", "✓"),
    ToastKind::Error => ("toast toast-error", "!"),
    ToastKind::Info => ("toast toast-info", "i"),
  };

  rsx! {
    div {
      class,
      role: "status",
      span { class: "toast-icon", "{icon}" }
      span { class: "toast-message", "{message}" }
      button {
        class: "toast-close",
        onclick: move |_| state.dismiss(id),
        "×"
      }
    }
  }
}
