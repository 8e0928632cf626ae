use std::time::Duration;
use dioxus::prelude::*;

use crate::utils::ads::{ad_for_slot, next_offset, ROTATION_SECS, SLOTS_PER_SIDE};

const FLIP_MILLIS: u64 = 600;

/// Sponsor rails on both sides of the page content; both rotate together.
#[component]
pub fn AdLayout(children: Element) -> Element {
  let mut offset = use_signal(|| 0usize);
  let mut rotating = use_signal(|| false);

  // scope-owned, so it stops when the page unmounts
  use_future(move || async move {
    loop {
      async_std::task::sleep(Duration::from_secs(ROTATION_SECS)).await;
      rotating.set(true);
      async_std::task::sleep(Duration::from_millis(FLIP_MILLIS)).await;
      offset.set(next_offset(offset()));
      rotating.set(false);
    }
  });

  rsx! {
    div {
      class: "ad-layout",
      aside {
        class: "ad-rail",
        for slot in 0..SLOTS_PER_SIDE {
          AdBox { key: "{slot}", slot, offset: offset(), rotating: rotating() }
        }
      }
      div { class: "ad-content", {children} }
      aside {
        class: "ad-rail",
        for slot in SLOTS_PER_SIDE..2 * SLOTS_PER_SIDE {
          AdBox { key: "{slot}", slot, offset: offset(), rotating: rotating() }
        }
      }
    }
  }
}

#[component]
fn AdBox(slot: usize, offset: usize, rotating: bool) -> Element {
  let ad = ad_for_slot(slot, offset);
  rsx! {
    a {
      class: if rotating { "ad-box {ad.color_class} ad-rotating" } else { "ad-box {ad.color_class}" },
      href: ad.url,
      target: "_blank",
      rel: "noopener noreferrer",
      div {
        class: "ad-title",
        span { class: "ad-logo", "{ad.logo}" }
        span { "{ad.name}" }
      }
      p { class: "ad-description", "{ad.description}" }
      span { class: "ad-more", "Learn More →" }
    }
  }
}
