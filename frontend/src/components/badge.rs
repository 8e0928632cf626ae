use dioxus::prelude::*;

use crate::utils::badges::Badge;

#[component]
pub fn BadgeChip(badge: Badge, #[props(default)] large: bool) -> Element {
  let size = if large { "badge badge-large" } else { "badge" };
  rsx! {
    span {
      class: "{size} {badge.color_class}",
      title: "{badge.description}",
      span { class: "badge-glyph", "{badge.glyph}" }
      span { class: "badge-name", "{badge.name}" }
    }
  }
}
