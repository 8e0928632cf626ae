use dioxus::prelude::*;

use crate::{
  utils::{
    blog::{find_post, posts_in, CATEGORIES},
    markdown::{emphasis_runs, parse_blocks, Block},
  },
  Route,
};

#[component]
pub fn BlogIndex() -> Element {
  let mut category = use_signal(|| None::<&'static str>);
  let posts = posts_in(category());

  rsx! {
    document::Title { "Trading Education | Proof of Pips" }
    div {
      class: "blog-page",
      div {
        class: "blog-hero",
        h1 { "Trading Education" }
        p { class: "muted", "Learn from verified prop traders and level up your trading game" }
      }
      div {
        class: "chip-row",
        button {
          class: if category().is_none() { "chip chip-active" } else { "chip" },
          onclick: move |_| category.set(None),
          "All Posts"
        }
        for cat in CATEGORIES {
          button {
            key: "{cat}",
            class: if category() == Some(cat) { "chip chip-active" } else { "chip" },
            onclick: move |_| category.set(Some(cat)),
            "{cat}"
          }
        }
      }
      div {
        class: "blog-grid",
        for post in posts {
          Link {
            key: "{post.slug}",
            class: "blog-card",
            to: Route::BlogPost { slug: post.slug.to_string() },
            div { class: "blog-thumb", "{post.thumbnail}" }
            span { class: "tag", "{post.category}" }
            h3 { "{post.title}" }
            p { class: "muted", "{post.excerpt}" }
            div { class: "blog-meta", span { "{post.read_time}" } }
          }
        }
      }
    }
  }
}

#[component]
pub fn BlogPost(slug: String) -> Element {
  let Some(post) = find_post(&slug) else {
    return rsx! {
      document::Title { "Post not found | Proof of Pips" }
      div {
        class: "empty-state",
        h2 { "Post Not Found" }
        p { class: "muted", "There is no article at /blog/{slug}." }
        Link { class: "button button-primary", to: Route::BlogIndex {}, "Back to Blog" }
      }
    };
  };
  let title = format!("{} | Proof of Pips", post.title);
  let published = post.display_date();

  rsx! {
    document::Title { "{title}" }
    article {
      class: "blog-post",
      Link { class: "back-link", to: Route::BlogIndex {}, "← Back to Blog" }
      div {
        class: "blog-meta",
        span { class: "tag", "{post.category}" }
        span { "📅 {published}" }
        span { "⏱ {post.read_time}" }
      }
      Markdown { source: post.content }
      div {
        class: "blog-cta",
        h3 { "See who's really getting paid" }
        Link { class: "button button-primary", to: Route::Home {}, "View Leaderboard" }
      }
    }
  }
}

#[component]
fn Markdown(source: &'static str) -> Element {
  rsx! {
    div {
      class: "prose",
      for (idx, block) in parse_blocks(source).into_iter().enumerate() {
        MarkdownBlock { key: "{idx}", block }
      }
    }
  }
}

#[component]
fn MarkdownBlock(block: Block) -> Element {
  match block {
    Block::Heading { level: 1, text } => rsx! { h1 { Inline { text } } },
    Block::Heading { level: 2, text } => rsx! { h2 { Inline { text } } },
    Block::Heading { text, .. } => rsx! { h3 { Inline { text } } },
    Block::Paragraph(text) => rsx! { p { Inline { text } } },
    Block::Bullets(items) => rsx! {
      ul { for text in items { li { Inline { text } } } }
    },
    Block::Numbered(items) => rsx! {
      ol { for text in items { li { Inline { text } } } }
    },
    Block::Rule => rsx! { hr {} },
  }
}

#[component]
fn Inline(text: String) -> Element {
  rsx! {
    for (bold, run) in emphasis_runs(&text) {
      if bold {
        strong { "{run}" }
      } else {
        "{run}"
      }
    }
  }
}
