#![allow(non_snake_case)]
mod components;
mod config;
mod pages;
mod state;
mod utils;

use components::template::Template;
use dioxus::prelude::*;
use pages::{
  blog::{BlogIndex, BlogPost},
  home::Home,
  legal::{Guide, PageNotFound, Privacy, Terms},
  profile::Profile,
};

#[derive(Routable, PartialEq, Clone)]
enum Route {
  #[layout(Template)]
  #[route("/")]
  Home {},
  #[route("/profile/:username")]
  Profile { username: String },
  #[route("/privacy")]
  Privacy {},
  #[route("/terms")]
  Terms {},
  #[route("/guide")]
  Guide {},
  #[route("/blog")]
  BlogIndex {},
  #[route("/blog/:slug")]
  BlogPost { slug: String },
  #[route("/:..route")]
  PageNotFound { route: Vec<String> },
}

fn main() {
  dioxus::launch(App);
}

fn App() -> Element {
  rsx! { Router::<Route> {} }
}
