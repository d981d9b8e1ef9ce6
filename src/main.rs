//! TaskFlow Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod error;
mod hooks;
mod models;
mod pages;
mod pagination;
mod session;
mod utils;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
