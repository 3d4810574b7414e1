//! Media Tracker Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod draft;
mod error;
mod logging;
mod models;
mod routes;
mod store;
mod toast;
mod views;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
