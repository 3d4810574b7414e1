//! Media Tracker App
//!
//! Root component: owns the collection store, provides context, and routes
//! between the list, create, detail and not-found pages.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;
use tracing::{error, info};

use crate::api::MediaApi;
use crate::components::{Navbar, Toaster};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::store::AppState;
use crate::views::{CreateView, DetailView, ListView, NotFoundView};

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_build_env().unwrap_or_else(|e| {
        error!(error = %e, "invalid API configuration, using defaults");
        ApiConfig::default()
    });
    info!(api = config.base_url(), "starting media tracker");

    // State
    let store = Store::new(AppState::new());
    let ctx = AppContext::new(store, MediaApi::new(config));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load the collection once on mount
    Effect::new(move |_| {
        ctx.refresh();
    });

    view! {
        <Router>
            <div class="app-layout">
                <Navbar />
                <main class="main-content">
                    <Routes fallback=|| view! { <NotFoundView /> }>
                        <Route path=path!("/") view=ListView />
                        <Route path=path!("/add") view=CreateView />
                        <Route path=path!("/media/:id") view=DetailView />
                    </Routes>
                </main>
                <Toaster />
            </div>
        </Router>
    }
}
