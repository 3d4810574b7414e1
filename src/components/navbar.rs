//! Top navigation bar

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes;

/// Brand link plus Home / Add New, highlighting the current route
#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let link_class = move |path: &'static str| {
        move || {
            if location.pathname.get() == path {
                "nav-link active"
            } else {
                "nav-link"
            }
        }
    };

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <a href=routes::LIST class="navbar-brand">"Movies and Books Tracker"</a>
                <div class="navbar-links">
                    <a href=routes::LIST class=link_class(routes::LIST)>"Home"</a>
                    <a href=routes::CREATE class=link_class(routes::CREATE)>"Add New"</a>
                </div>
            </div>
        </nav>
    }
}
