use leptos::prelude::*;

use crate::routes;

/// Fallback for any unmatched route
#[component]
pub fn NotFoundView() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <h2>"Page Not Found"</h2>
            <p>"The page you're looking for doesn't exist or has been moved."</p>
            <a href=routes::LIST class="home-link">"Go Back Home"</a>
        </div>
    }
}
