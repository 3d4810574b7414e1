//! Cover Image Component
//!
//! `<img>` that swaps to a placeholder when the URL fails to load.

use leptos::prelude::*;

#[component]
pub fn CoverImage(
    /// Image URL (already substituted with the placeholder when absent)
    src: String,
    #[prop(into)] alt: String,
    placeholder: &'static str,
) -> impl IntoView {
    let (failed, set_failed) = signal(false);
    let current_src = move || {
        if failed.get() {
            placeholder.to_string()
        } else {
            src.clone()
        }
    };

    view! {
        <img
            src=current_src
            alt=alt
            on:error=move |_| {
                // Only swap once so a broken placeholder cannot loop.
                if !failed.get_untracked() {
                    set_failed.set(true);
                }
            }
        />
    }
}
