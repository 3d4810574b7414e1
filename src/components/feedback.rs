//! Loading and error placeholders shared by the list and detail pages

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading" role="status" aria-label="Loading">
            <div class="spinner"></div>
        </div>
    }
}

/// Full-page error block with an optional recovery action
#[component]
pub fn ErrorBlock(
    #[prop(into)] message: String,
    #[prop(optional)] action_label: Option<&'static str>,
    #[prop(optional, into)] on_action: Option<Callback<()>>,
) -> impl IntoView {
    let action = action_label.zip(on_action).map(|(label, on_action)| {
        view! {
            <div class="error-actions">
                <button class="error-action-btn" on:click=move |_| on_action.run(())>
                    {label}
                </button>
            </div>
        }
    });

    view! {
        <div class="error-block" role="alert">
            <strong>"Error!"</strong>
            <span class="error-message">" " {message}</span>
            {action}
        </div>
    }
}
