//! Type Selector Component
//!
//! Movie / Book toggle buttons.

use leptos::prelude::*;

use crate::models::MediaType;

/// Selectable media types
pub const MEDIA_TYPES: [MediaType; 2] = [MediaType::Movie, MediaType::Book];

/// Type selector buttons for the create form
#[component]
pub fn TypeSelector(
    #[prop(into)] current_type: Signal<MediaType>,
    on_change: impl Fn(MediaType) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="type-selector" role="radiogroup" aria-label="Type">
            {MEDIA_TYPES.iter().map(|&media_type| {
                let is_selected = move || current_type.get() == media_type;
                view! {
                    <button
                        type="button"
                        role="radio"
                        aria-checked=move || is_selected().to_string()
                        class=move || if is_selected() { "type-btn active" } else { "type-btn" }
                        on:click=move |_| on_change(media_type)
                    >
                        {media_type.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
