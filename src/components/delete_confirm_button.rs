//! Delete Confirm Button Component
//!
//! Inline delete confirmation: nothing is deleted until the user confirms.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows "Delete" initially. When clicked, shows "Delete?" with ✓/✗ buttons.
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `busy` - true while a delete is in flight; hides the actions
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || busy.get()>
            <span class="delete-busy">"Deleting..."</span>
        </Show>
        <Show when=move || !busy.get() && !confirm_delete.get()>
            <button
                class=button_class.clone()
                on:click=move |ev| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                "Delete"
            </button>
        </Show>
        <Show when=move || !busy.get() && confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    title="Yes, delete this item"
                    on:click=move |ev| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    title="Keep it"
                    on:click=move |ev| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
