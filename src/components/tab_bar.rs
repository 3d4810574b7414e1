//! Collection Tab Bar Component
//!
//! All / Movies / Books filter tabs above the media grid.

use leptos::prelude::*;

use crate::store::CollectionTab;

/// Tab bar for switching the visible subset; purely local, no network
#[component]
pub fn TabBar(
    active_tab: ReadSignal<CollectionTab>,
    set_active_tab: WriteSignal<CollectionTab>,
) -> impl IntoView {
    view! {
        <div class="collection-tab-bar">
            {CollectionTab::ALL.iter().map(|&tab| {
                let is_active = move || active_tab.get() == tab;
                let tab_class = move || {
                    if is_active() { "collection-tab active" } else { "collection-tab" }
                };

                view! {
                    <button
                        class=tab_class
                        on:click=move |_| set_active_tab.set(tab)
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
