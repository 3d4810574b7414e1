//! List View
//!
//! Collection grid with type tabs and per-card delete.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ErrorBlock, LoadingSpinner, MediaCard, TabBar};
use crate::context::use_app_context;
use crate::models::MediaId;
use crate::routes;
use crate::store::{use_app_store, AppStateStoreFields, CollectionTab};

#[component]
pub fn ListView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (active_tab, set_active_tab) = signal(CollectionTab::default());
    // Ids with a delete request in flight
    let deleting = RwSignal::new(HashSet::<MediaId>::new());

    let on_delete = Callback::new(move |id: MediaId| {
        if deleting.with_untracked(|ids| ids.contains(&id)) {
            return;
        }
        deleting.update(|ids| {
            ids.insert(id.clone());
        });

        let api = ctx.api();
        spawn_local(async move {
            let result = api.delete(&id).await;
            deleting.try_update(|ids| ids.remove(&id));
            ctx.finish_delete(&id, result);
        });
    });

    move || {
        if store.loading().get() {
            return view! { <LoadingSpinner /> }.into_any();
        }
        if let Some(message) = store.error().get() {
            return view! {
                <ErrorBlock
                    message=message
                    action_label="Try Again"
                    on_action=move |_| ctx.refresh()
                />
            }
            .into_any();
        }

        let tab = active_tab.get();
        let items = store.media().with(|media| tab.visible_items(media));

        let grid = if items.is_empty() {
            view! {
                <div class="empty-state">
                    <h3>"No items found"</h3>
                    <p>{tab.empty_message()}</p>
                </div>
            }
            .into_any()
        } else {
            view! {
                <div class="media-grid">
                    {items.into_iter().map(|item| {
                        let id = item.id.clone();
                        let is_deleting = Signal::derive(move || deleting.with(|ids| ids.contains(&id)));
                        view! {
                            <MediaCard item=item deleting=is_deleting on_delete=on_delete />
                        }
                    }).collect_view()}
                </div>
            }
            .into_any()
        };

        view! {
            <div class="list-view">
                <div class="list-header">
                    <h1>"My Media Collection"</h1>
                    <a href=routes::CREATE class="add-link">"Add New Item"</a>
                </div>
                <TabBar active_tab=active_tab set_active_tab=set_active_tab />
                {grid}
            </div>
        }
        .into_any()
    }
}
