//! Detail View
//!
//! One item, fetched by the id in the route. Keeps its own
//! loading/error/item state apart from the root store.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;
use tracing::warn;

use crate::components::{CoverImage, DeleteConfirmButton, ErrorBlock, LoadingSpinner, RatingStars};
use crate::config::DETAIL_PLACEHOLDER;
use crate::context::use_app_context;
use crate::error::ApiError;
use crate::models::{MediaId, MediaItem};
use crate::routes;

const LOAD_FAILED: &str = "Failed to load media details. Please try again later.";
const NOT_FOUND: &str = "Media not found";

/// Error text for a failed detail fetch
fn detail_error_message(error: &ApiError) -> String {
    match error {
        ApiError::MissingPayload | ApiError::Rejected { message: None, .. } => NOT_FOUND.to_string(),
        other => other.user_message(LOAD_FAILED),
    }
}

#[component]
pub fn DetailView() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();
    let navigate = use_navigate();

    let id = Memo::new(move |_| params.read().get("id").map(MediaId::new));
    let item = RwSignal::new(None::<MediaItem>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let deleting = RwSignal::new(false);
    // Bumped per fetch; responses for an older id are dropped
    let request = RwSignal::new(0u64);

    Effect::new(move |_| {
        let Some(id) = id.get() else {
            loading.set(false);
            error.set(Some(NOT_FOUND.to_string()));
            return;
        };
        let generation = request.get_untracked() + 1;
        request.set(generation);
        loading.set(true);
        error.set(None);
        item.set(None);

        let api = ctx.api();
        spawn_local(async move {
            let result = api.get(&id).await;
            // View disposed or id changed while the request was out.
            if request.try_get_untracked() != Some(generation) {
                return;
            }
            match result {
                Ok(found) => {
                    item.try_set(Some(found));
                }
                Err(e) => {
                    warn!(%id, error = %e, "detail fetch failed");
                    error.try_set(Some(detail_error_message(&e)));
                }
            }
            loading.try_set(false);
        });
    });

    let go_home = {
        let navigate = navigate.clone();
        move || navigate(routes::LIST, NavigateOptions::default())
    };

    let on_delete = Callback::new({
        let navigate = navigate.clone();
        move |_: ()| {
            let Some(id) = id.get_untracked() else {
                return;
            };
            if deleting.get_untracked() {
                return;
            }
            deleting.set(true);

            let api = ctx.api();
            let navigate = navigate.clone();
            spawn_local(async move {
                let result = api.delete(&id).await;
                deleting.try_set(false);
                if ctx.finish_delete(&id, result) {
                    navigate(routes::LIST, NavigateOptions::default());
                }
            });
        }
    });

    move || {
        if loading.get() {
            return view! { <LoadingSpinner /> }.into_any();
        }
        let current = item.get();
        let Some(media) = current.filter(|_| error.with(Option::is_none)) else {
            let message = error.get().unwrap_or_else(|| NOT_FOUND.to_string());
            let go_home = go_home.clone();
            return view! {
                <ErrorBlock
                    message=message
                    action_label="Go Back"
                    on_action=move |_| go_home()
                />
            }
            .into_any();
        };

        let go_home = go_home.clone();
        let cover = media.cover_src(DETAIL_PLACEHOLDER);
        let status_label = media.status.label(media.media_type);
        let review = media.review_text().map(str::to_string);
        let added_on = media.added_on();

        view! {
            <div class="detail-view">
                <div class="detail-cover">
                    <CoverImage src=cover alt=media.title.clone() placeholder=DETAIL_PLACEHOLDER />
                </div>

                <div class="detail-body">
                    <div class="detail-header">
                        <div>
                            <h1>{media.title.clone()}</h1>
                            <div class="detail-badges">
                                <span class="type-badge">{media.media_type.as_str()}</span>
                                <span class=media.status.badge_class()>{status_label}</span>
                            </div>
                        </div>
                        <button class="close-btn" title="Back to list" on:click=move |_| go_home()>
                            "✕"
                        </button>
                    </div>

                    {media.rating.map(|rating| view! {
                        <div class="detail-section">
                            <h3>"Rating:"</h3>
                            <RatingStars rating=rating large=true />
                        </div>
                    })}

                    {review.map(|review| view! {
                        <div class="detail-section">
                            <h3>"Review:"</h3>
                            <p class="detail-review">{review}</p>
                        </div>
                    })}

                    <div class="detail-footer">
                        <div class="added-on">
                            {added_on.map(|date| format!("Added on: {date}"))}
                        </div>
                        <DeleteConfirmButton
                            button_class="delete-btn large"
                            busy=deleting
                            on_confirm=on_delete
                        />
                    </div>
                </div>
            </div>
        }
        .into_any()
    }
}
