//! Media Card Component
//!
//! Summary card for one item in the collection grid.

use leptos::prelude::*;

use crate::components::{CoverImage, DeleteConfirmButton, RatingStars};
use crate::config::CARD_PLACEHOLDER;
use crate::models::{MediaId, MediaItem};
use crate::routes;

#[component]
pub fn MediaCard(
    item: MediaItem,
    /// A delete of this item is in flight
    #[prop(into)]
    deleting: Signal<bool>,
    #[prop(into)] on_delete: Callback<MediaId>,
) -> impl IntoView {
    let id = item.id.clone();
    let detail_href = routes::detail(&item.id);
    let cover = item.cover_src(CARD_PLACEHOLDER);
    let status_label = item.status.label(item.media_type);
    let review = item.review_text().map(str::to_string);

    view! {
        <div class="media-card">
            <div class="media-card-cover">
                <CoverImage src=cover alt=item.title.clone() placeholder=CARD_PLACEHOLDER />
            </div>

            <div class="media-card-body">
                <div class="media-card-header">
                    <h3 class="media-card-title">{item.title.clone()}</h3>
                    <span class="type-badge">{item.media_type.as_str()}</span>
                </div>

                <div class="media-card-status">
                    <span class=item.status.badge_class()>{status_label}</span>
                </div>

                {item.rating.map(|rating| view! { <RatingStars rating=rating /> })}

                {review.map(|review| view! { <p class="media-card-review">{review}</p> })}

                <div class="media-card-actions">
                    <a href=detail_href class="details-link">"View Details"</a>
                    <DeleteConfirmButton
                        button_class="delete-btn"
                        busy=deleting
                        on_confirm=move |_| on_delete.run(id.clone())
                    />
                </div>
            </div>
        </div>
    }
}
