use leptos::prelude::*;

use crate::models::rating_stars;

/// Five stars, filled up to `rating`
#[component]
pub fn RatingStars(rating: u8, #[prop(optional)] large: bool) -> impl IntoView {
    let class = if large { "rating-stars large" } else { "rating-stars" };

    view! {
        <div class=class title=format!("{rating} out of 5")>
            {rating_stars(rating).into_iter().map(|filled| view! {
                <span class=if filled { "star filled" } else { "star" }>"★"</span>
            }).collect_view()}
        </div>
    }
}
