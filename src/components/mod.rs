//! UI Components
//!
//! Reusable Leptos components.

mod cover_image;
mod delete_confirm_button;
mod feedback;
mod media_card;
mod navbar;
mod rating_stars;
mod tab_bar;
mod toaster;
mod type_selector;

pub use cover_image::CoverImage;
pub use delete_confirm_button::DeleteConfirmButton;
pub use feedback::{ErrorBlock, LoadingSpinner};
pub use media_card::MediaCard;
pub use navbar::Navbar;
pub use rating_stars::RatingStars;
pub use tab_bar::TabBar;
pub use toaster::Toaster;
pub use type_selector::TypeSelector;
