//! Root Application State Store
//!
//! Holds the one in-memory collection snapshot plus its loading/error flags.
//! Uses Leptos reactive_stores for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::{debug, info, warn};

use crate::api::MediaApi;
use crate::error::ApiError;
use crate::models::{MediaItem, MediaType};

const LOAD_FAILED: &str = "Failed to fetch media. Please try again later.";

/// Root state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Whole collection as last delivered by the backend
    pub media: Vec<MediaItem>,
    /// A collection load is outstanding
    pub loading: bool,
    /// Message of the last failed load
    pub error: Option<String>,
    /// Bumped per load; results of older loads are dropped
    pub load_generation: u64,
}

impl AppState {
    /// Initial state: loading, since the first fetch starts on mount
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Marks a load as started and returns its generation
pub fn store_begin_load(store: &AppStore) -> u64 {
    let generation = store.load_generation().get_untracked() + 1;
    store.load_generation().set(generation);
    store.loading().set(true);
    store.error().set(None);
    generation
}

/// Applies a load result unless a newer load has started since.
///
/// Success replaces the collection wholesale; failure keeps it and records
/// the message.
pub fn store_finish_load(store: &AppStore, generation: u64, result: Result<Vec<MediaItem>, ApiError>) {
    if store.load_generation().get_untracked() != generation {
        debug!(generation, "dropping superseded collection load");
        return;
    }
    match result {
        Ok(items) => {
            info!(count = items.len(), "collection loaded");
            store.media().set(items);
        }
        Err(e) => {
            warn!(error = %e, domain = e.is_domain_failure(), "collection load failed");
            store.error().set(Some(e.user_message(LOAD_FAILED)));
        }
    }
    store.loading().set(false);
}

/// Fetches the full collection for a load begun with [`store_begin_load`]
pub async fn load_all(store: AppStore, api: MediaApi, generation: u64) {
    let result = api.list().await;
    store_finish_load(&store, generation, result);
}

/// Items whose type equals `media_type`, order and duplicates preserved
pub fn filter_by_type(items: &[MediaItem], media_type: MediaType) -> Vec<MediaItem> {
    items
        .iter()
        .filter(|item| item.media_type == media_type)
        .cloned()
        .collect()
}

/// List view tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollectionTab {
    #[default]
    All,
    Movies,
    Books,
}

impl CollectionTab {
    pub const ALL: [CollectionTab; 3] = [Self::All, Self::Movies, Self::Books];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Movies => "Movies",
            Self::Books => "Books",
        }
    }

    /// Type filter for this tab; `None` shows everything
    pub fn media_type(&self) -> Option<MediaType> {
        match self {
            Self::All => None,
            Self::Movies => Some(MediaType::Movie),
            Self::Books => Some(MediaType::Book),
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            Self::All => "Your collection is empty. Let's add some media!",
            Self::Movies => "You haven't added any movies yet.",
            Self::Books => "You haven't added any books yet.",
        }
    }

    /// Subset of `items` this tab displays
    pub fn visible_items(&self, items: &[MediaItem]) -> Vec<MediaItem> {
        match self.media_type() {
            Some(media_type) => filter_by_type(items, media_type),
            None => items.to_vec(),
        }
    }
}
