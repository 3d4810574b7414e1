//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{info, warn};

use crate::api::MediaApi;
use crate::error::Result;
use crate::models::{MediaId, MediaItem};
use crate::store::{load_all, store_begin_load, AppStore};
use crate::toast::{ToastKind, ToastQueue};

/// How long a toast stays up unless clicked away
const TOAST_TIMEOUT_MS: u32 = 4_000;

const DELETED: &str = "Item deleted successfully";
const DELETE_FAILED: &str = "Failed to delete item. Please try again.";
const CREATED: &str = "Media added successfully!";
pub(crate) const CREATE_FAILED: &str = "Failed to add media. Please try again.";

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Root collection store
    pub store: AppStore,
    /// API client (reqwest's wasm client is not `Send`)
    api: StoredValue<MediaApi, LocalStorage>,
    /// Visible notifications
    pub toasts: RwSignal<ToastQueue>,
}

/// Synchronous half of a finished mutation: the toast it queued and the
/// load it began, both still waiting for their async follow-ups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Settled {
    toast: Option<u64>,
    reload: Option<u64>,
}

impl AppContext {
    pub fn new(store: AppStore, api: MediaApi) -> Self {
        Self {
            store,
            api: StoredValue::new_local(api),
            toasts: RwSignal::new(ToastQueue::default()),
        }
    }

    /// Client handle for a request
    pub fn api(&self) -> MediaApi {
        self.api.get_value()
    }

    /// Re-fetch the whole collection from the backend
    pub fn refresh(&self) {
        let generation = store_begin_load(&self.store);
        self.spawn_load(generation);
    }

    fn spawn_load(&self, generation: u64) {
        spawn_local(load_all(self.store, self.api(), generation));
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message.into());
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        self.notify(ToastKind::Error, message.into());
    }

    fn notify(&self, kind: ToastKind, message: String) {
        let id = self.toasts.try_update(|queue| queue.push(kind, message));
        self.schedule_dismiss(id);
    }

    fn schedule_dismiss(&self, id: Option<u64>) {
        let Some(id) = id else {
            return;
        };
        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            toasts.try_update(|queue| queue.dismiss(id));
        });
    }

    /// Dismiss a toast early
    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|queue| queue.dismiss(id));
    }

    /// Settles a delete request. Returns `true` when the item is gone.
    pub fn finish_delete(&self, id: &MediaId, result: Result<()>) -> bool {
        match &result {
            Ok(()) => info!(%id, "item deleted"),
            Err(e) => warn!(%id, error = %e, "delete failed"),
        }
        let done = result.is_ok();
        let settled = self.settle(result, DELETED, DELETE_FAILED);
        self.follow_up(settled);
        done
    }

    /// Settles a create request. Returns `true` when the item was stored.
    pub fn finish_create(&self, result: Result<Option<MediaItem>>) -> bool {
        let result = match result {
            Ok(created) => {
                match created {
                    Some(item) => info!(id = %item.id, "media added"),
                    None => info!("media added"),
                }
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "create failed");
                Err(e)
            }
        };
        let done = result.is_ok();
        let settled = self.settle(result, CREATED, CREATE_FAILED);
        self.follow_up(settled);
        done
    }

    /// Queues the outcome toast and, on success, begins a collection reload.
    /// The collection itself is never touched on failure.
    fn settle(&self, result: Result<()>, success: &str, fallback: &str) -> Settled {
        let (kind, message, reload) = match result {
            Ok(()) => (
                ToastKind::Success,
                success.to_string(),
                Some(store_begin_load(&self.store)),
            ),
            Err(e) => (ToastKind::Error, e.user_message(fallback), None),
        };
        let toast = self.toasts.try_update(|queue| queue.push(kind, message));
        Settled { toast, reload }
    }

    fn follow_up(&self, settled: Settled) {
        self.schedule_dismiss(settled.toast);
        if let Some(generation) = settled.reload {
            self.spawn_load(generation);
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::error::ApiError;
    use crate::models::{MediaStatus, MediaType};
    use crate::store::{AppState, AppStateStoreFields};
    use pretty_assertions::assert_eq;
    use reactive_stores::Store;

    fn context() -> AppContext {
        AppContext::new(
            Store::new(AppState::new()),
            MediaApi::new(ApiConfig::default()),
        )
    }

    fn dune() -> MediaItem {
        MediaItem {
            id: MediaId::new("1"),
            title: "Dune".into(),
            media_type: MediaType::Movie,
            status: MediaStatus::Watched,
            rating: Some(5),
            review: None,
            image_url: None,
            created_at: None,
        }
    }

    fn last_toast(ctx: &AppContext) -> (ToastKind, String) {
        ctx.toasts.with_untracked(|queue| {
            let toast = queue.toasts().last().cloned().unwrap();
            (toast.kind, toast.message)
        })
    }

    #[test]
    fn failed_delete_keeps_collection_and_reports() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = context();
            ctx.store.media().set(vec![dune()]);
            ctx.store.loading().set(false);
            let generation = ctx.store.load_generation().get_untracked();

            let settled = ctx.settle(
                Err(ApiError::Transport("offline".into())),
                DELETED,
                DELETE_FAILED,
            );

            assert_eq!(settled.reload, None);
            assert!(settled.toast.is_some());
            assert_eq!(ctx.store.media().get_untracked(), vec![dune()]);
            assert_eq!(ctx.store.load_generation().get_untracked(), generation);
            assert!(!ctx.store.loading().get_untracked());
            assert_eq!(
                last_toast(&ctx),
                (ToastKind::Error, DELETE_FAILED.to_string())
            );
        });
    }

    #[test]
    fn rejected_delete_shows_backend_message() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = context();
            ctx.settle(
                Err(ApiError::Rejected {
                    status: 409,
                    message: Some("Item is locked".into()),
                }),
                DELETED,
                DELETE_FAILED,
            );
            assert_eq!(
                last_toast(&ctx),
                (ToastKind::Error, "Item is locked".to_string())
            );
        });
    }

    #[test]
    fn successful_mutation_begins_reload() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = context();
            ctx.store.loading().set(false);
            let generation = ctx.store.load_generation().get_untracked();

            let settled = ctx.settle(Ok(()), CREATED, CREATE_FAILED);

            assert_eq!(settled.reload, Some(generation + 1));
            assert_eq!(ctx.store.load_generation().get_untracked(), generation + 1);
            assert!(ctx.store.loading().get_untracked());
            assert_eq!(last_toast(&ctx), (ToastKind::Success, CREATED.to_string()));
        });
    }
}
