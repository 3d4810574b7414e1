//! Create Form View
//!
//! Add-media form: title, type, status, conditional rating/review and an
//! optional cover image with a local preview.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::api::MediaApi;
use crate::components::TypeSelector;
use crate::context::{use_app_context, CREATE_FAILED};
use crate::draft::{allowed_statuses, check_image, CoverImage, CreateMediaPayload, MediaDraft};
use crate::error::{ApiError, Result};
use crate::models::{MediaItem, MediaStatus};
use crate::routes;

/// Reads the selected file into an upload part
async fn read_cover(file: &web_sys::File) -> Result<CoverImage> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ApiError::InvalidInput(format!("Could not read the selected image: {e:?}")))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    CoverImage::new(file.name(), file.type_(), bytes)
}

async fn submit(
    api: MediaApi,
    payload: CreateMediaPayload,
    file: Option<web_sys::File>,
) -> Result<Option<MediaItem>> {
    let image = match file {
        Some(file) => Some(read_cover(&file).await?),
        None => None,
    };
    api.create(&payload, image).await
}

fn revoke_preview(url: Option<String>) {
    if let Some(url) = url {
        let _ = web_sys::Url::revoke_object_url(&url);
    }
}

#[component]
pub fn CreateView() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let draft = RwSignal::new(MediaDraft::default());
    let image = RwSignal::new_local(None::<web_sys::File>);
    let preview_url = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    on_cleanup(move || {
        if let Some(url) = preview_url.try_get_untracked() {
            revoke_preview(url);
        }
    });

    let media_type = Signal::derive(move || draft.with(|d| d.media_type));
    let visibility = move || draft.with(MediaDraft::visibility);

    let on_file_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let file = input.files().and_then(|files| files.get(0));

        if let Some(file) = &file {
            if let Err(e) = check_image(&file.type_(), file.size() as usize) {
                ctx.notify_error(e.user_message(CREATE_FAILED));
                input.set_value("");
                image.set(None);
                revoke_preview(preview_url.get_untracked());
                preview_url.set(None);
                return;
            }
        }

        revoke_preview(preview_url.get_untracked());
        preview_url.set(
            file.as_ref()
                .and_then(|file| web_sys::Url::create_object_url_with_blob(file).ok()),
        );
        image.set(file);
    };

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            if submitting.get_untracked() {
                return;
            }
            let payload = match draft.with_untracked(MediaDraft::to_payload) {
                Ok(payload) => payload,
                Err(e) => {
                    ctx.notify_error(e.user_message(CREATE_FAILED));
                    return;
                }
            };
            let file = image.get_untracked();
            submitting.set(true);

            let api = ctx.api();
            let navigate = navigate.clone();
            spawn_local(async move {
                let result = submit(api, payload, file).await;
                submitting.try_set(false);
                if ctx.finish_create(result) {
                    navigate(routes::LIST, NavigateOptions::default());
                }
            });
        }
    };

    let on_cancel = move |_| navigate(routes::LIST, NavigateOptions::default());

    view! {
        <div class="create-view">
            <h1>"Add New Media"</h1>

            <form class="media-form" on:submit=on_submit>
                <div class="form-field">
                    <label for="title">"Title *"</label>
                    <input
                        type="text"
                        id="title"
                        name="title"
                        required
                        prop:value=move || draft.with(|d| d.title.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.title = value);
                        }
                    />
                </div>

                <div class="form-field">
                    <label>"Type *"</label>
                    <TypeSelector
                        current_type=media_type
                        on_change=move |t| draft.update(|d| d.set_type(t))
                    />
                </div>

                <div class="form-field">
                    <label for="status">"Status *"</label>
                    <select
                        id="status"
                        name="status"
                        required
                        on:change=move |ev| {
                            let status = MediaStatus::parse(&event_target_value(&ev));
                            draft.update(|d| d.set_status(status));
                        }
                    >
                        {move || {
                            let current = media_type.get();
                            allowed_statuses(current).into_iter().map(|status| {
                                view! {
                                    <option
                                        value=status.as_str()
                                        prop:selected=move || draft.with(|d| d.status == status)
                                    >
                                        {status.label(current)}
                                    </option>
                                }
                            }).collect_view()
                        }}
                    </select>
                </div>

                <Show when=move || visibility().rating>
                    <div class="form-field">
                        <label for="rating">"Rating (1-5)"</label>
                        <input
                            type="number"
                            id="rating"
                            name="rating"
                            min="1"
                            max="5"
                            step="1"
                            prop:value=move || draft.with(|d| d.rating.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.rating = value);
                            }
                        />
                    </div>
                </Show>

                <Show when=move || visibility().review>
                    <div class="form-field">
                        <label for="review">"Review"</label>
                        <textarea
                            id="review"
                            name="review"
                            rows="4"
                            prop:value=move || draft.with(|d| d.review.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.review = value);
                            }
                        ></textarea>
                    </div>
                </Show>

                <div class="form-field">
                    <label for="image">"Cover Image"</label>
                    <input type="file" id="image" name="image" accept="image/*" on:change=on_file_change />
                    <p class="form-hint">"Recommended: Square image, max 5MB"</p>
                    {move || preview_url.get().map(|url| view! {
                        <img class="cover-preview" src=url alt="Cover preview" />
                    })}
                </div>

                <div class="form-actions">
                    <button type="button" class="cancel-btn" on:click=on_cancel>
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="submit-btn"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Adding..." } else { "Add Media" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
