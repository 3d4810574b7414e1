//! Toaster Component
//!
//! Renders the notification queue; click a toast to dismiss it.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::toast::ToastKind;

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || ctx.toasts.get().toasts().to_vec()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast success",
                        ToastKind::Error => "toast error",
                    };
                    view! {
                        <div class=class role="status" on:click=move |_| ctx.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
