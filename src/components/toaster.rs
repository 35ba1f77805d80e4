//! Toast Stack
//!
//! Renders the store's toasts; click to dismiss early.

use leptos::prelude::*;
use reels_core::ToastKind;

use crate::store::{store_dismiss_toast, store_toasts, use_app_store};

#[component]
pub fn Toaster() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toaster">
            <For
                each=move || store_toasts(&store)
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    let destructive = entry.toast.kind == ToastKind::Destructive;
                    view! {
                        <div
                            class="toast"
                            class:destructive=destructive
                            on:click=move |_| store_dismiss_toast(&store, id)
                        >
                            <div class="toast-title">{entry.toast.title}</div>
                            <div class="toast-description">{entry.toast.description}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
