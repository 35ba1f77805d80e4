use leptos::prelude::*;
use reels_core::Route;

use crate::context::use_app_context;

#[component]
pub fn NotFound(path: String) -> impl IntoView {
    let ctx = use_app_context();
    log::warn!("[app] no route for {}", path);

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Oops! Page not found"</p>
            <a
                class="button"
                href="/"
                on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(Route::Landing);
                }
            >
                "Return to Home"
            </a>
        </div>
    }
}
