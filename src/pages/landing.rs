use leptos::prelude::*;
use reels_core::Route;

use crate::context::use_app_context;

/// Public entry page; signed-in viewers go straight to their home view
#[component]
pub fn Landing() -> impl IntoView {
    let ctx = use_app_context();

    Effect::new(move |_| {
        if let Some(role) = ctx.session.with(|s| s.role()) {
            ctx.redirect(Route::home(role));
        }
    });

    let go = move |route: Route| {
        move |ev: web_sys::MouseEvent| {
            ev.prevent_default();
            ctx.navigate(route.clone());
        }
    };

    view! {
        <div class="landing">
            <h1 class="landing-title">"FoodReels"</h1>
            <p class="landing-tagline">"Discover dishes near you, one short video at a time."</p>
            <div class="landing-actions">
                <a class="button primary" href="/login" on:click=go(Route::Login)>"Sign in"</a>
                <a class="button" href="/register" on:click=go(Route::Register)>"Create account"</a>
            </div>
            <a class="landing-partner" href="/food-partner/register" on:click=go(Route::PartnerRegister)>
                "Own a restaurant? Join as a food partner"
            </a>
        </div>
    }
}
