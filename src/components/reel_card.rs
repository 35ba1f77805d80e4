//! Reel Card
//!
//! One full-viewport reel: video, like/save actions, partner link, caption.

use leptos::prelude::*;
use reels_core::{Engagement, Food, FoodId, Route};

use crate::components::VideoPlayer;
use crate::context::use_app_context;

#[component]
pub fn ReelCard(
    /// Live view of this reel (None once it left the list)
    food: Memo<Option<Food>>,
    is_active: Signal<bool>,
    on_like: Callback<FoodId>,
    on_save: Callback<FoodId>,
) -> impl IntoView {
    let ctx = use_app_context();

    // Identity and media never change for a given card
    let Some(initial) = food.get_untracked() else {
        return ().into_any();
    };
    let id = initial.id.clone();
    let partner_id = initial.partner_id().map(str::to_string);
    let partner_name = initial.partner_name().to_string();
    let partner_initial = initial.partner_initial();

    let flag = move |kind: Engagement| food.with(|f| f.as_ref().is_some_and(|f| f.flag(kind)));
    let count = move |kind: Engagement| food.with(|f| f.as_ref().map_or(0, |f| f.count(kind)));
    let liked = move || flag(Engagement::Like);
    let saved = move || flag(Engagement::Save);
    let likes = move || count(Engagement::Like);
    let saves = move || count(Engagement::Save);

    let like_id = id.clone();
    let on_like_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        on_like.run(like_id.clone());
    };
    let save_id = id;
    let on_save_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        on_save.run(save_id.clone());
    };

    let partner_link = partner_id.map(|pid| {
        let route = Route::PartnerProfile(pid);
        let href = route.path();
        let on_click = move |ev: web_sys::MouseEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            ctx.navigate(route.clone());
        };
        (href, on_click)
    });

    view! {
        <section class="reel">
            <VideoPlayer src=initial.video_url.clone() is_active=is_active />
            <div class="reel-shade"></div>

            <div class="reel-actions">
                <button class="reel-action" class:liked=liked on:click=on_like_click>
                    <span class="reel-icon">{move || if liked() { "♥" } else { "♡" }}</span>
                    <span class="reel-count">{likes}</span>
                </button>
                <button class="reel-action" class:saved=saved on:click=on_save_click>
                    <span class="reel-icon">{move || if saved() { "★" } else { "☆" }}</span>
                    <span class="reel-count">{saves}</span>
                </button>
            </div>

            <div class="reel-info">
                {match partner_link {
                    Some((href, on_click)) => view! {
                        <a class="reel-partner" href=href on:click=on_click>
                            <span class="avatar">{partner_initial}</span>
                            <span>{partner_name}</span>
                        </a>
                    }.into_any(),
                    None => view! {
                        <span class="reel-partner">
                            <span class="avatar">{partner_initial}</span>
                            <span>{partner_name}</span>
                        </span>
                    }.into_any(),
                }}
                <h2 class="reel-title">{initial.display_name().to_string()}</h2>
                {(!initial.description.is_empty())
                    .then(|| view! { <p class="reel-description">{initial.description.clone()}</p> })}
            </div>
        </section>
    }
    .into_any()
}
