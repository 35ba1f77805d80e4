//! Food Partner Profile
//!
//! Public profile of one partner as a consumer sees it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reels_core::{loaders, PartnerProfile, Route};

use crate::commands;
use crate::components::{FoodGrid, Layout, Spinner};
use crate::context::use_app_context;

#[component]
pub fn FoodPartnerPage(partner_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let profile = RwSignal::new(None::<PartnerProfile>);
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        let loaded =
            loaders::load_partner_profile(&commands::api(), &ctx.notifier(), &partner_id).await;
        profile.set(loaded);
        set_loading.set(false);
    });

    let back_to_feed = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ctx.navigate(Route::Feed);
    };

    view! {
        <Layout>
            {move || {
                if loading.get() {
                    return view! { <Spinner /> }.into_any();
                }
                let Some(PartnerProfile { partner: Some(partner), foods }) = profile.get() else {
                    return view! {
                        <div class="empty-state">
                            <h2>"Partner not found"</h2>
                            <a class="button" href="/feed" on:click=back_to_feed>"Back to Feed"</a>
                        </div>
                    }
                    .into_any();
                };
                let reel_count = foods.len();
                view! {
                    <div class="partner-profile">
                        <a class="back-link" href="/feed" on:click=back_to_feed>"← Back to Feed"</a>
                        <header class="partner-header">
                            <div class="avatar large">{partner.initial()}</div>
                            <div>
                                <h1>{partner.name.clone()}</h1>
                                <p class="muted">{format!("{} food reels", reel_count)}</p>
                            </div>
                        </header>
                        <ul class="partner-contact">
                            {partner.address.clone().map(|address| view! { <li>"📍 " {address}</li> })}
                            {partner.phone.clone().map(|phone| view! { <li>"📞 " {phone}</li> })}
                            <li>"✉ " {partner.email.clone()}</li>
                        </ul>
                        <h2>"Food Reels"</h2>
                        {if foods.is_empty() {
                            view! { <p class="muted">"No food reels yet"</p> }.into_any()
                        } else {
                            view! { <FoodGrid foods=foods /> }.into_any()
                        }}
                    </div>
                }
                .into_any()
            }}
        </Layout>
    }
}
