//! Navigation Bar
//!
//! Role-specific links plus logout. Hidden when signed out.

use leptos::prelude::*;
use reels_core::{Role, Route};

use crate::context::use_app_context;

const CONSUMER_LINKS: &[(Route, &str)] = &[(Route::Feed, "Feed"), (Route::Saved, "Saved")];
const PARTNER_LINKS: &[(Route, &str)] = &[
    (Route::PartnerDashboard, "Dashboard"),
    (Route::PartnerUpload, "Upload"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();

    let links = move || match ctx.session.with(|s| s.role()) {
        Some(Role::Consumer) => CONSUMER_LINKS,
        Some(Role::Partner) => PARTNER_LINKS,
        None => &[],
    };

    let on_logout = move |_| ctx.sign_out();

    view! {
        <Show when=move || ctx.session.with(|s| s.is_authenticated())>
            <nav class="navbar">
                <span class="navbar-brand">"FoodReels"</span>
                <div class="navbar-links">
                    {move || {
                        links()
                            .iter()
                            .map(|(route, label)| {
                                let route = route.clone();
                                let href = route.path();
                                let is_current = {
                                    let route = route.clone();
                                    move || ctx.route.with(|current| current == &route)
                                };
                                view! {
                                    <a
                                        class="navbar-link"
                                        class:active=is_current
                                        href=href
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            ctx.navigate(route.clone());
                                        }
                                    >
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()
                    }}
                    <button class="navbar-logout" on:click=on_logout>"Logout"</button>
                </div>
            </nav>
        </Show>
    }
}
