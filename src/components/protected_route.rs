//! Route Guard
//!
//! Renders children only when the session may open the current route.

use leptos::prelude::*;
use reels_core::guard::{self, GuardDecision};
use reels_core::Route;

use crate::components::Spinner;
use crate::context::use_app_context;

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let ctx = use_app_context();

    let decision = Memo::new(move |_| {
        ctx.session.with(|session| ctx.route.with(|route| guard::evaluate_route(session, route)))
    });

    Effect::new(move |_| match decision.get() {
        GuardDecision::RedirectToLogin { from } => {
            log::info!("[guard] {} needs sign-in", from.path());
            ctx.remember_return(from);
            ctx.redirect(Route::Login);
        }
        GuardDecision::Redirect(home) => {
            log::info!("[guard] wrong role, sending to {}", home.path());
            ctx.redirect(home);
        }
        GuardDecision::Pending | GuardDecision::Render => {}
    });

    move || match decision.get() {
        GuardDecision::Render => children().into_any(),
        _ => view! { <Spinner /> }.into_any(),
    }
}
