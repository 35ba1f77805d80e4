//! Food Reels App
//!
//! Provides shared state and renders the view for the current route.

use leptos::prelude::*;
use reactive_stores::Store;
use reels_core::{Route, SessionState};

use crate::commands::history;
use crate::components::{ProtectedRoute, Toaster};
use crate::context::AppContext;
use crate::pages::{
    Feed, FoodPartnerPage, Landing, Login, NotFound, PartnerDashboard, PartnerRegister,
    PartnerUpload, Register, Saved,
};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    // No session restore endpoint: every page load starts signed out
    let session = RwSignal::new(SessionState::default());
    let (route, set_route) = signal(Route::parse(&history::current_path()));

    let ctx = AppContext::new(session, (route, set_route), store);
    // Re-setting the same route must not rebuild the page
    let current = Memo::new(move |_| route.get());
    provide_context(ctx);

    history::on_popstate(move || ctx.follow_location());

    Effect::new(move |_| {
        log::debug!("[app] route {}", current.get().path());
    });

    view! {
        <Toaster />
        {move || match current.get() {
            Route::Landing => view! { <Landing /> }.into_any(),
            Route::Login => view! { <Login /> }.into_any(),
            Route::Register => view! { <Register /> }.into_any(),
            Route::PartnerRegister => view! { <PartnerRegister /> }.into_any(),
            Route::Feed => view! { <ProtectedRoute><Feed /></ProtectedRoute> }.into_any(),
            Route::Saved => view! { <ProtectedRoute><Saved /></ProtectedRoute> }.into_any(),
            Route::PartnerProfile(partner_id) => view! {
                <ProtectedRoute><FoodPartnerPage partner_id=partner_id.clone() /></ProtectedRoute>
            }.into_any(),
            Route::PartnerDashboard => {
                view! { <ProtectedRoute><PartnerDashboard /></ProtectedRoute> }.into_any()
            }
            Route::PartnerUpload => {
                view! { <ProtectedRoute><PartnerUpload /></ProtectedRoute> }.into_any()
            }
            Route::NotFound(path) => view! { <NotFound path=path /> }.into_any(),
        }}
    }
}
