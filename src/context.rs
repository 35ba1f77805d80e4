//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reels_core::{
    HttpGateway, Notifier, ReturnTarget, Route, SessionHolder, SessionState, Toast,
};

use crate::commands::{self, history};
use crate::store::{AppStore, SignalCell, ToastNotifier};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Who is signed in
    pub session: RwSignal<SessionState>,
    /// Current view - read
    pub route: ReadSignal<Route>,
    /// Current view - write
    set_route: WriteSignal<Route>,
    /// Protected route the viewer was bounced from
    return_to: RwSignal<ReturnTarget>,
    pub store: AppStore,
}

impl AppContext {
    pub fn new(
        session: RwSignal<SessionState>,
        route: (ReadSignal<Route>, WriteSignal<Route>),
        store: AppStore,
    ) -> Self {
        Self {
            session,
            route: route.0,
            set_route: route.1,
            return_to: RwSignal::new(ReturnTarget::default()),
            store,
        }
    }

    /// Go to a view and add a history entry
    pub fn navigate(&self, route: Route) {
        self.return_to.update_untracked(ReturnTarget::navigated);
        history::push_path(&route.path());
        self.set_route.set(route);
    }

    /// Go to a view, replacing the current history entry
    pub fn redirect(&self, route: Route) {
        history::replace_path(&route.path());
        self.set_route.set(route);
    }

    /// Browser back/forward already moved the URL
    pub fn follow_location(&self) {
        self.return_to.update_untracked(ReturnTarget::navigated);
        self.set_route.set(Route::parse(&history::current_path()));
    }

    pub fn remember_return(&self, route: Route) {
        self.return_to.update_untracked(|target| {
            target.remember(route);
        });
    }

    /// Where to go after signing in, consumed once
    pub fn take_return(&self) -> Option<Route> {
        self.return_to.try_update_untracked(ReturnTarget::take).flatten()
    }

    /// End the session and land on the login view
    pub fn sign_out(&self) {
        self.return_to.update_untracked(ReturnTarget::sign_out);
        let holder = self.session_holder();
        let ctx = *self;
        spawn_local(async move {
            holder.logout().await;
            ctx.redirect(Route::Login);
        });
    }

    pub fn session_holder(&self) -> SessionHolder<SignalCell<SessionState>, HttpGateway> {
        SessionHolder::new(SignalCell(self.session), commands::api())
    }

    pub fn notifier(&self) -> ToastNotifier {
        ToastNotifier::new(self.store)
    }

    pub fn notify(&self, toast: Toast) {
        self.notifier().notify(toast);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
