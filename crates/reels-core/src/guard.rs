//! Route Guard
//!
//! A pure function of the session snapshot; nothing is stored between renders.

use crate::domain::Role;
use crate::route::Route;
use crate::session::SessionState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not resolved yet: show a neutral spinner
    Pending,
    /// Not signed in: go to login and come back to `from` afterwards
    RedirectToLogin { from: Route },
    /// Signed in with the wrong role: go to that role's landing view
    Redirect(Route),
    Render,
}

pub fn evaluate(state: &SessionState, allowed: &[Role], requested: &Route) -> GuardDecision {
    if state.is_loading {
        return GuardDecision::Pending;
    }
    match state.role() {
        None => GuardDecision::RedirectToLogin {
            from: requested.clone(),
        },
        Some(role) if allowed.contains(&role) => GuardDecision::Render,
        Some(role) => GuardDecision::Redirect(Route::home(role)),
    }
}

/// Guard for whatever the route table says about `route`
pub fn evaluate_route(state: &SessionState, route: &Route) -> GuardDecision {
    match route.allowed_roles() {
        Some(allowed) => evaluate(state, allowed, route),
        None => GuardDecision::Render,
    }
}

/// Where to send the viewer once they sign in
///
/// A sign-out bounces the viewer off whatever protected view they were on.
/// That bounce is not a request to come back, so bounces are ignored from
/// `sign_out` until the viewer navigates again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReturnTarget {
    route: Option<Route>,
    signing_out: bool,
}

impl ReturnTarget {
    /// Record a guard bounce. Returns whether it was kept.
    pub fn remember(&mut self, route: Route) -> bool {
        if self.signing_out {
            log::debug!("[guard] not returning to {} after sign-out", route.path());
            return false;
        }
        self.route = Some(route);
        true
    }

    pub fn sign_out(&mut self) {
        self.route = None;
        self.signing_out = true;
    }

    /// The viewer moved on their own
    pub fn navigated(&mut self) {
        self.signing_out = false;
    }

    pub fn peek(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    /// Consumed once, on successful sign-in
    pub fn take(&mut self) -> Option<Route> {
        self.signing_out = false;
        self.route.take()
    }
}
