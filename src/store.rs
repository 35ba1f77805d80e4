//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use reels_core::{Notifier, StateCell, Toast};

/// How long a toast stays on screen
const TOAST_MS: u32 = 4_000;

/// A toast with a stable id so it can be dismissed
#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u32,
    pub toast: Toast,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Toasts currently on screen, oldest first
    pub toasts: Vec<ToastEntry>,
    /// Last id handed to a toast
    pub next_toast_id: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Push a toast and return its id
pub fn store_push_toast(store: &AppStore, toast: Toast) -> u32 {
    let counter = store.next_toast_id();
    let id = {
        let mut next = counter.write();
        *next += 1;
        *next
    };
    let toasts = store.toasts();
    toasts.write().push(ToastEntry { id, toast });
    id
}

/// Remove a toast by ID
pub fn store_dismiss_toast(store: &AppStore, id: u32) {
    let toasts = store.toasts();
    toasts.write().retain(|entry| entry.id != id);
}

/// Current toasts (tracked)
pub fn store_toasts(store: &AppStore) -> Vec<ToastEntry> {
    store.toasts().get()
}

// ========================
// Core Adapters
// ========================

/// Shows core notifications as auto-dismissing toasts
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    store: AppStore,
}

impl ToastNotifier {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, toast: Toast) {
        log::debug!("[toast] {}: {}", toast.title, toast.description);
        let id = store_push_toast(&self.store, toast);
        let store = self.store;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            store_dismiss_toast(&store, id);
        });
    }
}

/// Lets core state machines write straight into a signal
pub struct SignalCell<T: 'static>(pub RwSignal<T>);

impl<T: 'static> Clone for SignalCell<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SignalCell<T> {}

impl<T: Send + Sync + 'static> StateCell<T> for SignalCell<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.0.try_with_untracked(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}
