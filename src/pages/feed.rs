//! Feed and Saved views
//!
//! Both load a reel list once on mount and hand it to `ReelFeed`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reels_core::{loaders, ReelList};

use crate::commands;
use crate::components::{Layout, ReelFeed, Spinner};
use crate::context::use_app_context;

#[derive(Clone, Copy, PartialEq)]
enum Source {
    Feed,
    Saved,
}

#[component]
pub fn Feed() -> impl IntoView {
    view! { <ReelPage source=Source::Feed /> }
}

#[component]
pub fn Saved() -> impl IntoView {
    view! { <ReelPage source=Source::Saved /> }
}

#[component]
fn ReelPage(source: Source) -> impl IntoView {
    let ctx = use_app_context();
    let list = RwSignal::new(ReelList::default());
    let (loading, set_loading) = signal(true);
    // Tracks emptiness only, so toggles don't rebuild the feed
    let is_empty = Memo::new(move |_| list.with(|l| l.is_empty()));

    spawn_local(async move {
        let api = commands::api();
        let notifier = ctx.notifier();
        let loaded = match source {
            Source::Feed => loaders::load_feed(&api, &notifier).await,
            Source::Saved => loaders::load_saved(&api, &notifier).await,
        };
        log::info!("[feed] loaded {} reels", loaded.len());
        list.set(loaded);
        set_loading.set(false);
    });

    let empty = move || match source {
        Source::Feed => view! {
            <div class="empty-state">
                <h2>"No reels yet"</h2>
                <p>"Check back soon for fresh dishes."</p>
            </div>
        }
        .into_any(),
        Source::Saved => view! {
            <div class="empty-state">
                <h2>"No saved items"</h2>
                <p>"Save reels from your feed to find them here."</p>
                <a
                    class="button"
                    href="/feed"
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(reels_core::Route::Feed);
                    }
                >
                    "Browse feed"
                </a>
            </div>
        }
        .into_any(),
    };

    view! {
        <Layout full_screen=true>
            {move || {
                if loading.get() {
                    view! { <Spinner /> }.into_any()
                } else if is_empty.get() {
                    empty()
                } else {
                    view! { <ReelFeed list=list /> }.into_any()
                }
            }}
        </Layout>
    }
}
