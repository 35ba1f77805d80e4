//! Reel Feed
//!
//! Snap-scrolling column of reels shared by the feed and saved views.
//! Tracks the active reel from scroll position and routes like/save taps
//! through the optimistic engine.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reels_core::{ActiveItemTracker, Engagement, FoodId, OptimisticEngine, ReelList};
use wasm_bindgen::JsCast;

use crate::commands;
use crate::components::ReelCard;
use crate::context::use_app_context;
use crate::store::SignalCell;

#[component]
pub fn ReelFeed(list: RwSignal<ReelList>) -> impl IntoView {
    let ctx = use_app_context();
    let tracker = RwSignal::new(ActiveItemTracker::new());

    let on_scroll = move |ev: web_sys::Event| {
        let Some(container) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let offset = container.scroll_top() as f64;
        let viewport = container.client_height() as f64;
        let len = list.with_untracked(|l| l.len());

        let mut next = tracker.get_untracked();
        if let Some(index) = next.observe(offset, viewport, len) {
            log::debug!("[feed] active reel {}", index);
            tracker.set(next);
        }
    };

    // The saved view shrinks under the viewer; keep the index in range
    Effect::new(move |_| {
        let len = list.with(|l| l.len());
        let mut next = tracker.get_untracked();
        if next.clamp(len).is_some() {
            tracker.set(next);
        }
    });

    let toggle = move |food_id: FoodId, kind: Engagement| {
        let engine = OptimisticEngine::new(SignalCell(list), commands::api(), ctx.notifier());
        // Flip now, in the tap handler; only the request is deferred
        if let Some(in_flight) = engine.apply(&food_id, kind) {
            spawn_local(async move {
                engine.complete(in_flight).await;
            });
        }
    };
    let on_like = Callback::new(move |food_id: FoodId| toggle(food_id, Engagement::Like));
    let on_save = Callback::new(move |food_id: FoodId| toggle(food_id, Engagement::Save));

    view! {
        <div class="reel-feed" on:scroll=on_scroll>
            <For
                each=move || list.with(|l| l.visible_ids())
                key=|food_id| food_id.clone()
                children=move |food_id| {
                    let food = {
                        let food_id = food_id.clone();
                        Memo::new(move |_| list.with(|l| l.get(&food_id).cloned()))
                    };
                    let is_active = active_flag(list, tracker, food_id);
                    view! {
                        <ReelCard food=food is_active=is_active.into() on_like=on_like on_save=on_save />
                    }
                }
            />
        </div>
    }
}

/// Whether one reel is the active one. Memoized so that like/save edits to
/// the list don't re-notify the player unless the answer actually changes.
fn active_flag(
    list: RwSignal<ReelList>,
    tracker: RwSignal<ActiveItemTracker>,
    food_id: FoodId,
) -> Memo<bool> {
    Memo::new(move |_| {
        let position = list.with(|l| l.position(&food_id));
        position.is_some_and(|i| tracker.with(|t| t.is_active(i)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::effect::ImmediateEffect;
    use reels_core::Food;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn reels() -> ReelList {
        ReelList::feed(vec![Food::new("a", "Ramen"), Food::new("b", "Tacos")])
    }

    #[test]
    fn test_engagement_edit_does_not_rerun_playback() {
        let owner = Owner::new();
        owner.set();

        let list = RwSignal::new(reels());
        let tracker = RwSignal::new(ActiveItemTracker::new());
        let is_active = active_flag(list, tracker, FoodId::from("a"));

        let runs = Arc::new(AtomicUsize::new(0));
        let _player = ImmediateEffect::new({
            let runs = Arc::clone(&runs);
            move || {
                is_active.get();
                runs.fetch_add(1, Ordering::SeqCst);
            }
        });
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        // Liking the active reel leaves it active
        list.update(|l| {
            l.begin(&FoodId::from("a"), Engagement::Like);
        });
        assert!(is_active.get_untracked());
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        // Scrolling to the next reel is a real change
        tracker.update(|t| {
            t.observe(800.0, 800.0, 2);
        });
        assert!(!is_active.get_untracked());
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_reel_leaving_saved_view_goes_inactive() {
        let owner = Owner::new();
        owner.set();

        let list = RwSignal::new(ReelList::saved(vec![Food::new("a", "Ramen")]));
        let tracker = RwSignal::new(ActiveItemTracker::new());
        let is_active = active_flag(list, tracker, FoodId::from("a"));
        assert!(is_active.get_untracked());

        list.update(|l| {
            l.begin(&FoodId::from("a"), Engagement::Save);
        });
        assert!(!is_active.get_untracked());
    }
}
