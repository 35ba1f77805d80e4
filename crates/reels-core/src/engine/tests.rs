//! Engine Integration Tests
//!
//! OptimisticEngine against a scripted gateway, including out-of-order completions.

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::{Engagement, Food, FoodId};
use crate::engine::{OptimisticEngine, ReelList, Settlement};
use crate::gateway::{GatewayError, MutationAck};
use crate::notify::ToastKind;
use crate::testing::{food, RecordingNotifier, ScriptedGateway};

type Engine = OptimisticEngine<Rc<RefCell<ReelList>>, ScriptedGateway, RecordingNotifier>;

fn setup(list: ReelList) -> (Rc<RefCell<ReelList>>, ScriptedGateway, RecordingNotifier, Engine) {
    let cell = Rc::new(RefCell::new(list));
    let gateway = ScriptedGateway::new();
    let notifier = RecordingNotifier::new();
    let engine = OptimisticEngine::new(cell.clone(), gateway.clone(), notifier.clone());
    (cell, gateway, notifier, engine)
}

fn snapshot(cell: &Rc<RefCell<ReelList>>, id: &str) -> Option<Food> {
    cell.borrow().get(&FoodId::from(id)).cloned()
}

#[tokio::test]
async fn test_like_failure_rolls_back_and_notifies_once() {
    let (cell, gateway, notifier, engine) = setup(ReelList::feed(vec![food("a", 3, false)]));
    let reply = gateway.defer_toggle();
    let id = FoodId::from("a");

    let toggle = engine.toggle_like(&id);
    let observe = async {
        // The flip is visible before the request resolves
        let during = snapshot(&cell, "a").unwrap();
        assert_eq!((during.likes, during.is_liked), (4, true));
        reply.send(Err(GatewayError::Network("offline".into()))).unwrap();
    };
    let (settlement, _) = tokio::join!(toggle, observe);

    assert_eq!(settlement, Some(Settlement::RolledBack));
    let after = snapshot(&cell, "a").unwrap();
    assert_eq!((after.likes, after.is_liked), (3, false));

    let toasts = notifier.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].kind, ToastKind::Destructive);
    assert_eq!(toasts[0].description, "Could not like this item.");
}

#[tokio::test]
async fn test_double_like_success_round_trips() {
    let (cell, gateway, notifier, engine) = setup(ReelList::feed(vec![food("a", 3, false)]));
    gateway.push_toggle(Ok(MutationAck::default()));
    gateway.push_toggle(Ok(MutationAck::default()));
    let id = FoodId::from("a");

    let (first, second) = tokio::join!(engine.toggle_like(&id), engine.toggle_like(&id));

    // Ready replies settle within the first poll, so each toggle is the latest when it settles
    assert_eq!(first, Some(Settlement::Confirmed));
    assert_eq!(second, Some(Settlement::Confirmed));
    let after = snapshot(&cell, "a").unwrap();
    assert_eq!((after.likes, after.is_liked), (3, false));
    assert_eq!(gateway.toggle_calls().len(), 2);
    assert!(notifier.toasts().is_empty());
}

#[tokio::test]
async fn test_stale_failure_after_newer_success_keeps_state() {
    let (cell, gateway, notifier, engine) = setup(ReelList::feed(vec![food("a", 3, false)]));
    let slow = gateway.defer_toggle();
    let fast = gateway.defer_toggle();
    let id = FoodId::from("a");

    let driver = async {
        fast.send(Ok(MutationAck::default())).unwrap();
        tokio::task::yield_now().await;
        slow.send(Err(GatewayError::Network("timeout".into()))).unwrap();
    };
    let (first, second, _) = tokio::join!(engine.toggle_like(&id), engine.toggle_like(&id), driver);

    assert_eq!(first, Some(Settlement::Superseded));
    assert_eq!(second, Some(Settlement::Confirmed));
    let after = snapshot(&cell, "a").unwrap();
    assert_eq!((after.likes, after.is_liked), (3, false));
    // The failed call is still reported
    assert_eq!(notifier.toasts().len(), 1);
}

#[tokio::test]
async fn test_missing_item_is_silent_noop() {
    let (_cell, gateway, notifier, engine) = setup(ReelList::feed(vec![food("a", 3, false)]));

    assert_eq!(engine.toggle_save(&FoodId::from("ghost")).await, None);
    assert!(gateway.toggle_calls().is_empty());
    assert!(notifier.toasts().is_empty());
}

#[tokio::test]
async fn test_save_sends_save_request() {
    let (cell, gateway, _notifier, engine) = setup(ReelList::feed(vec![food("a", 0, false)]));
    gateway.push_toggle(Ok(MutationAck::default()));

    engine.toggle_save(&FoodId::from("a")).await;

    assert_eq!(gateway.toggle_calls(), vec![(Engagement::Save, FoodId::from("a"))]);
    let after = snapshot(&cell, "a").unwrap();
    assert!(after.is_saved);
    assert_eq!(after.saves, 1);
}

#[tokio::test]
async fn test_saved_view_unsave_failure_restores_item() {
    let (cell, gateway, notifier, engine) =
        setup(ReelList::saved(vec![food("a", 0, false), food("b", 0, false)]));
    let reply = gateway.defer_toggle();
    let id = FoodId::from("a");

    let toggle = engine.toggle_save(&id);
    let observe = async {
        assert_eq!(cell.borrow().visible_ids(), vec![FoodId::from("b")]);
        reply.send(Err(GatewayError::Network("offline".into()))).unwrap();
    };
    let (settlement, _) = tokio::join!(toggle, observe);

    assert_eq!(settlement, Some(Settlement::RolledBack));
    let restored = snapshot(&cell, "a").unwrap();
    assert!(restored.is_saved);
    let toasts = notifier.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].description, "Could not update saved item.");
}

#[tokio::test]
async fn test_saved_view_unsave_success_removes_and_confirms() {
    let (cell, gateway, notifier, engine) = setup(ReelList::saved(vec![food("a", 0, false)]));
    gateway.push_toggle(Ok(MutationAck::default()));

    let settlement = engine.toggle_save(&FoodId::from("a")).await;

    assert_eq!(settlement, Some(Settlement::Unsaved));
    assert!(cell.borrow().is_empty());
    let toasts = notifier.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].title, "Removed from saved");
    assert_eq!(toasts[0].kind, ToastKind::Info);
}

#[tokio::test]
async fn test_apply_flips_before_anything_is_sent() {
    let (cell, gateway, _notifier, engine) = setup(ReelList::feed(vec![food("a", 3, false)]));
    gateway.push_toggle(Ok(MutationAck {
        likes: Some(10),
        is_liked: Some(true),
        ..Default::default()
    }));

    let in_flight = engine.apply(&FoodId::from("a"), Engagement::Like).unwrap();
    assert_eq!(snapshot(&cell, "a").unwrap().likes, 4);
    assert!(gateway.toggle_calls().is_empty());

    assert_eq!(engine.complete(in_flight).await, Settlement::Confirmed);
    // Authoritative count from the ack wins
    assert_eq!(snapshot(&cell, "a").unwrap().likes, 10);
}
