//! Optimistic Mutation Engine
//!
//! Apply locally, call the backend, settle. `apply` is synchronous so the
//! caller can run it inside the tap handler; only `complete` suspends.

use crate::domain::{Engagement, FoodId};
use crate::gateway::FoodGateway;
use crate::notify::{Notifier, Toast};
use crate::state::StateCell;

use super::reel_list::{ListMode, PendingToggle, ReelList, Settlement};

/// A flip that has been applied locally but not yet confirmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InFlight {
    pending: PendingToggle,
    mode: ListMode,
}

pub struct OptimisticEngine<C, G, N> {
    list: C,
    gateway: G,
    notifier: N,
}

impl<C, G, N> OptimisticEngine<C, G, N>
where
    C: StateCell<ReelList>,
    G: FoodGateway,
    N: Notifier,
{
    pub fn new(list: C, gateway: G, notifier: N) -> Self {
        Self {
            list,
            gateway,
            notifier,
        }
    }

    pub async fn toggle_like(&self, food_id: &FoodId) -> Option<Settlement> {
        self.toggle(food_id, Engagement::Like).await
    }

    pub async fn toggle_save(&self, food_id: &FoodId) -> Option<Settlement> {
        self.toggle(food_id, Engagement::Save).await
    }

    /// `None` when the reel was not in the list (or the list is gone)
    pub async fn toggle(&self, food_id: &FoodId, kind: Engagement) -> Option<Settlement> {
        let in_flight = self.apply(food_id, kind)?;
        Some(self.complete(in_flight).await)
    }

    /// Flip the reel in place. Nothing has been sent yet when this returns.
    pub fn apply(&self, food_id: &FoodId, kind: Engagement) -> Option<InFlight> {
        self.list
            .write(|list| {
                let mode = list.mode();
                list.begin(food_id, kind).map(|pending| InFlight { pending, mode })
            })
            .flatten()
    }

    /// Send the mutation and fold the outcome back into the list
    pub async fn complete(&self, in_flight: InFlight) -> Settlement {
        let InFlight { pending, mode } = in_flight;
        let result = self.gateway.toggle(pending.kind, &pending.food_id).await;

        let settlement = self
            .list
            .write(|list| list.settle(&pending, result.as_ref()))
            .unwrap_or(Settlement::Vanished);

        match (&result, settlement) {
            (Err(_), _) => self.notifier.notify(failure_toast(pending.kind, mode)),
            (Ok(_), Settlement::Unsaved) => self.notifier.notify(Toast::info(
                "Removed from saved",
                "Item has been removed from your saved list.",
            )),
            _ => {}
        }
        settlement
    }
}

fn failure_toast(kind: Engagement, mode: ListMode) -> Toast {
    let description = match (kind, mode) {
        (Engagement::Like, _) => "Could not like this item.",
        (Engagement::Save, ListMode::Feed) => "Could not save this item.",
        (Engagement::Save, ListMode::Saved) => "Could not update saved item.",
    };
    Toast::error("Error", description)
}
