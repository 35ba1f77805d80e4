//! Canonical reel list with versioned optimistic toggles.
//!
//! All mutation is synchronous; the async half lives in `OptimisticEngine`.

use std::collections::HashMap;

use crate::domain::{Engagement, Food, FoodId};
use crate::gateway::{GatewayError, MutationAck};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListMode {
    /// Every reel stays visible
    #[default]
    Feed,
    /// Only reels the viewer has saved are visible
    Saved,
}

/// Receipt for a locally applied toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingToggle {
    pub food_id: FoodId,
    pub kind: Engagement,
    pub version: u64,
    /// Flag value after the optimistic flip
    pub applied: bool,
}

/// How a completed toggle was folded back into the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// Backend accepted; local state kept (and healed from the ack if it carried values)
    Confirmed,
    /// Backend accepted an unsave in the saved view; the reel left the list
    Unsaved,
    /// Backend failed; the optimistic flip was undone
    RolledBack,
    /// A newer toggle on the same reel is in flight; this completion changed nothing
    Superseded,
    /// The reel is no longer in the list
    Vanished,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReelList {
    mode: ListMode,
    items: Vec<Food>,
    versions: HashMap<(FoodId, Engagement), u64>,
    issued: u64,
}

impl ReelList {
    pub fn feed(items: Vec<Food>) -> Self {
        Self {
            mode: ListMode::Feed,
            items,
            ..Default::default()
        }
    }

    /// Everything fetched for the saved view is saved by definition
    pub fn saved(items: Vec<Food>) -> Self {
        let items = items
            .into_iter()
            .map(|mut food| {
                food.is_saved = true;
                food
            })
            .collect();
        Self {
            mode: ListMode::Saved,
            items,
            ..Default::default()
        }
    }

    pub fn mode(&self) -> ListMode {
        self.mode
    }

    fn is_visible(&self, food: &Food) -> bool {
        match self.mode {
            ListMode::Feed => true,
            ListMode::Saved => food.is_saved,
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Food> + '_ {
        self.items.iter().filter(move |food| self.is_visible(food))
    }

    pub fn visible_ids(&self) -> Vec<FoodId> {
        self.visible().map(|food| food.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.visible().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, id: &FoodId) -> Option<&Food> {
        self.visible().find(|food| &food.id == id)
    }

    /// Position among visible reels
    pub fn position(&self, id: &FoodId) -> Option<usize> {
        self.visible().position(|food| &food.id == id)
    }

    /// Flip locally and hand back a receipt. `None` if the reel is not shown.
    pub fn begin(&mut self, id: &FoodId, kind: Engagement) -> Option<PendingToggle> {
        let mode = self.mode;
        let food = self
            .items
            .iter_mut()
            .find(|food| &food.id == id && (mode == ListMode::Feed || food.is_saved))?;
        let applied = food.flip(kind);

        self.issued += 1;
        let version = self.issued;
        self.versions.insert((id.clone(), kind), version);

        log::debug!("[engine] {} {} -> {} (v{})", kind.as_str(), id, applied, version);
        Some(PendingToggle {
            food_id: id.clone(),
            kind,
            version,
            applied,
        })
    }

    fn is_latest(&self, pending: &PendingToggle) -> bool {
        self.versions.get(&(pending.food_id.clone(), pending.kind)) == Some(&pending.version)
    }

    /// Fold a completed remote call back in
    pub fn settle(
        &mut self,
        pending: &PendingToggle,
        outcome: Result<&MutationAck, &GatewayError>,
    ) -> Settlement {
        let latest = self.is_latest(pending);
        let Some(index) = self.items.iter().position(|food| food.id == pending.food_id) else {
            return Settlement::Vanished;
        };

        match outcome {
            Err(e) if latest => {
                self.items[index].flip(pending.kind);
                log::warn!(
                    "[engine] {} {} failed, rolled back: {}",
                    pending.kind.as_str(),
                    pending.food_id,
                    e
                );
                Settlement::RolledBack
            }
            Err(e) => {
                log::warn!(
                    "[engine] stale {} {} (v{}) failed, newer toggle kept: {}",
                    pending.kind.as_str(),
                    pending.food_id,
                    pending.version,
                    e
                );
                Settlement::Superseded
            }
            Ok(_) if !latest => Settlement::Superseded,
            Ok(ack) => {
                let food = &mut self.items[index];
                let (flag, count) = ack.authoritative(pending.kind);
                if let Some(flag) = flag {
                    food.set_flag(pending.kind, flag);
                }
                if let Some(count) = count {
                    food.set_count(pending.kind, count);
                }
                if self.mode == ListMode::Saved
                    && pending.kind == Engagement::Save
                    && !self.items[index].is_saved
                {
                    self.items.remove(index);
                    self.versions.retain(|(id, _), _| id != &pending.food_id);
                    return Settlement::Unsaved;
                }
                Settlement::Confirmed
            }
        }
    }
}
