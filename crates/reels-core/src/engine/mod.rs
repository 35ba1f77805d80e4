//! Engine Layer
//!
//! Optimistic like/save over an in-memory reel list.

mod optimistic;
mod reel_list;

#[cfg(test)]
mod tests;

pub use optimistic::{InFlight, OptimisticEngine};
pub use reel_list::{ListMode, PendingToggle, ReelList, Settlement};
