//! Food Reels Core
//!
//! Layered architecture:
//! - domain: reels, accounts and partner stats as served by the backend
//! - gateway: remote data access (trait + reqwest implementation)
//! - session / guard / route: who is signed in and what they may see
//! - tracker / playback: which reel is on screen and whether it plays
//! - engine: optimistic like/save with versioned rollback
//! - loaders / upload: fetch flows and upload composition

pub mod config;
pub mod domain;
pub mod engine;
pub mod gateway;
pub mod guard;
pub mod loaders;
pub mod notify;
pub mod playback;
pub mod route;
pub mod session;
pub mod state;
pub mod tracker;
pub mod upload;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{AppConfig, GatewayConfig};
pub use domain::{
    Credentials, Engagement, Food, FoodId, FoodPartner, PartnerProfile, PartnerRef,
    PartnerStats, RegisterConsumer, RegisterPartner, Role, User,
};
pub use engine::{InFlight, ListMode, OptimisticEngine, PendingToggle, ReelList, Settlement};
pub use gateway::{AuthGateway, FoodGateway, GatewayError, GatewayResult, HttpGateway, MutationAck};
pub use guard::{GuardDecision, ReturnTarget};
pub use notify::{Notifier, Toast, ToastKind};
pub use route::Route;
pub use session::{Session, SessionHolder, SessionState};
pub use state::StateCell;
pub use tracker::ActiveItemTracker;
