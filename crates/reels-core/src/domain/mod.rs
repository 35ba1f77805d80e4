//! Domain Layer
//!
//! Records exchanged with the reels backend.
//! This layer has NO external dependencies (except serde for serialization).

mod account;
mod food;
mod partner;

pub use account::{Credentials, RegisterConsumer, RegisterPartner, Role, User};
pub use food::{Engagement, Food, FoodId, PartnerRef};
pub use partner::{FoodPartner, PartnerProfile, PartnerStats};
