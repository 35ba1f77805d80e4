//! Pages
//!
//! One component per route.

mod auth;
mod dashboard;
mod feed;
mod landing;
mod not_found;
mod partner_profile;
mod upload;

pub use auth::{Login, PartnerRegister, Register};
pub use dashboard::PartnerDashboard;
pub use feed::{Feed, Saved};
pub use landing::Landing;
pub use not_found::NotFound;
pub use partner_profile::FoodPartnerPage;
pub use upload::PartnerUpload;
