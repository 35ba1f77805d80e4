//! UI Components
//!
//! Reusable Leptos components.

mod food_grid;
mod layout;
mod navbar;
mod protected_route;
mod reel_card;
mod reel_feed;
mod spinner;
mod toaster;
mod video_player;

pub use food_grid::FoodGrid;
pub use layout::Layout;
pub use navbar::Navbar;
pub use protected_route::ProtectedRoute;
pub use reel_card::ReelCard;
pub use reel_feed::ReelFeed;
pub use spinner::Spinner;
pub use toaster::Toaster;
pub use video_player::VideoPlayer;
