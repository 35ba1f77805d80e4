//! Gateway Layer - Remote Data Access
//!
//! Defines the abstract interfaces to the reels backend.
//! `HttpGateway` talks to the real REST API; tests script their own.

mod error;
mod http;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer};

use crate::domain::{
    Credentials, Engagement, Food, FoodId, FoodPartner, PartnerProfile, PartnerStats,
    RegisterConsumer, RegisterPartner, Role, User,
};

pub use error::{GatewayError, GatewayResult};
pub use http::HttpGateway;

/// Reel, partner and upload endpoints
///
/// Futures are not `Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait FoodGateway {
    /// `GET /api/food`
    async fn list_feed(&self) -> GatewayResult<Vec<Food>>;

    /// `GET /api/food/save`
    async fn list_saved(&self) -> GatewayResult<Vec<Food>>;

    /// `POST /api/food/like` or `POST /api/food/save` with `{ foodId }`
    async fn toggle(&self, kind: Engagement, food_id: &FoodId) -> GatewayResult<MutationAck>;

    /// `GET /api/food-partner/{id}`
    async fn partner_profile(&self, partner_id: &str) -> GatewayResult<PartnerProfile>;

    /// `GET /api/food/partner/stats`
    async fn partner_stats(&self) -> GatewayResult<PartnerStats>;

    /// Multipart `POST /api/food`
    async fn upload_food(&self, upload: NewFood) -> GatewayResult<()>;
}

/// Role-specific auth endpoints
#[async_trait(?Send)]
pub trait AuthGateway {
    async fn login_consumer(&self, credentials: &Credentials) -> GatewayResult<User>;

    async fn login_partner(&self, credentials: &Credentials) -> GatewayResult<FoodPartner>;

    async fn register_consumer(&self, data: &RegisterConsumer) -> GatewayResult<User>;

    async fn register_partner(&self, data: &RegisterPartner) -> GatewayResult<FoodPartner>;

    async fn logout(&self, role: Role) -> GatewayResult<()>;
}

/// A composed upload ready for the wire
#[derive(Debug, Clone, PartialEq)]
pub struct NewFood {
    pub name: String,
    pub description: String,
    pub video: VideoFile,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VideoFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Whatever the backend echoes after a like/save toggle
///
/// Every field is optional; an empty ack means "trust the local state".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationAck {
    pub likes: Option<u64>,
    pub saves: Option<u64>,
    pub is_liked: Option<bool>,
    pub is_saved: Option<bool>,
    pub food: Option<Box<MutationAck>>,
}

impl MutationAck {
    /// Authoritative (flag, count) for one engagement, if the backend sent them
    pub fn authoritative(&self, kind: Engagement) -> (Option<bool>, Option<u64>) {
        let nested = self.food.as_deref();
        let pick = |own: Option<u64>, inner: Option<u64>| own.or(inner);
        match kind {
            Engagement::Like => (
                self.is_liked.or(nested.and_then(|f| f.is_liked)),
                pick(self.likes, nested.and_then(|f| f.likes)),
            ),
            Engagement::Save => (
                self.is_saved.or(nested.and_then(|f| f.is_saved)),
                pick(self.saves, nested.and_then(|f| f.saves)),
            ),
        }
    }
}

/// `{ foods: [...] }` where the array may be missing or null
#[derive(Debug, Default, Deserialize)]
pub(crate) struct FoodsEnvelope {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub foods: Vec<Food>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserEnvelope {
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PartnerEnvelope {
    pub partner: FoodPartner,
}

pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
