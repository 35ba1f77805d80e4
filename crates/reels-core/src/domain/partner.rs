//! Food Partner
//!
//! Content-producing business accounts, their public profile and stats.

use serde::{Deserialize, Serialize};

use super::food::Food;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodPartner {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub contact_name: Option<String>,
}

impl FoodPartner {
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// `GET /api/food-partner/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PartnerProfile {
    pub partner: Option<FoodPartner>,
    #[serde(default, deserialize_with = "crate::gateway::null_as_empty")]
    pub foods: Vec<Food>,
}

/// `GET /api/food/partner/stats`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerStats {
    #[serde(default)]
    pub total_reels: u64,
    #[serde(default)]
    pub total_likes: u64,
    #[serde(default)]
    pub total_saves: u64,
    #[serde(default)]
    pub avg_engagement: f64,
}
