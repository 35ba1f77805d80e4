//! Food Reel Entity
//!
//! A single food video with engagement counters and viewer-relative flags.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque reel identifier assigned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodId(pub String);

impl FoodId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FoodId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Owning partner as embedded in a reel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Which viewer-relative engagement a toggle acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Engagement {
    Like,
    Save,
}

impl Engagement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Engagement::Like => "like",
            Engagement::Save => "save",
        }
    }
}

/// A food reel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    #[serde(rename = "_id")]
    pub id: FoodId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub likes: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub saves: u64,
    #[serde(default, deserialize_with = "lenient_partner")]
    pub food_partner: Option<PartnerRef>,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub is_saved: bool,
}

impl Food {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: FoodId::new(id),
            name: name.into(),
            description: String::new(),
            video_url: String::new(),
            likes: 0,
            saves: 0,
            food_partner: None,
            is_liked: false,
            is_saved: false,
        }
    }

    pub fn flag(&self, kind: Engagement) -> bool {
        match kind {
            Engagement::Like => self.is_liked,
            Engagement::Save => self.is_saved,
        }
    }

    pub fn count(&self, kind: Engagement) -> u64 {
        match kind {
            Engagement::Like => self.likes,
            Engagement::Save => self.saves,
        }
    }

    /// Invert the flag and move the counter with it. Returns the new flag.
    pub fn flip(&mut self, kind: Engagement) -> bool {
        let (flag, count) = match kind {
            Engagement::Like => (&mut self.is_liked, &mut self.likes),
            Engagement::Save => (&mut self.is_saved, &mut self.saves),
        };
        *count = if *flag { count.saturating_sub(1) } else { *count + 1 };
        *flag = !*flag;
        *flag
    }

    pub fn set_flag(&mut self, kind: Engagement, value: bool) {
        match kind {
            Engagement::Like => self.is_liked = value,
            Engagement::Save => self.is_saved = value,
        }
    }

    pub fn set_count(&mut self, kind: Engagement, value: u64) {
        match kind {
            Engagement::Like => self.likes = value,
            Engagement::Save => self.saves = value,
        }
    }

    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Unnamed food"
        } else {
            &self.name
        }
    }

    pub fn partner_id(&self) -> Option<&str> {
        self.food_partner
            .as_ref()
            .map(|p| p.id.as_str())
            .filter(|id| !id.is_empty())
    }

    pub fn partner_name(&self) -> &str {
        self.food_partner
            .as_ref()
            .map(|p| p.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("Unknown")
    }

    pub fn partner_initial(&self) -> String {
        self.partner_name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

// The backend may send the partner populated, as a bare id, or not at all
fn lenient_partner<'de, D>(deserializer: D) -> Result<Option<PartnerRef>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Populated(PartnerRef),
        Id(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Populated(partner)) => Some(partner),
        Some(Raw::Id(id)) if !id.is_empty() => Some(PartnerRef { id, name: String::new() }),
        _ => None,
    })
}

// Counts are never negative; null and negative values collapse to zero
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(raw.map(|n| n.max(0) as u64).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_round_trip() {
        let mut food = Food::new("a", "Ramen");
        food.likes = 3;

        assert!(food.flip(Engagement::Like));
        assert_eq!(food.likes, 4);
        assert!(!food.flip(Engagement::Like));
        assert_eq!(food.likes, 3);
    }

    #[test]
    fn test_flag_and_count_follow_kind() {
        let mut food = Food::new("a", "Ramen");
        food.likes = 7;
        food.saves = 2;
        food.is_saved = true;

        assert!(!food.flag(Engagement::Like));
        assert!(food.flag(Engagement::Save));
        assert_eq!(food.count(Engagement::Like), 7);
        assert_eq!(food.count(Engagement::Save), 2);

        food.flip(Engagement::Save);
        assert!(!food.flag(Engagement::Save));
        assert_eq!(food.count(Engagement::Save), 1);
        assert_eq!(food.count(Engagement::Like), 7);
    }

    #[test]
    fn test_flip_never_goes_negative() {
        let mut food = Food::new("a", "Ramen");
        food.is_saved = true;
        food.saves = 0;

        food.flip(Engagement::Save);
        assert_eq!(food.saves, 0);
        assert!(!food.is_saved);
    }

    #[test]
    fn test_deserialize_backend_shape() {
        let json = r#"{
            "_id": "f1",
            "name": "Tacos",
            "description": "Al pastor",
            "videoUrl": "https://cdn/x.mp4",
            "likes": 2,
            "saves": null,
            "foodPartner": { "_id": "p1", "name": "Taqueria" },
            "isLiked": true
        }"#;
        let food: Food = serde_json::from_str(json).unwrap();
        assert_eq!(food.id.as_str(), "f1");
        assert_eq!(food.likes, 2);
        assert_eq!(food.saves, 0);
        assert!(food.is_liked);
        assert!(!food.is_saved);
        assert_eq!(food.partner_id(), Some("p1"));
        assert_eq!(food.partner_initial(), "T");
    }

    #[test]
    fn test_partner_fallbacks() {
        let bare: Food = serde_json::from_str(r#"{"_id":"f2","foodPartner":"p9"}"#).unwrap();
        assert_eq!(bare.partner_id(), Some("p9"));
        assert_eq!(bare.partner_name(), "Unknown");
        assert_eq!(bare.display_name(), "Unnamed food");

        let orphan: Food = serde_json::from_str(r#"{"_id":"f3","foodPartner":null}"#).unwrap();
        assert_eq!(orphan.partner_id(), None);
        assert_eq!(orphan.partner_initial(), "U");
    }
}
