//! Fetch flows
//!
//! Retrieval failures never escape: they become a toast and an empty,
//! resolved view. Nothing is retried automatically.

use crate::domain::{Food, PartnerProfile, PartnerStats};
use crate::engine::ReelList;
use crate::gateway::FoodGateway;
use crate::notify::{Notifier, Toast};

/// What the partner dashboard shows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    pub foods: Vec<Food>,
    pub stats: PartnerStats,
}

pub async fn load_feed<G: FoodGateway, N: Notifier>(gateway: &G, notifier: &N) -> ReelList {
    match gateway.list_feed().await {
        Ok(foods) => ReelList::feed(foods),
        Err(e) => {
            log::warn!("[loader] feed: {}", e);
            notifier.notify(Toast::error(
                "Error loading feed",
                "Could not load food reels. Please try again.",
            ));
            ReelList::feed(Vec::new())
        }
    }
}

pub async fn load_saved<G: FoodGateway, N: Notifier>(gateway: &G, notifier: &N) -> ReelList {
    match gateway.list_saved().await {
        Ok(foods) => ReelList::saved(foods),
        Err(e) => {
            log::warn!("[loader] saved: {}", e);
            notifier.notify(Toast::error(
                "Error loading saved items",
                "Could not load saved food reels.",
            ));
            ReelList::saved(Vec::new())
        }
    }
}

/// `None` when the profile could not be loaded or names no partner
pub async fn load_partner_profile<G: FoodGateway, N: Notifier>(
    gateway: &G,
    notifier: &N,
    partner_id: &str,
) -> Option<PartnerProfile> {
    match gateway.partner_profile(partner_id).await {
        Ok(profile) if profile.partner.is_some() => Some(profile),
        Ok(_) => None,
        Err(e) => {
            log::warn!("[loader] partner {}: {}", partner_id, e);
            notifier.notify(Toast::error(
                "Error loading profile",
                "Could not load partner profile.",
            ));
            None
        }
    }
}

/// Own reels and aggregate stats, fetched concurrently
pub async fn load_dashboard<G: FoodGateway, N: Notifier>(
    gateway: &G,
    notifier: &N,
    partner_id: &str,
) -> Dashboard {
    let (profile, stats) = futures::join!(
        gateway.partner_profile(partner_id),
        gateway.partner_stats()
    );
    match (profile, stats) {
        (Ok(profile), Ok(stats)) => Dashboard {
            foods: profile.foods,
            stats,
        },
        (profile, stats) => {
            for e in [profile.err(), stats.err()].into_iter().flatten() {
                log::warn!("[loader] dashboard: {}", e);
            }
            notifier.notify(Toast::error(
                "Error loading dashboard",
                "Could not load your dashboard data.",
            ));
            Dashboard::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ListMode;
    use crate::gateway::GatewayError;
    use crate::testing::{food, partner, RecordingNotifier, ScriptedGateway};

    #[tokio::test]
    async fn test_feed_failure_is_empty_and_notified() {
        let gateway = ScriptedGateway::new();
        let notifier = RecordingNotifier::new();
        gateway.push_feed(Err(GatewayError::Network("offline".into())));

        let list = load_feed(&gateway, &notifier).await;

        assert!(list.is_empty());
        assert_eq!(notifier.toasts()[0].title, "Error loading feed");
    }

    #[tokio::test]
    async fn test_saved_forces_saved_flag() {
        let gateway = ScriptedGateway::new();
        let notifier = RecordingNotifier::new();
        gateway.push_saved(Ok(vec![food("a", 1, false), food("b", 2, true)]));

        let list = load_saved(&gateway, &notifier).await;

        assert_eq!(list.mode(), ListMode::Saved);
        assert_eq!(list.len(), 2);
        assert!(list.visible().all(|f| f.is_saved));
        assert!(notifier.toasts().is_empty());
    }

    #[tokio::test]
    async fn test_saved_failure_is_empty_and_notified() {
        let gateway = ScriptedGateway::new();
        let notifier = RecordingNotifier::new();
        gateway.push_saved(Err(GatewayError::from_status(401, b"")));

        let list = load_saved(&gateway, &notifier).await;

        assert_eq!(list.mode(), ListMode::Saved);
        assert!(list.is_empty());
        let toasts = notifier.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title, "Error loading saved items");
        assert_eq!(toasts[0].description, "Could not load saved food reels.");
    }

    #[tokio::test]
    async fn test_profile_failure_is_none_and_notified() {
        let gateway = ScriptedGateway::new();
        let notifier = RecordingNotifier::new();
        gateway.push_profile(Err(GatewayError::Network("offline".into())));

        assert!(load_partner_profile(&gateway, &notifier, "p1").await.is_none());
        let toasts = notifier.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title, "Error loading profile");
        assert_eq!(toasts[0].description, "Could not load partner profile.");
    }

    #[tokio::test]
    async fn test_profile_without_partner_is_none_silently() {
        let gateway = ScriptedGateway::new();
        let notifier = RecordingNotifier::new();
        gateway.push_profile(Ok(PartnerProfile { partner: None, foods: Vec::new() }));

        assert!(load_partner_profile(&gateway, &notifier, "p1").await.is_none());
        assert!(notifier.toasts().is_empty());
    }

    #[tokio::test]
    async fn test_dashboard_combines_both_calls() {
        let gateway = ScriptedGateway::new();
        let notifier = RecordingNotifier::new();
        gateway.push_profile(Ok(PartnerProfile {
            partner: Some(partner("p1", "Tasty")),
            foods: vec![food("a", 5, false)],
        }));
        gateway.push_stats(Ok(PartnerStats {
            total_reels: 1,
            total_likes: 5,
            ..Default::default()
        }));

        let dashboard = load_dashboard(&gateway, &notifier, "p1").await;

        assert_eq!(dashboard.foods.len(), 1);
        assert_eq!(dashboard.stats.total_likes, 5);
    }

    #[tokio::test]
    async fn test_dashboard_stats_failure_zeroes_everything() {
        let gateway = ScriptedGateway::new();
        let notifier = RecordingNotifier::new();
        gateway.push_profile(Ok(PartnerProfile {
            partner: Some(partner("p1", "Tasty")),
            foods: vec![food("a", 5, false)],
        }));
        gateway.push_stats(Err(GatewayError::from_status(500, b"")));

        let dashboard = load_dashboard(&gateway, &notifier, "p1").await;

        assert_eq!(dashboard, Dashboard::default());
        assert_eq!(notifier.toasts()[0].title, "Error loading dashboard");
    }
}
