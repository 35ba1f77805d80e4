//! Active-Item Tracker
//!
//! Snap-scrolled list of full-viewport reels: the active reel is the one
//! whose top edge is nearest the scroll offset.

/// `round(offset / viewport)`, or `None` when the viewport has no height
pub fn snap_index(offset: f64, viewport: f64) -> Option<usize> {
    if !(viewport > 0.0) || !offset.is_finite() || !viewport.is_finite() {
        return None;
    }
    Some((offset.max(0.0) / viewport).round() as usize)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveItemTracker {
    active: usize,
}

impl ActiveItemTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    /// Feed one scroll event. The candidate is `round(offset / viewport)`,
    /// clamped to the last reel so overscroll past the end stays on it.
    /// Returns the new index only when it changed.
    pub fn observe(&mut self, offset: f64, viewport: f64, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let index = snap_index(offset, viewport)?.min(len - 1);
        if index == self.active {
            return None;
        }
        self.active = index;
        Some(index)
    }

    /// Pull the active index back inside a list that shrank
    pub fn clamp(&mut self, len: usize) -> Option<usize> {
        let bounded = self.active.min(len.saturating_sub(1));
        if bounded == self.active {
            return None;
        }
        self.active = bounded;
        Some(bounded)
    }
}
