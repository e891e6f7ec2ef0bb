use crate::recognition::vocabulary::NONE_LABEL;

#[derive(Debug, Clone)]
pub struct StabilityConfig {
    /// Hold time (ms) before a newly seen gesture is promoted.
    pub new_gesture_ms: u64,
}

impl Default for StabilityConfig {
    fn default() -> Self {
        Self {
            new_gesture_ms: 500,
        }
    }
}

/// A raw label that has been held long enough to count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Promotion {
    pub label: String,
    /// True when the stable label differs from the previous one.
    pub changed: bool,
}

/// Observable phase of the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StabilityPhase {
    /// Nothing stable and nothing pending.
    Idle,
    /// A raw label differs from the stable one and is waiting out its hold.
    Pending,
    /// The latest raw label is the stable one.
    Stable,
}

/// Debounces the per-frame raw label stream into a stable label.
///
/// A label is promoted once it has been seen continuously for the current
/// hold duration. Each promotion restarts the timer, so a held gesture is
/// promoted again after another hold. The hold starts at `new_gesture_ms`
/// and can be raised with [`StabilityTracker::apply_cooldown`] after an
/// action fires; any change of raw label drops it back.
pub struct StabilityTracker {
    config: StabilityConfig,
    last_label: String,
    last_label_at: u64,
    stable_label: String,
    hold_ms: u64,
}

impl StabilityTracker {
    pub fn new(config: StabilityConfig) -> Self {
        let hold_ms = config.new_gesture_ms;
        Self {
            config,
            last_label: NONE_LABEL.to_string(),
            last_label_at: 0,
            stable_label: NONE_LABEL.to_string(),
            hold_ms,
        }
    }

    pub fn with_default() -> Self {
        Self::new(StabilityConfig::default())
    }

    pub fn reset(&mut self) {
        self.last_label = NONE_LABEL.to_string();
        self.last_label_at = 0;
        self.stable_label = NONE_LABEL.to_string();
        self.hold_ms = self.config.new_gesture_ms;
    }

    /// Swap in new timings without losing the current stream state.
    pub fn set_config(&mut self, config: StabilityConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &StabilityConfig {
        &self.config
    }

    /// Feed one raw label observed at `now_ms`.
    pub fn observe(&mut self, label: &str, now_ms: u64) -> Option<Promotion> {
        if label != self.last_label {
            self.last_label = label.to_string();
            self.last_label_at = now_ms;
            self.hold_ms = self.config.new_gesture_ms;
            return None;
        }

        if now_ms.saturating_sub(self.last_label_at) < self.hold_ms {
            return None;
        }

        let changed = self.stable_label != label;
        self.stable_label = label.to_string();
        self.last_label_at = now_ms;
        if changed {
            tracing::debug!(gesture = %label, "stable gesture changed");
        }
        Some(Promotion {
            label: label.to_string(),
            changed,
        })
    }

    /// Require `cooldown_ms` of continued holding before the next promotion.
    pub fn apply_cooldown(&mut self, cooldown_ms: u64) {
        self.hold_ms = cooldown_ms;
    }

    pub fn stable_label(&self) -> &str {
        &self.stable_label
    }

    pub fn hold_ms(&self) -> u64 {
        self.hold_ms
    }

    pub fn phase(&self) -> StabilityPhase {
        if self.last_label != self.stable_label {
            StabilityPhase::Pending
        } else if self.stable_label == NONE_LABEL {
            StabilityPhase::Idle
        } else {
            StabilityPhase::Stable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(
        tracker: &mut StabilityTracker,
        labels: &[&str],
        start: u64,
        step: u64,
    ) -> Vec<(usize, Promotion)> {
        labels
            .iter()
            .enumerate()
            .filter_map(|(i, l)| tracker.observe(l, start + i as u64 * step).map(|p| (i, p)))
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let tracker = StabilityTracker::with_default();
        assert_eq!(tracker.stable_label(), NONE_LABEL);
        assert_eq!(tracker.phase(), StabilityPhase::Idle);
        assert_eq!(tracker.hold_ms(), 500);
    }

    #[test]
    fn test_hysteresis_sequence() {
        let mut tracker = StabilityTracker::with_default();
        let promotions = feed(&mut tracker, &["A", "A", "A", "B", "B", "B", "B"], 1000, 250);
        let changes: Vec<(usize, &str)> = promotions
            .iter()
            .filter(|(_, p)| p.changed)
            .map(|(i, p)| (*i, p.label.as_str()))
            .collect();
        assert_eq!(changes, vec![(2, "A"), (5, "B")]);
        assert_eq!(tracker.stable_label(), "B");
    }

    #[test]
    fn test_single_frame_flip_not_promoted() {
        let mut tracker = StabilityTracker::with_default();
        let promotions = feed(&mut tracker, &["A", "B", "A", "A", "A"], 1000, 250);
        assert!(promotions.iter().all(|(_, p)| p.label == "A"));
        assert_eq!(promotions.len(), 1);
        assert_eq!(promotions[0].0, 4);
    }

    #[test]
    fn test_pending_phase() {
        let mut tracker = StabilityTracker::with_default();
        tracker.observe("A", 1000);
        assert_eq!(tracker.phase(), StabilityPhase::Pending);
        tracker.observe("A", 1600);
        assert_eq!(tracker.phase(), StabilityPhase::Stable);
    }

    #[test]
    fn test_cooldown_blocks_repeat_until_elapsed() {
        let mut tracker = StabilityTracker::with_default();
        tracker.observe("A", 0);
        assert!(tracker.observe("A", 500).is_some());
        tracker.apply_cooldown(1250);

        assert!(tracker.observe("A", 1000).is_none());
        assert!(tracker.observe("A", 1700).is_none());
        let again = tracker.observe("A", 1750).expect("repeat after cooldown");
        assert!(!again.changed);
    }

    #[test]
    fn test_label_change_resets_hold() {
        let mut tracker = StabilityTracker::with_default();
        tracker.observe("A", 0);
        tracker.observe("A", 500);
        tracker.apply_cooldown(2000);
        tracker.observe("B", 600);
        assert_eq!(tracker.hold_ms(), 500);
        assert!(tracker.observe("B", 1100).is_some());
    }

    #[test]
    fn test_out_of_order_time_does_not_promote() {
        let mut tracker = StabilityTracker::with_default();
        tracker.observe("A", 5000);
        assert!(tracker.observe("A", 100).is_none());
    }

    #[test]
    fn test_reset() {
        let mut tracker = StabilityTracker::with_default();
        tracker.observe("A", 0);
        tracker.observe("A", 600);
        tracker.apply_cooldown(900);
        tracker.reset();
        assert_eq!(tracker.stable_label(), NONE_LABEL);
        assert_eq!(tracker.hold_ms(), 500);
    }
}
