use serde::{Deserialize, Serialize};

/// How much of an element must be on screen before it counts as visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisibilityConfig {
    /// Intersection ratio in `0..=1` at or above which the element is visible.
    pub visible_fraction: f64,
    /// Fire the entered edge at most once per mount.
    pub once: bool,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self { visible_fraction: 0.1, once: true }
    }
}

/// Edge produced by [`VisibilityTrigger::observe_ratio`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityEdge {
    Entered,
    Left,
}

/// Turns a stream of host visibility samples into transition edges.
#[derive(Debug, Clone)]
pub struct VisibilityTrigger {
    config: VisibilityConfig,
    visible: bool,
    entered_count: u32,
}

impl VisibilityTrigger {
    pub fn new(config: VisibilityConfig) -> Self {
        Self { config, visible: false, entered_count: 0 }
    }

    pub fn config(&self) -> VisibilityConfig {
        self.config
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// How many `Entered` edges have been emitted.
    pub fn entered_count(&self) -> u32 {
        self.entered_count
    }

    /// Feed an intersection ratio reported by the host.
    pub fn observe_ratio(&mut self, ratio: f64) -> Option<VisibilityEdge> {
        let threshold = self.config.visible_fraction.clamp(0.0, 1.0);
        let visible = ratio.is_finite() && ratio > 0.0 && ratio >= threshold;
        self.observe(visible)
    }

    /// Feed a boolean visibility sample.
    pub fn observe(&mut self, visible: bool) -> Option<VisibilityEdge> {
        if visible == self.visible {
            return None;
        }
        self.visible = visible;

        if visible {
            if self.config.once && self.entered_count > 0 {
                return None;
            }
            self.entered_count += 1;
            Some(VisibilityEdge::Entered)
        } else {
            Some(VisibilityEdge::Left)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_trigger_fires_a_single_entered_edge() {
        let mut trigger = VisibilityTrigger::new(VisibilityConfig { visible_fraction: 0.1, once: true });
        assert_eq!(trigger.observe(true), Some(VisibilityEdge::Entered));
        assert_eq!(trigger.observe(false), Some(VisibilityEdge::Left));
        assert_eq!(trigger.observe(true), None);
        assert_eq!(trigger.entered_count(), 1);
    }

    #[test]
    fn repeating_trigger_fires_each_time() {
        let mut trigger = VisibilityTrigger::new(VisibilityConfig { visible_fraction: 0.1, once: false });
        trigger.observe(true);
        trigger.observe(false);
        assert_eq!(trigger.observe(true), Some(VisibilityEdge::Entered));
        assert_eq!(trigger.entered_count(), 2);
    }

    #[test]
    fn ratio_below_fraction_is_not_visible() {
        let mut trigger = VisibilityTrigger::new(VisibilityConfig { visible_fraction: 0.5, once: true });
        assert_eq!(trigger.observe_ratio(0.3), None);
        assert_eq!(trigger.observe_ratio(0.5), Some(VisibilityEdge::Entered));
        assert_eq!(trigger.observe_ratio(f64::NAN), Some(VisibilityEdge::Left));
    }

    #[test]
    fn repeated_samples_are_not_edges() {
        let mut trigger = VisibilityTrigger::new(VisibilityConfig::default());
        assert!(trigger.observe(true).is_some());
        assert_eq!(trigger.observe(true), None);
    }
}
