//! Click tracking for single/double click detection

use std::time::{Duration, Instant};

/// What a primary-button release on an item means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Select(usize),
    /// Second click on the same item inside the window
    Activate(usize),
}

/// Last click on an item, by visible-set index
#[derive(Debug, Clone, Default)]
pub struct ClickState {
    pub last_index: Option<usize>,
    pub last_at: Option<Instant>,
}

impl ClickState {
    /// Classify a click at `at` and update the tracker
    ///
    /// An activation clears the state, so a third rapid click selects again
    /// instead of chaining another activation.
    pub fn register(&mut self, index: usize, at: Instant, window: Duration) -> ClickOutcome {
        let is_rapid = self
            .last_at
            .is_some_and(|last| at.saturating_duration_since(last) < window);
        if is_rapid && self.last_index == Some(index) {
            self.reset();
            return ClickOutcome::Activate(index);
        }
        self.last_index = Some(index);
        self.last_at = Some(at);
        ClickOutcome::Select(index)
    }

    pub fn reset(&mut self) {
        self.last_index = None;
        self.last_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(500);

    #[test]
    fn test_fast_second_click_activates() {
        let t0 = Instant::now();
        let mut clicks = ClickState::default();
        assert_eq!(clicks.register(2, t0, WINDOW), ClickOutcome::Select(2));
        assert_eq!(
            clicks.register(2, t0 + Duration::from_millis(400), WINDOW),
            ClickOutcome::Activate(2)
        );
    }

    #[test]
    fn test_slow_second_click_selects() {
        let t0 = Instant::now();
        let mut clicks = ClickState::default();
        clicks.register(2, t0, WINDOW);
        assert_eq!(
            clicks.register(2, t0 + Duration::from_millis(600), WINDOW),
            ClickOutcome::Select(2)
        );
    }

    #[test]
    fn test_different_item_selects() {
        let t0 = Instant::now();
        let mut clicks = ClickState::default();
        clicks.register(1, t0, WINDOW);
        assert_eq!(
            clicks.register(2, t0 + Duration::from_millis(100), WINDOW),
            ClickOutcome::Select(2)
        );
    }

    #[test]
    fn test_triple_click_does_not_chain() {
        let t0 = Instant::now();
        let mut clicks = ClickState::default();
        clicks.register(0, t0, WINDOW);
        clicks.register(0, t0 + Duration::from_millis(100), WINDOW);
        assert_eq!(
            clicks.register(0, t0 + Duration::from_millis(200), WINDOW),
            ClickOutcome::Select(0)
        );
    }
}
