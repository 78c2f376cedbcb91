use crate::types::{Scenario, ANIMATION_PERIOD_SECS, ANIMATION_SEQUENCE};

/// Deadline-based driver for the scenario auto-advance cycle.
///
/// At most one deadline is ever pending: the timer is armed only on the
/// disabled-to-enabled transition and always cleared on disable, so toggling
/// the flag off leaves nothing scheduled. `now` is a monotonic seconds value
/// supplied by the caller, which keeps the driver clock-agnostic and
/// testable.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnimationDriver {
    next_due: Option<f64>,
}

impl AnimationDriver {
    pub fn is_enabled(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn set_enabled(&mut self, enabled: bool, now: f64) {
        match (enabled, self.next_due) {
            (true, None) => self.next_due = Some(now + ANIMATION_PERIOD_SECS),
            (false, Some(_)) => self.next_due = None,
            _ => {}
        }
    }

    /// Reports whether an advance is due at `now`, re-arming for the next
    /// period if so. Returns at most one advance per call; a long stall
    /// collapses into a single step rather than a burst of catch-up steps.
    pub fn tick(&mut self, now: f64) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + ANIMATION_PERIOD_SECS);
                true
            }
            _ => false,
        }
    }
}

/// Next scenario in the fixed animation cycle, wrapping around.
pub fn next_in_sequence(current: Scenario) -> Scenario {
    let idx = ANIMATION_SEQUENCE
        .iter()
        .position(|&s| s == current)
        .unwrap_or(0);
    ANIMATION_SEQUENCE[(idx + 1) % ANIMATION_SEQUENCE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_driver_never_fires() {
        let mut driver = AnimationDriver::default();
        assert!(!driver.tick(0.0));
        assert!(!driver.tick(1000.0));
    }

    #[test]
    fn fires_once_per_period() {
        let mut driver = AnimationDriver::default();
        driver.set_enabled(true, 0.0);
        assert!(!driver.tick(1.0));
        assert!(!driver.tick(2.9));
        assert!(driver.tick(3.0));
        assert!(!driver.tick(3.1));
        assert!(driver.tick(6.1));
    }

    #[test]
    fn toggling_on_then_off_leaves_no_pending_advance() {
        let mut driver = AnimationDriver::default();
        driver.set_enabled(true, 0.0);
        driver.set_enabled(false, 0.5);
        assert!(!driver.is_enabled());
        // Fake clock runs well past several periods; nothing fires.
        for step in 1..20 {
            assert!(!driver.tick(step as f64));
        }
    }

    #[test]
    fn re_enabling_does_not_stack_timers() {
        let mut driver = AnimationDriver::default();
        driver.set_enabled(true, 0.0);
        driver.set_enabled(true, 2.9);
        // The second enable is a no-op; the original deadline stands.
        assert!(driver.tick(3.0));
        assert!(!driver.tick(3.5));
    }

    #[test]
    fn stall_yields_a_single_step() {
        let mut driver = AnimationDriver::default();
        driver.set_enabled(true, 0.0);
        assert!(driver.tick(30.0));
        assert!(!driver.tick(30.1));
    }

    #[test]
    fn sequence_wraps_through_all_five_scenarios() {
        let mut scenario = Scenario::Baseline;
        let mut seen = vec![scenario];
        for _ in 0..4 {
            scenario = next_in_sequence(scenario);
            seen.push(scenario);
        }
        assert_eq!(seen, ANIMATION_SEQUENCE.to_vec());
        assert_eq!(next_in_sequence(scenario), Scenario::Baseline);
    }
}
