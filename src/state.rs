use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::animation::{next_in_sequence, AnimationDriver};
use crate::generator::{generate_samples, summarize};
use crate::types::{SamplePoint, Scenario, SummaryStats, VizMode, SAMPLES_PER_SCENARIO};

/// The single owner of all mutable UI state.
///
/// Samples and summary statistics are regenerated together inside
/// `regenerate`, so the two can never drift apart. Selection is an index into
/// the current sample vector and is cleared on every regeneration.
pub struct ExplorerState {
    pub scenario: Scenario,
    pub points: Vec<SamplePoint>,
    pub stats: SummaryStats,
    pub selected: Option<usize>,
    pub viz_mode: VizMode,
    driver: AnimationDriver,
    rng: ChaCha8Rng,
}

impl ExplorerState {
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    pub fn with_rng(rng: ChaCha8Rng) -> Self {
        let mut state = Self {
            scenario: Scenario::Baseline,
            points: Vec::new(),
            stats: SummaryStats::default(),
            selected: None,
            viz_mode: VizMode::Space3D,
            driver: AnimationDriver::default(),
            rng,
        };
        state.regenerate();
        state
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_enabled()
    }

    pub fn select_scenario(&mut self, scenario: Scenario) {
        if self.scenario != scenario {
            log::debug!("scenario -> {}", scenario.key());
            self.scenario = scenario;
            self.regenerate();
        }
    }

    /// Redraws the current scenario without changing it. Useful for
    /// eyeballing sampling variance.
    pub fn regenerate_current(&mut self) {
        self.regenerate();
    }

    pub fn toggle_animation(&mut self, now: f64) {
        let enable = !self.driver.is_enabled();
        log::debug!("animation {}", if enable { "on" } else { "off" });
        self.driver.set_enabled(enable, now);
    }

    pub fn set_mode(&mut self, mode: VizMode) {
        self.viz_mode = mode;
    }

    pub fn select_sample(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.points.len());
    }

    /// Advances the scenario cycle when the animation deadline has passed.
    /// Called once per frame with monotonic seconds.
    pub fn tick(&mut self, now: f64) {
        if self.driver.tick(now) {
            self.scenario = next_in_sequence(self.scenario);
            self.regenerate();
        }
    }

    fn regenerate(&mut self) {
        self.points = generate_samples(self.scenario, SAMPLES_PER_SCENARIO, &mut self.rng);
        self.stats = summarize(&self.points);
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(seed: u64) -> ExplorerState {
        ExplorerState::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn starts_with_a_full_baseline_sample_set() {
        let state = state(1);
        assert_eq!(state.scenario, Scenario::Baseline);
        assert_eq!(state.points.len(), SAMPLES_PER_SCENARIO);
        assert!(state.stats.mean_cgi > 0.0);
        assert!(state.selected.is_none());
    }

    #[test]
    fn scenario_change_regenerates_and_clears_selection() {
        let mut state = state(2);
        state.select_sample(Some(10));
        assert_eq!(state.selected, Some(10));

        state.select_scenario(Scenario::Nde);
        assert_eq!(state.scenario, Scenario::Nde);
        assert_eq!(state.points.len(), SAMPLES_PER_SCENARIO);
        assert!(state.selected.is_none());

        let recomputed = crate::generator::summarize(&state.points);
        assert_eq!(state.stats.mean_cgi, recomputed.mean_cgi);
    }

    #[test]
    fn reselecting_the_same_scenario_keeps_the_sample_set() {
        let mut state = state(3);
        let first_cgi = state.points[0].cgi;
        state.select_scenario(Scenario::Baseline);
        assert_eq!(state.points[0].cgi, first_cgi);
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        let mut state = state(4);
        state.select_sample(Some(SAMPLES_PER_SCENARIO));
        assert!(state.selected.is_none());
    }

    #[test]
    fn animation_advances_through_the_cycle() {
        let mut state = state(5);
        state.toggle_animation(0.0);
        assert!(state.is_animating());

        state.tick(1.0);
        assert_eq!(state.scenario, Scenario::Baseline);

        state.tick(3.0);
        assert_eq!(state.scenario, Scenario::Meditative);

        state.tick(6.0);
        assert_eq!(state.scenario, Scenario::Psychedelic);
    }

    #[test]
    fn disabling_animation_stops_all_advances() {
        let mut state = state(6);
        state.toggle_animation(0.0);
        state.toggle_animation(0.5);
        assert!(!state.is_animating());

        for step in 1..30 {
            state.tick(step as f64);
        }
        assert_eq!(state.scenario, Scenario::Baseline);
    }
}
