/// The five simulated consciousness states the generator can project.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scenario {
    Baseline,
    Meditative,
    Anesthetic,
    Psychedelic,
    Nde,
}

/// Auto-advance order used by the animation driver. Wraps around.
pub const ANIMATION_SEQUENCE: [Scenario; 5] = [
    Scenario::Baseline,
    Scenario::Meditative,
    Scenario::Psychedelic,
    Scenario::Nde,
    Scenario::Anesthetic,
];

/// Samples regenerated on every scenario change.
pub const SAMPLES_PER_SCENARIO: usize = 150;

/// Seconds between auto-advances while animating.
pub const ANIMATION_PERIOD_SECS: f64 = 3.0;

impl Scenario {
    pub const ALL: [Scenario; 5] = [
        Scenario::Baseline,
        Scenario::Meditative,
        Scenario::Anesthetic,
        Scenario::Psychedelic,
        Scenario::Nde,
    ];

    /// Parses a scenario key. Unknown keys silently fall back to `Baseline`,
    /// matching the generator's lenient contract.
    pub fn from_key(key: &str) -> Self {
        match key {
            "meditative" => Scenario::Meditative,
            "anesthetic" => Scenario::Anesthetic,
            "psychedelic" => Scenario::Psychedelic,
            "nde" => Scenario::Nde,
            _ => Scenario::Baseline,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Scenario::Baseline => "baseline",
            Scenario::Meditative => "meditative",
            Scenario::Anesthetic => "anesthetic",
            Scenario::Psychedelic => "psychedelic",
            Scenario::Nde => "nde",
        }
    }

    pub fn preset(self) -> &'static ScenarioPreset {
        match self {
            Scenario::Baseline => &ScenarioPreset {
                name: "Baseline",
                description: "Normal waking consciousness",
                color: [0x64, 0xb5, 0xf6],
                phi_boost: 1.0,
                rho_boost: 1.0,
                sigma_boost: 1.0,
            },
            Scenario::Meditative => &ScenarioPreset {
                name: "Meditative",
                description: "Enhanced coherence, stable integration",
                color: [0x81, 0xc7, 0x84],
                phi_boost: 1.1,
                rho_boost: 1.3,
                sigma_boost: 1.2,
            },
            Scenario::Anesthetic => &ScenarioPreset {
                name: "Anesthetic",
                description: "Suppressed quantum processes",
                color: [0xe5, 0x73, 0x73],
                phi_boost: 0.2,
                rho_boost: 0.1,
                sigma_boost: 0.3,
            },
            Scenario::Psychedelic => &ScenarioPreset {
                name: "Psychedelic",
                description: "Heightened quantum coherence",
                color: [0xba, 0x68, 0xc8],
                phi_boost: 0.9,
                rho_boost: 1.8,
                sigma_boost: 1.6,
            },
            Scenario::Nde => &ScenarioPreset {
                name: "NDE",
                description: "Peak integration and coherence",
                color: [0xff, 0xb7, 0x4d],
                phi_boost: 1.4,
                rho_boost: 2.0,
                sigma_boost: 1.8,
            },
        }
    }
}

/// Boost triple plus the display metadata used for labeling.
#[derive(Clone, Copy, Debug)]
pub struct ScenarioPreset {
    pub name: &'static str,
    pub description: &'static str,
    pub color: [u8; 3],
    pub phi_boost: f32,
    pub rho_boost: f32,
    pub sigma_boost: f32,
}

/// One generated consciousness sample. Immutable once produced.
///
/// `phi`, `rho` and `sigma` are the three composite scores; `cgi` is the
/// derived index `sqrt(phi * rho) * sigma * 24`. The remaining fields are the
/// intermediate factors kept around for tooltips and the analysis charts.
#[derive(Clone, Copy, Debug)]
pub struct SamplePoint {
    pub phi: f32,
    pub rho: f32,
    pub sigma: f32,
    pub cgi: f32,
    pub quantum_coherence: f32,
    pub spatial_coherence: f32,
    pub microtubule_sync: f32,
    pub fractal_dim: f32,
    pub signal_gain: f32,
    pub entanglement_density: f32,
    pub alpha: f32,
    pub beta: f32,
    pub tau: f32,
    pub exponential_saturation: f32,
}

/// CGI band edges: low < 4, moderate 4..=7, high > 7.
pub const BAND_LOW_MAX: f32 = 4.0;
pub const BAND_HIGH_MIN: f32 = 7.0;

/// Aggregate view of the current sample set. Always recomputed together with
/// the samples it describes.
#[derive(Clone, Copy, Debug, Default)]
pub struct SummaryStats {
    pub mean_cgi: f32,
    pub high_pct: f32,
    pub moderate_pct: f32,
    pub low_pct: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VizMode {
    Space3D,
    Landscape2D,
}

/// One row of the static scenario comparison table.
///
/// These numbers are illustrative reference values. They are deliberately
/// independent of the live generator and must not be derived from it.
#[derive(Clone, Copy, Debug)]
pub struct ScenarioBenchmark {
    pub scenario: Scenario,
    pub mean_cgi: f32,
    pub high_pct: f32,
    pub moderate_pct: f32,
    pub low_pct: f32,
}

pub const SCENARIO_BENCHMARKS: [ScenarioBenchmark; 5] = [
    ScenarioBenchmark {
        scenario: Scenario::Baseline,
        mean_cgi: 4.26,
        high_pct: 0.7,
        moderate_pct: 7.0,
        low_pct: 92.3,
    },
    ScenarioBenchmark {
        scenario: Scenario::Meditative,
        mean_cgi: 6.08,
        high_pct: 1.8,
        moderate_pct: 39.2,
        low_pct: 59.0,
    },
    ScenarioBenchmark {
        scenario: Scenario::Anesthetic,
        mean_cgi: 0.18,
        high_pct: 0.0,
        moderate_pct: 0.0,
        low_pct: 100.0,
    },
    ScenarioBenchmark {
        scenario: Scenario::Psychedelic,
        mean_cgi: 7.94,
        high_pct: 5.8,
        moderate_pct: 80.8,
        low_pct: 13.4,
    },
    ScenarioBenchmark {
        scenario: Scenario::Nde,
        mean_cgi: 10.84,
        high_pct: 35.0,
        moderate_pct: 60.6,
        low_pct: 4.4,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_falls_back_to_baseline() {
        assert_eq!(Scenario::from_key("baseline"), Scenario::Baseline);
        assert_eq!(Scenario::from_key("lucid_dream"), Scenario::Baseline);
        assert_eq!(Scenario::from_key(""), Scenario::Baseline);
    }

    #[test]
    fn keys_round_trip() {
        for scenario in Scenario::ALL {
            assert_eq!(Scenario::from_key(scenario.key()), scenario);
        }
    }

    #[test]
    fn benchmark_bands_cover_the_full_range() {
        for row in SCENARIO_BENCHMARKS {
            let total = row.high_pct + row.moderate_pct + row.low_pct;
            assert!((total - 100.0).abs() < 0.2, "{:?}: {total}", row.scenario);
        }
    }
}
