// ─────────────────────────────────────────────────────────────────────
// SparkScore Engine — Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{SparkError, SparkResult};

/// Runtime configuration for the SparkScore engine.
///
/// Holds the combiner weights and threshold constants. Keyword tables
/// live in [`crate::lexicon::LexiconSet`] so the two can be tuned and
/// versioned independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Weight of the classification impact term in the final score.
    pub w_impact: f64,
    /// Weight of the coherence analyzer score.
    pub w_coherence: f64,
    /// Weight of the psycho analyzer's attraction factor.
    pub w_attraction: f64,
    /// Weight of the engagement probability.
    pub w_engagement: f64,
    /// Weight of the motor's processing score.
    pub w_motor: f64,

    /// Orbitals scoring above this become secondary classifications.
    pub secondary_threshold: f64,
    /// Below this final score the "score low" advisory fires.
    pub low_score_threshold: f64,
    /// Above this perceived risk the mitigation advisory fires.
    pub high_risk_threshold: f64,
    /// Above this final score the "excellent" advisory fires.
    pub excellent_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            w_impact: 0.30,
            w_coherence: 0.20,
            w_attraction: 0.25,
            w_engagement: 0.15,
            w_motor: 0.10,
            secondary_threshold: 0.3,
            low_score_threshold: 0.3,
            high_risk_threshold: 0.7,
            excellent_threshold: 0.8,
        }
    }
}

impl EngineConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> SparkResult<()> {
        let weights = [
            ("w_impact", self.w_impact),
            ("w_coherence", self.w_coherence),
            ("w_attraction", self.w_attraction),
            ("w_engagement", self.w_engagement),
            ("w_motor", self.w_motor),
        ];
        for (name, w) in weights {
            if !(0.0..=1.0).contains(&w) {
                return Err(SparkError::Config(format!(
                    "{name} must be in [0, 1], got {w}"
                )));
            }
        }
        let sum: f64 = weights.iter().map(|(_, w)| w).sum();
        if (sum - 1.0).abs() > 1e-9 {
            return Err(SparkError::Config(format!(
                "combiner weights must sum to 1.0, got {sum}"
            )));
        }
        for (name, t) in [
            ("secondary_threshold", self.secondary_threshold),
            ("low_score_threshold", self.low_score_threshold),
            ("high_risk_threshold", self.high_risk_threshold),
            ("excellent_threshold", self.excellent_threshold),
        ] {
            if !(0.0..=1.0).contains(&t) {
                return Err(SparkError::Config(format!(
                    "{name} must be in [0, 1], got {t}"
                )));
            }
        }
        Ok(())
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> SparkResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| SparkError::Config(format!("JSON parse error: {e}")))
    }
}
