// ─────────────────────────────────────────────────────────────────────
// SparkScore Engine — Stimulus & Context
// ─────────────────────────────────────────────────────────────────────
//! Input types: the marketing stimulus under evaluation and the
//! exposure/history side-information that accompanies it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A marketing stimulus: the copy text plus optional media references.
/// Immutable input — the engine never mutates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stimulus {
    /// The copy text. An absent or empty text is valid and scores as
    /// pure noise; it never raises.
    #[serde(default)]
    pub text: String,
    /// Opaque references to attached media (images, video). Carried
    /// through untouched; the core scores text only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media_refs: Vec<String>,
}

impl Stimulus {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            media_refs: Vec::new(),
        }
    }
}

/// Exposure/history side-information for a stimulus.
///
/// Recognized keys are typed fields; anything else lands in `extra`
/// and is preserved but ignored by the core. Every field is optional
/// and absence always means a neutral (zero) contribution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Context {
    /// Seconds the audience was exposed to the stimulus (>= 0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exposure_time: Option<f64>,
    /// How many times the audience has seen this stimulus (>= 0).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exposure_count: Option<u64>,
    /// Historical engagement rate for comparable stimuli, in [0, 1].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historical_engagement: Option<f64>,
    /// Historical conversion rate for comparable stimuli, in [0, 1].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historical_conversion: Option<f64>,
    /// Unrecognized keys, passed through unchanged.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Context {
    /// Number of keys present, recognized and unrecognized alike.
    /// Feeds the psycho analyzer's context-richness deficit.
    pub fn len(&self) -> usize {
        let recognized = [
            self.exposure_time.is_some(),
            self.exposure_count.is_some(),
            self.historical_engagement.is_some(),
            self.historical_conversion.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count();
        recognized + self.extra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
