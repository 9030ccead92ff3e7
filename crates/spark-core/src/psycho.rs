// ─────────────────────────────────────────────────────────────────────
// SparkScore Engine — Psycho Analyzer
// ─────────────────────────────────────────────────────────────────────
//! Scores the psychological pull of a stimulus along four factors:
//! attraction, risk, noise, and emotional intensity.
//!
//! Noise deliberately treats high lexical diversity as distracting:
//! scattered vocabulary reads as an unfocused message, so
//! `unique_words / total_words` counts toward noise, not against it.

use spark_types::{clamp_score, Context, PsychoLexicon, PsychoReport, Stimulus};

use crate::normalize::{normalize, tokens};

/// Context keys beyond this count no longer reduce the richness deficit.
const CONTEXT_RICHNESS_CAP: usize = 10;

/// Each intensifier word present adds this much emotional intensity.
const INTENSIFIER_STEP: f64 = 0.1;

/// Cap on the total intensifier bonus.
const INTENSIFIER_BONUS_CAP: f64 = 0.3;

pub struct PsychoAnalyzer {
    lexicon: PsychoLexicon,
}

impl PsychoAnalyzer {
    pub fn new(lexicon: PsychoLexicon) -> Self {
        Self { lexicon }
    }

    /// Analyze a stimulus. Total: empty text yields zero attraction,
    /// zero risk, and maximal noise.
    pub fn analyze(&self, stimulus: &Stimulus, context: &Context) -> PsychoReport {
        let norm = normalize(stimulus, context);
        let text = norm.text.as_str();

        let attraction = mean_ratio(&self.lexicon.attraction, text);
        let risk = mean_ratio(&self.lexicon.risk, text);
        let noise = self.noise(text, context);
        let emotional = self.emotional_intensity(text);

        PsychoReport::new(attraction, risk, noise, emotional)
    }

    /// Noise: mean of lexical diversity, ambiguous-word ratio, and
    /// context-richness deficit.
    fn noise(&self, text: &str, context: &Context) -> f64 {
        let words = tokens(text);
        if words.is_empty() {
            // No words, no signal: an empty stimulus is pure noise.
            return 1.0;
        }
        let unique: std::collections::HashSet<&str> = words.iter().copied().collect();
        let diversity = unique.len() as f64 / words.len() as f64;

        let ambiguity = self.lexicon.ambiguity.ratio(text);

        let richness = (context.len() as f64 / CONTEXT_RICHNESS_CAP as f64).min(1.0);
        let deficit = 1.0 - richness;

        (diversity + ambiguity + deficit) / 3.0
    }

    /// Emotional keyword ratio plus a capped intensifier bonus.
    fn emotional_intensity(&self, text: &str) -> f64 {
        let base = self.lexicon.emotional.ratio(text);
        let bonus = (self.lexicon.intensifiers.matches(text) as f64 * INTENSIFIER_STEP)
            .min(INTENSIFIER_BONUS_CAP);
        clamp_score(base + bonus, 0.0, 1.0)
    }
}

/// Mean of the per-set matched ratios; 0 when there are no sets.
fn mean_ratio(sets: &[spark_types::FactorSet], text: &str) -> f64 {
    if sets.is_empty() {
        return 0.0;
    }
    sets.iter().map(|s| s.ratio(text)).sum::<f64>() / sets.len() as f64
}
