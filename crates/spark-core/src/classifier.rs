// ─────────────────────────────────────────────────────────────────────
// SparkScore Engine — Orbital Classifier
// ─────────────────────────────────────────────────────────────────────
//! Places a stimulus into one of the seven cognitive orbitals.
//!
//! Pipeline per call:
//!   1. Normalize the stimulus.
//!   2. Extract the six-signal vector (keyword ratios + exposure time).
//!   3. Score each orbital with its closed-form two-signal product.
//!   4. First-max scan for the dominant orbital (lowest id wins ties).
//!   5. Stability, impact, and justification.
//!
//! Every input classifies; absent context keys contribute zero.

use spark_types::{
    clamp_score, ClassificationResult, Context, Orbital, SignalLexicon, SignalVector, Stimulus,
    N_ORBITALS,
};

use crate::normalize::normalize;

/// Seconds of exposure that saturate `exposure_time_norm`.
const EXPOSURE_SATURATION_S: f64 = 60.0;

/// Seven-way weighted classifier over the six-signal vector.
pub struct OrbitalClassifier {
    lexicon: SignalLexicon,
    secondary_threshold: f64,
}

impl OrbitalClassifier {
    pub fn new(lexicon: SignalLexicon, secondary_threshold: f64) -> Self {
        Self {
            lexicon,
            secondary_threshold,
        }
    }

    /// Derive the signal vector from an already-normalized text and
    /// its context.
    pub fn extract_signals(&self, text: &str, context: &Context) -> SignalVector {
        let exposure = match context.exposure_time {
            Some(t) if t > 0.0 => (t / EXPOSURE_SATURATION_S).min(1.0),
            _ => 0.0,
        };
        SignalVector::clamped(
            self.lexicon.familiarity.ratio(text),
            self.lexicon.symbolic_coherence.ratio(text),
            self.lexicon.anticipation.ratio(text),
            self.lexicon.emotional_intensity.ratio(text),
            self.lexicon.collective_recurrence.ratio(text),
            exposure,
        )
    }

    /// Classify a stimulus. Total: every input produces a result.
    pub fn classify(&self, stimulus: &Stimulus, context: &Context) -> ClassificationResult {
        let norm = normalize(stimulus, context);
        let signals = self.extract_signals(&norm.text, context);
        let scores = orbital_scores(&signals);

        let dominant = Orbital::ALL[first_max(&scores)];
        let dominant_score = scores[dominant.id()];

        let secondary: Vec<Orbital> = Orbital::ALL
            .iter()
            .copied()
            .filter(|o| *o != dominant && scores[o.id()] > self.secondary_threshold)
            .collect();

        let total: f64 = scores.iter().sum();
        // Zero mass means nothing to be stable about.
        let stability = if total == 0.0 {
            0.0
        } else {
            clamp_score(dominant_score / total, 0.0, 1.0)
        };

        let impact = clamp_score(dominant.impact_weight() * dominant_score, 0.0, 1.0);
        let justification = justification(dominant, dominant_score, &signals);

        ClassificationResult {
            dominant,
            secondary,
            scores,
            signals,
            stability,
            impact,
            justification,
        }
    }
}

/// Closed-form orbital scores: each orbital is a product of two
/// signals. The pairings are fixed.
pub fn orbital_scores(s: &SignalVector) -> [f64; N_ORBITALS] {
    let fam = s.familiarity;
    let coh = s.symbolic_coherence;
    let ant = s.anticipation;
    let emo = s.emotional_intensity;
    let rec = s.collective_recurrence;
    let exp = s.exposure_time_norm;
    [
        (1.0 - fam) * (1.0 - coh), // 0 Noise: nothing recognized, nothing anchored
        fam * (1.0 - ant),         // 1 Recognition: familiar but not awaited
        ant * fam,                 // 2 Expectation
        coh * (1.0 - emo),         // 3 Alignment: anchored, calm
        emo * coh,                 // 4 Engagement
        fam * exp,                 // 5 Memory: familiarity under sustained exposure
        rec * fam,                 // 6 Collective Myth
    ]
}

/// Index of the first maximum. Scanning front to back makes the
/// lowest orbital id win ties; callers depend on that ordering.
pub fn first_max(scores: &[f64; N_ORBITALS]) -> usize {
    let mut best = 0;
    for (i, score) in scores.iter().enumerate().skip(1) {
        if *score > scores[best] {
            best = i;
        }
    }
    best
}

fn justification(dominant: Orbital, score: f64, signals: &SignalVector) -> String {
    let ranked = signals.ranked();
    format!(
        "dominant orbital {} ({}) scored {:.3}; strongest signals: {} {:.2}, {} {:.2}",
        dominant.id(),
        dominant.name(),
        score,
        ranked[0].0,
        ranked[0].1,
        ranked[1].0,
        ranked[1].1,
    )
}
