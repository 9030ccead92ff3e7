// ─────────────────────────────────────────────────────────────────────
// SparkScore Engine — Coherence Analyzer
// ─────────────────────────────────────────────────────────────────────
//! Scores symbolic/brand consistency of a stimulus.
//!
//! Three factors feed the scalar:
//!   - `symbolic_density` — brand/identity vocabulary present.
//!   - `narrative_focus`  — repetition of a motif; the inverse of
//!     lexical scatter.
//!   - `dissonance`       — vocabulary that signals a broken message
//!     (counts against coherence).

use std::collections::BTreeMap;

use spark_types::{clamp_score, CoherenceLexicon, CoherenceReport, Context, Stimulus};

use crate::normalize::{normalize, tokens};

const W_SYMBOLIC: f64 = 0.45;
const W_FOCUS: f64 = 0.25;
const W_CONSONANCE: f64 = 0.30;

pub struct CoherenceAnalyzer {
    lexicon: CoherenceLexicon,
}

impl CoherenceAnalyzer {
    pub fn new(lexicon: CoherenceLexicon) -> Self {
        Self { lexicon }
    }

    /// Analyze a stimulus. Total: empty text scores the floor the
    /// consonance term alone provides.
    pub fn analyze(&self, stimulus: &Stimulus, context: &Context) -> CoherenceReport {
        let norm = normalize(stimulus, context);
        let text = norm.text.as_str();

        let symbolic_density = self.lexicon.symbolic.ratio(text);
        let narrative_focus = narrative_focus(text);
        let dissonance = self.lexicon.dissonance.ratio(text);

        let coherence = clamp_score(
            W_SYMBOLIC * symbolic_density
                + W_FOCUS * narrative_focus
                + W_CONSONANCE * (1.0 - dissonance),
            0.0,
            1.0,
        );

        let mut factors = BTreeMap::new();
        factors.insert("symbolic_density".to_string(), symbolic_density);
        factors.insert("narrative_focus".to_string(), narrative_focus);
        factors.insert("dissonance".to_string(), dissonance);

        CoherenceReport { coherence, factors }
    }
}

/// Inverse lexical scatter: `1 - unique/total`. Empty text has no
/// motif to repeat and scores 0.
fn narrative_focus(text: &str) -> f64 {
    let words = tokens(text);
    if words.is_empty() {
        return 0.0;
    }
    let unique: std::collections::HashSet<&str> = words.iter().copied().collect();
    1.0 - unique.len() as f64 / words.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use spark_types::CoherenceLexicon;

    fn make_analyzer() -> CoherenceAnalyzer {
        CoherenceAnalyzer::new(CoherenceLexicon::default())
    }

    #[test]
    fn test_brand_heavy_copy_scores_high() {
        let analyzer = make_analyzer();
        let branded = analyzer.analyze(
            &Stimulus::from_text("a marca com história, valores e tradição; a essência da marca"),
            &Context::default(),
        );
        let generic = analyzer.analyze(
            &Stimulus::from_text("oferta imperdível chegando aí para você aproveitar"),
            &Context::default(),
        );
        assert!(branded.coherence > generic.coherence);
        assert_eq!(branded.factors["symbolic_density"], 1.0);
    }

    #[test]
    fn test_dissonance_words_lower_score() {
        let analyzer = make_analyzer();
        let clean = analyzer.analyze(
            &Stimulus::from_text("mensagem da marca com valores claros"),
            &Context::default(),
        );
        let broken = analyzer.analyze(
            &Stimulus::from_text("mensagem confusa, aleatória, uma contradição incoerente"),
            &Context::default(),
        );
        assert!(broken.coherence < clean.coherence);
        assert!(broken.factors["dissonance"] > 0.0);
    }

    #[test]
    fn test_empty_text_floor() {
        let analyzer = make_analyzer();
        let report = analyzer.analyze(&Stimulus::default(), &Context::default());
        // symbolic 0, focus 0, dissonance 0 → 0.30 floor.
        assert!((report.coherence - 0.30).abs() < 1e-9);
        assert_eq!(report.factors["narrative_focus"], 0.0);
    }

    #[test]
    fn test_bounded() {
        let analyzer = make_analyzer();
        let report = analyzer.analyze(
            &Stimulus::from_text("marca marca marca história valores tradição essência"),
            &Context::default(),
        );
        assert!((0.0..=1.0).contains(&report.coherence));
        for value in report.factors.values() {
            assert!((0.0..=1.0).contains(value));
        }
    }
}
