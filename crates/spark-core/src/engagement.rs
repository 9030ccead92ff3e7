// ─────────────────────────────────────────────────────────────────────
// SparkScore Engine — Engagement Analyzer
// ─────────────────────────────────────────────────────────────────────
//! Estimates the probability the audience engages with a stimulus.
//!
//! When the context carries history (`historical_engagement`,
//! `historical_conversion`) the estimate leans on it; otherwise the
//! stimulus keywords (call-to-action, urgency) carry the estimate,
//! with repeat exposure as a small boost.

use std::collections::BTreeMap;

use spark_types::{clamp_score, Context, EngagementLexicon, EngagementReport, Stimulus};

use crate::normalize::normalize;

/// Exposures beyond this count no longer raise the repeat boost.
const REPEAT_SATURATION: f64 = 10.0;

const W_CTA: f64 = 0.6;
const W_URGENCY: f64 = 0.4;

/// History-backed blend: history dominates, keywords refine.
const W_HISTORY: f64 = 0.6;
const W_KEYWORD_WITH_HISTORY: f64 = 0.3;
const W_REPEAT_WITH_HISTORY: f64 = 0.1;

/// Keyword-only blend, used when no history is present.
const W_KEYWORD_ALONE: f64 = 0.7;
const W_REPEAT_ALONE: f64 = 0.3;

pub struct EngagementAnalyzer {
    lexicon: EngagementLexicon,
}

impl EngagementAnalyzer {
    pub fn new(lexicon: EngagementLexicon) -> Self {
        Self { lexicon }
    }

    /// Analyze a stimulus. Total: with no history, no keywords, and no
    /// exposure the probability is 0.
    pub fn analyze(&self, stimulus: &Stimulus, context: &Context) -> EngagementReport {
        let norm = normalize(stimulus, context);
        let text = norm.text.as_str();

        let cta = self.lexicon.call_to_action.ratio(text);
        let urgency = self.lexicon.urgency.ratio(text);
        let keyword_score = clamp_score(W_CTA * cta + W_URGENCY * urgency, 0.0, 1.0);

        let repeat = match context.exposure_count {
            Some(n) => (n as f64 / REPEAT_SATURATION).min(1.0),
            None => 0.0,
        };

        let history = history_mean(context);
        let probability = match history {
            Some(h) => clamp_score(
                W_HISTORY * h
                    + W_KEYWORD_WITH_HISTORY * keyword_score
                    + W_REPEAT_WITH_HISTORY * repeat,
                0.0,
                1.0,
            ),
            None => clamp_score(W_KEYWORD_ALONE * keyword_score + W_REPEAT_ALONE * repeat, 0.0, 1.0),
        };

        let mut factors = BTreeMap::new();
        factors.insert("call_to_action".to_string(), cta);
        factors.insert("urgency".to_string(), urgency);
        factors.insert("repeat_exposure".to_string(), repeat);
        factors.insert("history".to_string(), history.unwrap_or(0.0));

        EngagementReport {
            engagement_probability: probability,
            factors,
        }
    }
}

/// Mean of whichever historical rates are present, clamped to [0, 1].
/// `None` when the context carries no history at all.
fn history_mean(context: &Context) -> Option<f64> {
    let present: Vec<f64> = [context.historical_engagement, context.historical_conversion]
        .iter()
        .flatten()
        .map(|v| clamp_score(*v, 0.0, 1.0))
        .collect();
    if present.is_empty() {
        None
    } else {
        Some(present.iter().sum::<f64>() / present.len() as f64)
    }
}
