// ─────────────────────────────────────────────────────────────────────
// SparkScore Engine — Stimulus Normalizer
// ─────────────────────────────────────────────────────────────────────
//! Canonicalizes a heterogeneous stimulus into a single lower-cased
//! text view. Context passes through untouched.

use spark_types::{Context, Stimulus};

/// A stimulus reduced to its canonical text view.
///
/// Whitespace is preserved; only letter case changes. Media references
/// are dropped from the view (the core scores text only) but remain on
/// the original stimulus.
#[derive(Debug, Clone)]
pub struct NormalizedStimulus<'a> {
    /// Lower-cased copy of the stimulus text. Empty when the stimulus
    /// carried no text.
    pub text: String,
    pub context: &'a Context,
}

/// Produce the canonical lower-cased view of a stimulus.
///
/// No failure modes: a missing/empty text field normalizes to `""`.
pub fn normalize<'a>(stimulus: &Stimulus, context: &'a Context) -> NormalizedStimulus<'a> {
    NormalizedStimulus {
        text: stimulus.text.to_lowercase(),
        context,
    }
}

/// Word tokens of a normalized text: whitespace-split, stripped of
/// leading/trailing punctuation, empties dropped. Accented letters
/// are kept — the default lexicons are pt-BR.
pub fn tokens(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .collect()
}
