// ─────────────────────────────────────────────────────────────────────
// SparkScore Engine — Score & Result Types
// ─────────────────────────────────────────────────────────────────────
//! Result types produced by the scoring pipeline. Every probability-
//! like field is clamped to [0, 1] at the point of construction.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::orbital::{Orbital, N_ORBITALS};

/// Clamp a value to [lo, hi], mapping NaN to lo and Inf to the nearest bound.
#[inline]
pub fn clamp_score(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() {
        log::warn!("clamp_score: NaN detected, clamping to {lo:.4}");
        return lo;
    }
    if value.is_infinite() {
        let boundary = if value > 0.0 { hi } else { lo };
        log::warn!("clamp_score: Inf detected, clamping to {boundary:.4}");
        return boundary;
    }
    value.clamp(lo, hi)
}

/// Convenience: clamp to the unit interval.
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    clamp_score(value, 0.0, 1.0)
}

/// The six normalized features extracted once per call from a
/// (stimulus, context) pair. Never mutated after extraction.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SignalVector {
    pub familiarity: f64,
    pub symbolic_coherence: f64,
    pub anticipation: f64,
    pub emotional_intensity: f64,
    pub collective_recurrence: f64,
    pub exposure_time_norm: f64,
}

impl SignalVector {
    /// Construct with every component clamped to [0, 1].
    pub fn clamped(
        familiarity: f64,
        symbolic_coherence: f64,
        anticipation: f64,
        emotional_intensity: f64,
        collective_recurrence: f64,
        exposure_time_norm: f64,
    ) -> Self {
        Self {
            familiarity: clamp_unit(familiarity),
            symbolic_coherence: clamp_unit(symbolic_coherence),
            anticipation: clamp_unit(anticipation),
            emotional_intensity: clamp_unit(emotional_intensity),
            collective_recurrence: clamp_unit(collective_recurrence),
            exposure_time_norm: clamp_unit(exposure_time_norm),
        }
    }

    /// `(name, value)` pairs in declaration order.
    pub fn named(&self) -> [(&'static str, f64); 6] {
        [
            ("familiarity", self.familiarity),
            ("symbolic_coherence", self.symbolic_coherence),
            ("anticipation", self.anticipation),
            ("emotional_intensity", self.emotional_intensity),
            ("collective_recurrence", self.collective_recurrence),
            ("exposure_time_norm", self.exposure_time_norm),
        ]
    }

    /// Signals sorted by value, descending. The sort is stable, so
    /// ties keep declaration order.
    pub fn ranked(&self) -> [(&'static str, f64); 6] {
        let mut pairs = self.named();
        pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        pairs
    }
}

/// Outcome of the 7-way orbital classification. Created fresh per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Arg-max orbital; ties broken by lowest id.
    pub dominant: Orbital,
    /// Orbitals scoring above the secondary threshold, dominant
    /// excluded, in id order.
    pub secondary: Vec<Orbital>,
    /// Raw orbital scores, indexed by orbital id.
    pub scores: [f64; N_ORBITALS],
    /// The signal vector the scores were derived from.
    pub signals: SignalVector,
    /// Dominant score's share of total score mass; 0 on zero mass.
    pub stability: f64,
    /// Dominant score scaled by the orbital's impact weight.
    pub impact: f64,
    /// Human-readable account of the classification.
    pub justification: String,
}

/// Psycho analyzer output: the four-factor breakdown plus its own
/// aggregate. The profile half of the PPA is copied from here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PsychoReport {
    pub attraction: f64,
    pub risk: f64,
    pub noise: f64,
    pub emotional_intensity: f64,
    pub overall: f64,
}

impl PsychoReport {
    pub fn new(attraction: f64, risk: f64, noise: f64, emotional_intensity: f64) -> Self {
        let attraction = clamp_unit(attraction);
        let risk = clamp_unit(risk);
        let noise = clamp_unit(noise);
        let overall = clamp_unit(attraction * 0.5 + (1.0 - risk) * 0.3 + (1.0 - noise) * 0.2);
        Self {
            attraction,
            risk,
            noise,
            emotional_intensity: clamp_unit(emotional_intensity),
            overall,
        }
    }
}

/// Coherence analyzer output: symbolic/brand consistency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoherenceReport {
    pub coherence: f64,
    pub factors: BTreeMap<String, f64>,
}

/// Engagement analyzer output: probability the audience engages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementReport {
    pub engagement_probability: f64,
    pub factors: BTreeMap<String, f64>,
}

/// Result of the per-orbital motor refinement step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotorOutput {
    /// The orbital the motor was dispatched for.
    pub orbital: Orbital,
    /// Which motor strategy ran ("neutral" for the fallback).
    pub strategy: String,
    pub processing_score: f64,
}

impl MotorOutput {
    pub fn new(orbital: Orbital, strategy: impl Into<String>, processing_score: f64) -> Self {
        Self {
            orbital,
            strategy: strategy.into(),
            processing_score: clamp_unit(processing_score),
        }
    }
}

/// Behavioral-commitment status ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitmentStatus {
    Inactive,
    Emerging,
    Validated,
    Active,
    Crystallized,
}

impl CommitmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CommitmentStatus::Inactive => "inactive",
            CommitmentStatus::Emerging => "emerging",
            CommitmentStatus::Validated => "validated",
            CommitmentStatus::Active => "active",
            CommitmentStatus::Crystallized => "crystallized",
        }
    }
}

/// Behavioral-commitment profile ("PPA"), derived deterministically
/// from the dominant orbital and the psycho breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitmentProfile {
    pub status: CommitmentStatus,
    pub confidence: f64,
    /// Attraction/risk/noise/emotional-intensity, copied from the
    /// psycho analyzer.
    pub profile: BTreeMap<String, f64>,
}

/// The terminal value returned by one full engine pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SparkScore {
    /// Final bounded engagement-potential score.
    pub sparkscore: f64,
    pub ppa: CommitmentProfile,
    pub orbital: ClassificationResult,
    pub semiotic: CoherenceReport,
    pub psycho: PsychoReport,
    pub metric: EngagementReport,
    pub motor_result: MotorOutput,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_nan() {
        assert_eq!(clamp_score(f64::NAN, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_clamp_pos_inf() {
        assert_eq!(clamp_score(f64::INFINITY, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_clamp_neg_inf() {
        assert_eq!(clamp_score(f64::NEG_INFINITY, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_clamp_normal_and_bounds() {
        assert_eq!(clamp_score(0.75, 0.0, 1.0), 0.75);
        assert_eq!(clamp_score(1.5, 0.0, 1.0), 1.0);
        assert_eq!(clamp_score(-0.3, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_signal_vector_clamps() {
        let v = SignalVector::clamped(1.5, -0.2, f64::NAN, 0.5, 0.0, 2.0);
        assert_eq!(v.familiarity, 1.0);
        assert_eq!(v.symbolic_coherence, 0.0);
        assert_eq!(v.anticipation, 0.0);
        assert_eq!(v.exposure_time_norm, 1.0);
    }

    #[test]
    fn test_ranked_stable_on_ties() {
        let v = SignalVector::clamped(0.5, 0.5, 0.2, 0.5, 0.0, 0.0);
        let ranked = v.ranked();
        // Equal values keep declaration order.
        assert_eq!(ranked[0].0, "familiarity");
        assert_eq!(ranked[1].0, "symbolic_coherence");
        assert_eq!(ranked[2].0, "emotional_intensity");
    }

    #[test]
    fn test_psycho_report_overall_formula() {
        // overall = 0.5*attr + 0.3*(1-risk) + 0.2*(1-noise)
        let report = PsychoReport::new(0.4, 0.2, 0.5, 0.1);
        assert!((report.overall - (0.2 + 0.24 + 0.1)).abs() < 1e-9);
    }

    #[test]
    fn test_psycho_report_clamps_inputs() {
        let report = PsychoReport::new(2.0, -1.0, f64::NAN, 1.5);
        assert_eq!(report.attraction, 1.0);
        assert_eq!(report.risk, 0.0);
        assert_eq!(report.noise, 0.0);
        assert_eq!(report.emotional_intensity, 1.0);
    }

    #[test]
    fn test_motor_output_clamps() {
        let out = MotorOutput::new(Orbital::Noise, "neutral", 1.7);
        assert_eq!(out.processing_score, 1.0);
    }

    #[test]
    fn test_commitment_status_serde() {
        let json = serde_json::to_string(&CommitmentStatus::Crystallized).unwrap();
        assert_eq!(json, "\"crystallized\"");
    }
}
