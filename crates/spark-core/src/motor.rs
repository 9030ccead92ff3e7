// ─────────────────────────────────────────────────────────────────────
// SparkScore Engine — Per-Orbital Motors
// ─────────────────────────────────────────────────────────────────────
//! State-specific refinement motors dispatched on the dominant orbital.
//!
//! The registry is an explicit factory object built once at engine
//! construction and passed by reference — never recreated per call.
//! Any orbital without a registered motor falls back to the neutral
//! motor (`processing_score = 0.5`); a gap never fails the pipeline.

use std::collections::HashMap;
use std::sync::Arc;

use spark_types::{clamp_score, ClassificationResult, Context, MotorOutput, Orbital, Stimulus};

/// Score emitted when no specialized motor is registered.
pub const NEUTRAL_PROCESSING_SCORE: f64 = 0.5;

/// A state-specific refinement step run after classification.
pub trait Motor: Send + Sync {
    fn name(&self) -> &'static str;

    fn process(
        &self,
        stimulus: &Stimulus,
        classification: &ClassificationResult,
        context: &Context,
    ) -> MotorOutput;
}

/// Fallback motor: contributes nothing either way.
pub struct NeutralMotor;

impl Motor for NeutralMotor {
    fn name(&self) -> &'static str {
        "neutral"
    }

    fn process(
        &self,
        _stimulus: &Stimulus,
        classification: &ClassificationResult,
        _context: &Context,
    ) -> MotorOutput {
        MotorOutput::new(classification.dominant, self.name(), NEUTRAL_PROCESSING_SCORE)
    }
}

/// Expectation motor: anticipation that is already stable is close to
/// converting, so both raise the refinement.
pub struct ExpectationMotor;

impl Motor for ExpectationMotor {
    fn name(&self) -> &'static str {
        "expectation"
    }

    fn process(
        &self,
        _stimulus: &Stimulus,
        classification: &ClassificationResult,
        _context: &Context,
    ) -> MotorOutput {
        let s = &classification.signals;
        let score = 0.3 + 0.4 * s.anticipation + 0.3 * classification.stability;
        MotorOutput::new(classification.dominant, self.name(), clamp_score(score, 0.0, 1.0))
    }
}

/// Alignment motor: symbolic anchoring works best when the message
/// stays calm, so emotional spikes discount it.
pub struct AlignmentMotor;

impl Motor for AlignmentMotor {
    fn name(&self) -> &'static str {
        "alignment"
    }

    fn process(
        &self,
        _stimulus: &Stimulus,
        classification: &ClassificationResult,
        _context: &Context,
    ) -> MotorOutput {
        let s = &classification.signals;
        let score = 0.3 + 0.4 * s.symbolic_coherence + 0.3 * (1.0 - s.emotional_intensity);
        MotorOutput::new(classification.dominant, self.name(), clamp_score(score, 0.0, 1.0))
    }
}

/// Engagement motor: emotional charge plus a stable classification is
/// the conversion window.
pub struct EngagementMotor;

impl Motor for EngagementMotor {
    fn name(&self) -> &'static str {
        "engagement"
    }

    fn process(
        &self,
        _stimulus: &Stimulus,
        classification: &ClassificationResult,
        _context: &Context,
    ) -> MotorOutput {
        let s = &classification.signals;
        let score = 0.2 + 0.5 * s.emotional_intensity + 0.3 * classification.stability;
        MotorOutput::new(classification.dominant, self.name(), clamp_score(score, 0.0, 1.0))
    }
}

/// Collective-myth motor: recurrence feeding on familiarity is the
/// self-amplifying regime; refinement tracks both.
pub struct CollectiveMythMotor;

impl Motor for CollectiveMythMotor {
    fn name(&self) -> &'static str {
        "collective_myth"
    }

    fn process(
        &self,
        _stimulus: &Stimulus,
        classification: &ClassificationResult,
        _context: &Context,
    ) -> MotorOutput {
        let s = &classification.signals;
        let score = 0.25 + 0.45 * s.collective_recurrence + 0.3 * s.familiarity;
        MotorOutput::new(classification.dominant, self.name(), clamp_score(score, 0.0, 1.0))
    }
}

/// Explicit factory keyed by orbital. Orbitals without an entry get
/// the neutral fallback.
pub struct MotorRegistry {
    motors: HashMap<Orbital, Arc<dyn Motor>>,
    fallback: Arc<dyn Motor>,
}

impl MotorRegistry {
    /// Registry with no specialized motors; everything falls back.
    pub fn empty() -> Self {
        Self {
            motors: HashMap::new(),
            fallback: Arc::new(NeutralMotor),
        }
    }

    /// Registry with the stock motors for Expectation, Alignment,
    /// Engagement, and Collective Myth.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(Orbital::Expectation, Arc::new(ExpectationMotor));
        registry.register(Orbital::Alignment, Arc::new(AlignmentMotor));
        registry.register(Orbital::Engagement, Arc::new(EngagementMotor));
        registry.register(Orbital::CollectiveMyth, Arc::new(CollectiveMythMotor));
        registry
    }

    pub fn register(&mut self, orbital: Orbital, motor: Arc<dyn Motor>) {
        self.motors.insert(orbital, motor);
    }

    /// Motor for the given orbital, or the neutral fallback.
    pub fn get(&self, orbital: Orbital) -> &Arc<dyn Motor> {
        match self.motors.get(&orbital) {
            Some(motor) => motor,
            None => {
                log::debug!(
                    "no motor registered for orbital {} ({}), using neutral fallback",
                    orbital.id(),
                    orbital.name()
                );
                &self.fallback
            }
        }
    }
}

impl Default for MotorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
