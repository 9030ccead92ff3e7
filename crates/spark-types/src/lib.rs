// ─────────────────────────────────────────────────────────────────────
// SparkScore Engine — Core Types
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, configuration, keyword lexicons, and error
//! hierarchy for the SparkScore engine — the orbital scoring core
//! that ranks marketing stimuli by engagement potential.

pub mod config;
pub mod error;
pub mod lexicon;
pub mod orbital;
pub mod score;
pub mod stimulus;

pub use config::EngineConfig;
pub use error::{SparkError, SparkResult};
pub use lexicon::{
    CoherenceLexicon, EngagementLexicon, FactorSet, LexiconSet, PsychoLexicon, SignalLexicon,
};
pub use orbital::{Orbital, N_ORBITALS};
pub use score::{
    clamp_score, ClassificationResult, CoherenceReport, CommitmentProfile, CommitmentStatus,
    EngagementReport, MotorOutput, PsychoReport, SignalVector, SparkScore,
};
pub use stimulus::{Context, Stimulus};
