// ─────────────────────────────────────────────────────────────────────
// SparkScore Engine — Core Pipeline
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Orbital classification, heuristic analysis, and score combination
//! for marketing stimuli.
//!
//! One engine pass is a single synchronous computation:
//!
//! ```text
//! SparkEngine::calculate
//!     ├── OrbitalClassifier::classify      (signals → 7 orbital scores)
//!     ├── CoherenceAnalyzer::analyze
//!     ├── PsychoAnalyzer::analyze
//!     ├── EngagementAnalyzer::analyze
//!     ├── MotorRegistry::get(dominant) → Motor::process
//!     └── weighted combine → PPA → recommendations
//! ```
//!
//! # Invariants
//!
//! 1. **Totality**: every well-typed (stimulus, context) pair produces
//!    a result. Empty text, empty context, and unregistered motors all
//!    degrade to neutral values instead of failing.
//! 2. **Boundedness**: every score-like field is clamped to [0, 1] at
//!    the point of computation.
//! 3. **Determinism**: the pipeline holds no mutable state; identical
//!    input yields identical output, so retries are idempotent.
//! 4. **Tie-break order**: the dominant orbital is the first maximum
//!    in id order 0→6. Lowest id wins ties.

pub mod classifier;
pub mod coherence;
pub mod engagement;
pub mod engine;
pub mod motor;
pub mod normalize;
pub mod psycho;

pub use classifier::OrbitalClassifier;
pub use coherence::CoherenceAnalyzer;
pub use engagement::EngagementAnalyzer;
pub use engine::SparkEngine;
pub use motor::{Motor, MotorRegistry, NEUTRAL_PROCESSING_SCORE};
pub use normalize::{normalize, NormalizedStimulus};
pub use psycho::PsychoAnalyzer;
