// ─────────────────────────────────────────────────────────────────────
// SparkScore Engine — Orbital Catalogue
// ─────────────────────────────────────────────────────────────────────
//! The seven cognitive orbitals a stimulus can occupy, with their
//! canonical names and per-orbital impact weights.
//!
//! The impact weight scales the dominant orbital's raw score into the
//! `impact` term of the final SparkScore. It plays no role in the
//! classification itself.

use serde::{Deserialize, Serialize};

pub const N_ORBITALS: usize = 7;

/// Impact weights, indexed by orbital id.
pub const IMPACT_WEIGHTS: [f64; N_ORBITALS] = [
    0.1,  // 0 — Noise
    0.3,  // 1 — Recognition
    0.5,  // 2 — Expectation
    0.7,  // 3 — Alignment
    0.9,  // 4 — Engagement
    0.6,  // 5 — Memory
    0.95, // 6 — Collective Myth ("Mandela effect")
];

pub const ORBITAL_NAMES: [&str; N_ORBITALS] = [
    "Noise",
    "Recognition",
    "Expectation",
    "Alignment",
    "Engagement",
    "Memory",
    "Collective Myth",
];

/// One of the seven discrete cognitive states a stimulus is placed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Orbital {
    Noise = 0,
    Recognition = 1,
    Expectation = 2,
    Alignment = 3,
    Engagement = 4,
    Memory = 5,
    CollectiveMyth = 6,
}

impl Orbital {
    /// All orbitals in id order. Iteration order is load-bearing: the
    /// classifier's tie-break scans this array front to back, so the
    /// lowest id wins ties.
    pub const ALL: [Orbital; N_ORBITALS] = [
        Orbital::Noise,
        Orbital::Recognition,
        Orbital::Expectation,
        Orbital::Alignment,
        Orbital::Engagement,
        Orbital::Memory,
        Orbital::CollectiveMyth,
    ];

    #[inline]
    pub fn id(self) -> usize {
        self as usize
    }

    pub fn from_id(id: usize) -> Option<Self> {
        Self::ALL.get(id).copied()
    }

    pub fn name(self) -> &'static str {
        ORBITAL_NAMES[self.id()]
    }

    /// Fixed weight applied to the dominant orbital's score when
    /// computing the `impact` term.
    pub fn impact_weight(self) -> f64 {
        IMPACT_WEIGHTS[self.id()]
    }
}

impl From<Orbital> for u8 {
    fn from(o: Orbital) -> u8 {
        o as u8
    }
}

impl TryFrom<u8> for Orbital {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Orbital::from_id(id as usize).ok_or_else(|| format!("orbital id out of range: {id}"))
    }
}
