// ─────────────────────────────────────────────────────────────────────
// SparkScore Engine — Keyword Lexicons
// ─────────────────────────────────────────────────────────────────────
//! Versioned keyword tables driving every heuristic in the engine.
//!
//! Each factor is a named `(factor, keywords)` pair so the tables can
//! be tuned and shipped as configuration instead of code. The default
//! tables target pt-BR copy, the deployment locale.
//!
//! Matching contract: every lookup takes text that the normalizer has
//! already lower-cased; membership is substring containment, so
//! multi-word phrases ("já vi", "em breve") match as written.

use serde::{Deserialize, Serialize};

use crate::error::{SparkError, SparkResult};

/// A named keyword set: one factor of a heuristic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorSet {
    pub name: String,
    pub keywords: Vec<String>,
}

impl FactorSet {
    pub fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Count keywords present in the (already lower-cased) text.
    pub fn matches(&self, text: &str) -> usize {
        self.keywords.iter().filter(|k| text.contains(k.as_str())).count()
    }

    /// Matched fraction of the set: `matches / |set|`, 0 for an empty set.
    pub fn ratio(&self, text: &str) -> f64 {
        if self.keywords.is_empty() {
            return 0.0;
        }
        self.matches(text) as f64 / self.keywords.len() as f64
    }

    fn validate(&self) -> SparkResult<()> {
        if self.keywords.is_empty() {
            return Err(SparkError::Lexicon(format!(
                "factor set '{}' has no keywords",
                self.name
            )));
        }
        if self.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(SparkError::Lexicon(format!(
                "factor set '{}' contains a blank keyword",
                self.name
            )));
        }
        Ok(())
    }
}

/// Keyword sets behind the classifier's six-signal extraction.
/// `exposure_time_norm` is context-derived and has no set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalLexicon {
    pub version: String,
    pub familiarity: FactorSet,
    pub symbolic_coherence: FactorSet,
    pub anticipation: FactorSet,
    pub emotional_intensity: FactorSet,
    pub collective_recurrence: FactorSet,
}

impl Default for SignalLexicon {
    fn default() -> Self {
        Self {
            version: "pt-br-2024.1".to_string(),
            familiarity: FactorSet::new(
                "familiarity",
                &["já vi", "familiar", "conhecido", "sempre", "de novo"],
            ),
            symbolic_coherence: FactorSet::new(
                "symbolic_coherence",
                &["marca", "símbolo", "identidade", "coerente", "consistente"],
            ),
            anticipation: FactorSet::new(
                "anticipation",
                &["em breve", "aguarde", "novidade", "lançamento", "prepare-se"],
            ),
            emotional_intensity: FactorSet::new(
                "emotional_intensity",
                &["incrível", "amor", "paixão", "emocionante", "chocante"],
            ),
            collective_recurrence: FactorSet::new(
                "collective_recurrence",
                &["todo mundo", "viral", "tendência", "famoso", "popular"],
            ),
        }
    }
}

impl SignalLexicon {
    pub fn validate(&self) -> SparkResult<()> {
        for set in [
            &self.familiarity,
            &self.symbolic_coherence,
            &self.anticipation,
            &self.emotional_intensity,
            &self.collective_recurrence,
        ] {
            set.validate()?;
        }
        Ok(())
    }
}

/// Keyword sets behind the psycho analyzer: four attraction factors,
/// four risk factors, ambiguity, emotional words, and intensifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PsychoLexicon {
    pub version: String,
    /// Positive emotion, desire, benefit, exclusivity.
    pub attraction: Vec<FactorSet>,
    /// Fear, uncertainty, loss, negative outcome.
    pub risk: Vec<FactorSet>,
    pub ambiguity: FactorSet,
    pub emotional: FactorSet,
    /// Each intensifier present adds 0.1 to emotional intensity,
    /// capped at +0.3.
    pub intensifiers: FactorSet,
}

impl Default for PsychoLexicon {
    fn default() -> Self {
        Self {
            version: "pt-br-2024.1".to_string(),
            attraction: vec![
                FactorSet::new(
                    "positive_emotion",
                    &["feliz", "alegria", "maravilhoso", "ótimo", "incrível"],
                ),
                FactorSet::new(
                    "desire",
                    &["quero", "desejo", "preciso", "sonho", "ambição"],
                ),
                FactorSet::new(
                    "benefit",
                    &["grátis", "desconto", "vantagem", "benefício", "bônus"],
                ),
                FactorSet::new(
                    "exclusivity",
                    &["exclusivo", "limitado", "vip", "convite", "somente"],
                ),
            ],
            risk: vec![
                FactorSet::new(
                    "fear",
                    &["medo", "perigo", "cuidado", "ameaça", "assustador"],
                ),
                FactorSet::new(
                    "uncertainty",
                    &["talvez", "incerto", "dúvida", "arriscado", "duvidoso"],
                ),
                FactorSet::new(
                    "loss",
                    &["perder", "perda", "prejuízo", "desperdício", "nunca mais"],
                ),
                FactorSet::new(
                    "negative_outcome",
                    &["fracasso", "problema", "erro", "arrependimento", "decepção"],
                ),
            ],
            ambiguity: FactorSet::new(
                "ambiguity",
                &["coisa", "algo", "meio", "tipo", "qualquer"],
            ),
            emotional: FactorSet::new(
                "emotional",
                &["amor", "ódio", "paixão", "emocionante", "chocante"],
            ),
            intensifiers: FactorSet::new(
                "intensifiers",
                &["muito", "extremamente", "super", "totalmente", "demais"],
            ),
        }
    }
}

impl PsychoLexicon {
    pub fn validate(&self) -> SparkResult<()> {
        if self.attraction.is_empty() {
            return Err(SparkError::Lexicon("no attraction factor sets".into()));
        }
        if self.risk.is_empty() {
            return Err(SparkError::Lexicon("no risk factor sets".into()));
        }
        for set in self.attraction.iter().chain(self.risk.iter()) {
            set.validate()?;
        }
        self.ambiguity.validate()?;
        self.emotional.validate()?;
        self.intensifiers.validate()?;
        Ok(())
    }
}

/// Keyword sets behind the coherence analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoherenceLexicon {
    pub version: String,
    /// Brand/identity vocabulary: symbolic anchoring of the copy.
    pub symbolic: FactorSet,
    /// Words that signal a broken or contradictory narrative.
    pub dissonance: FactorSet,
}

impl Default for CoherenceLexicon {
    fn default() -> Self {
        Self {
            version: "pt-br-2024.1".to_string(),
            symbolic: FactorSet::new(
                "symbolic",
                &["marca", "história", "valores", "tradição", "essência"],
            ),
            dissonance: FactorSet::new(
                "dissonance",
                &["confuso", "aleatório", "incoerente", "contradição", "bagunça"],
            ),
        }
    }
}

impl CoherenceLexicon {
    pub fn validate(&self) -> SparkResult<()> {
        self.symbolic.validate()?;
        self.dissonance.validate()
    }
}

/// Keyword sets behind the engagement analyzer's keyword path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementLexicon {
    pub version: String,
    pub call_to_action: FactorSet,
    pub urgency: FactorSet,
}

impl Default for EngagementLexicon {
    fn default() -> Self {
        Self {
            version: "pt-br-2024.1".to_string(),
            call_to_action: FactorSet::new(
                "call_to_action",
                &["clique", "compre", "participe", "descubra", "aproveite"],
            ),
            urgency: FactorSet::new(
                "urgency",
                &["agora", "hoje", "últimas", "corra", "não perca"],
            ),
        }
    }
}

impl EngagementLexicon {
    pub fn validate(&self) -> SparkResult<()> {
        self.call_to_action.validate()?;
        self.urgency.validate()
    }
}

/// The full set of keyword tables an engine is built with. Constructed
/// once at process start and shared by reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconSet {
    #[serde(default)]
    pub signal: SignalLexicon,
    #[serde(default)]
    pub psycho: PsychoLexicon,
    #[serde(default)]
    pub coherence: CoherenceLexicon,
    #[serde(default)]
    pub engagement: EngagementLexicon,
}

impl LexiconSet {
    pub fn validate(&self) -> SparkResult<()> {
        self.signal.validate()?;
        self.psycho.validate()?;
        self.coherence.validate()?;
        self.engagement.validate()
    }

    /// Load a tuned lexicon set from JSON.
    pub fn from_json(json: &str) -> SparkResult<Self> {
        let set: Self = serde_json::from_str(json)
            .map_err(|e| SparkError::Lexicon(format!("JSON parse error: {e}")))?;
        set.validate()?;
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_set_ratio() {
        let set = FactorSet::new("familiarity", &["já vi", "familiar", "conhecido", "sempre", "de novo"]);
        assert!((set.ratio("já vi isso antes, é familiar") - 0.4).abs() < 1e-9);
        assert_eq!(set.ratio("texto sem nenhum gatilho"), 0.0);
    }

    #[test]
    fn test_factor_set_phrase_match() {
        let set = FactorSet::new("anticipation", &["em breve", "aguarde"]);
        assert_eq!(set.matches("disponível em breve na loja"), 1);
    }

    #[test]
    fn test_empty_set_ratio_is_zero() {
        let set = FactorSet {
            name: "empty".into(),
            keywords: vec![],
        };
        assert_eq!(set.ratio("qualquer texto"), 0.0);
    }

    #[test]
    fn test_default_lexicons_validate() {
        assert!(LexiconSet::default().validate().is_ok());
    }

    #[test]
    fn test_default_signal_sets_are_five_wide() {
        // Downstream ratio tests assume five-keyword sets (2/5 = 0.4).
        let lex = SignalLexicon::default();
        for set in [
            &lex.familiarity,
            &lex.symbolic_coherence,
            &lex.anticipation,
            &lex.emotional_intensity,
            &lex.collective_recurrence,
        ] {
            assert_eq!(set.keywords.len(), 5, "set {}", set.name);
        }
    }

    #[test]
    fn test_psycho_lexicon_shape() {
        let lex = PsychoLexicon::default();
        assert_eq!(lex.attraction.len(), 4);
        assert_eq!(lex.risk.len(), 4);
        for set in lex.attraction.iter().chain(lex.risk.iter()) {
            assert_eq!(set.keywords.len(), 5, "set {}", set.name);
        }
    }

    #[test]
    fn test_blank_keyword_rejected() {
        let mut lex = LexiconSet::default();
        lex.coherence.symbolic.keywords.push("  ".into());
        assert!(lex.validate().is_err());
    }

    #[test]
    fn test_from_json_roundtrip() {
        let json = serde_json::to_string(&LexiconSet::default()).unwrap();
        let back = LexiconSet::from_json(&json).unwrap();
        assert_eq!(back.signal.familiarity.keywords.len(), 5);
        assert_eq!(back.signal.version, "pt-br-2024.1");
    }

    #[test]
    fn test_from_json_rejects_empty_set() {
        let mut lex = LexiconSet::default();
        lex.engagement.urgency.keywords.clear();
        let json = serde_json::to_string(&lex).unwrap();
        assert!(LexiconSet::from_json(&json).is_err());
    }
}
