// ─────────────────────────────────────────────────────────────────────
// SparkScore Engine — Score Combiner
// ─────────────────────────────────────────────────────────────────────
//! The orchestrator: runs the classifier and the three analyzers,
//! dispatches the motor for the dominant orbital, combines the five
//! signals into the final bounded score, derives the behavioral-
//! commitment profile, and emits threshold-rule recommendations.
//!
//! The engine is stateless across calls: classifier, analyzers, and
//! motor registry are built once and only read afterwards, so one
//! engine can serve any number of threads.

use std::collections::BTreeMap;

use spark_types::{
    clamp_score, ClassificationResult, CoherenceReport, CommitmentProfile, CommitmentStatus,
    Context, EngagementReport, EngineConfig, LexiconSet, Orbital, PsychoReport, SparkResult,
    SparkScore, Stimulus,
};

use crate::classifier::OrbitalClassifier;
use crate::coherence::CoherenceAnalyzer;
use crate::engagement::EngagementAnalyzer;
use crate::motor::MotorRegistry;
use crate::psycho::PsychoAnalyzer;

pub const REC_LOW_SCORE: &str = "score low, adjust stimulus";
pub const REC_IN_NOISE: &str = "stimulus in noise, improve familiarity/coherence";
pub const REC_EMERGING: &str = "emerging commitment, has development potential";
pub const REC_ENGAGEMENT: &str = "high engagement, ideal moment for a call-to-action";
pub const REC_HIGH_RISK: &str = "high perceived risk, consider mitigation";
pub const REC_EXCELLENT: &str = "excellent score, keep strategy";

pub struct SparkEngine {
    config: EngineConfig,
    classifier: OrbitalClassifier,
    coherence: CoherenceAnalyzer,
    psycho: PsychoAnalyzer,
    engagement: EngagementAnalyzer,
    motors: MotorRegistry,
}

impl SparkEngine {
    /// Build an engine from explicit configuration, lexicons, and
    /// motor registry. Fails only on invalid config or lexicons.
    pub fn new(
        config: EngineConfig,
        lexicons: LexiconSet,
        motors: MotorRegistry,
    ) -> SparkResult<Self> {
        config.validate()?;
        lexicons.validate()?;
        Ok(Self {
            classifier: OrbitalClassifier::new(lexicons.signal, config.secondary_threshold),
            coherence: CoherenceAnalyzer::new(lexicons.coherence),
            psycho: PsychoAnalyzer::new(lexicons.psycho),
            engagement: EngagementAnalyzer::new(lexicons.engagement),
            motors,
            config,
        })
    }

    /// Stock engine: default config, pt-BR lexicons, stock motors.
    /// Defaults are always valid, so construction is direct.
    pub fn with_defaults() -> Self {
        let config = EngineConfig::default();
        let lexicons = LexiconSet::default();
        Self {
            classifier: OrbitalClassifier::new(lexicons.signal, config.secondary_threshold),
            coherence: CoherenceAnalyzer::new(lexicons.coherence),
            psycho: PsychoAnalyzer::new(lexicons.psycho),
            engagement: EngagementAnalyzer::new(lexicons.engagement),
            motors: MotorRegistry::with_defaults(),
            config,
        }
    }

    /// One full scoring pass. Pure: identical input, identical output.
    pub fn calculate(&self, stimulus: &Stimulus, context: &Context) -> SparkScore {
        let classification = self.classifier.classify(stimulus, context);
        let semiotic = self.coherence.analyze(stimulus, context);
        let psycho = self.psycho.analyze(stimulus, context);
        let metric = self.engagement.analyze(stimulus, context);

        let motor_result = self
            .motors
            .get(classification.dominant)
            .process(stimulus, &classification, context);

        let sparkscore = clamp_score(
            self.config.w_impact * classification.impact
                + self.config.w_coherence * semiotic.coherence
                + self.config.w_attraction * psycho.attraction
                + self.config.w_engagement * metric.engagement_probability
                + self.config.w_motor * motor_result.processing_score,
            0.0,
            1.0,
        );

        let ppa = derive_ppa(&classification, &psycho);
        let recommendations = self.recommend(sparkscore, &classification, &psycho, &ppa);

        log::debug!(
            "sparkscore {:.4} | dominant {} ({}) stability {:.3} | motor {} {:.3}",
            sparkscore,
            classification.dominant.id(),
            classification.dominant.name(),
            classification.stability,
            motor_result.strategy,
            motor_result.processing_score,
        );

        SparkScore {
            sparkscore,
            ppa,
            orbital: classification,
            semiotic,
            psycho,
            metric,
            motor_result,
            recommendations,
        }
    }

    // Sibling single-analysis entry points; thin pass-throughs for
    // the read-only boundary endpoints.

    pub fn classify(&self, stimulus: &Stimulus, context: &Context) -> ClassificationResult {
        self.classifier.classify(stimulus, context)
    }

    pub fn analyze_coherence(&self, stimulus: &Stimulus, context: &Context) -> CoherenceReport {
        self.coherence.analyze(stimulus, context)
    }

    pub fn analyze_psycho(&self, stimulus: &Stimulus, context: &Context) -> PsychoReport {
        self.psycho.analyze(stimulus, context)
    }

    pub fn analyze_engagement(&self, stimulus: &Stimulus, context: &Context) -> EngagementReport {
        self.engagement.analyze(stimulus, context)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Ordered advisory list. Rules are independent; any subset may
    /// fire, and each rule fires at most once.
    fn recommend(
        &self,
        sparkscore: f64,
        classification: &ClassificationResult,
        psycho: &PsychoReport,
        ppa: &CommitmentProfile,
    ) -> Vec<String> {
        let mut recs = Vec::new();
        if sparkscore < self.config.low_score_threshold {
            recs.push(REC_LOW_SCORE.to_string());
        }
        if classification.dominant == Orbital::Noise {
            recs.push(REC_IN_NOISE.to_string());
        }
        if classification.dominant == Orbital::Expectation
            && ppa.status == CommitmentStatus::Emerging
        {
            recs.push(REC_EMERGING.to_string());
        }
        if classification.dominant == Orbital::Engagement {
            recs.push(REC_ENGAGEMENT.to_string());
        }
        if psycho.risk > self.config.high_risk_threshold {
            recs.push(REC_HIGH_RISK.to_string());
        }
        if sparkscore > self.config.excellent_threshold {
            recs.push(REC_EXCELLENT.to_string());
        }
        recs
    }
}

impl Default for SparkEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Fixed derivation table: dominant orbital → commitment status, with
/// confidence scaled from the classification impact. The profile half
/// is copied from the psycho breakdown.
fn derive_ppa(classification: &ClassificationResult, psycho: &PsychoReport) -> CommitmentProfile {
    let (status, confidence) = match classification.dominant {
        Orbital::Expectation => (CommitmentStatus::Emerging, 0.5 * classification.impact),
        Orbital::Alignment => (CommitmentStatus::Validated, 0.7 * classification.impact),
        Orbital::Engagement => (CommitmentStatus::Active, 0.9 * classification.impact),
        Orbital::CollectiveMyth => (CommitmentStatus::Crystallized, 1.0 * classification.impact),
        _ => (CommitmentStatus::Inactive, 0.0),
    };

    let mut profile = BTreeMap::new();
    profile.insert("attraction".to_string(), psycho.attraction);
    profile.insert("risk".to_string(), psycho.risk);
    profile.insert("noise".to_string(), psycho.noise);
    profile.insert("emotional_intensity".to_string(), psycho.emotional_intensity);

    CommitmentProfile {
        status,
        confidence: clamp_score(confidence, 0.0, 1.0),
        profile,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_engine() -> SparkEngine {
        SparkEngine::with_defaults()
    }

    #[test]
    fn test_empty_input_scores_low_and_advises() {
        let engine = make_engine();
        let result = engine.calculate(&Stimulus::default(), &Context::default());

        // Pure noise: s0 = 1, impact 0.1; coherence floor 0.3; neutral
        // motor 0.5 → 0.03 + 0.06 + 0 + 0 + 0.05 = 0.14.
        assert!((result.sparkscore - 0.14).abs() < 1e-9);
        assert_eq!(result.orbital.dominant, Orbital::Noise);
        assert_eq!(result.ppa.status, CommitmentStatus::Inactive);
        assert_eq!(result.ppa.confidence, 0.0);
        assert!(result.recommendations.contains(&REC_LOW_SCORE.to_string()));
        assert!(result.recommendations.contains(&REC_IN_NOISE.to_string()));
    }

    #[test]
    fn test_low_score_advisory_iff_below_threshold() {
        let engine = make_engine();
        let low = engine.calculate(&Stimulus::default(), &Context::default());
        assert!(low.sparkscore < 0.3);
        assert_eq!(
            low.recommendations
                .iter()
                .filter(|r| r.contains("score low"))
                .count(),
            1
        );

        // Emotion on a symbolically anchored message plus strong
        // history clears the threshold: impact 0.9*0.6 = 0.54 alone
        // contributes 0.162, history 0.8 another 0.072.
        let decent = engine.calculate(
            &Stimulus::from_text(
                "que marca incrível, amor e paixão pela identidade, símbolo coerente e consistente",
            ),
            &Context {
                historical_engagement: Some(0.9),
                historical_conversion: Some(0.7),
                ..Default::default()
            },
        );
        assert!(
            decent.sparkscore >= 0.3,
            "expected sparkscore >= 0.3, got {}",
            decent.sparkscore
        );
        assert!(!decent.recommendations.iter().any(|r| r.contains("score low")));
    }

    #[test]
    fn test_ppa_derivation_table() {
        let engine = make_engine();

        // Anticipation + familiarity → Expectation dominant.
        let expectation = engine.calculate(
            &Stimulus::from_text("novidade em breve, aguarde o lançamento; já vi essa marca, é familiar e conhecido"),
            &Context::default(),
        );
        assert_eq!(expectation.orbital.dominant, Orbital::Expectation);
        assert_eq!(expectation.ppa.status, CommitmentStatus::Emerging);
        assert!(
            (expectation.ppa.confidence - 0.5 * expectation.orbital.impact).abs() < 1e-9
        );
        assert!(expectation
            .recommendations
            .contains(&REC_EMERGING.to_string()));

        // Emotion on a symbolically anchored message → Engagement.
        let engagement = engine.calculate(
            &Stimulus::from_text(
                "que marca incrível, amor e paixão pela identidade, símbolo coerente e consistente",
            ),
            &Context::default(),
        );
        assert_eq!(engagement.orbital.dominant, Orbital::Engagement);
        assert_eq!(engagement.ppa.status, CommitmentStatus::Active);
        assert!(engagement
            .recommendations
            .contains(&REC_ENGAGEMENT.to_string()));
    }

    #[test]
    fn test_ppa_profile_copies_psycho_factors() {
        let engine = make_engine();
        let result = engine.calculate(
            &Stimulus::from_text("quero muito ter isso, preciso agora"),
            &Context::default(),
        );
        assert!((result.ppa.profile["attraction"] - result.psycho.attraction).abs() < 1e-9);
        assert!((result.ppa.profile["risk"] - result.psycho.risk).abs() < 1e-9);
        assert!((result.ppa.profile["noise"] - result.psycho.noise).abs() < 1e-9);
        assert!(
            (result.ppa.profile["emotional_intensity"] - result.psycho.emotional_intensity).abs()
                < 1e-9
        );
    }

    #[test]
    fn test_high_risk_advisory() {
        let engine = make_engine();
        let result = engine.calculate(
            &Stimulus::from_text(
                "medo, perigo, cuidado, ameaça: assustador; talvez incerto, dúvida arriscado duvidoso, \
                 perder perda prejuízo desperdício, nunca mais; fracasso problema erro arrependimento decepção",
            ),
            &Context::default(),
        );
        assert!(result.psycho.risk > 0.7);
        assert!(result.recommendations.contains(&REC_HIGH_RISK.to_string()));
    }

    #[test]
    fn test_excellent_advisory_uses_config_threshold() {
        let config = EngineConfig {
            excellent_threshold: 0.1,
            ..Default::default()
        };
        let engine = SparkEngine::new(
            config,
            LexiconSet::default(),
            MotorRegistry::with_defaults(),
        )
        .unwrap();
        let result = engine.calculate(&Stimulus::default(), &Context::default());
        // 0.14 > 0.1 → excellent fires even on an otherwise low score.
        assert!(result.recommendations.contains(&REC_EXCELLENT.to_string()));
    }

    #[test]
    fn test_deterministic_across_calls() {
        let engine = make_engine();
        let stimulus = Stimulus::from_text("Novidade incrível: todo mundo já viu, aproveite agora!");
        let ctx: Context = serde_json::from_str(
            r#"{"exposure_time": 42.5, "exposure_count": 4, "historical_engagement": 0.31}"#,
        )
        .unwrap();
        let a = engine.calculate(&stimulus, &ctx);
        let b = engine.calculate(&stimulus, &ctx);
        assert_eq!(a.sparkscore, b.sparkscore);
        assert_eq!(a.orbital.dominant, b.orbital.dominant);
        assert_eq!(a.recommendations, b.recommendations);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_every_field_bounded_on_adversarial_inputs() {
        let engine = make_engine();
        let texts = [
            "",
            " ",
            "!!!",
            "já vi viral famoso popular tendência todo mundo marca símbolo identidade",
            "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        ];
        let contexts = [
            Context::default(),
            Context {
                exposure_time: Some(f64::MAX),
                exposure_count: Some(u64::MAX),
                historical_engagement: Some(100.0),
                historical_conversion: Some(-3.0),
                ..Default::default()
            },
        ];
        for text in texts {
            for ctx in &contexts {
                let r = engine.calculate(&Stimulus::from_text(text), ctx);
                assert!((0.0..=1.0).contains(&r.sparkscore));
                assert!((0.0..=1.0).contains(&r.ppa.confidence));
                assert!((0.0..=1.0).contains(&r.orbital.stability));
                assert!((0.0..=1.0).contains(&r.orbital.impact));
                assert!((0.0..=1.0).contains(&r.semiotic.coherence));
                assert!((0.0..=1.0).contains(&r.metric.engagement_probability));
                assert!((0.0..=1.0).contains(&r.motor_result.processing_score));
            }
        }
    }

    #[test]
    fn test_justification_feeds_back_without_special_casing() {
        let engine = make_engine();
        let first = engine.calculate(
            &Stimulus::from_text("lançamento viral, todo mundo já viu essa marca"),
            &Context::default(),
        );
        let second = engine.calculate(
            &Stimulus::from_text(&first.orbital.justification),
            &Context::default(),
        );
        assert!((0.0..=1.0).contains(&second.sparkscore));
    }

    #[test]
    fn test_single_analysis_passthroughs_match_full_pass() {
        let engine = make_engine();
        let stimulus = Stimulus::from_text("clique agora e descubra a novidade da marca");
        let ctx = Context::default();

        let full = engine.calculate(&stimulus, &ctx);
        let classify_only = engine.classify(&stimulus, &ctx);
        let coherence_only = engine.analyze_coherence(&stimulus, &ctx);
        let psycho_only = engine.analyze_psycho(&stimulus, &ctx);
        let engagement_only = engine.analyze_engagement(&stimulus, &ctx);

        assert_eq!(full.orbital.dominant, classify_only.dominant);
        assert_eq!(full.orbital.scores, classify_only.scores);
        assert!((full.semiotic.coherence - coherence_only.coherence).abs() < 1e-9);
        assert!((full.psycho.overall - psycho_only.overall).abs() < 1e-9);
        assert!(
            (full.metric.engagement_probability - engagement_only.engagement_probability).abs()
                < 1e-9
        );
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let config = EngineConfig {
            w_impact: 0.9,
            ..Default::default()
        };
        assert!(
            SparkEngine::new(config, LexiconSet::default(), MotorRegistry::with_defaults())
                .is_err()
        );
    }

    #[test]
    fn test_combiner_weights_applied() {
        let engine = make_engine();
        let stimulus = Stimulus::from_text("quero muito ter isso, preciso agora");
        let ctx = Context::default();
        let r = engine.calculate(&stimulus, &ctx);
        let expected = 0.30 * r.orbital.impact
            + 0.20 * r.semiotic.coherence
            + 0.25 * r.psycho.attraction
            + 0.15 * r.metric.engagement_probability
            + 0.10 * r.motor_result.processing_score;
        assert!((r.sparkscore - expected).abs() < 1e-9);
    }
}
