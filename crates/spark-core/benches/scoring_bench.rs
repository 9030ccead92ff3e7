// ─────────────────────────────────────────────────────────────────────
// SparkScore Engine — Scoring Benchmarks
// ─────────────────────────────────────────────────────────────────────
//! Criterion benchmarks for the hot path: signal extraction, the
//! individual analyzers, and one full combiner pass.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use spark_core::{
    CoherenceAnalyzer, EngagementAnalyzer, OrbitalClassifier, PsychoAnalyzer, SparkEngine,
};
use spark_types::{
    CoherenceLexicon, Context, EngagementLexicon, PsychoLexicon, SignalLexicon, Stimulus,
};

const SHORT_COPY: &str = "Novidade incrível em breve, aguarde!";
const LONG_COPY: &str = "A marca que todo mundo conhece volta com uma novidade incrível: \
    um lançamento exclusivo e limitado, com desconto de verdade para quem clicar agora. \
    Já vi muita oferta por aí, mas essa é diferente — a essência da marca, os valores de \
    sempre e a história que você conhece, tudo em uma única campanha viral que não para \
    de crescer. Aproveite hoje, participe, descubra: é o momento que você aguardava.";

fn bench_classifier(c: &mut Criterion) {
    let classifier = OrbitalClassifier::new(SignalLexicon::default(), 0.3);
    let stimulus = Stimulus::from_text(LONG_COPY);
    let ctx = Context {
        exposure_time: Some(35.0),
        ..Default::default()
    };
    c.bench_function("classifier_long_copy", |b| {
        b.iter(|| classifier.classify(black_box(&stimulus), black_box(&ctx)))
    });
}

fn bench_psycho(c: &mut Criterion) {
    let analyzer = PsychoAnalyzer::new(PsychoLexicon::default());
    let stimulus = Stimulus::from_text(LONG_COPY);
    let ctx = Context::default();
    c.bench_function("psycho_long_copy", |b| {
        b.iter(|| analyzer.analyze(black_box(&stimulus), black_box(&ctx)))
    });
}

fn bench_coherence(c: &mut Criterion) {
    let analyzer = CoherenceAnalyzer::new(CoherenceLexicon::default());
    let stimulus = Stimulus::from_text(LONG_COPY);
    let ctx = Context::default();
    c.bench_function("coherence_long_copy", |b| {
        b.iter(|| analyzer.analyze(black_box(&stimulus), black_box(&ctx)))
    });
}

fn bench_engagement(c: &mut Criterion) {
    let analyzer = EngagementAnalyzer::new(EngagementLexicon::default());
    let stimulus = Stimulus::from_text(LONG_COPY);
    let ctx = Context {
        historical_engagement: Some(0.4),
        historical_conversion: Some(0.1),
        exposure_count: Some(3),
        ..Default::default()
    };
    c.bench_function("engagement_long_copy", |b| {
        b.iter(|| analyzer.analyze(black_box(&stimulus), black_box(&ctx)))
    });
}

fn bench_full_pipeline_short(c: &mut Criterion) {
    let engine = SparkEngine::with_defaults();
    let stimulus = Stimulus::from_text(SHORT_COPY);
    let ctx = Context::default();
    c.bench_function("full_pipeline_short", |b| {
        b.iter(|| engine.calculate(black_box(&stimulus), black_box(&ctx)))
    });
}

fn bench_full_pipeline_long(c: &mut Criterion) {
    let engine = SparkEngine::with_defaults();
    let stimulus = Stimulus::from_text(LONG_COPY);
    let ctx = Context {
        exposure_time: Some(35.0),
        exposure_count: Some(5),
        historical_engagement: Some(0.4),
        ..Default::default()
    };
    c.bench_function("full_pipeline_long", |b| {
        b.iter(|| engine.calculate(black_box(&stimulus), black_box(&ctx)))
    });
}

criterion_group!(
    benches,
    bench_classifier,
    bench_psycho,
    bench_coherence,
    bench_engagement,
    bench_full_pipeline_short,
    bench_full_pipeline_long,
);
criterion_main!(benches);
