// ─────────────────────────────────────────────────────────────────────
// SparkScore Engine — PyO3 FFI Bindings
// ─────────────────────────────────────────────────────────────────────
// Note: #[deny(unsafe_code)] not applied — PyO3 proc macros generate
// unsafe blocks internally. All hand-written code in this crate is safe.
//! Python-callable wrappers around the SparkScore engine.
//!
//! The Python host application owns transport, validation, and
//! persistence; this module only runs the pure scoring pass in-process.
//!
//! Usage from Python:
//! ```python
//! from spark_kernel import SparkEngine
//!
//! engine = SparkEngine()
//! result = engine.calculate("Novidade incrível em breve!", '{"exposure_time": 30}')
//! print(result.sparkscore, result.recommendations)
//! ```
//!
//! Contexts and stimuli cross the boundary as JSON strings: the host
//! already holds them as JSON bodies, and one `serde_json` parse is
//! cheaper and safer than walking Python dicts by hand.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use spark_core::SparkEngine;
use spark_types::{Context, EngineConfig, LexiconSet, SparkScore, Stimulus};

fn parse_context(context_json: Option<&str>) -> PyResult<Context> {
    match context_json {
        None => Ok(Context::default()),
        Some(json) => serde_json::from_str(json)
            .map_err(|e| PyValueError::new_err(format!("invalid context JSON: {e}"))),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> PyResult<String> {
    serde_json::to_string(value).map_err(|e| PyValueError::new_err(e.to_string()))
}

// ─── EngineConfig ───────────────────────────────────────────────────

/// Python-visible engine configuration.
#[pyclass(name = "EngineConfig")]
#[derive(Clone)]
struct PyEngineConfig {
    inner: EngineConfig,
}

#[pymethods]
impl PyEngineConfig {
    #[new]
    fn new() -> Self {
        Self {
            inner: EngineConfig::default(),
        }
    }

    /// Construct from JSON string; validates weights and thresholds.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let config =
            EngineConfig::from_json(json).map_err(|e| PyValueError::new_err(e.to_string()))?;
        config
            .validate()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner: config })
    }

    fn to_json(&self) -> PyResult<String> {
        to_json(&self.inner)
    }

    fn __repr__(&self) -> String {
        format!(
            "EngineConfig(w_impact={}, w_coherence={}, w_attraction={}, w_engagement={}, w_motor={})",
            self.inner.w_impact,
            self.inner.w_coherence,
            self.inner.w_attraction,
            self.inner.w_engagement,
            self.inner.w_motor,
        )
    }
}

// ─── SparkScore result ──────────────────────────────────────────────

/// Python-visible result of one full scoring pass.
#[pyclass(name = "SparkScoreResult")]
#[derive(Clone)]
struct PySparkScore {
    inner: SparkScore,
}

#[pymethods]
impl PySparkScore {
    #[getter]
    fn sparkscore(&self) -> f64 {
        self.inner.sparkscore
    }

    #[getter]
    fn dominant_orbital(&self) -> u8 {
        self.inner.orbital.dominant as u8
    }

    #[getter]
    fn dominant_name(&self) -> &'static str {
        self.inner.orbital.dominant.name()
    }

    #[getter]
    fn stability(&self) -> f64 {
        self.inner.orbital.stability
    }

    #[getter]
    fn impact(&self) -> f64 {
        self.inner.orbital.impact
    }

    #[getter]
    fn justification(&self) -> &str {
        &self.inner.orbital.justification
    }

    #[getter]
    fn ppa_status(&self) -> &'static str {
        self.inner.ppa.status.as_str()
    }

    #[getter]
    fn ppa_confidence(&self) -> f64 {
        self.inner.ppa.confidence
    }

    #[getter]
    fn recommendations(&self) -> Vec<String> {
        self.inner.recommendations.clone()
    }

    /// Headline fields as a flat dict.
    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new(py);
        dict.set_item("sparkscore", self.inner.sparkscore)?;
        dict.set_item("dominant_orbital", self.inner.orbital.dominant as u8)?;
        dict.set_item("dominant_name", self.inner.orbital.dominant.name())?;
        dict.set_item("stability", self.inner.orbital.stability)?;
        dict.set_item("impact", self.inner.orbital.impact)?;
        dict.set_item("ppa_status", self.inner.ppa.status.as_str())?;
        dict.set_item("ppa_confidence", self.inner.ppa.confidence)?;
        dict.set_item("recommendations", self.inner.recommendations.clone())?;
        Ok(dict)
    }

    /// The full result tree (orbital, semiotic, psycho, metric, motor,
    /// ppa, recommendations) as JSON.
    fn to_json(&self) -> PyResult<String> {
        to_json(&self.inner)
    }

    fn __repr__(&self) -> String {
        format!(
            "SparkScoreResult(sparkscore={:.4}, dominant={}, ppa={})",
            self.inner.sparkscore,
            self.inner.orbital.dominant.name(),
            self.inner.ppa.status.as_str(),
        )
    }
}

// ─── SparkEngine ────────────────────────────────────────────────────

/// The orbital scoring engine. Stateless across calls; one instance
/// can be shared by any number of Python threads.
#[pyclass(name = "SparkEngine")]
struct PySparkEngine {
    inner: SparkEngine,
}

#[pymethods]
impl PySparkEngine {
    #[new]
    #[pyo3(signature = (config = None, lexicons_json = None))]
    fn new(config: Option<PyEngineConfig>, lexicons_json: Option<&str>) -> PyResult<Self> {
        let config = config.map(|c| c.inner).unwrap_or_default();
        let lexicons = match lexicons_json {
            None => LexiconSet::default(),
            Some(json) => {
                LexiconSet::from_json(json).map_err(|e| PyValueError::new_err(e.to_string()))?
            }
        };
        let inner = SparkEngine::new(config, lexicons, spark_core::MotorRegistry::with_defaults())
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Full scoring pass over (text, context).
    #[pyo3(signature = (text, context_json = None))]
    fn calculate(&self, text: &str, context_json: Option<&str>) -> PyResult<PySparkScore> {
        let context = parse_context(context_json)?;
        let result = self
            .inner
            .calculate(&Stimulus::from_text(text), &context);
        Ok(PySparkScore { inner: result })
    }

    /// Classification only, as JSON. Backs the classify-only endpoint.
    #[pyo3(signature = (text, context_json = None))]
    fn classify(&self, text: &str, context_json: Option<&str>) -> PyResult<String> {
        let context = parse_context(context_json)?;
        to_json(&self.inner.classify(&Stimulus::from_text(text), &context))
    }

    /// Coherence analysis only, as JSON.
    #[pyo3(signature = (text, context_json = None))]
    fn analyze_coherence(&self, text: &str, context_json: Option<&str>) -> PyResult<String> {
        let context = parse_context(context_json)?;
        to_json(&self.inner.analyze_coherence(&Stimulus::from_text(text), &context))
    }

    /// Psycho analysis only, as JSON.
    #[pyo3(signature = (text, context_json = None))]
    fn analyze_psycho(&self, text: &str, context_json: Option<&str>) -> PyResult<String> {
        let context = parse_context(context_json)?;
        to_json(&self.inner.analyze_psycho(&Stimulus::from_text(text), &context))
    }

    /// Engagement analysis only, as JSON.
    #[pyo3(signature = (text, context_json = None))]
    fn analyze_engagement(&self, text: &str, context_json: Option<&str>) -> PyResult<String> {
        let context = parse_context(context_json)?;
        to_json(&self.inner.analyze_engagement(&Stimulus::from_text(text), &context))
    }

    fn __repr__(&self) -> String {
        format!(
            "SparkEngine(w_impact={}, secondary_threshold={})",
            self.inner.config().w_impact,
            self.inner.config().secondary_threshold,
        )
    }
}

#[pymodule]
fn spark_kernel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyEngineConfig>()?;
    m.add_class::<PySparkScore>()?;
    m.add_class::<PySparkEngine>()?;
    Ok(())
}
