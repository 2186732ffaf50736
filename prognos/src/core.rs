use std::sync::Arc;

use prognos_core::{
    CanonicalFrame, ForecastModel, PrognosConfig, PrognosError, Series, TemporalKeyKind,
};

/// Orchestrator that adapts caller series for a forecasting model and
/// restores the model's output into the caller's key representation.
pub struct Prognos {
    pub(crate) model: Arc<dyn ForecastModel>,
    pub(crate) cfg: PrognosConfig,
}

/// Builder for constructing a `Prognos` orchestrator with custom configuration.
pub struct PrognosBuilder {
    model: Option<Arc<dyn ForecastModel>>,
    cfg: PrognosConfig,
}

impl Default for PrognosBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PrognosBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Defaults: at least 10 points per forecast, an 80% interval for
    /// forecasts, a 99% interval for anomaly detection, quiet fitting, no seed
    /// and permissive key-kind handling. A model must be registered with
    /// [`with_model`](Self::with_model).
    #[must_use]
    pub fn new() -> Self {
        Self {
            model: None,
            cfg: PrognosConfig::default(),
        }
    }

    /// Register the forecasting model. A later call replaces an earlier one.
    #[must_use]
    pub fn with_model(mut self, model: Arc<dyn ForecastModel>) -> Self {
        self.model = Some(model);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: PrognosConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Minimum number of observations `forecast` accepts.
    #[must_use]
    pub const fn min_points(mut self, n: usize) -> Self {
        self.cfg.min_points = n;
        self
    }

    /// Interval width used for `forecast` fits.
    #[must_use]
    pub const fn forecast_interval_width(mut self, width: f64) -> Self {
        self.cfg.forecast_interval_width = width;
        self
    }

    /// Interval width used for `anomalies` fits.
    ///
    /// Lower values flag more observations.
    #[must_use]
    pub const fn anomaly_interval_width(mut self, width: f64) -> Self {
        self.cfg.anomaly_interval_width = width;
        self
    }

    /// Ask the model to emit no diagnostics while fitting.
    #[must_use]
    pub const fn quiet(mut self, yes: bool) -> Self {
        self.cfg.quiet = yes;
        self
    }

    /// Seed forwarded to the model on every fit.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.cfg.seed = Some(seed);
        self
    }

    /// Reject series whose keys are not all of the first key's kind.
    ///
    /// Off by default: the first key alone decides how every output key is
    /// represented.
    #[must_use]
    pub const fn strict_key_kinds(mut self, yes: bool) -> Self {
        self.cfg.strict_key_kinds = yes;
        self
    }

    /// Build the `Prognos` orchestrator.
    ///
    /// # Errors
    /// - Returns `InvalidArg` if no model has been registered via [`with_model`](Self::with_model).
    /// - Returns `InvalidArg` if the configuration is invalid (see [`PrognosConfig::validate`]).
    pub fn build(self) -> Result<Prognos, PrognosError> {
        let Some(model) = self.model else {
            return Err(PrognosError::InvalidArg(
                "no model registered; add one via with_model(...)".to_string(),
            ));
        };
        self.cfg.validate()?;
        Ok(Prognos {
            model,
            cfg: self.cfg,
        })
    }
}

/// Attribute a model failure to the model that raised it.
///
/// `Validation` and `ModelFitting` pass through unchanged; anything else is
/// wrapped into `ModelFitting` for `model`.
pub(crate) fn tag_err(model: &str, e: PrognosError) -> PrognosError {
    match e {
        e @ (PrognosError::Validation(_) | PrognosError::ModelFitting { .. }) => e,
        other => PrognosError::model_fitting(model, other.to_string()),
    }
}

/// A series checked and converted for the model.
pub(crate) struct Prepared {
    pub(crate) kind: TemporalKeyKind,
    pub(crate) frame: CanonicalFrame,
}

impl Prognos {
    /// Start building a new `Prognos` instance.
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use prognos::Prognos;
    /// use prognos_mock::MockModel;
    ///
    /// let prognos = Prognos::builder()
    ///     .with_model(Arc::new(MockModel::new()))
    ///     .anomaly_interval_width(0.95)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(prognos.config().anomaly_interval_width, 0.95);
    /// ```
    #[must_use]
    pub fn builder() -> PrognosBuilder {
        PrognosBuilder::new()
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &PrognosConfig {
        &self.cfg
    }

    /// Name of the registered model.
    #[must_use]
    pub fn model_name(&self) -> &'static str {
        self.model.name()
    }

    /// Decide the series kind and build the canonical frame.
    pub(crate) fn prepare(&self, series: &Series) -> Result<Prepared, PrognosError> {
        let kind = if self.cfg.strict_key_kinds {
            series.uniform_kind()?
        } else {
            series
                .kind()
                .ok_or_else(|| PrognosError::invalid_arg("series is empty"))?
        };
        Ok(Prepared {
            kind,
            frame: series.to_frame(),
        })
    }
}
