use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the prognos workspace.
///
/// Every variant is fatal to the call that raised it. The orchestrator never
/// retries and never returns partial results.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PrognosError {
    /// The series is shorter than the minimum the operation requires.
    #[error("series must have at least {required} data points, got {actual}")]
    InsufficientData {
        /// Minimum number of points required.
        required: usize,
        /// Number of points supplied.
        actual: usize,
    },

    /// No supported cadence fits the timestamp set.
    #[error("unknown frequency")]
    UnknownFrequency,

    /// The model rejected its input (non-finite values, too few rows, ...).
    ///
    /// The message is produced by the model and is passed through verbatim.
    #[error("{0}")]
    Validation(String),

    /// Any other failure from a model backend while fitting or predicting.
    #[error("{model} failed: {msg}")]
    ModelFitting {
        /// Model name that failed.
        model: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Invalid input argument or configuration.
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl PrognosError {
    /// Helper: build an `InsufficientData` error.
    #[must_use]
    pub const fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Helper: build a `Validation` error with a model-provided message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Helper: build a `ModelFitting` error with the model name and message.
    pub fn model_fitting(model: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::ModelFitting {
            model: model.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Returns true if the error was raised by the caller's input rather than
    /// by the model backend.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InsufficientData { .. } | Self::UnknownFrequency | Self::InvalidArg(_)
        )
    }
}
