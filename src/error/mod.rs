//! Error handling for careerframe.
//!
//! The derivation and matching core raises only for structural
//! impossibilities. Everything else — unmatched entities, invalid role
//! combinations, weak assessments — is expressed as a negative or zero-value
//! result for the caller to interpret, never as an error.
//!
//! This module provides:
//! - [`FrameworkError`]: the error enum for those structural cases
//! - [`ErrorCode`]: standardized codes for machine parsing
//! - [`StructuredError`]: serializable error shape for robot-style output

mod codes;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;

/// Main error type for careerframe operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrameworkError {
    #[error("no grades configured in the framework")]
    NoGrades,

    #[error("capability '{capability}' has no responsibility text for level '{level}'")]
    ResponsibilityMissing { capability: String, level: String },

    #[error(
        "assessment weights invalid: skill={skill_weight}, behaviour={behaviour_weight} \
         (each must lie in [0,1] and sum to 1.0)"
    )]
    WeightsInvalid {
        skill_weight: f32,
        behaviour_weight: f32,
    },
}

impl FrameworkError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NoGrades => ErrorCode::NoGrades,
            Self::ResponsibilityMissing { .. } => ErrorCode::ResponsibilityMissing,
            Self::WeightsInvalid { .. } => ErrorCode::WeightsInvalid,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::NoGrades => None,
            Self::ResponsibilityMissing { capability, level } => {
                Some(serde_json::json!({ "capability": capability, "level": level }))
            }
            Self::WeightsInvalid {
                skill_weight,
                behaviour_weight,
            } => Some(serde_json::json!({
                "skill_weight": skill_weight,
                "behaviour_weight": behaviour_weight,
            })),
        }
    }

    /// Convert this error to a structured error.
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_framework_error(self)
    }
}

/// A structured error with machine-readable code and context.
///
/// Designed for embedding applications that surface errors to AI agents or
/// other machine consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// The error code (e.g., "NO_GRADES")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 101)
    pub numeric_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Additional context for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Whether this error is potentially recoverable by fixing input data
    pub recoverable: bool,

    /// Error category (e.g., "framework", "derivation")
    pub category: String,
}

impl StructuredError {
    /// Create a structured error from a [`FrameworkError`].
    #[must_use]
    pub fn from_framework_error(err: &FrameworkError) -> Self {
        let code = err.code();
        Self {
            code,
            numeric_code: code.numeric(),
            message: err.to_string(),
            context: err.context(),
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
        }
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<FrameworkError> for StructuredError {
    fn from(err: FrameworkError) -> Self {
        Self::from_framework_error(&err)
    }
}

/// Result type alias using [`FrameworkError`].
pub type Result<T> = std::result::Result<T, FrameworkError>;
