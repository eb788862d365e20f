//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Framework structure errors
//! - 2xx: Derivation errors
//! - 3xx: Assessment/matching errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for structured output.
///
/// Each variant maps to a numeric code (e.g., `NoGrades` -> E101).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Framework structure errors (1xx)
    // ========================================
    /// E101: The framework has no grades configured
    NoGrades,
    /// E102: A capability record lacks responsibility text for a reachable level
    ResponsibilityMissing,

    // ========================================
    // Derivation errors (2xx)
    // ========================================
    /// E201: Assessment weights are out of range or do not sum to 1.0
    WeightsInvalid,
}

impl ErrorCode {
    /// Numeric code for this error.
    #[must_use]
    pub const fn numeric(self) -> u16 {
        match self {
            Self::NoGrades => 101,
            Self::ResponsibilityMissing => 102,
            Self::WeightsInvalid => 201,
        }
    }

    /// Category string for grouping in structured output.
    #[must_use]
    pub const fn category(self) -> &'static str {
        match self {
            Self::NoGrades | Self::ResponsibilityMissing => "framework",
            Self::WeightsInvalid => "derivation",
        }
    }

    /// Whether the caller can plausibly recover by fixing its input data.
    #[must_use]
    pub const fn is_recoverable(self) -> bool {
        match self {
            Self::NoGrades => false,
            Self::ResponsibilityMissing | Self::WeightsInvalid => true,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E{}", self.numeric())
    }
}
