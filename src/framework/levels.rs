//! Ordered level scales for skills and behaviours.
//!
//! Two closed five-value scales underpin all derivation arithmetic: skill
//! proficiency and behaviour maturity. Every comparison is a total-order
//! integer comparison of scale indices; derived indices are always clamped
//! back into range, never produced out of bounds. There are no partial
//! levels.

use serde::{Deserialize, Serialize};

/// Skill proficiency, lowest to highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Awareness,
    Foundational,
    Working,
    Practitioner,
    Expert,
}

impl SkillLevel {
    /// Number of levels on the scale.
    pub const COUNT: usize = 5;

    /// All levels in ascending order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Awareness,
        Self::Foundational,
        Self::Working,
        Self::Practitioner,
        Self::Expert,
    ];

    /// Zero-based position on the scale.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Level at the given position, if in range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Level at the given position after clamping into range.
    ///
    /// Accepts signed input so that modifier arithmetic can underflow below
    /// zero and still land on the floor of the scale.
    #[must_use]
    pub fn clamp_index(index: i64) -> Self {
        let clamped = index.clamp(0, (Self::COUNT - 1) as i64) as usize;
        Self::ALL[clamped]
    }

    /// Whether this level satisfies a required level.
    #[must_use]
    pub const fn meets(self, required: Self) -> bool {
        self.index() >= required.index()
    }

    /// Canonical snake_case name, matching the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Awareness => "awareness",
            Self::Foundational => "foundational",
            Self::Working => "working",
            Self::Practitioner => "practitioner",
            Self::Expert => "expert",
        }
    }

    /// Parse a canonical name. Unknown strings are absent, not an ordinal.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.as_str() == value)
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Behaviour maturity, lowest to highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Maturity {
    Emerging,
    Developing,
    Practicing,
    RoleModeling,
    Exemplifying,
}

impl Maturity {
    /// Number of maturities on the scale.
    pub const COUNT: usize = 5;

    /// All maturities in ascending order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Emerging,
        Self::Developing,
        Self::Practicing,
        Self::RoleModeling,
        Self::Exemplifying,
    ];

    /// Zero-based position on the scale.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Maturity at the given position, if in range.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Maturity at the given position after clamping into range.
    #[must_use]
    pub fn clamp_index(index: i64) -> Self {
        let clamped = index.clamp(0, (Self::COUNT - 1) as i64) as usize;
        Self::ALL[clamped]
    }

    /// Whether this maturity satisfies a required maturity.
    #[must_use]
    pub const fn meets(self, required: Self) -> bool {
        self.index() >= required.index()
    }

    /// Canonical snake_case name, matching the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emerging => "emerging",
            Self::Developing => "developing",
            Self::Practicing => "practicing",
            Self::RoleModeling => "role_modeling",
            Self::Exemplifying => "exemplifying",
        }
    }

    /// Parse a canonical name. Unknown strings are absent, not an ordinal.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.as_str() == value)
    }
}

impl std::fmt::Display for Maturity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
