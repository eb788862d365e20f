//! The closed capability key space.
//!
//! Capabilities group skills and are the unit of track-level modifier
//! application. Modifier maps are keyed by [`CapabilityId`] rather than an
//! open string map, so an unrecognized key is a deserialization or
//! validation failure at the loading boundary instead of a silent runtime
//! no-op.

use serde::{Deserialize, Serialize};

/// The nine fixed capabilities of the framework.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityId {
    Craft,
    Delivery,
    Quality,
    Communication,
    Collaboration,
    Leadership,
    Strategy,
    People,
    Ai,
}

impl CapabilityId {
    /// All capabilities in display order.
    pub const ALL: [Self; 9] = [
        Self::Craft,
        Self::Delivery,
        Self::Quality,
        Self::Communication,
        Self::Collaboration,
        Self::Leadership,
        Self::Strategy,
        Self::People,
        Self::Ai,
    ];

    /// Position used to break ties when sorting responsibility output.
    #[must_use]
    pub const fn display_order(self) -> u8 {
        match self {
            Self::Craft => 0,
            Self::Delivery => 1,
            Self::Quality => 2,
            Self::Communication => 3,
            Self::Collaboration => 4,
            Self::Leadership => 5,
            Self::Strategy => 6,
            Self::People => 7,
            Self::Ai => 8,
        }
    }

    /// Canonical snake_case id, matching the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Craft => "craft",
            Self::Delivery => "delivery",
            Self::Quality => "quality",
            Self::Communication => "communication",
            Self::Collaboration => "collaboration",
            Self::Leadership => "leadership",
            Self::Strategy => "strategy",
            Self::People => "people",
            Self::Ai => "ai",
        }
    }

    /// Parse a capability id. Non-capability strings are `None`, which the
    /// loading boundary reports as a configuration error.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == value)
    }
}

impl std::fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
