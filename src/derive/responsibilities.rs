//! Responsibility rollup from a derived skill matrix.
//!
//! Responsibilities are stated per capability, not per skill: the matrix is
//! grouped by capability, the highest derived level in each group selects
//! the responsibility text, and the discipline archetype (management vs
//! individual contributor) selects which table it comes from.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::derive::matrix::SkillMatrixEntry;
use crate::error::{FrameworkError, Result};
use crate::framework::{CapabilityId, Discipline, Framework, SkillLevel};

/// One derived responsibility line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Responsibility {
    pub capability: CapabilityId,
    pub level: SkillLevel,
    pub text: String,
}

/// Roll the skill matrix up into responsibility lines.
///
/// Capabilities whose highest derived level is `Awareness` are skipped —
/// awareness carries no responsibility text. Output is sorted by level
/// descending, ties broken by capability display order.
///
/// # Errors
///
/// [`FrameworkError::ResponsibilityMissing`] when a capability record exists
/// but lacks text for a reachable level; that is a structurally broken
/// record, not a weak result. Capabilities with no record at all are
/// skipped — referential integrity is the loader's contract.
pub fn derive_responsibilities(
    framework: &Framework,
    discipline: &Discipline,
    matrix: &[SkillMatrixEntry],
) -> Result<Vec<Responsibility>> {
    let peaks = matrix
        .iter()
        .map(|entry| (entry.capability, entry.level))
        .into_grouping_map()
        .max();

    let mut responsibilities = Vec::new();
    for (capability, level) in peaks {
        if level == SkillLevel::Awareness {
            continue;
        }
        let Some(record) = framework.capability(capability) else {
            continue;
        };
        let text = record
            .responsibility(level, discipline.is_management)
            .ok_or_else(|| FrameworkError::ResponsibilityMissing {
                capability: capability.to_string(),
                level: level.to_string(),
            })?;
        responsibilities.push(Responsibility {
            capability,
            level,
            text: text.to_string(),
        });
    }

    responsibilities.sort_by(|a, b| {
        b.level
            .cmp(&a.level)
            .then_with(|| a.capability.display_order().cmp(&b.capability.display_order()))
    });
    Ok(responsibilities)
}
