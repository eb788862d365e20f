//! Derived-job memoization.
//!
//! Derivation is pure and entities are immutable per process lifetime, so a
//! job derived once for a (discipline, grade, track, audience) key stays
//! valid until the caller swaps entity data. The cache is an explicit object
//! the caller owns and passes around — never a process-wide singleton — and
//! invalidation is caller-driven: the core never observes entity mutation.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::trace;

use crate::derive::job::{DerivedJob, derive_job};
use crate::derive::matrix::Audience;
use crate::error::Result;
use crate::framework::{Discipline, Framework, Grade, Track};

/// Composite key for one derived job.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobKey {
    pub discipline_id: String,
    pub grade_id: String,
    pub track_id: Option<String>,
    pub audience: Audience,
}

impl JobKey {
    /// Build a key from the triple's entities.
    #[must_use]
    pub fn new(
        discipline: &Discipline,
        grade: &Grade,
        track: Option<&Track>,
        audience: Audience,
    ) -> Self {
        Self {
            discipline_id: discipline.id.clone(),
            grade_id: grade.id.clone(),
            track_id: track.map(|t| t.id.clone()),
            audience,
        }
    }
}

/// Caller-owned cache of derived jobs.
#[derive(Debug, Default)]
pub struct JobCache {
    entries: RwLock<HashMap<JobKey, Arc<DerivedJob>>>,
}

impl JobCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached job for a triple, deriving and inserting on miss.
    ///
    /// # Errors
    ///
    /// Propagates structural errors from derivation; nothing is cached on
    /// error.
    pub fn get_or_derive(
        &self,
        framework: &Framework,
        discipline: &Discipline,
        grade: &Grade,
        track: Option<&Track>,
        audience: Audience,
    ) -> Result<Arc<DerivedJob>> {
        let key = JobKey::new(discipline, grade, track, audience);

        if let Some(job) = self.entries.read().get(&key) {
            trace!(job_id = %job.id, "job cache hit");
            return Ok(Arc::clone(job));
        }

        let job = Arc::new(derive_job(framework, discipline, grade, track, audience)?);
        trace!(job_id = %job.id, "job cache miss, derived");
        self.entries.write().insert(key, Arc::clone(&job));
        Ok(job)
    }

    /// Peek without deriving.
    #[must_use]
    pub fn get(&self, key: &JobKey) -> Option<Arc<DerivedJob>> {
        self.entries.read().get(key).map(Arc::clone)
    }

    /// Drop one entry, e.g. after the caller reloads a single entity.
    pub fn invalidate(&self, key: &JobKey) {
        self.entries.write().remove(key);
    }

    /// Drop everything, e.g. after the caller reloads the framework.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Number of cached jobs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
