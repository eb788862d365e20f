//! careerframe — derivation and matching engine for a compositional career
//! framework.
//!
//! Given disciplines, tracks, grades, skills, behaviours, capabilities and
//! drivers, this crate computes the exact skill-proficiency matrix and
//! behaviour-maturity profile a role requires, validates whether a
//! (discipline, grade, track) combination is legitimate, and scores how
//! well a self-assessment matches any such role.
//!
//! Everything here is a pure, synchronous function over immutable entity
//! records: no I/O, no templating, no UI. Loading and rendering live in the
//! embedding application.

pub mod derive;
pub mod error;
pub mod framework;
pub mod matching;
pub mod validity;

pub use error::{FrameworkError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
