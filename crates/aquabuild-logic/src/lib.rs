//! Pure compatibility logic for AquaBuild.
//!
//! This crate contains the evaluation engine that decides whether an
//! assembled aquarium build is biologically and physically viable. It is
//! independent of any database, UI framework, or runtime: functions take
//! plain data and return results, making them unit-testable and portable
//! across the build store, headless harnesses, and any future frontend.
//!
//! The engine performs no I/O and holds no state. Callers pass an immutable
//! [`build::AquariumBuild`] snapshot to [`evaluate::evaluate`] after every
//! mutation and receive a fresh [`evaluate::CompatibilityReport`].
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`range`] | Numeric interval intersection for water chemistry axes |
//! | [`species`] | Livestock and plant catalog entities (immutable value objects) |
//! | [`build`] | Tank, equipment, substrate, and the build aggregate |
//! | [`issue`] | Compatibility findings (severity, category, affected items) |
//! | [`water`] | Temperature/pH/hardness overlap across all inhabitants |
//! | [`stocking`] | Bioload-weighted stocking percentage vs. tank volume |
//! | [`aggression`] | Pairwise incompatibility/predation/fin-nipping, schooling minimums |
//! | [`equipment`] | Filter and heater sizing against tank volume and livestock |
//! | [`evaluate`] | Orchestrator composing all checks into one report |
//! | [`maintenance`] | Water-change and plant-care schedule derived from stocking |

pub mod aggression;
pub mod build;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod equipment;
pub mod evaluate;
pub mod issue;
pub mod maintenance;
pub mod range;
pub mod species;
pub mod stocking;
pub mod water;
