//! # Engine Module
//!
//! The stateful logic that turns a parsed structure and its reconciled
//! records into ligand entities.
//!
//! - [`extraction`] selects ligand candidates and cuts each ligand out of the
//!   structure.
//! - [`clustering`] groups covalently linked candidates with a disjoint-set
//!   forest.
//! - [`config`] holds the interaction thresholds handed to downstream
//!   interaction detectors.
//! - [`error`] defines the error type shared by the engine and the workflows.

pub mod clustering;
pub mod config;
pub mod error;
pub mod extraction;
