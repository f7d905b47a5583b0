//! # PLIP Core Library
//!
//! Ligand preparation for protein-ligand interaction profiling: finds the
//! small-molecule ligands of a macromolecular structure, merges covalently
//! linked residues into composite ligands, and reconciles atom numbering so
//! that results can be reported with the serial numbers of the source file.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Plain-data structure models, static residue
//!   classification tables, fixed-column record inspection and the geometry
//!   kernel used by interaction detectors.
//!
//! - **[`engine`]: The Logic Core.** Candidate selection, covalent-link
//!   clustering and ligand extraction, plus the interaction threshold
//!   configuration.
//!
//! - **[`workflows`]: The Public API.** Chains reconciliation and extraction
//!   for one structure or a batch of independent structures.
//!
//! The library emits [`tracing`] events and spans but never installs a
//! subscriber; that is left to the embedding application.

pub mod core;
pub mod engine;
pub mod workflows;
