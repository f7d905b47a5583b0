//! # Core Module
//!
//! The stateless foundation of the ligand preparation pipeline.
//!
//! - **Structure Representation** ([`models`]) - Atoms, residues, bonds and the
//!   [`models::structure::Structure`] container handed over by the file parser
//! - **Record Processing** ([`io`]) - Fixed-column record handling: index
//!   reconciliation, MODRES/LINK extraction and alternate conformations
//! - **Residue Classification** ([`classification`]) - Static membership tables
//!   for ions, solvents, nucleic acid bases and modified amino acids
//! - **Utilities** ([`utils`]) - The geometry kernel and identifier helpers
//!
//! Nothing in this module holds mutable state across calls; every function
//! operates on one structure and returns fresh values.

pub mod classification;
pub mod io;
pub mod models;
pub mod utils;
