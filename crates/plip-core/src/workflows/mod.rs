//! # Workflows Module
//!
//! Top-level entry points that chain record reconciliation, the
//! alternate-conformation filter and ligand extraction for whole structures.
//!
//! - **Ligand Workflow** ([`ligands`]) - Prepares one structure, or a batch of
//!   independent structures, for interaction analysis.

pub mod ligands;
