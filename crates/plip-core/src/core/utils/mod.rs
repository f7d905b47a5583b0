//! Stateless helpers shared across the crate: the geometry kernel used by
//! interaction detection and small identifier utilities.

pub mod geometry;
pub mod identifiers;
