//! Inspection of fixed-column structure records.
//!
//! Parsing coordinates and connectivity is the job of an external parser that
//! populates a [`Structure`](crate::core::models::structure::Structure). This
//! module re-reads the raw lines for the information such parsers discard:
//! native atom serial numbers across chain terminators, MODRES declarations,
//! LINK records and alternate-location codes.

pub mod altloc;
pub mod reconcile;
pub mod records;
