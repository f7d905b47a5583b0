//! # Structure Models
//!
//! Plain-data representation of a macromolecular structure as delivered by the
//! external file parser: atoms with their continuous record index, residues
//! tagged with an explicit [`residue::ResidueKind`], and bonds carrying the bond
//! orders assigned by the chemistry toolkit.
//!
//! - [`atom`] - Atoms with element, position and continuous index
//! - [`residue`] - Residues, residue classification and [`residue::ResidueKey`]
//! - [`topology`] - Bonds and bond orders
//! - [`structure`] - The complete [`structure::Structure`] container
//! - [`builder`] - Incremental construction of a `Structure`
//! - [`ids`] - Stable identifiers for atoms and residues
//!
//! ```ignore
//! use plip::core::models::builder::StructureBuilder;
//! use plip::core::models::residue::ResidueKind;
//!
//! let mut builder = StructureBuilder::new();
//! builder.start_residue("ATP", 'A', 401, ResidueKind::Other);
//! builder.add_atom("PG", "P", Point3::new(0.0, 0.0, 0.0))?;
//! let structure = builder.build()?;
//! ```

pub mod atom;
pub mod builder;
pub mod ids;
pub mod residue;
pub mod structure;
pub mod topology;
