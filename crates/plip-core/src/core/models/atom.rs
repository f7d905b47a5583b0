use super::ids::ResidueId;
use crate::core::utils::identifiers::is_hydrogen_name;
use nalgebra::Point3;

/// Represents an atom of a parsed structure.
///
/// The `index` is the continuous, 1-based position of the atom's ATOM/HETATM
/// record in file order. It is the numbering used by chemistry toolkits and
/// differs from the file's own serial numbers whenever chain terminators are
/// present (see [`crate::core::io::reconcile::AtomIndexMap`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The atom name (e.g., "CA", "O1P").
    pub name: String,
    /// The element symbol (e.g., "C", "FE"). May be empty if the source lacks it.
    pub element: String,
    /// Continuous 1-based record index.
    pub index: usize,
    /// The ID of the parent residue.
    pub residue_id: ResidueId,
    /// Cartesian coordinates in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new `Atom`.
    ///
    /// # Arguments
    ///
    /// * `name` - The atom name.
    /// * `element` - The element symbol, or an empty string if unknown.
    /// * `index` - The continuous 1-based record index.
    /// * `residue_id` - The ID of the residue this atom belongs to.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(
        name: &str,
        element: &str,
        index: usize,
        residue_id: ResidueId,
        position: Point3<f64>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            element: element.trim().to_string(),
            index,
            residue_id,
            position,
        }
    }

    /// Returns `true` for hydrogen and deuterium atoms.
    ///
    /// The element symbol is authoritative; the atom name is only consulted
    /// when no element is recorded.
    pub fn is_hydrogen(&self) -> bool {
        if self.element.is_empty() {
            return is_hydrogen_name(&self.name);
        }
        self.element.eq_ignore_ascii_case("H") || self.element.eq_ignore_ascii_case("D")
    }
}
