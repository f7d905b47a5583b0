use super::atom::Atom;
use super::ids::{AtomId, ResidueId};
use super::residue::ResidueKind;
use super::structure::Structure;
use super::topology::{BondOrder, InvalidBondOrderCode};
use nalgebra::Point3;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructureBuildError {
    #[error("Atom '{atom}' was added before any residue was started")]
    NoCurrentResidue { atom: String },
    #[error("Bond references unknown atom index {0}")]
    UnknownAtomIndex(usize),
    #[error("Bond connects atom index {0} to itself")]
    SelfBond(usize),
    #[error(transparent)]
    InvalidBondOrder(#[from] InvalidBondOrderCode),
}

/// Incrementally builds a [`Structure`] in file order.
///
/// Atoms receive consecutive 1-based continuous indices as they are added,
/// mirroring how chemistry toolkits number ATOM/HETATM records. Bonds are
/// declared with those indices.
pub struct StructureBuilder {
    structure: Structure,

    // --- Builder-specific state ---
    index_map: HashMap<usize, AtomId>,
    next_index: usize,
    current_residue: Option<ResidueId>,
    pending_bonds: Vec<(usize, usize, BondOrder)>,
}

impl Default for StructureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StructureBuilder {
    pub fn new() -> Self {
        Self {
            structure: Structure::new(),
            index_map: HashMap::new(),
            next_index: 1,
            current_residue: None,
            pending_bonds: Vec::new(),
        }
    }

    /// Starts a new residue; subsequent atoms are added to it.
    pub fn start_residue(
        &mut self,
        name: &str,
        chain: char,
        number: isize,
        kind: ResidueKind,
    ) -> &mut Self {
        let residue_id = self.structure.add_residue(name, chain, number, kind);
        self.current_residue = Some(residue_id);
        self
    }

    /// Adds an atom to the current residue and returns its continuous index.
    pub fn add_atom(
        &mut self,
        name: &str,
        element: &str,
        position: Point3<f64>,
    ) -> Result<usize, StructureBuildError> {
        let residue_id = self
            .current_residue
            .ok_or_else(|| StructureBuildError::NoCurrentResidue {
                atom: name.to_string(),
            })?;

        let index = self.next_index;
        let atom = Atom::new(name, element, index, residue_id, position);
        let atom_id = self
            .structure
            .add_atom_to_residue(residue_id, atom)
            .ok_or_else(|| StructureBuildError::NoCurrentResidue {
                atom: name.to_string(),
            })?;

        self.index_map.insert(index, atom_id);
        self.next_index += 1;
        Ok(index)
    }

    /// Declares a bond between two atoms by continuous index.
    ///
    /// Bonds are resolved in [`build`](Self::build), so they may reference
    /// atoms that have not been added yet.
    pub fn add_bond(&mut self, index1: usize, index2: usize, order: BondOrder) -> &mut Self {
        self.pending_bonds.push((index1, index2, order));
        self
    }

    /// Declares a bond using the numeric order code of a chemistry toolkit
    /// (1, 2, 3, or 5 for aromatic).
    pub fn add_bond_with_code(
        &mut self,
        index1: usize,
        index2: usize,
        code: u8,
    ) -> Result<&mut Self, StructureBuildError> {
        let order = BondOrder::try_from(code)?;
        Ok(self.add_bond(index1, index2, order))
    }

    pub fn build(mut self) -> Result<Structure, StructureBuildError> {
        for (index1, index2, order) in std::mem::take(&mut self.pending_bonds) {
            if index1 == index2 {
                return Err(StructureBuildError::SelfBond(index1));
            }
            let atom1 = *self
                .index_map
                .get(&index1)
                .ok_or(StructureBuildError::UnknownAtomIndex(index1))?;
            let atom2 = *self
                .index_map
                .get(&index2)
                .ok_or(StructureBuildError::UnknownAtomIndex(index2))?;
            self.structure.add_bond(atom1, atom2, order);
        }
        Ok(self.structure)
    }
}
