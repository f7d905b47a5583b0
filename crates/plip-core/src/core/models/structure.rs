use super::atom::Atom;
use super::ids::{AtomId, ResidueId};
use super::residue::{Residue, ResidueKind};
use super::topology::{Bond, BondOrder};
use slotmap::{SecondaryMap, SlotMap};

/// A parsed macromolecular structure: atoms, residues and bonds.
///
/// This is the plain-data hand-off from the external structure parser to the
/// ligand extraction core. Residues keep the order in which they were added,
/// which is the file order when populated through
/// [`StructureBuilder`](super::builder::StructureBuilder).
#[derive(Debug, Clone, Default)]
pub struct Structure {
    /// Primary storage for atoms.
    atoms: SlotMap<AtomId, Atom>,
    /// Primary storage for residues.
    residues: SlotMap<ResidueId, Residue>,
    /// Residue IDs in insertion order.
    residue_order: Vec<ResidueId>,
    /// All bonds in the structure.
    bonds: Vec<Bond>,
    /// Cached adjacency list with the order of each bond, indexed by atom ID.
    bond_adjacency: SecondaryMap<AtomId, Vec<(AtomId, BondOrder)>>,
}

impl Structure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms.iter()
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn residue(&self, id: ResidueId) -> Option<&Residue> {
        self.residues.get(id)
    }

    /// Returns an iterator over all residues in insertion order.
    pub fn residues_iter(&self) -> impl Iterator<Item = (ResidueId, &Residue)> {
        self.residue_order
            .iter()
            .filter_map(|&id| self.residues.get(id).map(|residue| (id, residue)))
    }

    /// Returns an iterator over the residues of one kind, in insertion order.
    pub fn residues_of_kind(
        &self,
        kind: ResidueKind,
    ) -> impl Iterator<Item = (ResidueId, &Residue)> {
        self.residues_iter()
            .filter(move |(_, residue)| residue.kind == kind)
    }

    pub fn residue_count(&self) -> usize {
        self.residue_order.len()
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Adds a new, empty residue.
    ///
    /// Residues are not deduplicated: two residues may share the same
    /// name, chain and number, as happens with insertion codes.
    pub fn add_residue(
        &mut self,
        name: &str,
        chain: char,
        number: isize,
        kind: ResidueKind,
    ) -> ResidueId {
        let residue_id = self
            .residues
            .insert(Residue::new(name, chain, number, kind));
        self.residue_order.push(residue_id);
        residue_id
    }

    /// Adds an atom to a specific residue.
    ///
    /// Returns `None` if the residue doesn't exist. The atom's `residue_id` is
    /// overwritten with `residue_id`.
    pub fn add_atom_to_residue(&mut self, residue_id: ResidueId, mut atom: Atom) -> Option<AtomId> {
        if !self.residues.contains_key(residue_id) {
            return None;
        }
        atom.residue_id = residue_id;

        let atom_id = self.atoms.insert(atom);
        self.bond_adjacency.insert(atom_id, Vec::new());
        self.residues.get_mut(residue_id)?.add_atom(atom_id);

        Some(atom_id)
    }

    /// Adds a bond between two atoms.
    ///
    /// Adding an existing bond succeeds without creating a duplicate and keeps
    /// the original order. Returns `None` if either atom doesn't exist or the
    /// two IDs are the same.
    pub fn add_bond(&mut self, atom1_id: AtomId, atom2_id: AtomId, order: BondOrder) -> Option<()> {
        if atom1_id == atom2_id
            || !self.atoms.contains_key(atom1_id)
            || !self.atoms.contains_key(atom2_id)
        {
            return None;
        }
        if self.bond_order(atom1_id, atom2_id).is_some() {
            return Some(());
        }

        self.bonds.push(Bond::new(atom1_id, atom2_id, order));
        self.bond_adjacency[atom1_id].push((atom2_id, order));
        self.bond_adjacency[atom2_id].push((atom1_id, order));
        Some(())
    }

    /// Returns the bonded neighbors of an atom together with the bond orders.
    pub fn bonded_neighbors(&self, atom_id: AtomId) -> Option<&[(AtomId, BondOrder)]> {
        self.bond_adjacency.get(atom_id).map(|v| v.as_slice())
    }

    /// Returns the order of the bond between two atoms, if they are bonded.
    pub fn bond_order(&self, atom1_id: AtomId, atom2_id: AtomId) -> Option<BondOrder> {
        self.bond_adjacency
            .get(atom1_id)?
            .iter()
            .find(|(neighbor, _)| *neighbor == atom2_id)
            .map(|&(_, order)| order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn atom(name: &str, element: &str, index: usize) -> Atom {
        Atom::new(
            name,
            element,
            index,
            ResidueId::default(),
            Point3::new(index as f64, 0.0, 0.0),
        )
    }

    #[test]
    fn add_residue_and_atoms_registers_them() {
        let mut structure = Structure::new();
        let res = structure.add_residue("ATP", 'A', 1, ResidueKind::Other);
        let a = structure.add_atom_to_residue(res, atom("PG", "P", 1)).unwrap();

        assert_eq!(structure.residue_count(), 1);
        assert_eq!(structure.atom_count(), 1);
        assert_eq!(structure.residue(res).unwrap().atoms(), &[a]);
        assert_eq!(structure.atom(a).unwrap().residue_id, res);
    }

    #[test]
    fn add_atom_to_missing_residue_returns_none() {
        let mut structure = Structure::new();
        let res = structure.add_residue("ATP", 'A', 1, ResidueKind::Other);
        let mut other = Structure::new();
        other.add_residue("HOH", 'A', 2, ResidueKind::Water);
        let foreign = other.add_residue("HOH", 'A', 3, ResidueKind::Water);

        assert!(structure.add_atom_to_residue(foreign, atom("O", "O", 1)).is_none());
        assert!(structure.add_atom_to_residue(res, atom("O", "O", 1)).is_some());
    }

    #[test]
    fn residues_iter_preserves_insertion_order_and_filters_by_kind() {
        let mut structure = Structure::new();
        structure.add_residue("ALA", 'A', 1, ResidueKind::Polymer);
        structure.add_residue("HOH", 'A', 2, ResidueKind::Water);
        structure.add_residue("ATP", 'A', 3, ResidueKind::Other);
        structure.add_residue("HOH", 'A', 4, ResidueKind::Water);

        let names: Vec<_> = structure
            .residues_iter()
            .map(|(_, r)| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["ALA", "HOH", "ATP", "HOH"]);

        let waters: Vec<_> = structure
            .residues_of_kind(ResidueKind::Water)
            .map(|(_, r)| r.number)
            .collect();
        assert_eq!(waters, vec![2, 4]);
    }

    #[test]
    fn add_bond_is_idempotent_and_updates_adjacency() {
        let mut structure = Structure::new();
        let res = structure.add_residue("LIG", 'A', 1, ResidueKind::Other);
        let a = structure.add_atom_to_residue(res, atom("C1", "C", 1)).unwrap();
        let b = structure.add_atom_to_residue(res, atom("C2", "C", 2)).unwrap();

        assert!(structure.add_bond(a, b, BondOrder::Double).is_some());
        assert!(structure.add_bond(b, a, BondOrder::Single).is_some());

        assert_eq!(structure.bonds().len(), 1);
        assert_eq!(structure.bond_order(a, b), Some(BondOrder::Double));
        assert_eq!(structure.bond_order(b, a), Some(BondOrder::Double));
        assert_eq!(
            structure.bonded_neighbors(a).unwrap(),
            &[(b, BondOrder::Double)]
        );
    }

    #[test]
    fn add_bond_rejects_self_bonds() {
        let mut structure = Structure::new();
        let res = structure.add_residue("LIG", 'A', 1, ResidueKind::Other);
        let a = structure.add_atom_to_residue(res, atom("C1", "C", 1)).unwrap();
        assert!(structure.add_bond(a, a, BondOrder::Single).is_none());
        assert!(structure.bonds().is_empty());
    }

    #[test]
    fn duplicate_residue_keys_are_kept_as_separate_residues() {
        let mut structure = Structure::new();
        let r1 = structure.add_residue("LIG", 'A', 1, ResidueKind::Other);
        let r2 = structure.add_residue("LIG", 'A', 1, ResidueKind::Other);
        assert_ne!(r1, r2);
        assert_eq!(structure.residue_count(), 2);
    }
}
