//! Ligand clustering and extraction.
//!
//! Hetero residues that survive the classification filters become ligand
//! candidates. Candidates joined by primary-conformation LINK records are
//! merged into composite ligands (glycan chains, peptide-like kmers), and each
//! resulting cluster is cut out of the structure as a self-contained
//! [`LigandEntity`] with its own atom numbering.

use super::clustering::partition;
use super::error::EngineError;
use crate::core::classification::{is_biolip_artifact, is_lig};
use crate::core::io::reconcile::StructureAnnotations;
use crate::core::models::atom::Atom;
use crate::core::models::ids::AtomId;
use crate::core::models::residue::{Residue, ResidueKey, ResidueKind};
use crate::core::models::structure::Structure;
use crate::core::models::topology::BondOrder;
use crate::core::utils::geometry;
use itertools::Itertools;
use nalgebra::Point3;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Crystallization artifacts occurring at least this often among the
/// candidates are treated as additives rather than ligands.
pub const ARTIFACT_OCCURRENCE_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct LigandAtom {
    pub name: String,
    pub element: String,
    pub position: Point3<f64>,
    /// Continuous index of the atom in the source structure.
    pub source_index: usize,
    /// Serial number written in the source file, if the record was reconciled.
    pub native_index: Option<usize>,
}

/// A bond between two ligand atoms, by their 0-based ligand-local indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LigandBond {
    pub atom1: usize,
    pub atom2: usize,
    pub order: BondOrder,
}

/// One ligand cut out of a structure: a single residue or a covalently linked
/// cluster of residues, without hydrogens and alternate conformations.
#[derive(Debug, Clone)]
pub struct LigandEntity {
    representative: ResidueKey,
    title: String,
    members: Vec<ResidueKey>,
    atoms: Vec<LigandAtom>,
    bonds: Vec<LigandBond>,
    water: Arc<[ResidueKey]>,
}

impl LigandEntity {
    /// The lexicographically smallest member, which names the ligand.
    pub fn representative(&self) -> &ResidueKey {
        &self.representative
    }

    pub fn name(&self) -> &str {
        &self.representative.name
    }

    pub fn chain(&self) -> char {
        self.representative.chain
    }

    pub fn number(&self) -> isize {
        self.representative.number
    }

    /// `NAME-CHAIN-NUMBER` of the representative.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Member residues in ascending key order.
    pub fn members(&self) -> &[ResidueKey] {
        &self.members
    }

    pub fn is_composite(&self) -> bool {
        self.members.len() > 1
    }

    pub fn atoms(&self) -> &[LigandAtom] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[LigandBond] {
        &self.bonds
    }

    /// Continuous source index of the ligand atom at `local` index.
    pub fn source_index(&self, local: usize) -> Option<usize> {
        self.atoms.get(local).map(|atom| atom.source_index)
    }

    /// Ligand-local index of the atom with the given continuous source index.
    pub fn local_index(&self, source_index: usize) -> Option<usize> {
        self.atoms
            .iter()
            .position(|atom| atom.source_index == source_index)
    }

    /// Ligand-local index to continuous source index, for every atom.
    pub fn mapping(&self) -> Vec<usize> {
        self.atoms.iter().map(|atom| atom.source_index).collect()
    }

    /// The water residues of the structure the ligand was taken from.
    pub fn water(&self) -> &[ResidueKey] {
        &self.water
    }

    pub fn centroid(&self) -> Option<Point3<f64>> {
        let positions: Vec<_> = self.atoms.iter().map(|atom| atom.position).collect();
        geometry::centroid(&positions)
    }
}

/// All ligands of one structure together with its water residues.
#[derive(Debug, Clone, Default)]
pub struct LigandExtraction {
    pub ligands: Vec<LigandEntity>,
    pub water: Arc<[ResidueKey]>,
}

/// Finds and extracts every ligand of a structure.
///
/// `annotations` supplies the MODRES names, LINK records and native serials of
/// the same structure; `alternate_atoms` holds the continuous indices of
/// non-primary conformers, which are left out of every ligand.
#[instrument(skip_all, name = "ligand_extraction")]
pub fn extract_ligands(
    structure: &Structure,
    annotations: &StructureAnnotations,
    alternate_atoms: &HashSet<usize>,
) -> Result<LigandExtraction, EngineError> {
    let water: Arc<[ResidueKey]> = structure
        .residues_of_kind(ResidueKind::Water)
        .map(|(_, residue)| residue.key())
        .collect();

    let (candidates, index) = index_candidates(select_candidates(structure, annotations));
    info!(
        num_candidates = candidates.len(),
        num_water = water.len(),
        "Selected ligand candidates."
    );
    if candidates.is_empty() {
        return Ok(LigandExtraction {
            ligands: Vec::new(),
            water,
        });
    }

    let edges = linkage_edges(&candidates, &index, annotations);
    let clusters = partition(candidates.len(), &edges);
    debug!(
        num_links = edges.len(),
        num_clusters = clusters.len(),
        "Clustered ligand candidates."
    );

    let mut ligands = Vec::with_capacity(clusters.len());
    for cluster in clusters {
        let mut members: Vec<&Residue> =
            cluster.iter().map(|&label| candidates[label]).collect();
        members.sort_by_key(|residue| residue.key());

        match build_entity(structure, annotations, alternate_atoms, &members, &water)? {
            Some(ligand) => ligands.push(ligand),
            None => debug!(
                ligand = %members[0].key(),
                "Skipping ligand without heavy atoms in the primary conformation."
            ),
        }
    }

    info!(num_ligands = ligands.len(), "Ligand extraction complete.");
    Ok(LigandExtraction { ligands, water })
}

fn select_candidates<'a>(
    structure: &'a Structure,
    annotations: &StructureAnnotations,
) -> Vec<&'a Residue> {
    let admitted: Vec<&Residue> = structure
        .residues_of_kind(ResidueKind::Other)
        .map(|(_, residue)| residue)
        .filter(|residue| {
            !annotations.modified_residues.contains(&residue.name) && is_lig(&residue.name)
        })
        .collect();

    let occurrences = admitted
        .iter()
        .map(|&residue| residue.name.as_str())
        .counts();
    let discarded: HashSet<&str> = occurrences
        .iter()
        .filter(|&(&name, &count)| count >= ARTIFACT_OCCURRENCE_LIMIT && is_biolip_artifact(name))
        .map(|(&name, _)| name)
        .collect();
    for name in discarded.iter().sorted() {
        debug!(
            artifact = name,
            count = occurrences[name],
            "Discarding frequent crystallization artifact."
        );
    }

    admitted
        .into_iter()
        .filter(|residue| !discarded.contains(residue.name.as_str()))
        .collect()
}

/// Keeps one candidate per residue key and labels the survivors `0..n`.
///
/// When two residues share a key the later one replaces the earlier one in
/// the earlier one's position.
fn index_candidates(
    candidates: Vec<&Residue>,
) -> (Vec<&Residue>, HashMap<ResidueKey, usize>) {
    let mut unique: Vec<&Residue> = Vec::with_capacity(candidates.len());
    let mut index: HashMap<ResidueKey, usize> = HashMap::with_capacity(candidates.len());
    for residue in candidates {
        let key = residue.key();
        match index.get(&key) {
            Some(&label) => {
                warn!(
                    residue = %key,
                    "Duplicate residue key among ligand candidates; keeping the later residue."
                );
                unique[label] = residue;
            }
            None => {
                index.insert(key, unique.len());
                unique.push(residue);
            }
        }
    }
    (unique, index)
}

fn linkage_edges(
    candidates: &[&Residue],
    index: &HashMap<ResidueKey, usize>,
    annotations: &StructureAnnotations,
) -> Vec<(usize, usize)> {
    let names: HashSet<&str> = candidates.iter().map(|r| r.name.as_str()).collect();

    annotations
        .links
        .iter()
        .filter(|link| {
            link.is_primary()
                && names.contains(link.id1.as_str())
                && names.contains(link.id2.as_str())
        })
        .filter_map(|link| Some((*index.get(&link.first())?, *index.get(&link.second())?)))
        .collect()
}

fn build_entity(
    structure: &Structure,
    annotations: &StructureAnnotations,
    alternate_atoms: &HashSet<usize>,
    members: &[&Residue],
    water: &Arc<[ResidueKey]>,
) -> Result<Option<LigandEntity>, EngineError> {
    let mut selected: Vec<(AtomId, &Atom)> = Vec::new();
    for residue in members {
        for &atom_id in residue.atoms() {
            let atom = structure.atom(atom_id).ok_or_else(|| {
                EngineError::Inconsistency(format!(
                    "residue {} references a missing atom",
                    residue.key()
                ))
            })?;
            if !atom.is_hydrogen() && !alternate_atoms.contains(&atom.index) {
                selected.push((atom_id, atom));
            }
        }
    }
    if selected.is_empty() {
        return Ok(None);
    }

    let local: HashMap<AtomId, usize> = selected
        .iter()
        .enumerate()
        .map(|(i, &(atom_id, _))| (atom_id, i))
        .collect();

    let mut bonds = Vec::new();
    for (i, &(atom_id, _)) in selected.iter().enumerate() {
        for &(neighbor, order) in structure.bonded_neighbors(atom_id).unwrap_or(&[]) {
            if let Some(&j) = local.get(&neighbor) {
                if i < j {
                    bonds.push(LigandBond {
                        atom1: i,
                        atom2: j,
                        order,
                    });
                }
            }
        }
    }

    let atoms = selected
        .iter()
        .map(|&(_, atom)| LigandAtom {
            name: atom.name.clone(),
            element: atom.element.clone(),
            position: atom.position,
            source_index: atom.index,
            native_index: annotations.index_map.get(atom.index),
        })
        .collect();

    let representative = members[0].key();
    Ok(Some(LigandEntity {
        title: representative.to_string(),
        members: members.iter().map(|residue| residue.key()).collect(),
        representative,
        atoms,
        bonds,
        water: Arc::clone(water),
    }))
}
