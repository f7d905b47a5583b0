use crate::core::io::altloc::alternate_location_atoms;
use crate::core::io::reconcile::{StructureAnnotations, reconcile};
use crate::core::models::residue::ResidueKey;
use crate::core::models::structure::Structure;
use crate::core::utils::identifiers::extract_pdb_id;
use crate::engine::error::EngineError;
use crate::engine::extraction::{LigandEntity, extract_ligands};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A structure ready for interaction analysis.
#[derive(Debug, Clone)]
pub struct PreparedStructure {
    pub annotations: StructureAnnotations,
    /// Continuous indices of atoms in non-primary alternate conformations.
    pub alternate_atoms: HashSet<usize>,
    pub ligands: Vec<LigandEntity>,
    pub water: Arc<[ResidueKey]>,
}

/// One structure of a batch: its source name, raw record lines and the model
/// the external parser built from them.
#[derive(Debug, Clone, Copy)]
pub struct StructureInput<'a, S> {
    pub source: &'a str,
    pub lines: &'a [S],
    pub structure: &'a Structure,
}

#[derive(Debug)]
pub struct BatchOutcome {
    /// PDB ID taken from the input's source name.
    pub pdb_id: String,
    pub result: Result<PreparedStructure, EngineError>,
}

#[instrument(skip_all, name = "ligand_workflow")]
pub fn run<S: AsRef<str>>(
    lines: &[S],
    structure: &Structure,
) -> Result<PreparedStructure, EngineError> {
    let annotations = reconcile(lines)?;
    let alternate_atoms = alternate_location_atoms(lines);
    let extraction = extract_ligands(structure, &annotations, &alternate_atoms)?;

    Ok(PreparedStructure {
        annotations,
        alternate_atoms,
        ligands: extraction.ligands,
        water: extraction.water,
    })
}

/// Prepares independent structures, in parallel with the `parallel` feature.
///
/// Outcomes are returned in input order; a failing structure does not affect
/// the others.
#[instrument(skip_all, name = "ligand_batch_workflow")]
pub fn run_batch<S: AsRef<str> + Sync>(inputs: &[StructureInput<'_, S>]) -> Vec<BatchOutcome> {
    info!(num_structures = inputs.len(), "Preparing structures.");

    #[cfg(not(feature = "parallel"))]
    let iterator = inputs.iter();

    #[cfg(feature = "parallel")]
    let iterator = inputs.par_iter();

    let outcomes: Vec<BatchOutcome> = iterator
        .map(|input| BatchOutcome {
            pdb_id: extract_pdb_id(input.source),
            result: run(input.lines, input.structure),
        })
        .collect();

    for outcome in &outcomes {
        if let Err(e) = &outcome.result {
            warn!(pdb_id = %outcome.pdb_id, error = %e, "Structure preparation failed.");
        }
    }
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::records::PdbError;
    use crate::core::models::builder::StructureBuilder;
    use crate::core::models::residue::ResidueKind;
    use nalgebra::Point3;

    const LINES: [&str; 8] = [
        "ATOM      1  N   GLY A   1       0.000   0.000   0.000  1.00  0.00           N",
        "ATOM      2  CA  GLY A   1       1.000   0.000   0.000  1.00  0.00           C",
        "TER       3      GLY A   1",
        "HETATM    4  C1  NAG B   1       2.000   0.000   0.000  1.00  0.00           C",
        "HETATM    5  C1 ANAG B   2       3.000   0.000   0.000  0.50  0.00           C",
        "HETATM    6  C1 BNAG B   2       3.100   0.000   0.000  0.50  0.00           C",
        "HETATM    7  O   HOH A 101       9.000   0.000   0.000  1.00  0.00           O",
        "LINK         O4  NAG B   1                 C1  NAG B   2     1555   1555  1.44",
    ];

    fn structure() -> Structure {
        let mut b = StructureBuilder::new();
        b.start_residue("GLY", 'A', 1, ResidueKind::Polymer);
        b.add_atom("N", "N", Point3::new(0.0, 0.0, 0.0)).unwrap();
        b.add_atom("CA", "C", Point3::new(1.0, 0.0, 0.0)).unwrap();
        b.start_residue("NAG", 'B', 1, ResidueKind::Other);
        b.add_atom("C1", "C", Point3::new(2.0, 0.0, 0.0)).unwrap();
        b.start_residue("NAG", 'B', 2, ResidueKind::Other);
        b.add_atom("C1", "C", Point3::new(3.0, 0.0, 0.0)).unwrap();
        b.add_atom("C1", "C", Point3::new(3.1, 0.0, 0.0)).unwrap();
        b.start_residue("HOH", 'A', 101, ResidueKind::Water);
        b.add_atom("O", "O", Point3::new(9.0, 0.0, 0.0)).unwrap();
        b.build().unwrap()
    }

    #[test]
    fn run_prepares_linked_glycan_as_one_ligand() {
        let structure = structure();
        let prepared = run(&LINES, &structure).unwrap();

        assert_eq!(prepared.annotations.index_map.get(3), Some(4));
        assert_eq!(prepared.annotations.links.len(), 1);
        assert_eq!(prepared.alternate_atoms, HashSet::from([5]));

        assert_eq!(prepared.ligands.len(), 1);
        let ligand = &prepared.ligands[0];
        assert_eq!(ligand.title(), "NAG-B-1");
        assert_eq!(ligand.members().len(), 2);
        assert_eq!(ligand.mapping(), vec![3, 4]);
        let natives: Vec<_> = ligand.atoms().iter().map(|a| a.native_index).collect();
        assert_eq!(natives, vec![Some(4), Some(5)]);
        assert_eq!(prepared.water.len(), 1);
    }

    #[test]
    fn run_propagates_malformed_link() {
        let structure = structure();
        let mut lines = LINES.to_vec();
        lines[7] = "LINK         O4  NAG B  ?1                 C1  NAG B   2";
        let err = run(&lines, &structure).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Pdb {
                source: PdbError::Parse { line: 8, .. }
            }
        ));
    }

    #[test]
    fn run_on_empty_input_yields_nothing() {
        let prepared = run::<&str>(&[], &Structure::new()).unwrap();
        assert!(prepared.annotations.index_map.is_empty());
        assert!(prepared.ligands.is_empty());
    }

    #[test]
    fn run_batch_keeps_input_order_and_isolates_failures() {
        let structure = structure();
        let mut broken = LINES.to_vec();
        broken[7] = "LINK         O4  NAG B  XX                 C1  NAG B   2";

        let inputs = [
            StructureInput {
                source: "/data/1ABC.pdb",
                lines: &LINES[..],
                structure: &structure,
            },
            StructureInput {
                source: "2xyz.pdb",
                lines: &broken,
                structure: &structure,
            },
            StructureInput {
                source: "model.pdb",
                lines: &LINES[..3],
                structure: &structure,
            },
        ];
        let outcomes = run_batch(&inputs);

        let ids: Vec<_> = outcomes.iter().map(|o| o.pdb_id.as_str()).collect();
        assert_eq!(ids, vec!["1abc", "2xyz", "UnknownProtein"]);
        assert_eq!(outcomes[0].result.as_ref().unwrap().ligands.len(), 1);
        assert!(outcomes[1].result.is_err());
        assert!(outcomes[2].result.is_ok());
    }
}
