use super::records::{PdbError, RecordKind, column_char, parse_int_field, slice_and_trim};
use crate::core::models::residue::ResidueKey;
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Maps continuous atom indices (1-based, one per ATOM/HETATM record) to the
/// native serial numbers written in the file.
///
/// Every TER record consumes one serial number, so each chain terminator opens
/// a one-slot gap that persists for all later atoms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtomIndexMap {
    native: Vec<usize>,
}

impl AtomIndexMap {
    /// Native serial for a continuous index, or `None` if out of range.
    pub fn get(&self, continuous: usize) -> Option<usize> {
        continuous
            .checked_sub(1)
            .and_then(|slot| self.native.get(slot))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.native.len()
    }

    pub fn is_empty(&self) -> bool {
        self.native.is_empty()
    }

    /// `(continuous, native)` pairs in ascending continuous order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.native
            .iter()
            .enumerate()
            .map(|(slot, &native)| (slot + 1, native))
    }

    /// True when no terminator shifted the native numbering.
    pub fn is_identity(&self) -> bool {
        self.iter().all(|(continuous, native)| continuous == native)
    }
}

/// Residue names declared as modified polymer residues by MODRES records.
pub type ModifiedResidueSet = BTreeSet<String>;

/// A covalent link between two residues, as declared by a LINK record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CovalentLink {
    pub id1: String,
    pub chain1: char,
    pub pos1: isize,
    pub altloc1: Option<char>,
    pub id2: String,
    pub chain2: char,
    pub pos2: isize,
    pub altloc2: Option<char>,
}

impl CovalentLink {
    pub fn first(&self) -> ResidueKey {
        ResidueKey::new(&self.id1, self.chain1, self.pos1)
    }

    pub fn second(&self) -> ResidueKey {
        ResidueKey::new(&self.id2, self.chain2, self.pos2)
    }

    /// Whether both partners belong to the primary conformation
    /// (alternate location `A` or unspecified).
    pub fn is_primary(&self) -> bool {
        [self.altloc1, self.altloc2]
            .iter()
            .all(|altloc| matches!(altloc, None | Some('A')))
    }
}

/// Everything recovered from the raw record lines of one structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureAnnotations {
    pub index_map: AtomIndexMap,
    pub modified_residues: ModifiedResidueSet,
    /// Links in file order.
    pub links: Vec<CovalentLink>,
}

/// Scans the record lines of a structure once and reconciles its numbering.
///
/// A malformed sequence number in a LINK record aborts the scan; records of
/// any other kind are never rejected.
#[instrument(skip_all, name = "index_reconciliation")]
pub fn reconcile<I, S>(lines: I) -> Result<StructureAnnotations, PdbError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut annotations = StructureAnnotations::default();
    let mut native = 0usize;
    let mut after_terminator = false;

    for (line_num, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let line_num = line_num + 1;

        match RecordKind::of(line) {
            RecordKind::Atom | RecordKind::HetAtm => {
                native += if after_terminator { 2 } else { 1 };
                annotations.index_map.native.push(native);
                after_terminator = false;
            }
            RecordKind::Ter => after_terminator = true,
            RecordKind::ModRes => {
                let name = slice_and_trim(line, 12, 15);
                if !name.is_empty() {
                    annotations.modified_residues.insert(name.to_string());
                }
            }
            RecordKind::Link => annotations.links.push(parse_link(line, line_num)?),
            RecordKind::Other => {}
        }
    }

    debug!(
        num_atoms = annotations.index_map.len(),
        num_modres = annotations.modified_residues.len(),
        num_links = annotations.links.len(),
        "Record reconciliation complete."
    );
    Ok(annotations)
}

fn parse_link(line: &str, line_num: usize) -> Result<CovalentLink, PdbError> {
    Ok(CovalentLink {
        id1: slice_and_trim(line, 17, 20).to_string(),
        chain1: column_char(line, 21).unwrap_or(' '),
        pos1: parse_int_field(line, line_num, 22, 26)?,
        altloc1: column_char(line, 16),
        id2: slice_and_trim(line, 47, 50).to_string(),
        chain2: column_char(line, 51).unwrap_or(' '),
        pos2: parse_int_field(line, line_num, 52, 56)?,
        altloc2: column_char(line, 46),
    })
}
