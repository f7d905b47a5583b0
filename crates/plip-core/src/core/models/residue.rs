use super::ids::AtomId;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Coarse residue classification assigned once by the structure parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResidueKind {
    /// Amino acid or nucleotide that is part of a polymer chain.
    Polymer,
    /// Solvent water.
    Water,
    /// Everything else: hetero groups, ions, free nucleotides, ligands.
    #[default]
    Other,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid residue kind string: '{0}'")]
pub struct ParseResidueKindError(String);

impl FromStr for ResidueKind {
    type Err = ParseResidueKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "polymer" | "protein" | "nucleic" => Ok(ResidueKind::Polymer),
            "water" | "solvent" => Ok(ResidueKind::Water),
            "other" | "hetero" | "ligand" => Ok(ResidueKind::Other),
            _ => Err(ParseResidueKindError(s.to_string())),
        }
    }
}

impl fmt::Display for ResidueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ResidueKind::Polymer => "Polymer",
                ResidueKind::Water => "Water",
                ResidueKind::Other => "Other",
            }
        )
    }
}

/// Identity of a residue instance within one structure: (name, chain, number).
///
/// Ordering is lexicographic over name, then chain, then sequence number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResidueKey {
    pub name: String,
    pub chain: char,
    pub number: isize,
}

impl ResidueKey {
    pub fn new(name: &str, chain: char, number: isize) -> Self {
        Self {
            name: name.to_string(),
            chain,
            number,
        }
    }
}

impl fmt::Display for ResidueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.name, self.chain, self.number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    pub name: String,              // Residue name (e.g., "ATP", "HOH")
    pub chain: char,               // Chain identifier, ' ' when blank
    pub number: isize,             // Residue sequence number from source file
    pub kind: ResidueKind,         // Classification assigned by the parser
    pub(crate) atoms: Vec<AtomId>, // Atoms in file order
}

impl Residue {
    pub(crate) fn new(name: &str, chain: char, number: isize, kind: ResidueKind) -> Self {
        Self {
            name: name.trim().to_string(),
            chain,
            number,
            kind,
            atoms: Vec::new(),
        }
    }

    pub(crate) fn add_atom(&mut self, atom_id: AtomId) {
        self.atoms.push(atom_id);
    }

    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }

    pub fn key(&self) -> ResidueKey {
        ResidueKey::new(&self.name, self.chain, self.number)
    }
}
