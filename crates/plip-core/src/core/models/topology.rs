use super::ids::AtomId;
use std::fmt;
use thiserror::Error;

/// Bond order as assigned by the chemistry toolkit that parsed the structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum BondOrder {
    #[default]
    Single = 1,
    Double = 2,
    Triple = 3,
    Aromatic = 5,
}

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
#[error("Invalid bond order code: {0}")]
pub struct InvalidBondOrderCode(pub u8);

/// Numeric bond order codes as written by chemistry toolkits, with 5 for
/// aromatic bonds.
impl TryFrom<u8> for BondOrder {
    type Error = InvalidBondOrderCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Single),
            2 => Ok(Self::Double),
            3 => Ok(Self::Triple),
            5 => Ok(Self::Aromatic),
            other => Err(InvalidBondOrderCode(other)),
        }
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Single => "Single",
                Self::Double => "Double",
                Self::Triple => "Triple",
                Self::Aromatic => "Aromatic",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub atom1_id: AtomId,
    pub atom2_id: AtomId,
    pub order: BondOrder,
}

impl Bond {
    pub fn new(atom1_id: AtomId, atom2_id: AtomId, order: BondOrder) -> Self {
        Self {
            atom1_id,
            atom2_id,
            order,
        }
    }
}
