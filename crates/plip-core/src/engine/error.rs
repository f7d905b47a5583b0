use thiserror::Error;

use crate::core::io::records::PdbError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Record reconciliation failed: {source}")]
    Pdb {
        #[from]
        source: PdbError,
    },

    #[error("Inconsistent structure data: {0}")]
    Inconsistency(String),
}
