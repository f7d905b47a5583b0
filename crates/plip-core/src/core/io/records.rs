use thiserror::Error;

/// The record types of the fixed-column structure format this crate inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Atom,
    HetAtm,
    Ter,
    ModRes,
    Link,
    Other,
}

impl RecordKind {
    /// Classifies a line by its record name prefix.
    pub fn of(line: &str) -> Self {
        if line.starts_with("ATOM") {
            RecordKind::Atom
        } else if line.starts_with("HETATM") {
            RecordKind::HetAtm
        } else if line.starts_with("TER") {
            RecordKind::Ter
        } else if line.starts_with("MODRES") {
            RecordKind::ModRes
        } else if line.starts_with("LINK") {
            RecordKind::Link
        } else {
            RecordKind::Other
        }
    }

    /// Returns `true` for ATOM and HETATM records, the records that carry atoms.
    pub fn is_atom_record(self) -> bool {
        matches!(self, RecordKind::Atom | RecordKind::HetAtm)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PdbError {
    #[error("Malformed record on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
}

/// Returns the trimmed content of the 0-based, end-exclusive column range,
/// or an empty string where the line is too short.
pub(crate) fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end)
        .or_else(|| line.get(start..))
        .unwrap_or("")
        .trim()
}

/// Returns the character in a single 0-based column, treating blanks and
/// missing columns as `None`.
pub(crate) fn column_char(line: &str, column: usize) -> Option<char> {
    line.get(column..column + 1)
        .and_then(|s| s.chars().next())
        .filter(|c| !c.is_whitespace())
}

/// Parses an integer field, reporting the 1-based column range on failure.
pub(crate) fn parse_int_field(
    line: &str,
    line_num: usize,
    start: usize,
    end: usize,
) -> Result<isize, PdbError> {
    let value = slice_and_trim(line, start, end);
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidInt {
            columns: format!("{}-{}", start + 1, end),
            value: value.to_string(),
        },
    })
}
