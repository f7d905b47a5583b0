use super::records::{RecordKind, column_char};
use std::collections::HashSet;

/// Alternate-location code of the primary conformation.
pub const PRIMARY_ALTLOC: char = 'A';

/// Returns the continuous indices of atoms that belong to a non-primary
/// alternate conformation.
///
/// Continuous indices count ATOM/HETATM records from 1 in file order, exactly
/// as [`AtomIndexMap`](super::reconcile::AtomIndexMap) does. A blank
/// alternate-location column is read as the primary code.
pub fn alternate_location_atoms<I, S>(lines: I) -> HashSet<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter(|line| RecordKind::of(line.as_ref()).is_atom_record())
        .enumerate()
        .filter(|(_, line)| {
            column_char(line.as_ref(), 16).unwrap_or(PRIMARY_ALTLOC) != PRIMARY_ALTLOC
        })
        .map(|(slot, _)| slot + 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom_line(serial: usize, name: &str, altloc: char, res: &str) -> String {
        format!(
            "HETATM{:>5} {:<4}{}{:>3} A   1    {:>8.3}{:>8.3}{:>8.3}",
            serial, name, altloc, res, 1.0, 2.0, 3.0
        )
    }

    #[test]
    fn blank_and_primary_codes_are_not_alternates() {
        let lines = vec![
            atom_line(1, "C1", ' ', "LIG"),
            atom_line(2, "C2", 'A', "LIG"),
        ];
        assert!(alternate_location_atoms(&lines).is_empty());
    }

    #[test]
    fn non_primary_codes_are_reported_by_continuous_index() {
        let lines = vec![
            atom_line(1, "C1", ' ', "LIG"),
            "TER       2      LIG A   1".to_string(),
            atom_line(3, "C2", 'A', "LIG"),
            atom_line(4, "C2", 'B', "LIG"),
            "REMARK   1 ALTLOC C".to_string(),
            atom_line(5, "C3", 'C', "LIG"),
        ];
        let alternates = alternate_location_atoms(&lines);
        assert_eq!(alternates, HashSet::from([3, 4]));
    }

    #[test]
    fn short_records_are_treated_as_primary() {
        let lines = ["ATOM      1  N"];
        assert!(alternate_location_atoms(lines).is_empty());
    }
}
