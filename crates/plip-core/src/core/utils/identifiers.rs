const UNKNOWN_PDB_ID: &str = "UnknownProtein";

/// Extracts a four-character PDB ID (a digit followed by three alphanumerics)
/// from a file name or free text.
///
/// The search is case-insensitive and returns the first match in lowercase,
/// or `"UnknownProtein"` if the string contains none.
pub fn extract_pdb_id(text: &str) -> String {
    let lowered: Vec<char> = text.to_lowercase().chars().collect();
    lowered
        .windows(4)
        .find(|w| {
            w[0].is_ascii_digit()
                && w[1..]
                    .iter()
                    .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        })
        .map(|w| w.iter().collect())
        .unwrap_or_else(|| UNKNOWN_PDB_ID.to_string())
}

/// Guesses from an atom name alone whether the atom is a hydrogen or deuterium.
///
/// Only meaningful when no element symbol is available; names such as "HG"
/// are ambiguous between a hydrogen and mercury and are treated as hydrogen.
pub fn is_hydrogen_name(atom_name: &str) -> bool {
    let name = atom_name.trim();
    let first_letter = name
        .chars()
        .find(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase());
    matches!(first_letter, Some('H') | Some('D'))
}
