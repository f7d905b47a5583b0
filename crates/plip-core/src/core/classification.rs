//! Static residue classification tables.
//!
//! Membership predicates over three-letter residue identifiers (PDB HET codes)
//! used to decide whether a hetero residue is a ligand candidate. The lists are
//! curated domain data (BioLiP artifact list, metal ion codes, ASTRAL modified
//! residue maps) and are compiled into perfect-hash sets. Every lookup is
//! case-insensitive.

use phf::{Map, Set, phf_map, phf_set};

const WATER: &str = "HOH";

/// Non-biological compounds frequently found as crystallization artifacts
/// (BioLiP ligand list, 2014-07-10).
static BIOLIP_ARTIFACTS: Set<&'static str> = phf_set! {
    "ACE", "HEX", "TMA", "SOH", "P25", "CCN", "PR", "PTN", "NO3", "TCN", "BU1", "BCN",
    "CB3", "HCS", "NBN", "SO2", "MO6", "MOH", "CAC", "MLT", "KR", "6PH", "MOS", "UNL",
    "MO3", "SR", "CD3", "PB", "ACM", "LUT", "PMS", "OF3", "SCN", "DHB", "E4N", "13P",
    "3PG", "CYC", "NC", "BEN", "NAO", "PHQ", "EPE", "BME", "TB", "ETE", "EU", "OES",
    "EAP", "ETX", "BEZ", "5AD", "OC2", "OLA", "GD3", "CIT", "DVT", "OC6", "MW1", "OC3",
    "SRT", "LCO", "BNZ", "PPV", "STE", "PEG", "RU", "PGE", "MPO", "B3P", "OGA", "IPA",
    "LU", "EDO", "MAC", "9PE", "IPH", "MBN", "C1O", "1PE", "YF3", "PEF", "GD", "8PE",
    "DKA", "RB", "YB", "GGD", "SE4", "LHG", "SMO", "DGD", "CMO", "MLI", "MW2", "DTT",
    "DOD", "7PH", "PBM", "AU", "FOR", "PSC", "TG1", "KAI", "1PG", "DGA", "IR", "PE4",
    "VO4", "ACN", "AG", "MO4", "OCL", "6UL", "CHT", "RHD", "CPS", "IR3", "OC4", "MTE",
    "HGC", "CR", "PC1", "HC4", "TEA", "BOG", "PEO", "PE5", "144", "IUM", "LMG", "SQU",
    "MMC", "GOL", "NVP", "AU3", "3PH", "PT4", "PGO", "ICT", "OCM", "BCR", "PG4", "L4P",
    "OPC", "OXM", "SQD", "PQ9", "BAM", "PI", "PL9", "P6G", "IRI", "15P", "MAE", "MBO",
    "FMT", "L1P", "DUD", "PGV", "CD1", "P33", "DTU", "XAT", "CD", "THE", "U1", "NA",
    "MW3", "BHG", "Y1", "OCT", "BET", "MPD", "HTO", "IBM", "D01", "HAI", "HED", "CAD",
    "CUZ", "TLA", "SO4", "OC5", "ETF", "MRD", "PT", "PHB", "URE", "MLA", "TGL", "PLM",
    "NET", "LAC", "AUC", "UNX", "GA", "DMS", "MO2", "LA", "NI", "TE", "THJ", "NHE",
    "HAE", "MO1", "DAO", "3PE", "LMU", "DHJ", "FLC", "SAL", "GAI", "ORO", "HEZ", "TAM",
    "TRA", "NEX", "CXS", "LCP", "HOH", "OCN", "PER", "ACY", "MH2", "ARS", "12P", "L3P",
    "PUT", "IN", "CS", "NAW", "SB", "GUN", "SX", "CON", "C2O", "EMC", "BO4", "BNG",
    "MN5", "__O", "K", "CYN", "H2S", "MH3", "YT3", "P22", "KO4", "1AG", "CE", "IPL",
    "PG6", "MO5", "F09", "HO", "AL", "TRS", "EOH", "GCP", "MSE", "AKR", "NCO", "PO4",
    "L2P", "LDA", "SIN", "DMI", "SM", "DTD", "SGM", "DIO", "PPI", "DDQ", "DPO", "HCA",
    "CO5", "PD", "OS", "OH", "NA6", "NAG", "W", "ENC", "NA5", "LI1", "P4C", "GLV",
    "DMF", "ACT", "BTB", "6PL", "BGL", "OF1", "N8E", "LMT", "THM", "EU3", "PGR", "NA2",
    "FOL", "543", "_CP", "PEK", "NSP", "PEE", "OCO", "CHD", "CO2", "TBU", "UMQ", "MES",
    "NH4", "CD5", "HTG", "DEP", "OC1", "KDO", "2PE", "PE3", "IOD", "NDG", "CL", "HG",
    "F", "XE", "TL", "BA", "LI", "BR", "TAU", "TCA", "SPD", "SPM", "SAR", "SUC",
    "PAM", "SPH", "BE7", "P4G", "OLC", "OLB", "LFA", "D10", "D12", "DD9", "HP6", "R16",
    "PX4", "TRD", "UND", "FTT", "MYR", "RG1", "IMD", "DMN", "KEN", "C14", "UPL", "CMJ",
    "ULI", "MYS", "TWT", "M2M", "P15", "PG0", "PEU", "AE3", "TOE", "ME2", "PE8", "6JZ",
    "7PE", "P3G", "7PG", "PG5", "16P", "XPE", "PGF", "AE4", "7E8", "7E9", "MVC", "TAR",
    "DMR", "LMR", "NER", "02U", "NGZ", "LXB", "A2G", "BM3", "NAA", "NGA", "LXZ", "PX6",
    "PA8", "LPP", "PX2", "MYY", "PX8", "PD7", "XP4", "XPA", "PEV", "6PE", "PEX", "PEH",
    "PTY", "YB2", "PGT", "CN3", "AGA", "DGG", "CD4", "CN6", "CDL", "PG8", "MGE", "DTV",
    "L44", "L2C", "4AG", "B3H", "1EM", "DDR", "I42", "CNS", "PC7", "HGP", "PC8", "HGX",
    "LIO", "PLD", "PC2", "PCF", "MC3", "P1O", "PLC", "PC6", "HSH", "BXC", "HSG", "DPG",
    "2DP", "POV", "PCW", "GVT", "CE9", "CXE", "C10", "CE1", "SPJ", "SPZ", "SPK", "SPW",
    "HT3", "HTH", "2OP", "3NI", "BO3", "DET", "D1D", "SWE", "SOG",
};

static METAL_IONS: Set<&'static str> = phf_set! {
    "LI", "BE", "NA", "MG", "K", "CA", "RB", "SR", "CS", "BA", "V", "CR",
    "MN", "CO", "NI", "FE", "FE1", "FE2", "FE3", "FE4", "CU", "ZN", "Y", "ZR1",
    "ZR2", "ZR3", "MO", "RU", "RU1", "RH", "RH1", "PD", "AG", "CD", "LA", "HFA",
    "HFB", "HFC", "HFD", "HFE", "TA1", "TA2", "TA3", "TA4", "TA5", "TA6", "W", "W1",
    "RE", "OS", "IR", "PT", "PT1", "AU", "HG", "CE", "PR", "SM", "EU", "GD",
    "TB", "HO", "ER", "YB", "LU", "PA", "U", "AL", "GA", "GE", "IN", "SN1",
    "SB", "TL", "PB",
};

static OTHER_IONS: Set<&'static str> = phf_set! { "CL", "IOD", "BR" };

static NUCLEIC_ACID_BASES: Set<&'static str> = phf_set! {
    "A", "C", "T", "G", "U", "DA", "DC", "DT", "DG", "DU",
};

// NH2 and ACE (amidated/acetylated termini) live in the modified residue map.
static SOLVENT_ARTIFACTS: Set<&'static str> = phf_set! {
    "GOL", "EDO", "DOD", "DMS", "FMT", "UNL", "UPL", "1PE", "UNX", "EOH",
};

/// Modified residue code to parent amino acid one-letter code, when known.
static MODIFIED_AMINO_ACIDS: Map<&'static str, Option<char>> = phf_map! {
    "2AS" => Some('D'), "3AH" => Some('H'), "5HP" => Some('E'), "ACL" => Some('R'), "AIB" => Some('A'),
    "ALM" => Some('A'), "ALO" => Some('T'), "ALY" => Some('K'), "ARM" => Some('R'), "ASA" => Some('D'),
    "ASB" => Some('D'), "ASK" => Some('D'), "ASL" => Some('D'), "ASQ" => Some('D'), "AYA" => Some('A'),
    "BCS" => Some('C'), "BHD" => Some('D'), "BMT" => Some('T'), "BNN" => Some('A'), "BUC" => Some('C'),
    "BUG" => Some('L'), "C5C" => Some('C'), "C6C" => Some('C'), "CCS" => Some('C'), "CEA" => Some('C'),
    "CHG" => Some('A'), "CLE" => Some('L'), "CME" => Some('C'), "CSD" => Some('A'), "CSO" => Some('C'),
    "CSP" => Some('C'), "CSS" => Some('C'), "CSW" => Some('C'), "CXM" => Some('M'), "CY1" => Some('C'),
    "CY3" => Some('C'), "CYG" => Some('C'), "CYM" => Some('C'), "CYQ" => Some('C'), "DAH" => Some('F'),
    "DAL" => Some('A'), "DAR" => Some('R'), "DAS" => Some('D'), "DCY" => Some('C'), "DGL" => Some('E'),
    "DGN" => Some('Q'), "DHA" => Some('A'), "DHI" => Some('H'), "DIL" => Some('I'), "DIV" => Some('V'),
    "DLE" => Some('L'), "DLY" => Some('K'), "DNP" => Some('A'), "DPN" => Some('F'), "DPR" => Some('P'),
    "DSN" => Some('S'), "DSP" => Some('D'), "DTH" => Some('T'), "DTR" => Some('W'), "DTY" => Some('Y'),
    "DVA" => Some('V'), "EFC" => Some('C'), "FLA" => Some('A'), "FME" => Some('M'), "GGL" => Some('E'),
    "GLZ" => Some('G'), "GMA" => Some('E'), "GSC" => Some('G'), "HAC" => Some('A'), "HAR" => Some('R'),
    "HIC" => Some('H'), "HIP" => Some('H'), "HMR" => Some('R'), "HPQ" => Some('F'), "HTR" => Some('W'),
    "HYP" => Some('P'), "IIL" => Some('I'), "IYR" => Some('Y'), "KCX" => Some('K'), "LLP" => Some('K'),
    "LLY" => Some('K'), "LTR" => Some('W'), "LYM" => Some('K'), "LYZ" => Some('K'), "MAA" => Some('A'),
    "MEN" => Some('N'), "MHS" => Some('H'), "MIS" => Some('S'), "MLE" => Some('L'), "MPQ" => Some('G'),
    "MSA" => Some('G'), "MSE" => Some('M'), "MVA" => Some('V'), "NEM" => Some('H'), "NEP" => Some('H'),
    "NLE" => Some('L'), "NLN" => Some('L'), "NLP" => Some('L'), "NMC" => Some('G'), "OAS" => Some('S'),
    "OCS" => Some('C'), "OMT" => Some('M'), "PAQ" => Some('Y'), "PCA" => Some('E'), "PEC" => Some('C'),
    "PHI" => Some('F'), "PHL" => Some('F'), "PR3" => Some('C'), "PRR" => Some('A'), "PTR" => Some('Y'),
    "SAC" => Some('S'), "SAR" => Some('G'), "SCH" => Some('C'), "SCS" => Some('C'), "SCY" => Some('C'),
    "SEL" => Some('S'), "SEP" => Some('S'), "SET" => Some('S'), "SHC" => Some('C'), "SHR" => Some('K'),
    "SOC" => Some('C'), "STY" => Some('Y'), "SVA" => Some('S'), "TIH" => Some('A'), "TPL" => Some('W'),
    "TPO" => Some('T'), "TPQ" => Some('A'), "TRG" => Some('K'), "TRO" => Some('W'), "TYB" => Some('Y'),
    "TYQ" => Some('Y'), "TYS" => Some('Y'), "TYY" => Some('Y'), "AGM" => Some('R'), "GL3" => Some('G'),
    "SMC" => Some('C'), "ASX" => Some('B'), "CGU" => Some('E'), "CSX" => Some('C'), "GLX" => Some('Z'),
    "MCS" => Some('C'), "UNK" => None, "MLY" => None, "B3M" => None, "BIL" => None,
    "B3L" => None, "D3P" => None, "D4P" => None, "ACE" => None, "NH2" => None,
    "B3T" => None, "XCP" => None, "XPC" => None, "B3E" => Some('E'), "GHP" => None,
    "3MY" => Some('Y'), "3FG" => None, "OMY" => Some('Y'), "MP8" => Some('P'), "FP9" => Some('P'),
    "ORN" => Some('A'), "4BF" => Some('Y'), "HAO" => None,
};

fn normalized(het_id: &str) -> String {
    het_id.trim().to_ascii_uppercase()
}

pub fn is_biolip_artifact(het_id: &str) -> bool {
    BIOLIP_ARTIFACTS.contains(normalized(het_id).as_str())
}

pub fn is_metal_ion(het_id: &str) -> bool {
    METAL_IONS.contains(normalized(het_id).as_str())
}

pub fn is_other_ion(het_id: &str) -> bool {
    OTHER_IONS.contains(normalized(het_id).as_str())
}

/// Returns `true` for DNA/RNA bases occurring as hetero residues.
pub fn is_dna(het_id: &str) -> bool {
    NUCLEIC_ACID_BASES.contains(normalized(het_id).as_str())
}

/// Returns `true` for common solvents and cryoprotectants.
pub fn is_artifact(het_id: &str) -> bool {
    SOLVENT_ARTIFACTS.contains(normalized(het_id).as_str())
}

/// Returns `true` if the identifier is a known modified amino acid, whether or
/// not its parent residue is known.
pub fn is_mod_aa(het_id: &str) -> bool {
    MODIFIED_AMINO_ACIDS.contains_key(normalized(het_id).as_str())
}

/// Looks up the one-letter code of the parent amino acid of a modified residue.
///
/// Returns `None` both for unknown identifiers and for modified residues whose
/// parent is not recorded.
pub fn parent_amino_acid(het_id: &str) -> Option<char> {
    MODIFIED_AMINO_ACIDS
        .get(normalized(het_id).as_str())
        .copied()
        .flatten()
}

/// Primary admission filter for ligand candidates.
///
/// A residue is a potential small-molecule ligand unless it is water, a
/// modified amino acid, a nucleic acid base, a metal ion, another simple ion or
/// a known solvent artifact.
pub fn is_lig(het_id: &str) -> bool {
    let id = normalized(het_id);
    let id = id.as_str();
    !(id == WATER
        || MODIFIED_AMINO_ACIDS.contains_key(id)
        || NUCLEIC_ACID_BASES.contains(id)
        || METAL_IONS.contains(id)
        || OTHER_IONS.contains(id)
        || SOLVENT_ARTIFACTS.contains(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_lig_rejects_water_ions_bases_and_modified_residues() {
        assert!(!is_lig("HOH"));
        assert!(!is_lig("NA"));
        assert!(!is_lig("DA"));
        assert!(!is_lig("CSO"));
        assert!(!is_lig("CL"));
        assert!(!is_lig("GOL"));
    }

    #[test]
    fn is_lig_accepts_small_molecule_ligands() {
        assert!(is_lig("ATP"));
        assert!(is_lig("HEM"));
        assert!(is_lig("STI"));
    }

    #[test]
    fn predicates_are_case_insensitive() {
        assert!(!is_lig("hoh"));
        assert!(is_metal_ion("zn"));
        assert!(is_metal_ion("Mg"));
        assert!(is_biolip_artifact("so4"));
        assert!(is_dna("dg"));
        assert!(is_artifact("edo"));
        assert!(is_mod_aa("mse"));
        assert!(is_lig("atp"));
    }

    #[test]
    fn predicates_ignore_surrounding_whitespace() {
        assert!(is_metal_ion(" ZN "));
        assert!(!is_lig(" HOH"));
    }

    #[test]
    fn is_mod_aa_is_true_even_without_a_known_parent() {
        assert!(is_mod_aa("UNK"));
        assert!(is_mod_aa("NH2"));
        assert_eq!(parent_amino_acid("UNK"), None);
    }

    #[test]
    fn parent_amino_acid_resolves_known_codes() {
        assert_eq!(parent_amino_acid("MSE"), Some('M'));
        assert_eq!(parent_amino_acid("sep"), Some('S'));
        assert_eq!(parent_amino_acid("PTR"), Some('Y'));
        assert_eq!(parent_amino_acid("ATP"), None);
    }

    #[test]
    fn biolip_artifacts_are_not_automatically_excluded_as_ligands() {
        // SO4 and PEG are only dropped by the occurrence heuristic.
        assert!(is_biolip_artifact("SO4"));
        assert!(is_lig("SO4"));
        assert!(is_biolip_artifact("PEG"));
        assert!(is_lig("PEG"));
    }

    #[test]
    fn ion_tables_are_distinct() {
        assert!(is_other_ion("IOD"));
        assert!(!is_metal_ion("IOD"));
        assert!(is_metal_ion("FE2"));
        assert!(!is_other_ion("FE2"));
        assert!(!is_metal_ion(""));
    }
}
