//! Interaction thresholds consumed by the downstream interaction detectors.
//!
//! Thresholds start from fixed defaults and may be overridden one by one,
//! either through [`InteractionThresholdsBuilder`] or from a TOML file:
//!
//! ```toml
//! [thresholds]
//! hbond-dist-max = 4.5
//! water-bridge-omega-max = 150.0
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

const MAX_DISTANCE_ANGSTROMS: f64 = 10.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Threshold '{name}' must be larger than zero (value: {value})")]
    NonPositive { name: &'static str, value: f64 },
    #[error("Angle threshold '{name}' must lie strictly between 0 and 180 degrees (value: {value})")]
    AngleOutOfRange { name: &'static str, value: f64 },
    #[error("Distance threshold '{name}' must not exceed 10 Angstrom (value: {value})")]
    DistanceTooLarge { name: &'static str, value: f64 },
    #[error("Inconsistent thresholds: {0}")]
    Inconsistent(&'static str),
    #[error("Unknown threshold name: '{0}'")]
    UnknownThreshold(String),
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// How an overridden threshold value is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdKind {
    /// Degrees, strictly inside (0, 180).
    Angle,
    /// Angstrom, at most 10; large values widen the binding-site radius.
    Distance,
    /// Only required to be positive.
    Other,
}

/// The overridable interaction thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Threshold {
    AromaticPlanarity,
    HydrophDistMax,
    HbondDistMax,
    HbondDonAngleMin,
    PistackDistMax,
    PistackAngDev,
    PistackOffsetMax,
    PicationDistMax,
    SaltbridgeDistMax,
    HalogenDistMax,
    HalogenAccAngle,
    HalogenDonAngle,
    HalogenAngleDev,
    WaterBridgeMindist,
    WaterBridgeMaxdist,
    WaterBridgeOmegaMin,
    WaterBridgeOmegaMax,
    WaterBridgeThetaMin,
}

impl Threshold {
    pub const ALL: [Threshold; 18] = [
        Threshold::AromaticPlanarity,
        Threshold::HydrophDistMax,
        Threshold::HbondDistMax,
        Threshold::HbondDonAngleMin,
        Threshold::PistackDistMax,
        Threshold::PistackAngDev,
        Threshold::PistackOffsetMax,
        Threshold::PicationDistMax,
        Threshold::SaltbridgeDistMax,
        Threshold::HalogenDistMax,
        Threshold::HalogenAccAngle,
        Threshold::HalogenDonAngle,
        Threshold::HalogenAngleDev,
        Threshold::WaterBridgeMindist,
        Threshold::WaterBridgeMaxdist,
        Threshold::WaterBridgeOmegaMin,
        Threshold::WaterBridgeOmegaMax,
        Threshold::WaterBridgeThetaMin,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Threshold::AromaticPlanarity => "aromatic_planarity",
            Threshold::HydrophDistMax => "hydroph_dist_max",
            Threshold::HbondDistMax => "hbond_dist_max",
            Threshold::HbondDonAngleMin => "hbond_don_angle_min",
            Threshold::PistackDistMax => "pistack_dist_max",
            Threshold::PistackAngDev => "pistack_ang_dev",
            Threshold::PistackOffsetMax => "pistack_offset_max",
            Threshold::PicationDistMax => "pication_dist_max",
            Threshold::SaltbridgeDistMax => "saltbridge_dist_max",
            Threshold::HalogenDistMax => "halogen_dist_max",
            Threshold::HalogenAccAngle => "halogen_acc_angle",
            Threshold::HalogenDonAngle => "halogen_don_angle",
            Threshold::HalogenAngleDev => "halogen_angle_dev",
            Threshold::WaterBridgeMindist => "water_bridge_mindist",
            Threshold::WaterBridgeMaxdist => "water_bridge_maxdist",
            Threshold::WaterBridgeOmegaMin => "water_bridge_omega_min",
            Threshold::WaterBridgeOmegaMax => "water_bridge_omega_max",
            Threshold::WaterBridgeThetaMin => "water_bridge_theta_min",
        }
    }

    pub fn kind(self) -> ThresholdKind {
        match self {
            Threshold::AromaticPlanarity
            | Threshold::HbondDonAngleMin
            | Threshold::HalogenAccAngle
            | Threshold::HalogenDonAngle
            | Threshold::WaterBridgeOmegaMin
            | Threshold::WaterBridgeOmegaMax
            | Threshold::WaterBridgeThetaMin => ThresholdKind::Angle,
            Threshold::PistackAngDev | Threshold::HalogenAngleDev => ThresholdKind::Other,
            _ => ThresholdKind::Distance,
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Threshold {
    type Err = ConfigError;

    /// Accepts snake_case and kebab-case names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_").to_ascii_lowercase();
        Threshold::ALL
            .into_iter()
            .find(|t| t.name() == normalized)
            .ok_or_else(|| ConfigError::UnknownThreshold(s.to_string()))
    }
}

/// Distance (Angstrom) and angle (degree) thresholds for interaction detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionThresholds {
    pub binding_site_radius: f64,
    pub aromatic_planarity: f64,
    pub hydroph_dist_max: f64,
    pub hbond_dist_max: f64,
    pub hbond_don_angle_min: f64,
    pub pistack_dist_max: f64,
    pub pistack_ang_dev: f64,
    pub pistack_offset_max: f64,
    pub pication_dist_max: f64,
    pub saltbridge_dist_max: f64,
    pub halogen_dist_max: f64,
    pub halogen_acc_angle: f64,
    pub halogen_don_angle: f64,
    pub halogen_angle_dev: f64,
    pub water_bridge_mindist: f64,
    pub water_bridge_maxdist: f64,
    pub water_bridge_omega_min: f64,
    pub water_bridge_omega_max: f64,
    pub water_bridge_theta_min: f64,
}

impl Default for InteractionThresholds {
    fn default() -> Self {
        Self {
            binding_site_radius: 7.5,
            aromatic_planarity: 5.0,
            hydroph_dist_max: 4.0,
            hbond_dist_max: 4.1,
            hbond_don_angle_min: 100.0,
            pistack_dist_max: 7.5,
            pistack_ang_dev: 30.0,
            pistack_offset_max: 2.0,
            pication_dist_max: 6.0,
            saltbridge_dist_max: 5.5,
            halogen_dist_max: 4.0,
            halogen_acc_angle: 120.0,
            halogen_don_angle: 165.0,
            halogen_angle_dev: 30.0,
            water_bridge_mindist: 2.5,
            water_bridge_maxdist: 4.0,
            water_bridge_omega_min: 75.0,
            water_bridge_omega_max: 140.0,
            water_bridge_theta_min: 100.0,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThresholdFile {
    #[serde(default)]
    thresholds: BTreeMap<String, f64>,
}

impl InteractionThresholds {
    pub fn builder() -> InteractionThresholdsBuilder {
        InteractionThresholdsBuilder::new()
    }

    pub fn get(&self, threshold: Threshold) -> f64 {
        *self.slot(threshold)
    }

    fn slot(&self, threshold: Threshold) -> &f64 {
        match threshold {
            Threshold::AromaticPlanarity => &self.aromatic_planarity,
            Threshold::HydrophDistMax => &self.hydroph_dist_max,
            Threshold::HbondDistMax => &self.hbond_dist_max,
            Threshold::HbondDonAngleMin => &self.hbond_don_angle_min,
            Threshold::PistackDistMax => &self.pistack_dist_max,
            Threshold::PistackAngDev => &self.pistack_ang_dev,
            Threshold::PistackOffsetMax => &self.pistack_offset_max,
            Threshold::PicationDistMax => &self.pication_dist_max,
            Threshold::SaltbridgeDistMax => &self.saltbridge_dist_max,
            Threshold::HalogenDistMax => &self.halogen_dist_max,
            Threshold::HalogenAccAngle => &self.halogen_acc_angle,
            Threshold::HalogenDonAngle => &self.halogen_don_angle,
            Threshold::HalogenAngleDev => &self.halogen_angle_dev,
            Threshold::WaterBridgeMindist => &self.water_bridge_mindist,
            Threshold::WaterBridgeMaxdist => &self.water_bridge_maxdist,
            Threshold::WaterBridgeOmegaMin => &self.water_bridge_omega_min,
            Threshold::WaterBridgeOmegaMax => &self.water_bridge_omega_max,
            Threshold::WaterBridgeThetaMin => &self.water_bridge_theta_min,
        }
    }

    fn slot_mut(&mut self, threshold: Threshold) -> &mut f64 {
        match threshold {
            Threshold::AromaticPlanarity => &mut self.aromatic_planarity,
            Threshold::HydrophDistMax => &mut self.hydroph_dist_max,
            Threshold::HbondDistMax => &mut self.hbond_dist_max,
            Threshold::HbondDonAngleMin => &mut self.hbond_don_angle_min,
            Threshold::PistackDistMax => &mut self.pistack_dist_max,
            Threshold::PistackAngDev => &mut self.pistack_ang_dev,
            Threshold::PistackOffsetMax => &mut self.pistack_offset_max,
            Threshold::PicationDistMax => &mut self.pication_dist_max,
            Threshold::SaltbridgeDistMax => &mut self.saltbridge_dist_max,
            Threshold::HalogenDistMax => &mut self.halogen_dist_max,
            Threshold::HalogenAccAngle => &mut self.halogen_acc_angle,
            Threshold::HalogenDonAngle => &mut self.halogen_don_angle,
            Threshold::HalogenAngleDev => &mut self.halogen_angle_dev,
            Threshold::WaterBridgeMindist => &mut self.water_bridge_mindist,
            Threshold::WaterBridgeMaxdist => &mut self.water_bridge_maxdist,
            Threshold::WaterBridgeOmegaMin => &mut self.water_bridge_omega_min,
            Threshold::WaterBridgeOmegaMax => &mut self.water_bridge_omega_max,
            Threshold::WaterBridgeThetaMin => &mut self.water_bridge_theta_min,
        }
    }

    /// Parses overrides from the `[thresholds]` table of a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse_toml(content, "<inline>")
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let thresholds = Self::parse_toml(&content, &path.to_string_lossy())?;
        info!(path = %path.display(), "Loaded interaction thresholds.");
        Ok(thresholds)
    }

    fn parse_toml(content: &str, origin: &str) -> Result<Self, ConfigError> {
        let file: ThresholdFile = toml::from_str(content).map_err(|e| ConfigError::Toml {
            path: origin.to_string(),
            source: e,
        })?;
        file.thresholds
            .iter()
            .try_fold(Self::builder(), |builder, (name, &value)| {
                Ok::<_, ConfigError>(builder.set(name.parse()?, value))
            })?
            .build()
    }

    fn check_consistency(&self) -> Result<(), ConfigError> {
        if self.halogen_acc_angle <= self.halogen_angle_dev {
            return Err(ConfigError::Inconsistent(
                "the halogen acceptor angle must be larger than the halogen angle deviation",
            ));
        }
        if self.halogen_don_angle <= self.halogen_angle_dev {
            return Err(ConfigError::Inconsistent(
                "the halogen donor angle must be larger than the halogen angle deviation",
            ));
        }
        if self.water_bridge_mindist >= self.water_bridge_maxdist {
            return Err(ConfigError::Inconsistent(
                "the water bridge minimum distance must be smaller than the maximum distance",
            ));
        }
        if self.water_bridge_omega_min >= self.water_bridge_omega_max {
            return Err(ConfigError::Inconsistent(
                "the water bridge omega minimum must be smaller than the omega maximum",
            ));
        }
        Ok(())
    }
}

/// Collects threshold overrides and validates them against the defaults.
#[derive(Debug, Default, Clone)]
pub struct InteractionThresholdsBuilder {
    overrides: BTreeMap<Threshold, f64>,
}

impl InteractionThresholdsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides one threshold; a later call for the same threshold wins.
    pub fn set(mut self, threshold: Threshold, value: f64) -> Self {
        self.overrides.insert(threshold, value);
        self
    }

    /// Applies the overrides in declaration order.
    ///
    /// A distance override larger than the current binding-site radius plus
    /// one Angstrom widens that radius to the override plus one Angstrom.
    pub fn build(self) -> Result<InteractionThresholds, ConfigError> {
        let mut thresholds = InteractionThresholds::default();

        for (threshold, value) in self.overrides {
            let name = threshold.name();
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
            match threshold.kind() {
                ThresholdKind::Angle if value >= 180.0 => {
                    return Err(ConfigError::AngleOutOfRange { name, value });
                }
                ThresholdKind::Distance if value > MAX_DISTANCE_ANGSTROMS => {
                    return Err(ConfigError::DistanceTooLarge { name, value });
                }
                ThresholdKind::Distance if value > thresholds.binding_site_radius + 1.0 => {
                    thresholds.binding_site_radius = value + 1.0;
                    debug!(
                        threshold = name,
                        binding_site_radius = thresholds.binding_site_radius,
                        "Widened binding-site radius."
                    );
                }
                _ => {}
            }
            *thresholds.slot_mut(threshold) = value;
        }

        thresholds.check_consistency()?;
        Ok(thresholds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_are_consistent() {
        let thresholds = InteractionThresholds::builder().build().unwrap();
        assert_eq!(thresholds, InteractionThresholds::default());
        assert_eq!(thresholds.binding_site_radius, 7.5);
        assert_eq!(thresholds.get(Threshold::HbondDistMax), 4.1);
        assert_eq!(thresholds.get(Threshold::WaterBridgeOmegaMax), 140.0);
    }

    #[test]
    fn threshold_names_parse_in_snake_and_kebab_case() {
        for threshold in Threshold::ALL {
            assert_eq!(threshold.name().parse::<Threshold>().unwrap(), threshold);
            let kebab = threshold.name().replace('_', "-");
            assert_eq!(kebab.parse::<Threshold>().unwrap(), threshold);
        }
        assert!(matches!(
            "hbond_dist".parse::<Threshold>(),
            Err(ConfigError::UnknownThreshold(name)) if name == "hbond_dist"
        ));
    }

    #[test]
    fn threshold_kinds_match_their_units() {
        assert_eq!(Threshold::HbondDonAngleMin.kind(), ThresholdKind::Angle);
        assert_eq!(Threshold::WaterBridgeMaxdist.kind(), ThresholdKind::Distance);
        assert_eq!(Threshold::PistackAngDev.kind(), ThresholdKind::Other);
        assert_eq!(Threshold::HalogenAngleDev.kind(), ThresholdKind::Other);
    }

    #[test]
    fn non_positive_values_are_rejected() {
        for value in [0.0, -1.0, f64::NAN] {
            let result = InteractionThresholds::builder()
                .set(Threshold::PistackAngDev, value)
                .build();
            assert!(matches!(
                result,
                Err(ConfigError::NonPositive { name: "pistack_ang_dev", .. })
            ));
        }
    }

    #[test]
    fn angles_must_lie_inside_open_interval() {
        let result = InteractionThresholds::builder()
            .set(Threshold::HbondDonAngleMin, 180.0)
            .build();
        assert!(matches!(result, Err(ConfigError::AngleOutOfRange { .. })));

        let ok = InteractionThresholds::builder()
            .set(Threshold::HbondDonAngleMin, 179.9)
            .build()
            .unwrap();
        assert_eq!(ok.hbond_don_angle_min, 179.9);
    }

    #[test]
    fn distances_above_ten_angstrom_are_rejected() {
        let result = InteractionThresholds::builder()
            .set(Threshold::PistackDistMax, 10.5)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::DistanceTooLarge { name: "pistack_dist_max", .. })
        ));
    }

    #[test]
    fn large_distance_widens_binding_site_radius() {
        let thresholds = InteractionThresholds::builder()
            .set(Threshold::PistackDistMax, 9.0)
            .build()
            .unwrap();
        assert_eq!(thresholds.pistack_dist_max, 9.0);
        assert_eq!(thresholds.binding_site_radius, 10.0);

        let unchanged = InteractionThresholds::builder()
            .set(Threshold::PistackDistMax, 8.5)
            .build()
            .unwrap();
        assert_eq!(unchanged.binding_site_radius, 7.5);
    }

    #[test]
    fn interdependent_thresholds_are_checked() {
        let halogen = InteractionThresholds::builder()
            .set(Threshold::HalogenAngleDev, 130.0)
            .build();
        assert!(matches!(halogen, Err(ConfigError::Inconsistent(_))));

        let water = InteractionThresholds::builder()
            .set(Threshold::WaterBridgeMindist, 4.0)
            .build();
        assert!(matches!(water, Err(ConfigError::Inconsistent(_))));

        let omega = InteractionThresholds::builder()
            .set(Threshold::WaterBridgeOmegaMin, 140.0)
            .build();
        assert!(matches!(omega, Err(ConfigError::Inconsistent(_))));
    }

    #[test]
    fn later_override_of_same_threshold_wins() {
        let thresholds = InteractionThresholds::builder()
            .set(Threshold::HbondDistMax, 3.5)
            .set(Threshold::HbondDistMax, 3.9)
            .build()
            .unwrap();
        assert_eq!(thresholds.hbond_dist_max, 3.9);
    }

    #[test]
    fn from_toml_str_applies_overrides() {
        let thresholds = InteractionThresholds::from_toml_str(
            "[thresholds]\nhbond-dist-max = 4.5\nwater_bridge_theta_min = 110.0\n",
        )
        .unwrap();
        assert_eq!(thresholds.hbond_dist_max, 4.5);
        assert_eq!(thresholds.water_bridge_theta_min, 110.0);
        assert_eq!(thresholds.pication_dist_max, 6.0);
    }

    #[test]
    fn from_toml_str_accepts_empty_document() {
        let thresholds = InteractionThresholds::from_toml_str("").unwrap();
        assert_eq!(thresholds, InteractionThresholds::default());
    }

    #[test]
    fn from_toml_str_rejects_unknown_names_and_tables() {
        let unknown = InteractionThresholds::from_toml_str("[thresholds]\nfoo = 1.0\n");
        assert!(matches!(unknown, Err(ConfigError::UnknownThreshold(_))));

        let table = InteractionThresholds::from_toml_str("[limits]\nhbond-dist-max = 1.0\n");
        assert!(matches!(table, Err(ConfigError::Toml { .. })));
    }

    #[test]
    fn from_file_reads_threshold_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[thresholds]").unwrap();
        writeln!(file, "saltbridge-dist-max = 6.0").unwrap();
        file.flush().unwrap();

        let thresholds = InteractionThresholds::from_file(file.path()).unwrap();
        assert_eq!(thresholds.saltbridge_dist_max, 6.0);
    }

    #[test]
    fn from_file_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let result = InteractionThresholds::from_file(&missing);
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
