use crate::backend::BackendKind;
use crate::defaults::*;
use crate::error::Result;
use crate::properties::SegmentationClass;
use crate::spectra::WATER_NAME;
use crate::structure::Grid;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_verbose() -> i8 {
    0
}
fn default_dim_volume_mm() -> f64 {
    DIM_VOLUME_MM
}
fn default_spacing_mm() -> f64 {
    SPACING_MM
}
fn default_wavelength() -> u32 {
    WAVELENGTH
}
fn default_backend() -> BackendKind {
    BackendKind::default()
}
fn default_output_directory() -> String {
    String::from(OUTPUT_DIRECTORY)
}
fn default_priority() -> i32 {
    PRIORITY
}
fn default_consider_partial_volume() -> bool {
    CONSIDER_PARTIAL_VOLUME
}
fn default_adhere_to_deformation() -> bool {
    ADHERE_TO_DEFORMATION
}
fn default_spectrum() -> String {
    String::from(SPECTRUM)
}
fn default_volume_fraction() -> f64 {
    VOLUME_FRACTION
}
fn default_mus500() -> f64 {
    MUS500
}
fn default_f_ray() -> f64 {
    F_RAY
}
fn default_b_mie() -> f64 {
    B_MIE
}
fn default_anisotropy() -> f64 {
    ANISOTROPY
}
fn default_gruneisen_parameter() -> f64 {
    GRUNEISEN_PARAMETER
}
fn default_density() -> f64 {
    DENSITY
}
fn default_speed_of_sound() -> f64 {
    SPEED_OF_SOUND
}
fn default_alpha_coefficient() -> f64 {
    ALPHA_COEFFICIENT
}
fn default_volume_config() -> VolumeConfig {
    VolumeConfig {
        dim_x_mm: default_dim_volume_mm(),
        dim_y_mm: default_dim_volume_mm(),
        dim_z_mm: default_dim_volume_mm(),
        spacing_mm: default_spacing_mm(),
        wavelength: default_wavelength(),
        backend: default_backend(),
        output_directory: default_output_directory(),
    }
}
// a water filled volume, so that a fresh configuration produces a covered volume
fn default_structures() -> Vec<StructureConfig> {
    vec![StructureConfig {
        name: String::from("background"),
        priority: default_priority(),
        occupancy_file: None,
        segmentation: Some(SegmentationClass::Water),
        vessel_kind: None,
        consider_partial_volume: default_consider_partial_volume(),
        adhere_to_deformation: default_adhere_to_deformation(),
        molecules: vec![MoleculeConfig {
            spectrum: String::from(WATER_NAME),
            absorption_per_cm: None,
            volume_fraction: 1.0,
            mus500: default_mus500(),
            f_ray: default_f_ray(),
            b_mie: default_b_mie(),
            anisotropy: default_anisotropy(),
            gruneisen_parameter: default_gruneisen_parameter(),
            density: default_density(),
            speed_of_sound: default_speed_of_sound(),
            alpha_coefficient: default_alpha_coefficient(),
        }],
    }]
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Configuration {
    #[serde(default = "default_verbose")]
    pub verbose: i8,
    #[serde(default = "default_volume_config")]
    pub volume: VolumeConfig,
    #[serde(default = "default_structures")]
    pub structures: Vec<StructureConfig>,
}

impl Configuration {
    pub fn from_toml(config_string: &str) -> Result<Self> {
        Ok(toml::from_str(config_string)?)
    }

    /// Reads the configuration file. If it does not exist, the default settings are
    /// used and written to `path`, so that the user can see all the used options.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let config_string: String = fs::read_to_string(path)?;
            return Self::from_toml(&config_string);
        }
        let config: Self = Self::from_toml("")?;
        fs::write(path, toml::to_string(&config)?)?;
        Ok(config)
    }

    pub fn grid(&self) -> Result<Grid> {
        Grid::from_extent(
            self.volume.dim_x_mm,
            self.volume.dim_y_mm,
            self.volume.dim_z_mm,
            self.volume.spacing_mm,
        )
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            verbose: default_verbose(),
            volume: default_volume_config(),
            structures: default_structures(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VolumeConfig {
    #[serde(default = "default_dim_volume_mm")]
    pub dim_x_mm: f64,
    #[serde(default = "default_dim_volume_mm")]
    pub dim_y_mm: f64,
    #[serde(default = "default_dim_volume_mm")]
    pub dim_z_mm: f64,
    #[serde(default = "default_spacing_mm")]
    pub spacing_mm: f64,
    #[serde(default = "default_wavelength")]
    pub wavelength: u32,
    #[serde(default = "default_backend")]
    pub backend: BackendKind,
    #[serde(default = "default_output_directory")]
    pub output_directory: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StructureConfig {
    pub name: String,
    #[serde(default = "default_priority")]
    pub priority: i32,
    /// `.npy` file with the occupancy, relative to the configuration file. Without a
    /// file the structure fills the whole volume.
    #[serde(default)]
    pub occupancy_file: Option<String>,
    #[serde(default)]
    pub segmentation: Option<SegmentationClass>,
    #[serde(default)]
    pub vessel_kind: Option<String>,
    #[serde(default = "default_consider_partial_volume")]
    pub consider_partial_volume: bool,
    #[serde(default = "default_adhere_to_deformation")]
    pub adhere_to_deformation: bool,
    #[serde(default)]
    pub molecules: Vec<MoleculeConfig>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MoleculeConfig {
    #[serde(default = "default_spectrum")]
    pub spectrum: String,
    /// replaces the named spectrum by a constant absorber [cm^-1]
    #[serde(default)]
    pub absorption_per_cm: Option<f64>,
    #[serde(default = "default_volume_fraction")]
    pub volume_fraction: f64,
    #[serde(default = "default_mus500")]
    pub mus500: f64,
    #[serde(default = "default_f_ray")]
    pub f_ray: f64,
    #[serde(default = "default_b_mie")]
    pub b_mie: f64,
    #[serde(default = "default_anisotropy")]
    pub anisotropy: f64,
    #[serde(default = "default_gruneisen_parameter")]
    pub gruneisen_parameter: f64,
    #[serde(default = "default_density")]
    pub density: f64,
    #[serde(default = "default_speed_of_sound")]
    pub speed_of_sound: f64,
    #[serde(default = "default_alpha_coefficient")]
    pub alpha_coefficient: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_configuration_uses_the_defaults() {
        let config = Configuration::from_toml("").unwrap();
        assert_eq!(config, Configuration::default());
        assert_eq!(config.volume.backend, BackendKind::Parallel);
        assert_eq!(config.grid().unwrap().shape(), [20, 20, 20]);
        assert_eq!(config.structures.len(), 1);
        assert_eq!(config.structures[0].molecules[0].spectrum, WATER_NAME);
    }

    #[test]
    fn defaults_survive_serialization() {
        let config = Configuration::default();
        let config_string: String = toml::to_string(&config).unwrap();
        assert_eq!(Configuration::from_toml(&config_string).unwrap(), config);
    }

    #[test]
    fn structures_are_parsed() {
        let config = Configuration::from_toml(
            r#"
            verbose = 1
            [volume]
            spacing_mm = 0.5
            wavelength = 700
            backend = "serial"

            [[structures]]
            name = "muscle"
            priority = 3
            occupancy_file = "muscle.npy"
            segmentation = "muscle"
            vessel_kind = "vein"
            [[structures.molecules]]
            spectrum = "Oxyhemoglobin"
            volume_fraction = 0.3
            mus500 = 12.0
            [[structures.molecules]]
            absorption_per_cm = 0.1
            volume_fraction = 0.7
            "#,
        )
        .unwrap();
        assert_eq!(config.verbose, 1);
        assert_eq!(config.volume.backend, BackendKind::Serial);
        assert_eq!(config.volume.wavelength, 700);
        assert_eq!(config.volume.dim_x_mm, DIM_VOLUME_MM);
        assert_eq!(config.grid().unwrap().shape(), [40, 40, 40]);
        let structure = &config.structures[0];
        assert_eq!(structure.priority, 3);
        assert_eq!(structure.segmentation, Some(SegmentationClass::Muscle));
        assert_eq!(structure.vessel_kind.as_deref(), Some("vein"));
        assert!(!structure.consider_partial_volume);
        assert_eq!(structure.molecules.len(), 2);
        assert_eq!(structure.molecules[1].spectrum, SPECTRUM);
        assert_eq!(structure.molecules[1].absorption_per_cm, Some(0.1));
        assert_eq!(structure.molecules[1].gruneisen_parameter, GRUNEISEN_PARAMETER);
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        let result = Configuration::from_toml(
            r#"
            [[structures]]
            name = "broken"
            [[structures.molecules]]
            volume_fraction = "a lot"
            "#,
        );
        assert!(matches!(result, Err(Error::Config(_))));
        let result = Configuration::from_toml(
            r#"
            [[structures]]
            name = "broken"
            segmentation = "cartilage"
            "#,
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
