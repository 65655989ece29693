use crate::error::{Error, Result};
use crate::io::settings::{Configuration, MoleculeConfig, StructureConfig};
use crate::molecules::{MolecularComposition, Molecule};
use crate::spectra::{Spectrum, SpectrumLibrary};
use crate::structure::{Grid, Structure, Structures};
use log::debug;
use ndarray::prelude::*;
use ndarray_npy::read_npy;
use std::path::Path;
use std::sync::Arc;

/// Reads the configuration and builds all structures it describes.
pub fn read_input(config_path: &Path) -> Result<(Configuration, Structures)> {
    let config: Configuration = Configuration::load(config_path)?;
    let structures: Structures = build_structures(&config, config_path)?;
    Ok((config, structures))
}

/// Builds the structures of a loaded configuration. Relative occupancy files are
/// resolved against the directory of the configuration file.
pub fn build_structures(config: &Configuration, config_path: &Path) -> Result<Structures> {
    let grid: Grid = config.grid()?;
    let base_dir: &Path = config_path.parent().unwrap_or_else(|| Path::new("."));
    let structures: Vec<Structure> = config
        .structures
        .iter()
        .map(|structure| structure.build(&grid, base_dir))
        .collect::<Result<Vec<Structure>>>()?;
    Ok(Structures::new(structures))
}

/// Loads a three-dimensional `f64` occupancy mask from a `.npy` file.
pub fn read_occupancy(path: &Path) -> Result<Array3<f64>> {
    read_npy(path).map_err(|err| Error::Npy(format!("{}: {}", path.display(), err)))
}

impl MoleculeConfig {
    pub fn build(&self) -> Result<Molecule> {
        let spectrum: Arc<Spectrum> = match self.absorption_per_cm {
            Some(absorption_per_cm) => Arc::new(SpectrumLibrary::constant_absorber(absorption_per_cm)),
            None => SpectrumLibrary::global().get(&self.spectrum)?,
        };
        Molecule::builder()
            .set_spectrum(spectrum)
            .set_volume_fraction(self.volume_fraction)
            .set_mus500(self.mus500)
            .set_f_ray(self.f_ray)
            .set_b_mie(self.b_mie)
            .set_anisotropy(self.anisotropy)
            .set_gruneisen_parameter(self.gruneisen_parameter)
            .set_density(self.density)
            .set_speed_of_sound(self.speed_of_sound)
            .set_alpha_coefficient(self.alpha_coefficient)
            .build()
    }
}

impl StructureConfig {
    pub fn build(&self, grid: &Grid, base_dir: &Path) -> Result<Structure> {
        let molecules: Vec<Molecule> = self
            .molecules
            .iter()
            .map(|molecule| molecule.build())
            .collect::<Result<Vec<Molecule>>>()?;
        let composition = MolecularComposition::from_molecules(self.segmentation, molecules);

        let structure: Structure = match &self.occupancy_file {
            Some(file) => {
                let path = base_dir.join(file);
                debug!("reading the occupancy of '{}' from {}", self.name, path.display());
                Structure::new(&self.name, self.priority, read_occupancy(&path)?, composition)?
            }
            None => {
                let mut structure = Structure::background(&self.name, *grid, composition)?;
                structure.priority = self.priority;
                structure
            }
        };
        Ok(structure
            .with_vessel_tag(self.vessel_kind.as_deref())
            .with_partial_volume(self.consider_partial_volume)
            .with_deformation(self.adhere_to_deformation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::SegmentationClass;
    use crate::structure::VesselKind;
    use approx::assert_relative_eq;
    use ndarray_npy::write_npy;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn structures_are_built_from_the_configuration() {
        let dir = tempdir().unwrap();
        let mut mask: Array3<f64> = Array3::zeros((4, 2, 3));
        mask.slice_mut(s![..2, .., ..]).fill(0.5);
        write_npy(dir.path().join("vessel.npy"), &mask).unwrap();
        fs::write(
            dir.path().join("tissuemix.toml"),
            r#"
            [volume]
            dim_x_mm = 4.0
            dim_y_mm = 2.0
            dim_z_mm = 3.0
            wavelength = 700

            [[structures]]
            name = "vessel"
            priority = 5
            occupancy_file = "vessel.npy"
            segmentation = "blood"
            vessel_kind = "artery"
            [[structures.molecules]]
            absorption_per_cm = 2.0
            volume_fraction = 1.0

            [[structures]]
            name = "background"
            segmentation = "muscle"
            [[structures.molecules]]
            absorption_per_cm = 0.1
            volume_fraction = 1.0
            mus500 = 50.0
            anisotropy = 0.9
            "#,
        )
        .unwrap();

        let (config, structures) = read_input(&dir.path().join("tissuemix.toml")).unwrap();
        assert_eq!(config.volume.wavelength, 700);
        let names: Vec<&str> = structures.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["background", "vessel"]);
        let vessel = structures.iter().nth(1).unwrap();
        assert_eq!(vessel.occupancy, mask);
        assert_eq!(vessel.vessel_kind, Some(VesselKind::Artery));
        assert_eq!(vessel.segmentation(), Some(SegmentationClass::Artery));
        let background = structures.iter().next().unwrap();
        assert!(background.occupancy.iter().all(|o| *o == 1.0));
        let properties = background.composition.properties_for_wavelength(700).unwrap();
        assert_relative_eq!(properties.absorption_per_cm, 0.1);
    }

    #[test]
    fn loading_and_building_are_separate_steps() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tissuemix.toml");
        fs::write(
            &path,
            r#"
            verbose = 2
            [volume]
            dim_x_mm = 2.0
            dim_y_mm = 2.0
            dim_z_mm = 2.0

            [[structures]]
            name = "lymph vessel"
            segmentation = "blood"
            vessel_kind = "lymph"

            [[structures]]
            name = "inclusion"
            priority = 1
            occupancy_file = "inclusion.npy"
            "#,
        )
        .unwrap();

        // the configuration, and with it the verbosity, is available before any
        // structure is built
        let config = Configuration::load(&path).unwrap();
        assert_eq!(config.verbose, 2);
        assert!(matches!(build_structures(&config, &path), Err(Error::Npy(_))));

        write_npy(dir.path().join("inclusion.npy"), &Array3::<f64>::zeros((2, 2, 2))).unwrap();
        let structures = build_structures(&config, &path).unwrap();
        assert_eq!(structures.len(), 2);
        // the malformed vessel tag is tolerated
        let vessel = structures.iter().next().unwrap();
        assert_eq!(vessel.vessel_kind, None);
        assert_eq!(vessel.segmentation(), Some(SegmentationClass::Blood));
    }

    #[test]
    fn missing_configuration_is_written_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tissuemix.toml");
        let (config, structures) = read_input(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config, Configuration::default());
        assert_eq!(structures.len(), 1);
        assert_eq!(Configuration::load(&path).unwrap(), config);
    }

    #[test]
    fn unknown_spectra_and_missing_masks_are_reported() {
        let grid = Grid::new(2, 2, 2).unwrap();
        let mut config: StructureConfig = Configuration::default().structures[0].clone();
        config.molecules[0].spectrum = String::from("Unobtainium");
        let result = config.build(&grid, Path::new("."));
        assert!(matches!(result, Err(Error::UnknownSpectrum(_))));

        let mut config: StructureConfig = Configuration::default().structures[0].clone();
        config.occupancy_file = Some(String::from("does_not_exist.npy"));
        let result = config.build(&grid, Path::new("."));
        assert!(matches!(result, Err(Error::Npy(_))));
    }
}
