use crate::constants::{HEMOGLOBIN_FRACTION_EPS, RAYLEIGH_EXPONENT, REFERENCE_WAVELENGTH};
use crate::error::Result;
use crate::molecules::Molecule;
use crate::properties::{SegmentationClass, TissueProperties};
use crate::spectra::{DEOXYHEMOGLOBIN_NAME, OXYHEMOGLOBIN_NAME};
use hashbrown::HashMap;
use log::trace;
use std::cell::{Cell, RefCell};

/// Absorption and scattering coefficient [cm^-1] of a composition at one wavelength.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpticalCoefficients {
    pub absorption_per_cm: f64,
    pub scattering_per_cm: f64,
}

/// The material of one structure: an ordered mixture of molecules.
///
/// The aggregated mechanical properties are recomputed whenever a molecule is
/// added. The optical coefficients are computed lazily for each requested
/// wavelength and memoized.
#[derive(Debug, Clone)]
pub struct MolecularComposition {
    molecules: Vec<Molecule>,
    segmentation: Option<SegmentationClass>,
    internal_properties: TissueProperties,
    cache: RefCell<HashMap<u32, OpticalCoefficients>>,
    evaluations: Cell<usize>,
}

impl MolecularComposition {
    pub fn new(segmentation: Option<SegmentationClass>) -> Self {
        let mut composition = MolecularComposition {
            molecules: Vec::new(),
            segmentation,
            internal_properties: TissueProperties::default(),
            cache: RefCell::new(HashMap::new()),
            evaluations: Cell::new(0),
        };
        composition.update_internal_properties();
        composition
    }

    pub fn from_molecules(segmentation: Option<SegmentationClass>, molecules: Vec<Molecule>) -> Self {
        let mut composition = Self::new(segmentation);
        composition.molecules = molecules;
        composition.update_internal_properties();
        composition
    }

    /// Appends a molecule. The aggregate is recomputed and all memoized optical
    /// coefficients are dropped.
    pub fn push(&mut self, molecule: Molecule) -> &mut Self {
        self.molecules.push(molecule);
        self.update_internal_properties();
        self
    }

    pub fn molecules(&self) -> &[Molecule] {
        &self.molecules
    }

    pub fn segmentation(&self) -> Option<SegmentationClass> {
        self.segmentation
    }

    pub fn internal_properties(&self) -> &TissueProperties {
        &self.internal_properties
    }

    /// Number of times the optical coefficients were computed from the molecules
    /// instead of being taken from the cache.
    pub fn evaluations(&self) -> usize {
        self.evaluations.get()
    }

    /// Recomputes the volume fraction weighted mechanical properties of the mixture.
    /// If the volume fractions add up to more than one, only the anisotropy is
    /// renormalized by the total volume fraction.
    pub fn update_internal_properties(&mut self) {
        let mut properties = TissueProperties {
            segmentation: self.segmentation,
            oxygenation: oxygenation(&self.molecules),
            ..TissueProperties::default()
        };
        for molecule in self.molecules.iter() {
            properties.volume_fraction += molecule.volume_fraction;
            properties.anisotropy += molecule.volume_fraction * molecule.anisotropy;
            properties.gruneisen_parameter += molecule.volume_fraction * molecule.gruneisen_parameter;
            properties.density += molecule.volume_fraction * molecule.density;
            properties.speed_of_sound += molecule.volume_fraction * molecule.speed_of_sound;
            properties.alpha_coefficient += molecule.volume_fraction * molecule.alpha_coefficient;
        }
        if properties.volume_fraction > 1.0 {
            properties.anisotropy /= properties.volume_fraction;
        }
        self.internal_properties = properties;
        self.cache.borrow_mut().clear();
    }

    /// Returns the aggregated properties together with the absorption and scattering
    /// coefficient at the given wavelength [nm].
    pub fn properties_for_wavelength(&self, wavelength: u32) -> Result<TissueProperties> {
        let cached: Option<OpticalCoefficients> = self.cache.borrow().get(&wavelength).copied();
        let optics: OpticalCoefficients = match cached {
            Some(optics) => optics,
            None => {
                let optics: OpticalCoefficients = self.optical_coefficients(wavelength)?;
                self.cache.borrow_mut().insert(wavelength, optics);
                optics
            }
        };
        Ok(TissueProperties {
            absorption_per_cm: optics.absorption_per_cm,
            scattering_per_cm: optics.scattering_per_cm,
            ..self.internal_properties
        })
    }

    fn optical_coefficients(&self, wavelength: u32) -> Result<OpticalCoefficients> {
        self.evaluations.set(self.evaluations.get() + 1);
        let ratio: f64 = wavelength as f64 / REFERENCE_WAVELENGTH;
        let mut absorption_per_cm: f64 = 0.0;
        let mut scattering_per_cm: f64 = 0.0;
        for molecule in self.molecules.iter() {
            absorption_per_cm += molecule.volume_fraction * molecule.spectrum.absorption_at(wavelength)?;
            scattering_per_cm += molecule.volume_fraction
                * molecule.mus500
                * (molecule.f_ray * ratio.powf(RAYLEIGH_EXPONENT)
                    + (1.0 - molecule.f_ray) * ratio.powf(-molecule.b_mie));
        }
        trace!(
            "optical coefficients at {} nm: mua = {:e}, mus = {:e}",
            wavelength,
            absorption_per_cm,
            scattering_per_cm
        );
        Ok(OpticalCoefficients {
            absorption_per_cm,
            scattering_per_cm,
        })
    }
}

/// Fraction of oxygenated hemoglobin among all hemoglobin of the mixture.
fn oxygenation(molecules: &[Molecule]) -> Option<f64> {
    let fraction_of = |name: &str| -> f64 {
        molecules
            .iter()
            .filter(|molecule| molecule.spectrum.name() == name)
            .map(|molecule| molecule.volume_fraction)
            .sum()
    };
    let oxy: f64 = fraction_of(OXYHEMOGLOBIN_NAME);
    let deoxy: f64 = fraction_of(DEOXYHEMOGLOBIN_NAME);
    if oxy + deoxy < HEMOGLOBIN_FRACTION_EPS {
        None
    } else {
        Some(oxy / (oxy + deoxy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::spectra::{Spectrum, SpectrumLibrary};
    use approx::assert_relative_eq;
    use std::sync::Arc;

    fn constant(value: f64) -> Arc<Spectrum> {
        Arc::new(SpectrumLibrary::constant_absorber(value))
    }

    fn molecule(volume_fraction: f64, anisotropy: f64, density: f64) -> Molecule {
        Molecule::builder()
            .set_spectrum(constant(2.0))
            .set_volume_fraction(volume_fraction)
            .set_anisotropy(anisotropy)
            .set_density(density)
            .set_gruneisen_parameter(0.5)
            .set_speed_of_sound(1500.0)
            .set_alpha_coefficient(0.1)
            .build()
            .unwrap()
    }

    #[test]
    fn aggregates_are_volume_fraction_weighted() {
        let composition = MolecularComposition::from_molecules(
            Some(SegmentationClass::Muscle),
            vec![molecule(0.25, 0.8, 1000.0), molecule(0.75, 0.9, 1100.0)],
        );
        let properties = composition.internal_properties();
        assert_relative_eq!(properties.volume_fraction, 1.0);
        assert_relative_eq!(properties.anisotropy, 0.25 * 0.8 + 0.75 * 0.9);
        assert_relative_eq!(properties.density, 0.25 * 1000.0 + 0.75 * 1100.0);
        assert_relative_eq!(properties.gruneisen_parameter, 0.5);
        assert_relative_eq!(properties.speed_of_sound, 1500.0);
        assert_relative_eq!(properties.alpha_coefficient, 0.1);
        assert_eq!(properties.segmentation, Some(SegmentationClass::Muscle));
    }

    #[test]
    fn only_the_anisotropy_is_renormalized() {
        let composition = MolecularComposition::from_molecules(
            None,
            vec![molecule(1.0, 0.8, 1000.0), molecule(1.0, 0.9, 1000.0)],
        );
        let properties = composition.internal_properties();
        assert_relative_eq!(properties.volume_fraction, 2.0);
        assert_relative_eq!(properties.anisotropy, (0.8 + 0.9) / 2.0);
        // the mechanical properties keep the raw weighted sum
        assert_relative_eq!(properties.density, 2000.0);
        assert_relative_eq!(properties.speed_of_sound, 3000.0);
        assert_relative_eq!(properties.gruneisen_parameter, 1.0);
    }

    #[test]
    fn optical_coefficients_follow_the_scattering_model() {
        let molecule = Molecule::builder()
            .set_spectrum(constant(3.0))
            .set_volume_fraction(0.5)
            .set_mus500(100.0)
            .set_f_ray(0.2)
            .set_b_mie(1.5)
            .build()
            .unwrap();
        let composition = MolecularComposition::from_molecules(None, vec![molecule]);
        let properties = composition.properties_for_wavelength(800).unwrap();
        let ratio: f64 = 800.0 / 500.0;
        let expected: f64 = 0.5 * 100.0 * (0.2 * ratio.powf(1e-4) + 0.8 * ratio.powf(-1.5));
        assert_relative_eq!(properties.absorption_per_cm, 1.5);
        assert_relative_eq!(properties.scattering_per_cm, expected, max_relative = 1e-12);
    }

    #[test]
    fn repeated_lookups_are_served_from_the_cache() {
        let composition = MolecularComposition::from_molecules(
            None,
            vec![molecule(0.5, 0.9, 1000.0), molecule(0.5, 0.9, 1000.0)],
        );
        let first = composition.properties_for_wavelength(700).unwrap();
        assert_eq!(composition.evaluations(), 1);
        let second = composition.properties_for_wavelength(700).unwrap();
        assert_eq!(composition.evaluations(), 1);
        assert_eq!(first, second);
        composition.properties_for_wavelength(701).unwrap();
        assert_eq!(composition.evaluations(), 2);
    }

    #[test]
    fn adding_a_molecule_invalidates_the_cache() {
        let mut composition = MolecularComposition::from_molecules(None, vec![molecule(0.5, 0.9, 1000.0)]);
        let before = composition.properties_for_wavelength(700).unwrap();
        composition.push(molecule(0.5, 0.9, 1000.0));
        let after = composition.properties_for_wavelength(700).unwrap();
        assert_eq!(composition.evaluations(), 2);
        assert_relative_eq!(after.absorption_per_cm, 2.0 * before.absorption_per_cm);
        assert_relative_eq!(after.density, 1000.0);
    }

    #[test]
    fn lookup_errors_are_not_cached() {
        let composition = MolecularComposition::from_molecules(None, vec![molecule(1.0, 0.9, 1000.0)]);
        let result = composition.properties_for_wavelength(1200);
        assert!(matches!(result, Err(Error::WavelengthOutOfRange { wavelength: 1200, .. })));
        assert!(composition.properties_for_wavelength(1200).is_err());
        assert_eq!(composition.evaluations(), 2);
    }

    #[test]
    fn oxygenation_of_blood() {
        let library = SpectrumLibrary::global();
        let hemoglobin = |name: &str, fraction: f64| {
            Molecule::builder()
                .set_spectrum(library.get(name).unwrap())
                .set_volume_fraction(fraction)
                .build()
                .unwrap()
        };
        let blood = MolecularComposition::from_molecules(
            Some(SegmentationClass::Blood),
            vec![
                hemoglobin(OXYHEMOGLOBIN_NAME, 0.03),
                hemoglobin(DEOXYHEMOGLOBIN_NAME, 0.01),
            ],
        );
        assert_relative_eq!(blood.internal_properties().oxygenation.unwrap(), 0.75);
        let water = MolecularComposition::from_molecules(None, vec![molecule(1.0, 0.9, 1000.0)]);
        assert_eq!(water.internal_properties().oxygenation, None);
    }
}
