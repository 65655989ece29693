use crate::constants::{CONSTANT_ABSORBER_RANGE, CONSTANT_ABSORBER_ZERO_VALUE};
use crate::error::{Error, Result};
use crate::spectra::tabulated::*;
use crate::spectra::Spectrum;
use hashbrown::HashMap;
use std::sync::{Arc, OnceLock};

pub const DEOXYHEMOGLOBIN_NAME: &str = "Deoxyhemoglobin";
pub const OXYHEMOGLOBIN_NAME: &str = "Oxyhemoglobin";
pub const WATER_NAME: &str = "Water";
pub const FAT_NAME: &str = "Fat";
pub const MELANIN_NAME: &str = "Melanin";
pub const NICKEL_SULPHIDE_NAME: &str = "Nickel Sulphide";
pub const COPPER_SULPHIDE_NAME: &str = "Copper Sulphide";
pub const CONSTANT_ABSORBER_ZERO_NAME: &str = "Constant Absorber (0)";
pub const CONSTANT_ABSORBER_ONE_NAME: &str = "Constant Absorber (1)";
pub const CONSTANT_ABSORBER_TEN_NAME: &str = "Constant Absorber (10)";

static SPECTRAL_LIBRARY: OnceLock<SpectrumLibrary> = OnceLock::new();

/// Collection of all absorption spectra that can be referenced by name.
pub struct SpectrumLibrary {
    spectra: HashMap<String, Arc<Spectrum>>,
    names: Vec<String>,
}

impl SpectrumLibrary {
    /// The library with all tabulated spectra. It is built on first use and
    /// shared for the lifetime of the process.
    pub fn global() -> &'static SpectrumLibrary {
        SPECTRAL_LIBRARY.get_or_init(SpectrumLibrary::new)
    }

    fn new() -> Self {
        let mut library = SpectrumLibrary {
            spectra: HashMap::new(),
            names: Vec::new(),
        };
        library.insert(Spectrum::tabulated(DEOXYHEMOGLOBIN_NAME, DEOXYHEMOGLOBIN_GRID, &DEOXYHEMOGLOBIN));
        library.insert(Spectrum::tabulated(OXYHEMOGLOBIN_NAME, OXYHEMOGLOBIN_GRID, &OXYHEMOGLOBIN));
        library.insert(Spectrum::tabulated(WATER_NAME, WATER_GRID, &WATER));
        library.insert(Spectrum::tabulated(FAT_NAME, FAT_GRID, &FAT));
        library.insert(Spectrum::tabulated(MELANIN_NAME, MELANIN_GRID, &MELANIN));
        library.insert(Spectrum::tabulated(NICKEL_SULPHIDE_NAME, NICKEL_SULPHIDE_GRID, &NICKEL_SULPHIDE));
        library.insert(Spectrum::tabulated(COPPER_SULPHIDE_NAME, COPPER_SULPHIDE_GRID, &COPPER_SULPHIDE));
        library.insert(named_constant_absorber(CONSTANT_ABSORBER_ZERO_NAME, CONSTANT_ABSORBER_ZERO_VALUE));
        library.insert(named_constant_absorber(CONSTANT_ABSORBER_ONE_NAME, 1.0));
        library.insert(named_constant_absorber(CONSTANT_ABSORBER_TEN_NAME, 10.0));
        library
    }

    fn insert(&mut self, spectrum: Spectrum) {
        self.names.push(spectrum.name().to_owned());
        self.spectra.insert(spectrum.name().to_owned(), Arc::new(spectrum));
    }

    pub fn get(&self, name: &str) -> Result<Arc<Spectrum>> {
        self.spectra
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownSpectrum(name.to_owned()))
    }

    /// Names of all spectra in the order in which they were added.
    pub fn names(&self) -> Vec<&str> {
        self.names.iter().map(|name| name.as_str()).collect()
    }

    /// A wavelength independent absorber with the given absorption coefficient [cm^-1].
    pub fn constant_absorber(absorption_per_cm: f64) -> Spectrum {
        named_constant_absorber(&format!("Constant Absorber ({})", absorption_per_cm), absorption_per_cm)
    }
}

fn named_constant_absorber(name: &str, absorption_per_cm: f64) -> Spectrum {
    let (first, last) = CONSTANT_ABSORBER_RANGE;
    Spectrum::tabulated(name, (first, last, last - first), &[absorption_per_cm, absorption_per_cm])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn tabulated_spectra_are_well_formed() {
        let library = SpectrumLibrary::global();
        assert_eq!(library.names().len(), 10);
        for name in library.names() {
            let spectrum = library.get(name).unwrap();
            let (wavelengths, values) = spectrum.absorption_over_wavelength();
            assert!(Spectrum::new(name, wavelengths.to_vec(), values.to_vec()).is_ok(), "{}", name);
        }
    }

    #[test]
    fn tabulated_values_are_reproduced() {
        let library = SpectrumLibrary::global();
        let deoxy = library.get(DEOXYHEMOGLOBIN_NAME).unwrap();
        assert_relative_eq!(deoxy.absorption_at(450).unwrap(), 553.0);
        assert_relative_eq!(deoxy.absorption_at(1000).unwrap(), 1.11);
        let fat = library.get(FAT_NAME).unwrap();
        assert_relative_eq!(fat.absorption_at(450).unwrap(), 0.06375);
        // the sulphide spectra are tabulated on a 2 nm grid
        let nickel = library.get(NICKEL_SULPHIDE_NAME).unwrap();
        assert_eq!(nickel.min_wavelength(), 500);
        assert_eq!(nickel.max_wavelength(), 980);
        let mean = 0.5 * (nickel.absorption_at(500).unwrap() + nickel.absorption_at(502).unwrap());
        assert_relative_eq!(nickel.absorption_at(501).unwrap(), mean, epsilon = 1e-12);
    }

    #[test]
    fn unknown_spectrum_is_an_error() {
        let result = SpectrumLibrary::global().get("Unobtainium");
        assert!(matches!(result, Err(Error::UnknownSpectrum(name)) if name == "Unobtainium"));
    }

    #[test]
    fn constant_absorber() {
        let spectrum = SpectrumLibrary::constant_absorber(4.2);
        for w in 450..=1000 {
            assert_eq!(spectrum.absorption_at(w).unwrap(), 4.2);
        }
    }
}
