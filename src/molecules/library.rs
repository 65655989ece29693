use crate::error::Result;
use crate::molecules::Molecule;
use crate::spectra::{SpectrumLibrary, CONSTANT_ABSORBER_ZERO_NAME, WATER_NAME};
use std::sync::Arc;

/// Frequently used molecules.
///
/// Hemoglobin, melanin and fat only ship their spectra (see [`SpectrumLibrary`]);
/// molecules of them have to be built with [`Molecule::builder()`] and explicit
/// scattering and acoustic parameters.
pub struct MoleculeLibrary;

impl MoleculeLibrary {
    pub fn water(volume_fraction: f64) -> Result<Molecule> {
        Molecule::builder()
            .set_spectrum(SpectrumLibrary::global().get(WATER_NAME)?)
            .set_volume_fraction(volume_fraction)
            .set_mus500(0.0)
            .set_b_mie(0.0)
            .set_f_ray(0.0)
            .set_anisotropy(1.0)
            .build()
    }

    /// A non-absorbing scatterer with a wavelength independent scattering coefficient [cm^-1].
    pub fn constant_scatterer(scattering_per_cm: f64, anisotropy: f64, volume_fraction: f64) -> Result<Molecule> {
        Molecule::builder()
            .set_spectrum(SpectrumLibrary::global().get(CONSTANT_ABSORBER_ZERO_NAME)?)
            .set_volume_fraction(volume_fraction)
            .set_mus500(scattering_per_cm)
            .set_b_mie(0.0)
            .set_f_ray(0.0)
            .set_anisotropy(anisotropy)
            .build()
    }

    /// A non-scattering absorber with a wavelength independent absorption coefficient [cm^-1].
    pub fn constant_absorber(absorption_per_cm: f64, volume_fraction: f64) -> Result<Molecule> {
        Molecule::builder()
            .set_spectrum(Arc::new(SpectrumLibrary::constant_absorber(absorption_per_cm)))
            .set_volume_fraction(volume_fraction)
            .set_mus500(0.0)
            .build()
    }
}
