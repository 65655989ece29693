use crate::defaults;
use crate::error::{Error, Result};
use crate::spectra::{Spectrum, SpectrumLibrary};
use std::sync::Arc;

/// A single chemical species within a tissue. The optical absorption is given
/// by the spectrum, the scattering by the empirical parameters `mus500`,
/// `f_ray` and `b_mie`, and the remaining fields are the mechanical and
/// thermoacoustic constants of the pure species.
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    pub spectrum: Arc<Spectrum>,
    pub volume_fraction: f64,
    /// scattering coefficient at 500 nm in cm^-1
    pub mus500: f64,
    pub f_ray: f64,
    pub b_mie: f64,
    pub anisotropy: f64,
    pub gruneisen_parameter: f64,
    pub density: f64,
    pub speed_of_sound: f64,
    pub alpha_coefficient: f64,
}

impl Molecule {
    pub fn builder() -> MoleculeBuilder {
        MoleculeBuilder::new()
    }
}

// Usage: let molecule = MoleculeBuilder::new().[set_xx].build()?;
pub struct MoleculeBuilder {
    spectrum: Option<Arc<Spectrum>>,
    volume_fraction: f64,
    mus500: f64,
    f_ray: f64,
    b_mie: f64,
    anisotropy: f64,
    gruneisen_parameter: f64,
    density: f64,
    speed_of_sound: f64,
    alpha_coefficient: f64,
}

impl MoleculeBuilder {
    pub fn new() -> MoleculeBuilder {
        MoleculeBuilder {
            spectrum: None,
            volume_fraction: defaults::VOLUME_FRACTION,
            mus500: defaults::MUS500,
            f_ray: defaults::F_RAY,
            b_mie: defaults::B_MIE,
            anisotropy: defaults::ANISOTROPY,
            gruneisen_parameter: defaults::GRUNEISEN_PARAMETER,
            density: defaults::DENSITY,
            speed_of_sound: defaults::SPEED_OF_SOUND,
            alpha_coefficient: defaults::ALPHA_COEFFICIENT,
        }
    }

    pub fn set_spectrum(&mut self, spectrum: Arc<Spectrum>) -> &mut Self {
        self.spectrum = Some(spectrum);
        self
    }

    pub fn set_volume_fraction(&mut self, volume_fraction: f64) -> &mut Self {
        self.volume_fraction = volume_fraction;
        self
    }

    pub fn set_mus500(&mut self, mus500: f64) -> &mut Self {
        self.mus500 = mus500;
        self
    }

    pub fn set_f_ray(&mut self, f_ray: f64) -> &mut Self {
        self.f_ray = f_ray;
        self
    }

    pub fn set_b_mie(&mut self, b_mie: f64) -> &mut Self {
        self.b_mie = b_mie;
        self
    }

    pub fn set_anisotropy(&mut self, anisotropy: f64) -> &mut Self {
        self.anisotropy = anisotropy;
        self
    }

    pub fn set_gruneisen_parameter(&mut self, gruneisen_parameter: f64) -> &mut Self {
        self.gruneisen_parameter = gruneisen_parameter;
        self
    }

    pub fn set_density(&mut self, density: f64) -> &mut Self {
        self.density = density;
        self
    }

    pub fn set_speed_of_sound(&mut self, speed_of_sound: f64) -> &mut Self {
        self.speed_of_sound = speed_of_sound;
        self
    }

    pub fn set_alpha_coefficient(&mut self, alpha_coefficient: f64) -> &mut Self {
        self.alpha_coefficient = alpha_coefficient;
        self
    }

    /// Checks that all fields are finite numbers and creates the molecule. If no
    /// spectrum was set, the zero constant absorber is used.
    pub fn build(&self) -> Result<Molecule> {
        let fields: [(&'static str, f64); 9] = [
            ("volume_fraction", self.volume_fraction),
            ("mus500", self.mus500),
            ("f_ray", self.f_ray),
            ("b_mie", self.b_mie),
            ("anisotropy", self.anisotropy),
            ("gruneisen_parameter", self.gruneisen_parameter),
            ("density", self.density),
            ("speed_of_sound", self.speed_of_sound),
            ("alpha_coefficient", self.alpha_coefficient),
        ];
        if let Some((field, value)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(Error::NonNumericField {
                field: *field,
                value: *value,
            });
        }
        let spectrum: Arc<Spectrum> = match &self.spectrum {
            Some(spectrum) => Arc::clone(spectrum),
            None => SpectrumLibrary::global().get(defaults::SPECTRUM)?,
        };

        Ok(Molecule {
            spectrum,
            volume_fraction: self.volume_fraction,
            mus500: self.mus500,
            f_ray: self.f_ray,
            b_mie: self.b_mie,
            anisotropy: self.anisotropy,
            gruneisen_parameter: self.gruneisen_parameter,
            density: self.density,
            speed_of_sound: self.speed_of_sound,
            alpha_coefficient: self.alpha_coefficient,
        })
    }
}

impl Default for MoleculeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectra::CONSTANT_ABSORBER_ZERO_NAME;

    #[test]
    fn unset_fields_take_the_defaults() {
        let molecule = Molecule::builder().build().unwrap();
        assert_eq!(molecule.spectrum.name(), CONSTANT_ABSORBER_ZERO_NAME);
        assert_eq!(molecule.volume_fraction, 0.0);
        assert_eq!(molecule.mus500, 1.0e-20);
        assert_eq!(molecule.f_ray, 0.0);
        assert_eq!(molecule.b_mie, 0.0);
        assert_eq!(molecule.anisotropy, 0.0);
        assert_eq!(molecule.gruneisen_parameter, 1.0);
        assert_eq!(molecule.density, 0.0);
        assert_eq!(molecule.speed_of_sound, 0.0);
        assert_eq!(molecule.alpha_coefficient, 0.0);
    }

    #[test]
    fn setters_are_applied() {
        let molecule = Molecule::builder()
            .set_volume_fraction(0.3)
            .set_mus500(120.0)
            .set_density(1000.0)
            .set_speed_of_sound(1540.0)
            .build()
            .unwrap();
        assert_eq!(molecule.volume_fraction, 0.3);
        assert_eq!(molecule.mus500, 120.0);
        assert_eq!(molecule.density, 1000.0);
        assert_eq!(molecule.speed_of_sound, 1540.0);
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let result = Molecule::builder().set_anisotropy(f64::NAN).build();
        assert!(matches!(
            result,
            Err(Error::NonNumericField { field: "anisotropy", .. })
        ));
        let result = Molecule::builder().set_density(f64::INFINITY).build();
        assert!(matches!(result, Err(Error::NonNumericField { field: "density", .. })));
    }
}
