use crate::error::Result;
use crate::molecules::{MolecularComposition, Molecule, MoleculeLibrary};
use crate::properties::SegmentationClass;
use crate::spectra::SpectrumLibrary;
use std::sync::Arc;

/// Ready-made molecular compositions for common tissues and phantom materials.
pub struct TissueLibrary;

impl TissueLibrary {
    /// A tissue with wavelength independent absorption [cm^-1], scattering [cm^-1]
    /// and anisotropy.
    pub fn constant(mua: f64, mus: f64, g: f64) -> Result<MolecularComposition> {
        let molecule: Molecule = Molecule::builder()
            .set_spectrum(Arc::new(SpectrumLibrary::constant_absorber(mua)))
            .set_volume_fraction(1.0)
            .set_mus500(mus)
            .set_f_ray(0.0)
            .set_b_mie(0.0)
            .set_anisotropy(g)
            .build()?;
        Ok(MolecularComposition::from_molecules(
            Some(SegmentationClass::Generic),
            vec![molecule],
        ))
    }

    pub fn ultrasound_gel() -> Result<MolecularComposition> {
        Ok(MolecularComposition::from_molecules(
            Some(SegmentationClass::UltrasoundGel),
            vec![MoleculeLibrary::water(1.0)?],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn constant_tissue_is_wavelength_independent() {
        let tissue = TissueLibrary::constant(0.1, 100.0, 0.9).unwrap();
        for wavelength in [450, 532, 800, 1000].iter() {
            let properties = tissue.properties_for_wavelength(*wavelength).unwrap();
            assert_relative_eq!(properties.absorption_per_cm, 0.1);
            assert_relative_eq!(properties.scattering_per_cm, 100.0);
            assert_relative_eq!(properties.anisotropy, 0.9);
            assert_eq!(properties.segmentation, Some(SegmentationClass::Generic));
        }
    }

    #[test]
    fn ultrasound_gel_is_water() {
        let gel = TissueLibrary::ultrasound_gel().unwrap();
        let properties = gel.properties_for_wavelength(450).unwrap();
        assert_relative_eq!(properties.absorption_per_cm, 0.00028);
        assert_relative_eq!(properties.scattering_per_cm, 0.0);
        assert_relative_eq!(properties.anisotropy, 1.0);
        assert_eq!(properties.segmentation, Some(SegmentationClass::UltrasoundGel));
    }
}
