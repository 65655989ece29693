mod logging;

use crate::backend::{BackendKind, VoxelBackend};
use crate::error::{Error, Result};
use crate::properties::{PropertyKind, SegmentationClass, TissueProperties};
use crate::structure::{Grid, Structure, Structures};
use crate::utils::Timer;
use crate::volume::{AuditSlices, TissuePropertyVolume};
use log::debug;
use logging::*;
use ndarray::prelude::*;

/// Result of one compositing pass.
#[derive(Debug, Clone)]
pub struct CompositedVolume {
    pub volume: TissuePropertyVolume,
    /// fraction of every voxel that is filled by some structure
    pub coverage: Array3<f64>,
    pub audit_slices: AuditSlices,
}

/// Merges overlapping structures into a single tissue property volume.
///
/// The structures are processed one after another in ascending priority. Every
/// structure can only fill the part of a voxel that is still free, so the filled
/// fraction of a voxel never exceeds one. The continuous properties are the sum of
/// the structure properties weighted by the fraction each structure added, and the
/// segmentation label of a voxel belongs to the structure with the largest single
/// contribution.
pub struct VolumeCompositor {
    grid: Grid,
    wavelength: u32,
    audit_plane: usize,
    backend: Box<dyn VoxelBackend>,
}

impl VolumeCompositor {
    pub fn new(grid: Grid, wavelength: u32) -> Self {
        VolumeCompositor {
            grid,
            wavelength,
            audit_plane: grid.audit_plane(),
            backend: BackendKind::default().backend(),
        }
    }

    pub fn set_backend(&mut self, kind: BackendKind) -> &mut Self {
        self.backend = kind.backend();
        self
    }

    /// Index along the y axis of the x-z plane that is stored for every structure.
    pub fn set_audit_plane(&mut self, audit_plane: usize) -> &mut Self {
        self.audit_plane = audit_plane;
        self
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn wavelength(&self) -> u32 {
        self.wavelength
    }

    /// Checks the whole input before anything is accumulated.
    fn validate(&self, structures: &Structures) -> Result<()> {
        if self.audit_plane >= self.grid.ny {
            return Err(Error::InvalidGrid(format!(
                "the audit plane {} is outside of the y range of the grid ({})",
                self.audit_plane, self.grid
            )));
        }
        for structure in structures.iter() {
            if structure.occupancy.shape() != &self.grid.shape()[..] {
                return Err(Error::ShapeMismatch {
                    structure: structure.name.clone(),
                    expected: self.grid.shape(),
                    found: structure.occupancy.shape().to_vec(),
                });
            }
        }
        Ok(())
    }

    pub fn composite(&self, structures: &Structures) -> Result<CompositedVolume> {
        self.validate(structures)?;
        let timer: Timer = Timer::start();
        compositing_init(self.grid, self.wavelength, structures.len(), self.backend.name());

        let shape: [usize; 3] = self.grid.shape();
        let mut volume: TissuePropertyVolume = TissuePropertyVolume::zeros(self.grid);
        let mut global_occupancy: Array3<f64> = Array3::zeros(shape);
        let mut max_contribution: Array3<f64> = Array3::zeros(shape);
        // reused for every structure
        let mut added: Array3<f64> = Array3::zeros(shape);
        let mut eligible: Array3<bool> = Array3::from_elem(shape, false);
        let mut audit_slices: AuditSlices = AuditSlices::with_capacity(structures.len());

        for (index, structure) in structures.iter().enumerate() {
            let properties: TissueProperties = structure.composition.properties_for_wavelength(self.wavelength)?;
            let segmentation: Option<SegmentationClass> = structure.segmentation();

            self.backend.added_fraction(
                structure.occupancy.view(),
                global_occupancy.view(),
                added.view_mut(),
                eligible.view_mut(),
            );

            let identifier: &str = audit_slices.push(
                &structure.name,
                added.index_axis(Axis(1), self.audit_plane).to_owned(),
            );
            debug!("stored the added fraction of '{}' as '{}'", structure.name, identifier);

            match segmentation {
                Some(class) => self.backend.update_segmentation(
                    added.view(),
                    eligible.view(),
                    max_contribution.view_mut(),
                    volume.segmentation.view_mut(),
                    class.label(),
                ),
                None => debug!(
                    "structure '{}' has no segmentation class, the labels are left unchanged",
                    structure.name
                ),
            }

            for kind in PropertyKind::ALL.iter() {
                self.backend
                    .accumulate(volume.field_mut(*kind), added.view(), properties.get(*kind));
            }
            self.backend.commit(global_occupancy.view_mut(), added.view());

            log_structure(index, structure, segmentation, &added, &eligible, &properties);
        }

        let n_uncovered: usize = global_occupancy.iter().filter(|g| **g < 1.0).count();
        let min_coverage: f64 = global_occupancy.iter().cloned().fold(1.0, f64::min);
        compositing_end(timer, self.grid.n_voxels(), n_uncovered, min_coverage);

        Ok(CompositedVolume {
            volume,
            coverage: global_occupancy,
            audit_slices,
        })
    }
}

fn log_structure(
    index: usize,
    structure: &Structure,
    segmentation: Option<SegmentationClass>,
    added: &Array3<f64>,
    eligible: &Array3<bool>,
    properties: &TissueProperties,
) {
    let n_voxels: usize = eligible.iter().filter(|e| **e).count();
    structure_iteration(
        index,
        &structure.name,
        structure.priority,
        segmentation,
        n_voxels,
        added.sum(),
    );
    debug!(
        "'{}': mua = {:e} cm^-1, mus = {:e} cm^-1, g = {:.4}",
        structure.name, properties.absorption_per_cm, properties.scattering_per_cm, properties.anisotropy
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::molecules::{MolecularComposition, Molecule, TissueLibrary};
    use crate::spectra::SpectrumLibrary;
    use crate::structure::VesselKind;
    use approx::assert_relative_eq;
    use std::sync::Arc;

    fn grid() -> Grid {
        Grid::new(4, 3, 5).unwrap()
    }

    fn composition(mua: f64, segmentation: Option<SegmentationClass>) -> MolecularComposition {
        let molecule = Molecule::builder()
            .set_spectrum(Arc::new(SpectrumLibrary::constant_absorber(mua)))
            .set_volume_fraction(1.0)
            .set_mus500(10.0 * mua)
            .set_anisotropy(0.9)
            .set_density(1000.0 * mua)
            .set_speed_of_sound(1500.0)
            .set_gruneisen_parameter(0.2)
            .set_alpha_coefficient(0.5)
            .build()
            .unwrap();
        MolecularComposition::from_molecules(segmentation, vec![molecule])
    }

    fn uniform(name: &str, priority: i32, value: f64, mua: f64, class: SegmentationClass) -> Structure {
        Structure::new(
            name,
            priority,
            Array3::from_elem(grid().shape(), value),
            composition(mua, Some(class)),
        )
        .unwrap()
    }

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn single_full_coverage_structure() {
        init();
        let background = Structure::background("background", grid(), TissueLibrary::constant(0.3, 50.0, 0.85).unwrap())
            .unwrap();
        let expected: TissueProperties = background.composition.properties_for_wavelength(800).unwrap();
        let structures = Structures::new(vec![background]);
        let result = VolumeCompositor::new(grid(), 800).composite(&structures).unwrap();
        for kind in PropertyKind::ALL.iter() {
            assert!(result.volume.field(*kind).iter().all(|v| *v == expected.get(*kind)), "{}", kind);
        }
        assert!(result
            .volume
            .segmentation()
            .iter()
            .all(|l| *l == SegmentationClass::Generic.label()));
        assert!(result.coverage.iter().all(|g| *g == 1.0));
    }

    #[test]
    fn earlier_structure_with_larger_contribution_keeps_the_label() {
        init();
        let a = uniform("A", 1, 0.6, 1.0, SegmentationClass::Muscle);
        let b = uniform("B", 2, 0.6, 2.0, SegmentationClass::Blood);
        let structures = Structures::new(vec![b, a]);
        let result = VolumeCompositor::new(grid(), 700).composite(&structures).unwrap();

        let slice_a = result.audit_slices.get("000_A").unwrap();
        let slice_b = result.audit_slices.get("001_B").unwrap();
        assert_relative_eq!(slice_a[[0, 0]], 0.6);
        assert_relative_eq!(slice_b[[0, 0]], 0.4, epsilon = 1e-12);
        for g in result.coverage.iter() {
            assert_relative_eq!(*g, 1.0, epsilon = 1e-12);
        }
        assert!(result
            .volume
            .segmentation()
            .iter()
            .all(|l| *l == SegmentationClass::Muscle.label()));
        // 0.6 * 1.0 + 0.4 * 2.0
        for mua in result.volume.absorption_per_cm.iter() {
            assert_relative_eq!(*mua, 1.4, epsilon = 1e-12);
        }
        for g in result.volume.anisotropy.iter() {
            assert_relative_eq!(*g, 0.9, epsilon = 1e-12);
        }
    }

    #[test]
    fn later_structure_with_larger_contribution_takes_the_label() {
        let a = uniform("A", 1, 0.3, 1.0, SegmentationClass::Muscle);
        let b = uniform("B", 2, 0.6, 2.0, SegmentationClass::Blood);
        let structures = Structures::new(vec![a, b]);
        let result = VolumeCompositor::new(grid(), 700).composite(&structures).unwrap();
        assert!(result
            .volume
            .segmentation()
            .iter()
            .all(|l| *l == SegmentationClass::Blood.label()));
    }

    #[test]
    fn coverage_never_exceeds_one() {
        let shape = grid().shape();
        let mut structures: Vec<Structure> = Vec::new();
        for n in 0..6 {
            let occupancy = Array3::from_shape_fn(shape, |(i, j, k)| ((i + 2 * j + 3 * k + n) % 7) as f64 / 6.0);
            let s = Structure::new(&format!("s{}", n), n as i32, occupancy, composition(1.0 + n as f64, None)).unwrap();
            structures.push(s);
        }
        let result = VolumeCompositor::new(grid(), 600)
            .composite(&Structures::new(structures))
            .unwrap();
        assert!(result.coverage.iter().all(|g| *g >= 0.0 && *g <= 1.0));
        // without segmentation classes the labels stay untouched
        assert!(result.volume.segmentation().iter().all(|l| *l == 0));
    }

    #[test]
    fn uncovered_fraction_is_not_normalized() {
        let s = uniform("half", 1, 0.5, 2.0, SegmentationClass::Fat);
        let result = VolumeCompositor::new(grid(), 700)
            .composite(&Structures::new(vec![s]))
            .unwrap();
        for mua in result.volume.absorption_per_cm.iter() {
            assert_relative_eq!(*mua, 1.0);
        }
        for g in result.coverage.iter() {
            assert_relative_eq!(*g, 0.5);
        }
    }

    #[test]
    fn vessel_kind_overrides_the_composition_segmentation() {
        let background = uniform("background", 0, 0.5, 1.0, SegmentationClass::Muscle);
        let vessel = uniform("vessel", 1, 0.5, 1.0, SegmentationClass::Blood).with_vessel_kind(Some(VesselKind::Vein));
        // equal contributions: the earlier structure keeps the label
        let result = VolumeCompositor::new(grid(), 700)
            .composite(&Structures::new(vec![background.clone(), vessel]))
            .unwrap();
        assert!(result
            .volume
            .segmentation()
            .iter()
            .all(|l| *l == SegmentationClass::Muscle.label()));

        let vessel = uniform("vessel", 1, 0.7, 1.0, SegmentationClass::Blood).with_vessel_tag(Some("artery"));
        let result = VolumeCompositor::new(grid(), 700)
            .composite(&Structures::new(vec![uniform("background", 0, 0.2, 1.0, SegmentationClass::Muscle), vessel]))
            .unwrap();
        assert!(result
            .volume
            .segmentation()
            .iter()
            .all(|l| *l == SegmentationClass::Artery.label()));
    }

    #[test]
    fn shape_mismatch_is_reported_before_compositing() {
        let good = uniform("good", 0, 1.0, 1.0, SegmentationClass::Muscle);
        let bad = Structure::new("bad", 1, Array3::ones((4, 3, 4)), composition(1.0, None)).unwrap();
        let structures = Structures::new(vec![good, bad]);
        let result = VolumeCompositor::new(grid(), 700).composite(&structures);
        assert!(matches!(result, Err(Error::ShapeMismatch { ref structure, .. }) if structure == "bad"));
        // nothing was evaluated for the valid structure either
        assert_eq!(structures.iter().next().unwrap().composition.evaluations(), 0);
    }

    #[test]
    fn lookup_failures_abort_the_pass() {
        let s = uniform("s", 0, 1.0, 1.0, SegmentationClass::Muscle);
        let result = VolumeCompositor::new(grid(), 1100).composite(&Structures::new(vec![s]));
        assert!(matches!(result, Err(Error::WavelengthOutOfRange { wavelength: 1100, .. })));
    }

    #[test]
    fn audit_plane_has_to_be_inside_the_grid() {
        let s = uniform("s", 0, 1.0, 1.0, SegmentationClass::Muscle);
        let mut compositor = VolumeCompositor::new(grid(), 700);
        compositor.set_audit_plane(3);
        let result = compositor.composite(&Structures::new(vec![s]));
        assert!(matches!(result, Err(Error::InvalidGrid(_))));
    }

    #[test]
    fn audit_slices_are_taken_from_the_middle_plane() {
        let shape = grid().shape();
        let occupancy = Array3::from_shape_fn(shape, |(i, j, k)| if j == 1 { (i + k) as f64 / 10.0 } else { 0.0 });
        let s = Structure::new("plane", 0, occupancy.clone(), composition(1.0, None)).unwrap();
        let result = VolumeCompositor::new(grid(), 700)
            .composite(&Structures::new(vec![s]))
            .unwrap();
        assert_eq!(result.audit_slices.len(), 1);
        let (identifier, slice) = result.audit_slices.iter().next().unwrap();
        assert_eq!(identifier, "000_plane");
        assert_eq!(slice.shape(), &[4, 5]);
        assert_eq!(slice, occupancy.index_axis(Axis(1), 1));
    }

    #[test]
    fn repeated_runs_are_bit_identical() {
        let shape = grid().shape();
        let structures = Structures::new(
            (0..4)
                .map(|n| {
                    let occupancy = Array3::from_shape_fn(shape, |(i, j, k)| ((3 * i + j + 5 * k + n) % 5) as f64 / 4.0);
                    let class = if n % 2 == 0 { SegmentationClass::Dermis } else { SegmentationClass::Fat };
                    Structure::new(&format!("s{}", n), 1, occupancy, composition(0.5 + n as f64, Some(class))).unwrap()
                })
                .collect(),
        );
        let mut serial = VolumeCompositor::new(grid(), 750);
        serial.set_backend(BackendKind::Serial);
        let mut parallel = VolumeCompositor::new(grid(), 750);
        parallel.set_backend(BackendKind::Parallel);

        let first = serial.composite(&structures).unwrap();
        let second = serial.composite(&structures).unwrap();
        let third = parallel.composite(&structures).unwrap();
        assert_eq!(first.volume, second.volume);
        assert_eq!(first.volume, third.volume);
        assert_eq!(first.coverage, third.coverage);
        assert_eq!(first.audit_slices, third.audit_slices);
    }
}
