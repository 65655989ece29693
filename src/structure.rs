use crate::error::{Error, Result};
use crate::molecules::MolecularComposition;
use crate::properties::SegmentationClass;
use log::warn;
use ndarray::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of voxels along each axis of the simulation volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    audit_plane: usize,
}

impl Grid {
    pub fn new(nx: usize, ny: usize, nz: usize) -> Result<Self> {
        if nx == 0 || ny == 0 || nz == 0 {
            return Err(Error::InvalidGrid(format!(
                "all dimensions have to be positive, got ({}, {}, {})",
                nx, ny, nz
            )));
        }
        Ok(Grid {
            nx,
            ny,
            nz,
            audit_plane: ny / 2,
        })
    }

    /// Discretizes a volume of the given extent [mm] with cubic voxels of edge
    /// length `spacing_mm`. The voxel counts are rounded half to even, the audit
    /// plane is the voxel that contains the middle of the y extent.
    pub fn from_extent(dim_x_mm: f64, dim_y_mm: f64, dim_z_mm: f64, spacing_mm: f64) -> Result<Self> {
        if !(spacing_mm > 0.0) || !spacing_mm.is_finite() {
            return Err(Error::InvalidGrid(format!(
                "the voxel spacing has to be positive, got {}",
                spacing_mm
            )));
        }
        let n_voxels = |dim_mm: f64| -> usize { (dim_mm / spacing_mm).round_ties_even().max(0.0) as usize };
        let mut grid = Grid::new(n_voxels(dim_x_mm), n_voxels(dim_y_mm), n_voxels(dim_z_mm))?;
        // truncation, not rounding
        grid.audit_plane = ((dim_y_mm / 2.0) / spacing_mm).max(0.0) as usize;
        Ok(grid)
    }

    pub fn shape(&self) -> [usize; 3] {
        [self.nx, self.ny, self.nz]
    }

    pub fn n_voxels(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Index of the x-z plane in the middle of the y axis.
    pub fn audit_plane(&self) -> usize {
        self.audit_plane
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} x {} x {}", self.nx, self.ny, self.nz)
    }
}

/// Kind of a blood vessel. Vessels get their own segmentation class that
/// overrides the class of their molecular composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VesselKind {
    Artery,
    Vein,
    RandomArtery,
    RandomVein,
}

impl VesselKind {
    /// Interprets a free-form vessel tag. Returns `None` if the tag does not name
    /// a vessel kind.
    pub fn from_tag(tag: &str) -> Option<VesselKind> {
        let tag: String = tag.trim().to_lowercase();
        let is_random: bool = tag.contains("random");
        if tag.contains("artery") && !is_random {
            Some(VesselKind::Artery)
        } else if tag.contains("vein") && !is_random {
            Some(VesselKind::Vein)
        } else if tag.contains("random_artery") {
            Some(VesselKind::RandomArtery)
        } else if tag.contains("random_vein") {
            Some(VesselKind::RandomVein)
        } else {
            None
        }
    }

    pub fn segmentation(self) -> SegmentationClass {
        match self {
            VesselKind::Artery => SegmentationClass::Artery,
            VesselKind::Vein => SegmentationClass::Vein,
            VesselKind::RandomArtery => SegmentationClass::RandomArtery,
            VesselKind::RandomVein => SegmentationClass::RandomVein,
        }
    }
}

/// A tissue structure: a fractional occupancy mask over the grid filled with a
/// molecular composition.
#[derive(Debug, Clone)]
pub struct Structure {
    pub name: String,
    pub priority: i32,
    pub occupancy: Array3<f64>,
    pub composition: MolecularComposition,
    pub consider_partial_volume: bool,
    pub adhere_to_deformation: bool,
    pub vessel_kind: Option<VesselKind>,
}

impl Structure {
    pub fn new(
        name: &str,
        priority: i32,
        occupancy: Array3<f64>,
        mut composition: MolecularComposition,
    ) -> Result<Self> {
        if let Some(value) = occupancy.iter().find(|v| !(**v >= 0.0 && **v <= 1.0)) {
            return Err(Error::InvalidOccupancy {
                structure: name.to_owned(),
                value: *value,
            });
        }
        composition.update_internal_properties();
        Ok(Structure {
            name: name.to_owned(),
            priority,
            occupancy,
            composition,
            consider_partial_volume: false,
            adhere_to_deformation: false,
            vessel_kind: None,
        })
    }

    /// A structure that fills the whole grid with priority zero.
    pub fn background(name: &str, grid: Grid, composition: MolecularComposition) -> Result<Self> {
        Self::new(name, 0, Array3::ones(grid.shape()), composition)
    }

    pub fn with_vessel_kind(mut self, vessel_kind: Option<VesselKind>) -> Self {
        self.vessel_kind = vessel_kind;
        self
    }

    /// Sets the vessel kind from an optional free-form tag. Tags that do not name
    /// a vessel kind are ignored with a warning.
    pub fn with_vessel_tag(self, tag: Option<&str>) -> Self {
        let vessel_kind: Option<VesselKind> = match tag {
            Some(tag) => {
                let kind = VesselKind::from_tag(tag);
                if kind.is_none() {
                    warn!(
                        "structure '{}': vessel tag '{}' does not name a vessel kind and is ignored",
                        self.name, tag
                    );
                }
                kind
            }
            None => None,
        };
        self.with_vessel_kind(vessel_kind)
    }

    pub fn with_partial_volume(mut self, consider_partial_volume: bool) -> Self {
        self.consider_partial_volume = consider_partial_volume;
        self
    }

    pub fn with_deformation(mut self, adhere_to_deformation: bool) -> Self {
        self.adhere_to_deformation = adhere_to_deformation;
        self
    }

    /// The label this structure writes into the segmentation volume: the vessel
    /// class if the structure is a vessel, otherwise the class of its composition.
    pub fn segmentation(&self) -> Option<SegmentationClass> {
        match self.vessel_kind {
            Some(kind) => Some(kind.segmentation()),
            None => self.composition.segmentation(),
        }
    }
}

/// All structures of one simulation, ordered by ascending priority. Structures
/// with the same priority keep the order in which they were added.
#[derive(Debug, Clone, Default)]
pub struct Structures {
    structures: Vec<Structure>,
}

impl Structures {
    pub fn new(mut structures: Vec<Structure>) -> Self {
        // sort_by_key is stable
        structures.sort_by_key(|structure| structure.priority);
        Structures { structures }
    }

    pub fn push(&mut self, structure: Structure) {
        let position: usize = self
            .structures
            .iter()
            .position(|s| s.priority > structure.priority)
            .unwrap_or(self.structures.len());
        self.structures.insert(position, structure);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Structure> {
        self.structures.iter()
    }

    pub fn len(&self) -> usize {
        self.structures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }
}

impl<'a> IntoIterator for &'a Structures {
    type Item = &'a Structure;
    type IntoIter = std::slice::Iter<'a, Structure>;

    fn into_iter(self) -> Self::IntoIter {
        self.structures.iter()
    }
}
