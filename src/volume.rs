use crate::properties::PropertyKind;
use crate::structure::Grid;
use ndarray::prelude::*;

/// The composited per-voxel tissue properties.
#[derive(Debug, Clone, PartialEq)]
pub struct TissuePropertyVolume {
    pub absorption_per_cm: Array3<f64>,
    pub scattering_per_cm: Array3<f64>,
    pub anisotropy: Array3<f64>,
    pub gruneisen_parameter: Array3<f64>,
    pub density: Array3<f64>,
    pub speed_of_sound: Array3<f64>,
    pub alpha_coefficient: Array3<f64>,
    pub segmentation: Array3<i32>,
}

impl TissuePropertyVolume {
    pub fn zeros(grid: Grid) -> Self {
        let shape: [usize; 3] = grid.shape();
        TissuePropertyVolume {
            absorption_per_cm: Array3::zeros(shape),
            scattering_per_cm: Array3::zeros(shape),
            anisotropy: Array3::zeros(shape),
            gruneisen_parameter: Array3::zeros(shape),
            density: Array3::zeros(shape),
            speed_of_sound: Array3::zeros(shape),
            alpha_coefficient: Array3::zeros(shape),
            segmentation: Array3::zeros(shape),
        }
    }

    pub fn shape(&self) -> &[usize] {
        self.absorption_per_cm.shape()
    }

    pub fn field(&self, kind: PropertyKind) -> ArrayView3<f64> {
        match kind {
            PropertyKind::AbsorptionPerCm => self.absorption_per_cm.view(),
            PropertyKind::ScatteringPerCm => self.scattering_per_cm.view(),
            PropertyKind::Anisotropy => self.anisotropy.view(),
            PropertyKind::GruneisenParameter => self.gruneisen_parameter.view(),
            PropertyKind::Density => self.density.view(),
            PropertyKind::SpeedOfSound => self.speed_of_sound.view(),
            PropertyKind::AlphaCoefficient => self.alpha_coefficient.view(),
        }
    }

    pub fn field_mut(&mut self, kind: PropertyKind) -> ArrayViewMut3<f64> {
        match kind {
            PropertyKind::AbsorptionPerCm => self.absorption_per_cm.view_mut(),
            PropertyKind::ScatteringPerCm => self.scattering_per_cm.view_mut(),
            PropertyKind::Anisotropy => self.anisotropy.view_mut(),
            PropertyKind::GruneisenParameter => self.gruneisen_parameter.view_mut(),
            PropertyKind::Density => self.density.view_mut(),
            PropertyKind::SpeedOfSound => self.speed_of_sound.view_mut(),
            PropertyKind::AlphaCoefficient => self.alpha_coefficient.view_mut(),
        }
    }

    pub fn segmentation(&self) -> ArrayView3<i32> {
        self.segmentation.view()
    }
}

/// The fraction every structure added to the x-z plane at the audit index,
/// in the order in which the structures were composited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditSlices {
    slices: Vec<(String, Array2<f64>)>,
}

impl AuditSlices {
    pub fn with_capacity(capacity: usize) -> Self {
        AuditSlices {
            slices: Vec::with_capacity(capacity),
        }
    }

    /// Stores a slice under an identifier generated from its position and the
    /// structure name.
    pub fn push(&mut self, name: &str, slice: Array2<f64>) -> &str {
        let identifier: String = format!("{:03}_{}", self.slices.len(), name);
        self.slices.push((identifier, slice));
        &self.slices[self.slices.len() - 1].0
    }

    pub fn get(&self, identifier: &str) -> Option<ArrayView2<f64>> {
        self.slices
            .iter()
            .find(|(id, _)| id == identifier)
            .map(|(_, slice)| slice.view())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ArrayView2<f64>)> {
        self.slices.iter().map(|(id, slice)| (id.as_str(), slice.view()))
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
