//! Elementwise voxel operations of the compositing pass.
//!
//! The compositor only talks to the [`VoxelBackend`] trait. Every operation is
//! independent per voxel, so the backends differ only in how the voxels are
//! traversed, never in the result.

use ndarray::prelude::*;
use ndarray::Zip;
use serde::{Deserialize, Serialize};
use std::fmt;

pub trait VoxelBackend: Send + Sync {
    fn name(&self) -> &'static str;

    /// Computes the fraction of every voxel that the current structure is allowed to
    /// fill, given its occupancy and the fraction that is already taken. A voxel is
    /// eligible if the structure occupies it and it is not yet completely filled.
    fn added_fraction(
        &self,
        occupancy: ArrayView3<f64>,
        global_occupancy: ArrayView3<f64>,
        added: ArrayViewMut3<f64>,
        eligible: ArrayViewMut3<bool>,
    );

    /// Assigns `label` to every eligible voxel where `added` exceeds the largest
    /// contribution seen so far, and records the new maximum.
    fn update_segmentation(
        &self,
        added: ArrayView3<f64>,
        eligible: ArrayView3<bool>,
        max_contribution: ArrayViewMut3<f64>,
        segmentation: ArrayViewMut3<i32>,
        label: i32,
    );

    /// `field += added * value`
    fn accumulate(&self, field: ArrayViewMut3<f64>, added: ArrayView3<f64>, value: f64);

    /// `global_occupancy += added`, capped at one.
    fn commit(&self, global_occupancy: ArrayViewMut3<f64>, added: ArrayView3<f64>);
}

#[inline]
fn added_kernel(added: &mut f64, eligible: &mut bool, occupancy: f64, global: f64) {
    let is_eligible: bool = occupancy > 0.0 && global < 1.0;
    *eligible = is_eligible;
    *added = if !is_eligible {
        0.0
    } else if global + occupancy <= 1.0 {
        occupancy
    } else {
        (1.0 - global).min(occupancy)
    };
}

#[inline]
fn segmentation_kernel(max_contribution: &mut f64, segmentation: &mut i32, added: f64, eligible: bool, label: i32) {
    if eligible && added > *max_contribution {
        *segmentation = label;
        *max_contribution = added;
    }
}

#[inline]
fn commit_kernel(global: &mut f64, added: f64) {
    *global = (*global + added).min(1.0);
}

/// Traverses the voxels on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialBackend;

impl VoxelBackend for SerialBackend {
    fn name(&self) -> &'static str {
        "serial"
    }

    fn added_fraction(
        &self,
        occupancy: ArrayView3<f64>,
        global_occupancy: ArrayView3<f64>,
        added: ArrayViewMut3<f64>,
        eligible: ArrayViewMut3<bool>,
    ) {
        Zip::from(added)
            .and(eligible)
            .and(occupancy)
            .and(global_occupancy)
            .for_each(|a, e, &o, &g| added_kernel(a, e, o, g));
    }

    fn update_segmentation(
        &self,
        added: ArrayView3<f64>,
        eligible: ArrayView3<bool>,
        max_contribution: ArrayViewMut3<f64>,
        segmentation: ArrayViewMut3<i32>,
        label: i32,
    ) {
        Zip::from(max_contribution)
            .and(segmentation)
            .and(added)
            .and(eligible)
            .for_each(|m, s, &a, &e| segmentation_kernel(m, s, a, e, label));
    }

    fn accumulate(&self, field: ArrayViewMut3<f64>, added: ArrayView3<f64>, value: f64) {
        Zip::from(field).and(added).for_each(|f, &a| *f += a * value);
    }

    fn commit(&self, global_occupancy: ArrayViewMut3<f64>, added: ArrayView3<f64>) {
        Zip::from(global_occupancy).and(added).for_each(|g, &a| commit_kernel(g, a));
    }
}

/// Splits the voxels over the rayon thread pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelBackend;

impl VoxelBackend for ParallelBackend {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn added_fraction(
        &self,
        occupancy: ArrayView3<f64>,
        global_occupancy: ArrayView3<f64>,
        added: ArrayViewMut3<f64>,
        eligible: ArrayViewMut3<bool>,
    ) {
        Zip::from(added)
            .and(eligible)
            .and(occupancy)
            .and(global_occupancy)
            .par_for_each(|a, e, &o, &g| added_kernel(a, e, o, g));
    }

    fn update_segmentation(
        &self,
        added: ArrayView3<f64>,
        eligible: ArrayView3<bool>,
        max_contribution: ArrayViewMut3<f64>,
        segmentation: ArrayViewMut3<i32>,
        label: i32,
    ) {
        Zip::from(max_contribution)
            .and(segmentation)
            .and(added)
            .and(eligible)
            .par_for_each(|m, s, &a, &e| segmentation_kernel(m, s, a, e, label));
    }

    fn accumulate(&self, field: ArrayViewMut3<f64>, added: ArrayView3<f64>, value: f64) {
        Zip::from(field).and(added).par_for_each(|f, &a| *f += a * value);
    }

    fn commit(&self, global_occupancy: ArrayViewMut3<f64>, added: ArrayView3<f64>) {
        Zip::from(global_occupancy).and(added).par_for_each(|g, &a| commit_kernel(g, a));
    }
}

/// Selects the backend once from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Serial,
    Parallel,
}

impl BackendKind {
    pub fn backend(self) -> Box<dyn VoxelBackend> {
        match self {
            BackendKind::Serial => Box::new(SerialBackend),
            BackendKind::Parallel => Box::new(ParallelBackend),
        }
    }
}

impl Default for BackendKind {
    fn default() -> Self {
        BackendKind::Parallel
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.backend().name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pattern(shape: (usize, usize, usize), seed: usize) -> Array3<f64> {
        Array3::from_shape_fn(shape, |(i, j, k)| ((i * 7 + j * 13 + k * 3 + seed) % 11) as f64 / 10.0)
    }

    #[test]
    fn added_fraction_is_clipped_to_the_remaining_capacity() {
        let occupancy: Array3<f64> = array![[[0.0, 0.3, 0.6, 1.0]]];
        let global: Array3<f64> = array![[[0.5, 0.5, 0.6, 1.0]]];
        let mut added: Array3<f64> = Array3::zeros((1, 1, 4));
        let mut eligible: Array3<bool> = Array3::from_elem((1, 1, 4), false);
        SerialBackend.added_fraction(occupancy.view(), global.view(), added.view_mut(), eligible.view_mut());
        assert_eq!(eligible, array![[[false, true, true, false]]]);
        assert_relative_eq!(added[[0, 0, 0]], 0.0);
        assert_relative_eq!(added[[0, 0, 1]], 0.3);
        assert_relative_eq!(added[[0, 0, 2]], 0.4, epsilon = 1e-15);
        assert_relative_eq!(added[[0, 0, 3]], 0.0);
    }

    #[test]
    fn segmentation_keeps_the_largest_contribution() {
        let mut max_contribution: Array3<f64> = array![[[0.6, 0.2, 0.0]]];
        let mut segmentation: Array3<i32> = array![[[1, 1, 0]]];
        let added: Array3<f64> = array![[[0.4, 0.4, 0.0]]];
        let eligible: Array3<bool> = array![[[true, true, false]]];
        SerialBackend.update_segmentation(
            added.view(),
            eligible.view(),
            max_contribution.view_mut(),
            segmentation.view_mut(),
            3,
        );
        assert_eq!(segmentation, array![[[1, 3, 0]]]);
        assert_eq!(max_contribution, array![[[0.6, 0.4, 0.0]]]);
    }

    #[test]
    fn commit_never_exceeds_one() {
        let mut global: Array3<f64> = array![[[0.1, 0.7, 0.0]]];
        let added: Array3<f64> = array![[[0.9, 0.3, 0.25]]];
        SerialBackend.commit(global.view_mut(), added.view());
        assert!(global.iter().all(|g| *g <= 1.0));
        assert_relative_eq!(global[[0, 0, 2]], 0.25);
    }

    #[test]
    fn serial_and_parallel_backends_agree() {
        let shape = (9, 8, 7);
        let occupancy = pattern(shape, 0);
        let global = pattern(shape, 5).mapv(|g| g * 0.5);
        let backends: [Box<dyn VoxelBackend>; 2] = [BackendKind::Serial.backend(), BackendKind::Parallel.backend()];
        let mut results: Vec<(Array3<f64>, Array3<bool>, Array3<f64>, Array3<i32>, Array3<f64>)> = Vec::new();
        for backend in backends.iter() {
            let mut added: Array3<f64> = Array3::zeros(shape);
            let mut eligible: Array3<bool> = Array3::from_elem(shape, false);
            let mut max_contribution: Array3<f64> = pattern(shape, 2).mapv(|m| m * 0.3);
            let mut segmentation: Array3<i32> = Array3::zeros(shape);
            let mut field: Array3<f64> = Array3::zeros(shape);
            let mut committed: Array3<f64> = global.clone();
            backend.added_fraction(occupancy.view(), global.view(), added.view_mut(), eligible.view_mut());
            backend.update_segmentation(
                added.view(),
                eligible.view(),
                max_contribution.view_mut(),
                segmentation.view_mut(),
                7,
            );
            backend.accumulate(field.view_mut(), added.view(), 2.5);
            backend.commit(committed.view_mut(), added.view());
            results.push((added, eligible, field, segmentation, committed));
        }
        assert_eq!(results[0], results[1]);
    }
}
