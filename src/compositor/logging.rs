use crate::properties::SegmentationClass;
use crate::structure::Grid;
use crate::utils::Timer;
use log::{info, warn};

pub fn compositing_init(grid: Grid, wavelength: u32, n_structures: usize, backend: &str) {
    info!("{:^80}", "");
    info!("{: ^80}", "Volume Compositing");
    info!("{:-^80}", "");
    info!("{: <25} {}", "grid (voxels):", grid);
    info!("{: <25} {} nm", "wavelength:", wavelength);
    info!("{: <25} {}", "structures:", n_structures);
    info!("{: <25} {}", "backend:", backend);
    if backend == "parallel" {
        info!("{: <25} {}", "threads:", rayon::current_num_threads());
    }
    info!("{:^80}", "");
    info!(
        "{: <5} {: <24} {: >8} {: >14} {: >12} {: >12}",
        "#", "Structure", "Prio.", "Segmentation", "Voxels", "Volume"
    );
    info!("{:-^80} ", "");
}

pub fn structure_iteration(
    index: usize,
    name: &str,
    priority: i32,
    segmentation: Option<SegmentationClass>,
    n_voxels: usize,
    added_volume: f64,
) {
    let segmentation: String = match segmentation {
        Some(class) => class.to_string(),
        None => String::from("-"),
    };
    info!(
        "{: >5} {: <24} {: >8} {: >14} {: >12} {: >12.3}",
        index + 1,
        name,
        priority,
        segmentation,
        n_voxels,
        added_volume
    );
}

pub fn compositing_end(timer: Timer, n_voxels: usize, n_uncovered: usize, min_coverage: f64) {
    info!("{:-^80} ", "");
    info!("{: ^80}", "Compositing finished");
    info!("{:^80} ", "");
    info!("{:<30} {:>12}", "voxels:", n_voxels);
    info!("{:<30} {:>12}", "incompletely covered voxels:", n_uncovered);
    info!("{:<30} {:>12.6}", "minimal coverage:", min_coverage);
    if n_uncovered > 0 {
        warn!(
            "{} voxels are not completely covered by any structure, their properties only \
             represent the covered fraction. Add a background structure to fill the volume.",
            n_uncovered
        );
    }
    info!("{:-<80} ", "");
    info!("{}", timer);
}
