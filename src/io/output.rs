use crate::compositor::CompositedVolume;
use crate::defaults::STRUCT_FILLING_DIRECTORY;
use crate::error::{Error, Result};
use crate::properties::PropertyKind;
use crate::structure::Grid;
use itertools::Itertools;
use log::info;
use ndarray_npy::write_npy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Describes the files of one compositing run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Manifest {
    pub version: String,
    pub created: String,
    pub grid: Grid,
    pub wavelength: u32,
    pub fields: Vec<String>,
    pub segmentation: String,
    pub coverage: String,
    pub audit_slices: Vec<String>,
    pub incompletely_covered_voxels: usize,
}

fn npy_file(name: &str) -> String {
    format!("{}.npy", name)
}

fn npy_error(path: &Path, err: impl std::fmt::Display) -> Error {
    Error::Npy(format!("{}: {}", path.display(), err))
}

/// Writes every property field, the segmentation, the coverage and the audit slices
/// as `.npy` files to `directory`, together with a `manifest.json`.
pub fn write_output(directory: &Path, result: &CompositedVolume, grid: Grid, wavelength: u32) -> Result<Manifest> {
    let filling_directory: PathBuf = directory.join(STRUCT_FILLING_DIRECTORY);
    fs::create_dir_all(&filling_directory)?;

    let mut fields: Vec<String> = Vec::with_capacity(PropertyKind::ALL.len());
    for kind in PropertyKind::ALL.iter() {
        let file: String = npy_file(kind.name());
        let path: PathBuf = directory.join(&file);
        write_npy(&path, &result.volume.field(*kind)).map_err(|err| npy_error(&path, err))?;
        fields.push(file);
    }

    let segmentation: String = npy_file("segmentation");
    let path: PathBuf = directory.join(&segmentation);
    write_npy(&path, &result.volume.segmentation()).map_err(|err| npy_error(&path, err))?;

    let coverage: String = npy_file("coverage");
    let path: PathBuf = directory.join(&coverage);
    write_npy(&path, &result.coverage).map_err(|err| npy_error(&path, err))?;

    let mut audit_slices: Vec<String> = Vec::with_capacity(result.audit_slices.len());
    for (identifier, slice) in result.audit_slices.iter() {
        let file: String = format!("{}/{}", STRUCT_FILLING_DIRECTORY, npy_file(identifier));
        let path: PathBuf = directory.join(&file);
        write_npy(&path, &slice).map_err(|err| npy_error(&path, err))?;
        audit_slices.push(file);
    }

    let manifest = Manifest {
        version: String::from(clap::crate_version!()),
        created: chrono::Local::now().to_rfc3339(),
        grid,
        wavelength,
        fields,
        segmentation,
        coverage,
        audit_slices,
        incompletely_covered_voxels: result.coverage.iter().filter(|g| **g < 1.0).count(),
    };
    fs::write(directory.join("manifest.json"), serde_json::to_string_pretty(&manifest)?)?;

    info!("{: <25} {}", "output directory:", directory.display());
    info!("{: <25} {}", "property fields:", manifest.fields.iter().join(", "));
    info!("{: <25} {}", "structure fillings:", manifest.audit_slices.len());
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compositor::VolumeCompositor;
    use crate::molecules::TissueLibrary;
    use crate::structure::{Structure, Structures};
    use ndarray::prelude::*;
    use ndarray_npy::read_npy;
    use tempfile::tempdir;

    #[test]
    fn all_fields_and_slices_are_written() {
        let scratch = tempdir().unwrap();
        let directory = scratch.path().join("run");
        let grid = Grid::new(3, 4, 2).unwrap();
        let background =
            Structure::background("background", grid, TissueLibrary::constant(0.2, 20.0, 0.8).unwrap()).unwrap();
        let result = VolumeCompositor::new(grid, 800)
            .composite(&Structures::new(vec![background]))
            .unwrap();

        let manifest = write_output(&directory, &result, grid, 800).unwrap();
        assert_eq!(manifest.fields.len(), 7);
        assert_eq!(manifest.audit_slices, vec![String::from("struct_filling/000_background.npy")]);
        assert_eq!(manifest.incompletely_covered_voxels, 0);

        let mua: Array3<f64> = read_npy(directory.join("mua.npy")).unwrap();
        assert_eq!(mua, result.volume.absorption_per_cm);
        let segmentation: Array3<i32> = read_npy(directory.join("segmentation.npy")).unwrap();
        assert_eq!(segmentation, result.volume.segmentation);
        let slice: Array2<f64> = read_npy(directory.join(&manifest.audit_slices[0])).unwrap();
        assert_eq!(slice.shape(), &[3, 2]);

        let json: String = fs::read_to_string(directory.join("manifest.json")).unwrap();
        let parsed: Manifest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, manifest);
    }
}
