//! Error type of the tissue compositing library.
//!
//! All failures are fatal for the operation that raised them and are handed
//! back to the caller unchanged. Nothing in this crate retries.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Wavelength and absorption arrays of a spectrum differ in length.
    #[error("the shape of the wavelengths and the absorption coefficients of spectrum '{name}' did not match: {n_wavelengths} vs {n_values}")]
    SpectrumShapeMismatch {
        name: String,
        n_wavelengths: usize,
        n_values: usize,
    },

    #[error("spectrum '{0}' does not contain any data points")]
    EmptySpectrum(String),

    #[error("the wavelengths of spectrum '{0}' are not strictly ascending")]
    UnsortedWavelengths(String),

    #[error("spectrum '{name}' has an invalid wavelength grid: first {first}, last {last}, step {step}")]
    InvalidWavelengthGrid {
        name: String,
        first: u32,
        last: u32,
        step: u32,
    },

    #[error("no spectrum with the name '{0}' exists")]
    UnknownSpectrum(String),

    /// A spectrum was asked for a wavelength it does not cover.
    #[error("wavelength {wavelength} nm is outside of the range [{min}, {max}] nm of spectrum '{spectrum}'")]
    WavelengthOutOfRange {
        spectrum: String,
        wavelength: u32,
        min: u32,
        max: u32,
    },

    #[error("the given {field} is not a finite number: {value}")]
    NonNumericField { field: &'static str, value: f64 },

    #[error("unknown segmentation class '{0}'")]
    UnknownSegmentation(String),

    /// Occupancy masks have to stay in [0, 1].
    #[error("occupancy of structure '{structure}' contains the value {value} outside of [0, 1]")]
    InvalidOccupancy { structure: String, value: f64 },

    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    /// The occupancy mask of a structure does not have the shape of the global grid.
    #[error("occupancy of structure '{structure}' has shape {found:?}, but the grid is {expected:?}")]
    ShapeMismatch {
        structure: String,
        expected: [usize; 3],
        found: Vec<usize>,
    },

    #[error("failed to parse the configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to write the configuration: {0}")]
    ConfigSerialization(#[from] toml::ser::Error),

    #[error("failed to write the manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("npy error: {0}")]
    Npy(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
