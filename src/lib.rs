pub mod backend;
pub mod compositor;
pub mod constants;
pub mod defaults;
pub mod error;
pub mod io;
pub mod molecules;
pub mod properties;
pub mod spectra;
pub mod structure;
pub mod utils;
pub mod volume;

pub use backend::{BackendKind, ParallelBackend, SerialBackend, VoxelBackend};
pub use compositor::{CompositedVolume, VolumeCompositor};
pub use error::{Error, Result};
pub use molecules::*;
pub use properties::*;
pub use spectra::{Spectrum, SpectrumLibrary};
pub use structure::*;
pub use volume::*;
