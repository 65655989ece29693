mod imprint;
mod input;
mod output;
pub(crate) mod settings;

pub use imprint::write_header;
pub use input::{build_structures, read_input, read_occupancy};
pub use output::{write_output, Manifest};
pub use settings::{Configuration, MoleculeConfig, StructureConfig, VolumeConfig};
