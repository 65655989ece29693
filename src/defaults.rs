// MOLECULE
// values used for every molecule field that is not set explicitly
pub const VOLUME_FRACTION: f64 = 0.0;
pub const MUS500: f64 = 1.0e-20;
pub const F_RAY: f64 = 0.0;
pub const B_MIE: f64 = 0.0;
pub const ANISOTROPY: f64 = 0.0;
pub const GRUNEISEN_PARAMETER: f64 = 1.0;
pub const DENSITY: f64 = 0.0;
pub const SPEED_OF_SOUND: f64 = 0.0;
pub const ALPHA_COEFFICIENT: f64 = 0.0;
// spectrum that is used if a molecule does not specify one
pub const SPECTRUM: &str = "Constant Absorber (0)";

// STRUCTURES
pub const PRIORITY: i32 = 0;
pub const CONSIDER_PARTIAL_VOLUME: bool = false;
pub const ADHERE_TO_DEFORMATION: bool = false;

// VOLUME
// extent of the simulation volume in mm
pub const DIM_VOLUME_MM: f64 = 20.0;
// edge length of a voxel in mm
pub const SPACING_MM: f64 = 1.0;
// wavelength in nm at which the optical properties are evaluated
pub const WAVELENGTH: u32 = 800;
pub const OUTPUT_DIRECTORY: &str = "tissuemix_output";
// sub-directory of the output directory that holds the per-structure fillings
pub const STRUCT_FILLING_DIRECTORY: &str = "struct_filling";

// config file
pub const CONFIG_FILE_NAME: &str = "tissuemix.toml";
