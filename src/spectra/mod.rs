mod library;
mod spectrum;
mod tabulated;

pub use library::*;
pub use spectrum::Spectrum;
