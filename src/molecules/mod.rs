mod composition;
mod library;
mod molecule;
mod tissue;

pub use composition::{MolecularComposition, OpticalCoefficients};
pub use library::MoleculeLibrary;
pub use molecule::{Molecule, MoleculeBuilder};
pub use tissue::TissueLibrary;
