use crate::error::{Error, Result};

/// An absorption spectrum over wavelength for a particular absorber.
///
/// On construction the tabulated values are linearly interpolated onto every
/// integer wavelength between the smallest and the largest given wavelength,
/// so that lookups are a plain index into that table.
#[derive(Debug, Clone)]
pub struct Spectrum {
    name: String,
    wavelengths: Vec<u32>,
    absorption_per_cm: Vec<f64>,
    min_wavelength: u32,
    max_wavelength: u32,
    table: Vec<f64>,
}

impl Spectrum {
    pub fn new(name: &str, wavelengths: Vec<u32>, absorption_per_cm: Vec<f64>) -> Result<Self> {
        if wavelengths.len() != absorption_per_cm.len() {
            return Err(Error::SpectrumShapeMismatch {
                name: name.to_owned(),
                n_wavelengths: wavelengths.len(),
                n_values: absorption_per_cm.len(),
            });
        }
        if wavelengths.is_empty() {
            return Err(Error::EmptySpectrum(name.to_owned()));
        }
        if wavelengths.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Error::UnsortedWavelengths(name.to_owned()));
        }

        let min_wavelength: u32 = wavelengths[0];
        let max_wavelength: u32 = wavelengths[wavelengths.len() - 1];
        let table: Vec<f64> = resample(&wavelengths, &absorption_per_cm);

        Ok(Self {
            name: name.to_owned(),
            wavelengths,
            absorption_per_cm,
            min_wavelength,
            max_wavelength,
            table,
        })
    }

    /// Builds a spectrum from a tabulated grid `(first, last, step)`.
    pub fn from_grid(name: &str, grid: (u32, u32, u32), absorption_per_cm: &[f64]) -> Result<Self> {
        let (first, last, step) = grid;
        if step == 0 || first > last {
            return Err(Error::InvalidWavelengthGrid {
                name: name.to_owned(),
                first,
                last,
                step,
            });
        }
        let wavelengths: Vec<u32> = (first..=last).step_by(step as usize).collect();
        Self::new(name, wavelengths, absorption_per_cm.to_vec())
    }

    /// Constructs a spectrum from data that is known to be well-formed (the
    /// tabulated spectra shipped with this crate). No validation is performed.
    pub(crate) fn tabulated(name: &str, grid: (u32, u32, u32), absorption_per_cm: &[f64]) -> Self {
        let (first, last, step) = grid;
        let wavelengths: Vec<u32> = (first..=last).step_by(step as usize).collect();
        let table: Vec<f64> = resample(&wavelengths, absorption_per_cm);
        Self {
            name: name.to_owned(),
            wavelengths,
            absorption_per_cm: absorption_per_cm.to_vec(),
            min_wavelength: first,
            max_wavelength: last,
            table,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min_wavelength(&self) -> u32 {
        self.min_wavelength
    }

    pub fn max_wavelength(&self) -> u32 {
        self.max_wavelength
    }

    /// The wavelengths and absorption coefficients the spectrum was built from.
    pub fn absorption_over_wavelength(&self) -> (&[u32], &[f64]) {
        (&self.wavelengths, &self.absorption_per_cm)
    }

    /// Returns the linearly interpolated absorption coefficient [cm^-1] at the given
    /// wavelength [nm]. Wavelengths outside of the tabulated range are rejected.
    pub fn absorption_at(&self, wavelength: u32) -> Result<f64> {
        if wavelength < self.min_wavelength || wavelength > self.max_wavelength {
            return Err(Error::WavelengthOutOfRange {
                spectrum: self.name.clone(),
                wavelength,
                min: self.min_wavelength,
                max: self.max_wavelength,
            });
        }
        Ok(self.table[(wavelength - self.min_wavelength) as usize])
    }
}

impl PartialEq for Spectrum {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.wavelengths == other.wavelengths
            && self.absorption_per_cm == other.absorption_per_cm
    }
}

/// Piecewise linear interpolation of (x, y) onto all integers in [x_0, x_n].
/// The nodes are reproduced exactly.
fn resample(x: &[u32], y: &[f64]) -> Vec<f64> {
    let first: u32 = x[0];
    let last: u32 = x[x.len() - 1];
    let mut table: Vec<f64> = Vec::with_capacity((last - first + 1) as usize);
    let mut segment: usize = 0;
    for w in first..=last {
        while segment + 1 < x.len() - 1 && w > x[segment + 1] {
            segment += 1;
        }
        if x.len() == 1 || w == x[segment] {
            table.push(y[segment]);
            continue;
        }
        let (x0, x1) = (x[segment] as f64, x[segment + 1] as f64);
        let (y0, y1) = (y[segment], y[segment + 1]);
        if w == x[segment + 1] {
            table.push(y1);
        } else {
            table.push(y0 + (y1 - y0) * (w as f64 - x0) / (x1 - x0));
        }
    }
    table
}
