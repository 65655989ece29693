// SCATTERING MODEL
// reference wavelength in nm at which mus500 is tabulated
pub const REFERENCE_WAVELENGTH: f64 = 500.0;
// exponent of the Rayleigh term of the empirical scattering model
// mus(w) = mus500 * (f_ray * (w/500)^RAYLEIGH_EXPONENT + (1 - f_ray) * (w/500)^(-b_mie))
// NOTE: the value is kept exactly as it was used for all existing parametrizations
pub const RAYLEIGH_EXPONENT: f64 = 1.0e-4;

// OXYGENATION
// below this total hemoglobin fraction the oxygenation is undefined
pub const HEMOGLOBIN_FRACTION_EPS: f64 = 1.0e-10;

// SPECTRA
// absorption coefficient of the "zero" constant absorber in cm^-1
pub const CONSTANT_ABSORBER_ZERO_VALUE: f64 = 1.0e-10;
// wavelength range in nm covered by the constant absorbers
pub const CONSTANT_ABSORBER_RANGE: (u32, u32) = (450, 1000);
