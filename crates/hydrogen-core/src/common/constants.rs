//! Shared constants for the radial sampling domain and unit conversions.
//!
//! All radii are in Bohr radii (atomic units, `a0 = 1`).

pub const BOHR_ANGSTROM: f64 = 0.529_177_210_903_f64;

pub const RADIAL_DOMAIN_START: f64 = 0.0;
pub const RADIAL_DOMAIN_END: f64 = 10.0;
pub const RADIAL_SAMPLE_COUNT: usize = 10_000;

/// Largest `n` the binary accepts; a run evaluates `n` series of
/// `RADIAL_SAMPLE_COUNT` points, each an `O(n)` recurrence.
pub const MAX_PRINCIPAL_QUANTUM_NUMBER: u32 = 100;

/// `R_10(0)` for hydrogen: `2 Z^{3/2}` with `Z = 1`.
pub const HYDROGEN_GROUND_STATE_ORIGIN_VALUE: f64 = 2.0;
