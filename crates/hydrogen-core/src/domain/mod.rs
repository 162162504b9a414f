pub mod errors;

pub use errors::{ComputeResult, HydrogenError, HydrogenErrorCategory};

use std::fmt::{Display, Formatter};

const SUBSHELL_LETTERS: [char; 20] = [
    's', 'p', 'd', 'f', 'g', 'h', 'i', 'k', 'l', 'm', 'n', 'o', 'q', 'r', 't', 'u', 'v', 'w', 'x',
    'y',
];

/// A bound state of a hydrogen-like ion: nuclear charge `Z` and quantum numbers `(n, l)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuantumState {
    charge: u32,
    principal: u32,
    angular: u32,
}

impl QuantumState {
    pub fn new(charge: u32, principal: u32, angular: u32) -> ComputeResult<Self> {
        if charge == 0 {
            return Err(HydrogenError::computation(
                "RUN.QUANTUM_STATE",
                "nuclear charge must be at least 1",
            ));
        }
        if principal == 0 {
            return Err(HydrogenError::computation(
                "RUN.QUANTUM_STATE",
                "principal quantum number must be at least 1",
            ));
        }
        if angular >= principal {
            return Err(HydrogenError::computation(
                "RUN.QUANTUM_STATE",
                format!(
                    "angular momentum quantum number l={} must be smaller than n={}",
                    angular, principal
                ),
            ));
        }

        Ok(Self {
            charge,
            principal,
            angular,
        })
    }

    pub const fn charge(&self) -> u32 {
        self.charge
    }

    pub const fn principal(&self) -> u32 {
        self.principal
    }

    pub const fn angular(&self) -> u32 {
        self.angular
    }

    /// Number of radial nodes, `n - l - 1`.
    pub const fn radial_nodes(&self) -> u32 {
        self.principal - self.angular - 1
    }

    /// Spectroscopic label such as `1s` or `3d`.
    pub fn orbital_label(&self) -> String {
        orbital_label(self.principal, self.angular)
    }
}

impl Display for QuantumState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Z={} {}", self.charge, self.orbital_label())
    }
}

/// Valid angular-momentum quantum numbers for shell `n`: `[0, 1, ..., n-1]`.
///
/// `n = 0` yields an empty list.
pub fn angular_momentum_numbers(principal: u32) -> Vec<u32> {
    (0..principal).collect()
}

pub fn orbital_label(principal: u32, angular: u32) -> String {
    match SUBSHELL_LETTERS.get(angular as usize) {
        Some(letter) => format!("{}{}", principal, letter),
        None => format!("{}[l={}]", principal, angular),
    }
}
