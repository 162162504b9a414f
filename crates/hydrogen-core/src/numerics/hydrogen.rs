//! Closed-form radial wavefunctions of hydrogen-like ions.
//!
//! In atomic units with `rho = 2 Z r / n`:
//!
//! ```text
//! R_nl(r) = sqrt((2Z/n)^3 (n-l-1)! / (2n (n+l)!)) * exp(-rho/2) * rho^l * L^(2l+1)_(n-l-1)(rho)
//! ```
//!
//! Callers go through [`RadialWavefunctionApi`] so the evaluator can run
//! against another engine (or a stub in tests).

use super::special::{ln_factorial_ratio, scaled_generalized_laguerre};
use crate::domain::{ComputeResult, HydrogenError, QuantumState};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialWavefunctionInput {
    pub principal: u32,
    pub angular: u32,
    pub charge: u32,
    pub radius: f64,
}

impl RadialWavefunctionInput {
    pub fn new(principal: u32, angular: u32, charge: u32, radius: f64) -> Self {
        Self {
            principal,
            angular,
            charge,
            radius,
        }
    }
}

pub trait RadialWavefunctionApi {
    fn radial_wavefunction(&self, input: RadialWavefunctionInput) -> ComputeResult<f64>;
}

/// Analytic oracle backed by [`HydrogenRadialFunction`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClosedFormHydrogen;

impl RadialWavefunctionApi for ClosedFormHydrogen {
    fn radial_wavefunction(&self, input: RadialWavefunctionInput) -> ComputeResult<f64> {
        radial_wavefunction(input)
    }
}

pub fn radial_wavefunction(input: RadialWavefunctionInput) -> ComputeResult<f64> {
    HydrogenRadialFunction::for_quantum_numbers(input.charge, input.principal, input.angular)?
        .evaluate(input.radius)
}

/// `R_nl` for one state with its normalization folded in once.
///
/// `N rho^l exp(-rho/2) L(rho)` is summed in log space and exponentiated once,
/// so neither `1/(n+l)!` nor the polynomial over- or underflows on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HydrogenRadialFunction {
    state: QuantumState,
    scale: f64,
    ln_normalization: f64,
}

impl HydrogenRadialFunction {
    pub fn new(state: QuantumState) -> Self {
        let principal = f64::from(state.principal());
        let scale = 2.0 * f64::from(state.charge()) / principal;
        let ln_normalization = 0.5
            * (3.0 * scale.ln()
                + ln_factorial_ratio(state.radial_nodes(), state.principal() + state.angular())
                - (2.0 * principal).ln());

        Self {
            state,
            scale,
            ln_normalization,
        }
    }

    pub fn for_quantum_numbers(charge: u32, principal: u32, angular: u32) -> ComputeResult<Self> {
        QuantumState::new(charge, principal, angular)
            .map(Self::new)
            .map_err(|error| {
                HydrogenError::computation(
                    "RUN.RADIAL_ORACLE",
                    format!(
                        "no closed-form radial wavefunction for n={}, l={}, Z={}: {}",
                        principal,
                        angular,
                        charge,
                        error.message()
                    ),
                )
            })
    }

    pub fn state(&self) -> QuantumState {
        self.state
    }

    pub fn evaluate(&self, radius: f64) -> ComputeResult<f64> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(HydrogenError::computation(
                "RUN.RADIAL_ORACLE",
                format!(
                    "radial wavefunction {} requires a finite radius r >= 0, got {}",
                    self.state, radius
                ),
            ));
        }

        let rho = self.scale * radius;
        let angular = self.state.angular();
        if rho == 0.0 && angular > 0 {
            return Ok(0.0);
        }

        let laguerre = scaled_generalized_laguerre(
            self.state.radial_nodes(),
            f64::from(2 * angular + 1),
            rho,
        );
        if laguerre.signum() == 0.0 {
            return Ok(0.0);
        }
        let power = if angular == 0 {
            0.0
        } else {
            f64::from(angular) * rho.ln()
        };
        let ln_magnitude = self.ln_normalization + power - 0.5 * rho + laguerre.ln_abs();
        let value = laguerre.signum() * ln_magnitude.exp();

        if !value.is_finite() {
            return Err(HydrogenError::computation(
                "RUN.RADIAL_ORACLE",
                format!(
                    "radial wavefunction {} is not finite at r={}",
                    self.state, radius
                ),
            ));
        }

        Ok(value)
    }

    /// Analytic expectation value `<r> = (3n^2 - l(l+1)) / (2Z)`.
    pub fn mean_radius(&self) -> f64 {
        let principal = f64::from(self.state.principal());
        let angular = f64::from(self.state.angular());
        (3.0 * principal * principal - angular * (angular + 1.0))
            / (2.0 * f64::from(self.state.charge()))
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ClosedFormHydrogen, HydrogenRadialFunction, RadialWavefunctionApi, RadialWavefunctionInput,
    };
    use crate::domain::HydrogenErrorCategory;
    use crate::numerics::RadialDomain;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 1.0e-12 * expected.abs().max(1.0),
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn ground_state_matches_closed_form() {
        let oracle = ClosedFormHydrogen;
        for radius in [0.0_f64, 0.3, 1.0, 4.2] {
            let value = oracle
                .radial_wavefunction(RadialWavefunctionInput::new(1, 0, 1, radius))
                .expect("1s should evaluate");
            assert_close(value, 2.0 * (-radius).exp());
        }
    }

    #[test]
    fn ground_state_origin_scales_with_charge() {
        let function =
            HydrogenRadialFunction::for_quantum_numbers(4, 1, 0).expect("state should be valid");
        assert_close(function.evaluate(0.0).expect("origin"), 2.0 * 8.0);
    }

    #[test]
    fn second_shell_matches_closed_forms() {
        let two_s = HydrogenRadialFunction::for_quantum_numbers(1, 2, 0).expect("2s");
        let two_p = HydrogenRadialFunction::for_quantum_numbers(1, 2, 1).expect("2p");

        for radius in [0.0_f64, 0.5, 2.0, 3.7, 9.0] {
            let decay = (-0.5 * radius).exp();
            assert_close(
                two_s.evaluate(radius).expect("2s value"),
                (2.0 - radius) * decay / (2.0 * 2.0_f64.sqrt()),
            );
            assert_close(
                two_p.evaluate(radius).expect("2p value"),
                radius * decay / (2.0 * 6.0_f64.sqrt()),
            );
        }
    }

    #[test]
    fn non_physical_states_fail_with_oracle_error() {
        for (principal, angular, charge) in [(0, 0, 1), (2, 2, 1), (3, 0, 0)] {
            let error = ClosedFormHydrogen
                .radial_wavefunction(RadialWavefunctionInput::new(principal, angular, charge, 1.0))
                .expect_err("state should be rejected");
            assert_eq!(error.category(), HydrogenErrorCategory::ComputationError);
            assert_eq!(error.code(), "RUN.RADIAL_ORACLE");
        }
    }

    #[test]
    fn high_shells_stay_finite_near_the_nucleus() {
        let function = HydrogenRadialFunction::for_quantum_numbers(1, 120, 0).expect("120s");
        let origin = function.evaluate(0.0).expect("origin should be finite");
        assert!(origin > 0.0);

        let outer = HydrogenRadialFunction::for_quantum_numbers(1, 120, 119).expect("l=119");
        assert_eq!(outer.evaluate(0.0).expect("origin"), 0.0);
        assert!(outer.evaluate(5.0).expect("inner region").abs() < 1.0e-100);
    }

    #[test]
    fn extreme_charges_stay_finite_across_the_standard_domain() {
        let domain = RadialDomain::standard();
        for (charge, principal) in [(100_000, 300), (1_000_000, 200)] {
            let function = HydrogenRadialFunction::for_quantum_numbers(charge, principal, 0)
                .expect("state should be valid");
            for &radius in domain.points() {
                let value = function
                    .evaluate(radius)
                    .unwrap_or_else(|error| panic!("Z={charge} n={principal}: {error}"));
                assert!(value.is_finite());
                if radius >= 5.0 {
                    assert!(value.abs() < 1.0e-100, "Z={charge} r={radius}: {value}");
                }
            }
        }
    }

    #[test]
    fn negative_radius_is_rejected() {
        let function = HydrogenRadialFunction::for_quantum_numbers(1, 1, 0).expect("1s");
        assert!(function.evaluate(-0.1).is_err());
        assert!(function.evaluate(f64::NAN).is_err());
    }

    #[test]
    fn mean_radius_matches_textbook_values() {
        let one_s = HydrogenRadialFunction::for_quantum_numbers(1, 1, 0).expect("1s");
        let three_d = HydrogenRadialFunction::for_quantum_numbers(3, 3, 2).expect("3d");
        assert_close(one_s.mean_radius(), 1.5);
        assert_close(three_d.mean_radius(), 3.5);
        assert_eq!(three_d.state().orbital_label(), "3d");
    }
}
