const RESCALE_THRESHOLD: f64 = 1.0e100;

/// Generalized Laguerre polynomial `L^alpha_degree(x)`.
///
/// Overflows to infinity for large `x`; use [`scaled_generalized_laguerre`]
/// when the result is combined with a decaying envelope.
pub fn generalized_laguerre(degree: u32, alpha: f64, x: f64) -> f64 {
    scaled_generalized_laguerre(degree, alpha, x).value()
}

/// `L^alpha_degree(x)` as `mantissa * exp(ln_scale)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledLaguerre {
    pub mantissa: f64,
    pub ln_scale: f64,
}

impl ScaledLaguerre {
    pub fn value(self) -> f64 {
        self.mantissa * self.ln_scale.exp()
    }

    /// `ln |L|`, or negative infinity at a root.
    pub fn ln_abs(self) -> f64 {
        self.mantissa.abs().ln() + self.ln_scale
    }

    pub fn signum(self) -> f64 {
        if self.mantissa == 0.0 {
            0.0
        } else {
            self.mantissa.signum()
        }
    }
}

/// Upward three-term recurrence
/// `k L_k = (2k - 1 + alpha - x) L_{k-1} - (k - 1 + alpha) L_{k-2}`,
/// with both running terms divided down whenever they pass `1e100`.
pub fn scaled_generalized_laguerre(degree: u32, alpha: f64, x: f64) -> ScaledLaguerre {
    let mut previous = 1.0;
    let mut ln_scale = 0.0;
    if degree == 0 {
        return ScaledLaguerre {
            mantissa: previous,
            ln_scale,
        };
    }

    let mut current = 1.0 + alpha - x;
    for k in 2..=degree {
        let k = f64::from(k);
        let next = ((2.0 * k - 1.0 + alpha - x) * current - (k - 1.0 + alpha) * previous) / k;
        previous = current;
        current = next;

        if current.abs() > RESCALE_THRESHOLD {
            previous /= RESCALE_THRESHOLD;
            current /= RESCALE_THRESHOLD;
            ln_scale += RESCALE_THRESHOLD.ln();
        }
    }

    ScaledLaguerre {
        mantissa: current,
        ln_scale,
    }
}

/// `ln(numerator! / denominator!)` without forming either factorial.
pub fn ln_factorial_ratio(numerator: u32, denominator: u32) -> f64 {
    if numerator >= denominator {
        ((denominator + 1)..=numerator)
            .map(|k| f64::from(k).ln())
            .sum()
    } else {
        -ln_factorial_ratio(denominator, numerator)
    }
}
