pub mod integration;
pub mod laguerre;

pub use integration::{TrapezoidError, TrapezoidInput, integrate_trapezoid};
pub use laguerre::{
    ScaledLaguerre, generalized_laguerre, ln_factorial_ratio, scaled_generalized_laguerre,
};
