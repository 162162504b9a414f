//! Radial wavefunctions of hydrogen-like ions: closed-form evaluation over a
//! fixed radial grid, radial probability density plots, and run reports.

pub mod common;
pub mod domain;
pub mod modules;
pub mod numerics;
