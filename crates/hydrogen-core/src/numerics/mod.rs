pub mod hydrogen;
pub mod radial;
pub mod special;

pub use hydrogen::{
    ClosedFormHydrogen, HydrogenRadialFunction, RadialWavefunctionApi, RadialWavefunctionInput,
    radial_wavefunction,
};
pub use radial::{RadialDomain, RadialDomainError};
