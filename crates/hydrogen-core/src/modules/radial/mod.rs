mod model;

pub use model::{RadialSeries, RadialSeriesSummary, RadialTable};

use crate::domain::ComputeResult;
use crate::numerics::{
    ClosedFormHydrogen, RadialDomain, RadialWavefunctionApi, RadialWavefunctionInput,
};
use tracing::debug;

/// Samples `R_nl` for every requested `l` over `domain`.
///
/// Series come back in the order of `angular_numbers`. An empty list gives an
/// empty table; the first oracle failure aborts the whole evaluation.
pub fn evaluate_radial_table<O>(
    oracle: &O,
    charge: u32,
    principal: u32,
    angular_numbers: &[u32],
    domain: RadialDomain,
) -> ComputeResult<RadialTable>
where
    O: RadialWavefunctionApi + ?Sized,
{
    let mut series = Vec::with_capacity(angular_numbers.len());
    for &angular in angular_numbers {
        debug!(
            charge,
            principal,
            angular,
            points = domain.point_count(),
            "evaluating radial series"
        );
        let values = domain
            .points()
            .iter()
            .map(|&radius| {
                oracle.radial_wavefunction(RadialWavefunctionInput::new(
                    principal, angular, charge, radius,
                ))
            })
            .collect::<ComputeResult<Vec<f64>>>()?;
        series.push(RadialSeries { angular, values });
    }

    Ok(RadialTable::new(charge, principal, domain, series))
}

/// Closed-form oracle over the standard `[0, 10]` domain.
pub fn evaluate_standard_radial_table(
    charge: u32,
    principal: u32,
    angular_numbers: &[u32],
) -> ComputeResult<RadialTable> {
    evaluate_radial_table(
        &ClosedFormHydrogen,
        charge,
        principal,
        angular_numbers,
        RadialDomain::standard(),
    )
}
