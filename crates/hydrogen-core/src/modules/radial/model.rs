use crate::domain::{ComputeResult, HydrogenError};
use crate::numerics::RadialDomain;
use crate::numerics::special::{TrapezoidInput, integrate_trapezoid};

/// Values of `R_nl` for one angular-momentum quantum number, aligned with the domain.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialSeries {
    pub angular: u32,
    pub values: Vec<f64>,
}

impl RadialSeries {
    /// `r^2 R(r)^2` at every sample.
    pub fn probability_density(&self, domain: &RadialDomain) -> Vec<f64> {
        domain
            .points()
            .iter()
            .zip(&self.values)
            .map(|(radius, value)| radius * radius * value * value)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadialTable {
    charge: u32,
    principal: u32,
    domain: RadialDomain,
    series: Vec<RadialSeries>,
}

impl RadialTable {
    pub(super) fn new(
        charge: u32,
        principal: u32,
        domain: RadialDomain,
        series: Vec<RadialSeries>,
    ) -> Self {
        Self {
            charge,
            principal,
            domain,
            series,
        }
    }

    pub fn charge(&self) -> u32 {
        self.charge
    }

    pub fn principal(&self) -> u32 {
        self.principal
    }

    pub fn domain(&self) -> &RadialDomain {
        &self.domain
    }

    pub fn series(&self) -> &[RadialSeries] {
        &self.series
    }

    pub fn series_for(&self, angular: u32) -> Option<&RadialSeries> {
        self.series.iter().find(|series| series.angular == angular)
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn summaries(&self) -> ComputeResult<Vec<RadialSeriesSummary>> {
        self.series
            .iter()
            .map(|series| RadialSeriesSummary::from_series(&self.domain, series))
            .collect()
    }
}

/// Density statistics of one series restricted to the sampled domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialSeriesSummary {
    pub angular: u32,
    pub peak_radius: f64,
    pub peak_density: f64,
    pub captured_probability: f64,
    pub mean_radius: f64,
}

impl RadialSeriesSummary {
    pub fn from_series(domain: &RadialDomain, series: &RadialSeries) -> ComputeResult<Self> {
        let density = series.probability_density(domain);
        let (peak_index, peak_density) = density
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |best, (index, value)| {
                if value > best.1 { (index, value) } else { best }
            });

        let captured_probability = integrate(domain.points(), &density, series.angular)?;
        let weighted: Vec<f64> = domain
            .points()
            .iter()
            .zip(&density)
            .map(|(radius, value)| radius * value)
            .collect();
        let first_moment = integrate(domain.points(), &weighted, series.angular)?;
        let mean_radius = if captured_probability > 0.0 {
            first_moment / captured_probability
        } else {
            0.0
        };

        Ok(Self {
            angular: series.angular,
            peak_radius: domain.points()[peak_index],
            peak_density,
            captured_probability,
            mean_radius,
        })
    }
}

fn integrate(abscissa: &[f64], ordinate: &[f64], angular: u32) -> ComputeResult<f64> {
    integrate_trapezoid(TrapezoidInput::new(abscissa, ordinate)).map_err(|error| {
        HydrogenError::computation(
            "RUN.RADIAL_SUMMARY",
            format!("failed to integrate density for l={}: {}", angular, error),
        )
    })
}
