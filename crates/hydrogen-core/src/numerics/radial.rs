use crate::common::constants::{RADIAL_DOMAIN_END, RADIAL_DOMAIN_START, RADIAL_SAMPLE_COUNT};
use crate::domain::HydrogenError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RadialDomainError {
    #[error("radial domain requires at least 2 points, got {actual}")]
    InsufficientPoints { actual: usize },
    #[error("radial domain bound '{field}' must be finite, got {value}")]
    NonFiniteBound { field: &'static str, value: f64 },
    #[error("radial domain must start at r >= 0, got {start}")]
    NegativeStart { start: f64 },
    #[error("radial domain end {end} must be greater than start {start}")]
    EmptyInterval { start: f64, end: f64 },
}

impl From<RadialDomainError> for HydrogenError {
    fn from(error: RadialDomainError) -> Self {
        HydrogenError::input_validation("INPUT.RADIAL_DOMAIN", error.to_string())
    }
}

/// Uniformly spaced radial samples, both endpoints included.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialDomain {
    points: Vec<f64>,
    start: f64,
    end: f64,
}

impl RadialDomain {
    /// The fixed sampling used for every plot: 10,000 points over `[0, 10]`.
    pub fn standard() -> Self {
        Self::from_valid_bounds(RADIAL_DOMAIN_START, RADIAL_DOMAIN_END, RADIAL_SAMPLE_COUNT)
    }

    pub fn linspace(start: f64, end: f64, point_count: usize) -> Result<Self, RadialDomainError> {
        if point_count < 2 {
            return Err(RadialDomainError::InsufficientPoints {
                actual: point_count,
            });
        }
        for (field, value) in [("start", start), ("end", end)] {
            if !value.is_finite() {
                return Err(RadialDomainError::NonFiniteBound { field, value });
            }
        }
        if start < 0.0 {
            return Err(RadialDomainError::NegativeStart { start });
        }
        if end <= start {
            return Err(RadialDomainError::EmptyInterval { start, end });
        }

        Ok(Self::from_valid_bounds(start, end, point_count))
    }

    fn from_valid_bounds(start: f64, end: f64, point_count: usize) -> Self {
        let step = (end - start) / (point_count - 1) as f64;
        let mut points: Vec<f64> = (0..point_count)
            .map(|index| start + index as f64 * step)
            .collect();
        if let Some(last) = points.last_mut() {
            *last = end;
        }

        Self { points, start, end }
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn step(&self) -> f64 {
        (self.end - self.start) / (self.points.len() - 1) as f64
    }
}

impl Default for RadialDomain {
    fn default() -> Self {
        Self::standard()
    }
}
