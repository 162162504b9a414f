use crate::modules::radial::RadialTable;

#[derive(Debug, Clone, PartialEq)]
pub struct DensityCurve {
    pub angular: u32,
    pub label: Option<String>,
    pub points: Vec<(f64, f64)>,
}

/// Everything needed to draw the radial probability chart, independent of any backend.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityPlot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub curves: Vec<DensityCurve>,
    pub show_legend: bool,
}

impl DensityPlot {
    /// One `r^2 R^2` curve per series. A lone series is drawn unlabeled and
    /// without a legend; otherwise each curve is labeled `l = {l}`.
    pub fn from_table(table: &RadialTable) -> Self {
        let labeled = table.len() > 1;
        let curves = table
            .series()
            .iter()
            .map(|series| DensityCurve {
                angular: series.angular,
                label: labeled.then(|| format!("l = {}", series.angular)),
                points: table
                    .domain()
                    .points()
                    .iter()
                    .copied()
                    .zip(series.probability_density(table.domain()))
                    .collect(),
            })
            .collect();

        Self {
            title: format!("Hydrogen Wavefunction, n={}", table.principal()),
            x_label: "r".to_string(),
            y_label: "Probability".to_string(),
            curves,
            show_legend: labeled,
        }
    }

    pub fn x_range(&self) -> Option<(f64, f64)> {
        let mut points = self.curves.iter().flat_map(|curve| curve.points.iter());
        let first = points.next()?;
        Some(points.fold((first.0, first.0), |(low, high), (x, _)| {
            (low.min(*x), high.max(*x))
        }))
    }

    pub fn y_max(&self) -> Option<f64> {
        self.curves
            .iter()
            .flat_map(|curve| curve.points.iter().map(|(_, y)| *y))
            .filter(|value| value.is_finite())
            .reduce(f64::max)
    }
}
