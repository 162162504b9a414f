//! Radial probability density chart: a backend-free model plus a `plotters` renderer.

mod model;
mod render;

pub use model::{DensityCurve, DensityPlot};
pub use render::render_density_plot;

use crate::domain::HydrogenError;
use std::path::{Path, PathBuf};

/// 15 x 9 inch figure at 100 dpi.
pub const DEFAULT_PLOT_SIZE: (u32, u32) = (1500, 900);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotFormat {
    Png,
    Svg,
}

impl PlotFormat {
    pub fn from_path(path: &Path) -> Result<Self, PlotRenderError> {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("svg") => Ok(Self::Svg),
            _ => Err(PlotRenderError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotTarget {
    pub path: PathBuf,
    pub format: PlotFormat,
    pub size: (u32, u32),
}

impl PlotTarget {
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, PlotRenderError> {
        let path = path.into();
        let format = PlotFormat::from_path(&path)?;
        Ok(Self {
            path,
            format,
            size: DEFAULT_PLOT_SIZE,
        })
    }

    /// `hydrogen_radial_n{n}.png` in the working directory.
    pub fn default_for_principal(principal: u32) -> Self {
        Self {
            path: PathBuf::from(format!("hydrogen_radial_n{}.png", principal)),
            format: PlotFormat::Png,
            size: DEFAULT_PLOT_SIZE,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PlotRenderError {
    #[error("unsupported plot format for '{}'; expected a .png or .svg path", path.display())]
    UnsupportedFormat { path: PathBuf },
    #[error("nothing to plot: the radial table has no series")]
    EmptyPlot,
    #[error("failed to create plot directory '{}': {source}", path.display())]
    Directory {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to draw plot '{}': {message}", path.display())]
    Draw { path: PathBuf, message: String },
}

impl From<PlotRenderError> for HydrogenError {
    fn from(error: PlotRenderError) -> Self {
        match error {
            PlotRenderError::UnsupportedFormat { .. } => {
                HydrogenError::input_validation("INPUT.PLOT_FORMAT", error.to_string())
            }
            PlotRenderError::EmptyPlot => {
                HydrogenError::computation("RUN.PLOT_EMPTY", error.to_string())
            }
            PlotRenderError::Directory { .. } => {
                HydrogenError::io_system("IO.PLOT_DIRECTORY", error.to_string())
            }
            PlotRenderError::Draw { .. } => {
                HydrogenError::computation("RUN.PLOT_RENDER", error.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_PLOT_SIZE, PlotFormat, PlotRenderError, PlotTarget};
    use crate::domain::{HydrogenError, HydrogenErrorCategory};
    use std::path::{Path, PathBuf};

    #[test]
    fn format_is_inferred_from_extension() {
        assert_eq!(
            PlotFormat::from_path(Path::new("out/chart.PNG")).expect("png"),
            PlotFormat::Png
        );
        assert_eq!(
            PlotFormat::from_path(Path::new("chart.svg")).expect("svg"),
            PlotFormat::Svg
        );
        assert!(matches!(
            PlotFormat::from_path(Path::new("chart.pdf")),
            Err(PlotRenderError::UnsupportedFormat { .. })
        ));
        assert!(PlotFormat::from_path(Path::new("chart")).is_err());
    }

    #[test]
    fn default_target_is_named_after_the_shell() {
        let target = PlotTarget::default_for_principal(3);
        assert_eq!(target.path, PathBuf::from("hydrogen_radial_n3.png"));
        assert_eq!(target.format, PlotFormat::Png);
        assert_eq!(target.size, DEFAULT_PLOT_SIZE);
    }

    #[test]
    fn render_errors_map_to_categories() {
        let unsupported: HydrogenError = PlotRenderError::UnsupportedFormat {
            path: PathBuf::from("x.gif"),
        }
        .into();
        assert_eq!(
            unsupported.category(),
            HydrogenErrorCategory::InputValidationError
        );

        let draw: HydrogenError = PlotRenderError::Draw {
            path: PathBuf::from("x.png"),
            message: "font unavailable".to_string(),
        }
        .into();
        assert_eq!(draw.code(), "RUN.PLOT_RENDER");
        assert_eq!(draw.exit_code(), 4);
    }
}
