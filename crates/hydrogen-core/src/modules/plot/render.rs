use super::{DensityPlot, PlotFormat, PlotRenderError, PlotTarget};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fs;
use tracing::debug;

pub fn render_density_plot(plot: &DensityPlot, target: &PlotTarget) -> Result<(), PlotRenderError> {
    if plot.curves.is_empty() {
        return Err(PlotRenderError::EmptyPlot);
    }

    if let Some(parent) = target
        .path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        fs::create_dir_all(parent).map_err(|source| PlotRenderError::Directory {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    debug!(
        path = %target.path.display(),
        format = target.format.as_str(),
        curves = plot.curves.len(),
        "rendering density plot"
    );

    let draw_error = |message: String| PlotRenderError::Draw {
        path: target.path.clone(),
        message,
    };

    match target.format {
        PlotFormat::Png => {
            let root = BitMapBackend::new(&target.path, target.size).into_drawing_area();
            draw_density_chart(&root, plot).map_err(|error| draw_error(error.to_string()))?;
            root.present().map_err(|error| draw_error(error.to_string()))
        }
        PlotFormat::Svg => {
            let root = SVGBackend::new(&target.path, target.size).into_drawing_area();
            draw_density_chart(&root, plot).map_err(|error| draw_error(error.to_string()))?;
            root.present().map_err(|error| draw_error(error.to_string()))
        }
    }
}

fn draw_density_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    plot: &DensityPlot,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let (x_min, x_max) = plot.x_range().unwrap_or((0.0, 1.0));
    let x_max = if x_max > x_min { x_max } else { x_min + 1.0 };
    let y_top = plot
        .y_max()
        .filter(|value| *value > 0.0)
        .map_or(1.0, |value| value * 1.05);

    let mut chart = ChartBuilder::on(root)
        .caption(&plot.title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, 0.0..y_top)?;

    chart
        .configure_mesh()
        .x_desc(plot.x_label.as_str())
        .y_desc(plot.y_label.as_str())
        .axis_desc_style(("sans-serif", 20))
        .draw()?;

    for (index, curve) in plot.curves.iter().enumerate() {
        let style = Palette99::pick(index).stroke_width(2);
        let series = chart.draw_series(LineSeries::new(curve.points.iter().copied(), style))?;
        if let Some(label) = &curve.label {
            series
                .label(label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        }
    }

    if plot.show_legend {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    Ok(())
}
