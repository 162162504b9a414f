pub mod plot;
pub mod radial;
pub mod report;

pub use plot::{
    DensityCurve, DensityPlot, PlotFormat, PlotRenderError, PlotTarget, render_density_plot,
};
pub use radial::{
    RadialSeries, RadialSeriesSummary, RadialTable, evaluate_radial_table,
    evaluate_standard_radial_table,
};
pub use report::{RadialRunReport, render_human_summary, write_report_file};
