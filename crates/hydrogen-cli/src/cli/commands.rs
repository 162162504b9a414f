use super::CliError;
use super::prompt::{DEFAULT_MAX_ATTEMPTS, PromptSpec, prompt_positive_integer};
use anyhow::Context;
use hydrogen_core::common::constants::MAX_PRINCIPAL_QUANTUM_NUMBER;
use hydrogen_core::domain::angular_momentum_numbers;
use hydrogen_core::modules::{
    DensityPlot, PlotTarget, RadialRunReport, evaluate_standard_radial_table,
    render_density_plot, render_human_summary, write_report_file,
};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(clap::Args, Debug)]
pub(super) struct RunArgs {
    /// Nuclear charge Z (prompted for when omitted)
    #[arg(short = 'z', long, value_parser = clap::value_parser!(u32).range(1..))]
    charge: Option<u32>,

    /// Principal quantum number n, at most 100 (prompted for when omitted)
    #[arg(
        short = 'n',
        long,
        value_parser = clap::value_parser!(u32)
            .range(1..=i64::from(MAX_PRINCIPAL_QUANTUM_NUMBER))
    )]
    principal: Option<u32>,

    /// Chart output path, .png or .svg [default: hydrogen_radial_n{n}.png]
    #[arg(short = 'o', long, conflicts_with = "no_plot")]
    output: Option<PathBuf>,

    /// Skip rendering the chart
    #[arg(long)]
    no_plot: bool,

    /// JSON report output path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Prompt attempts allowed per value
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_attempts: u32,
}

impl RunArgs {
    pub(super) fn into_config(self) -> RunConfig {
        RunConfig {
            charge: self.charge,
            principal: self.principal,
            output: self.output,
            render_plot: !self.no_plot,
            report: self.report,
            max_attempts: self.max_attempts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub charge: Option<u32>,
    pub principal: Option<u32>,
    pub output: Option<PathBuf>,
    pub render_plot: bool,
    pub report: Option<PathBuf>,
    pub max_attempts: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            charge: None,
            principal: None,
            output: None,
            render_plot: true,
            report: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl RunConfig {
    fn plot_target(&self, principal: u32) -> Result<Option<PlotTarget>, CliError> {
        if !self.render_plot {
            return Ok(None);
        }
        match &self.output {
            Some(path) => PlotTarget::from_path(path.clone())
                .map(Some)
                .map_err(|error| CliError::Compute(error.into())),
            None => Ok(Some(PlotTarget::default_for_principal(principal))),
        }
    }
}

/// Acquires Z and n, then enumerates, evaluates, plots and summarizes in that order.
pub fn run_radial_command<R, W>(
    config: &RunConfig,
    input: &mut R,
    output: &mut W,
) -> Result<i32, CliError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    // An unusable chart path fails before anything is asked.
    if let Some(path) = config.output.as_ref().filter(|_| config.render_plot) {
        PlotTarget::from_path(path.clone()).map_err(|error| CliError::Compute(error.into()))?;
    }

    let charge = match config.charge {
        Some(charge) => charge,
        None => prompt_positive_integer(
            input,
            output,
            &PromptSpec::nuclear_charge(config.max_attempts),
        )
        .map_err(|error| CliError::Compute(error.into()))?,
    };
    let principal = match config.principal {
        Some(principal) => principal,
        None => prompt_positive_integer(
            input,
            output,
            &PromptSpec::principal_quantum_number(config.max_attempts),
        )
        .map_err(|error| CliError::Compute(error.into()))?,
    };

    let angular_numbers = angular_momentum_numbers(principal);
    info!(
        charge,
        principal,
        subshells = angular_numbers.len(),
        "evaluating radial wavefunctions"
    );
    let table = evaluate_standard_radial_table(charge, principal, &angular_numbers)
        .map_err(CliError::Compute)?;

    if let Some(target) = config.plot_target(principal)? {
        let plot = DensityPlot::from_table(&table);
        render_density_plot(&plot, &target).map_err(|error| CliError::Compute(error.into()))?;
        info!(path = %target.path.display(), "chart written");
        writeln!(output, "Plot written to {}", target.path.display())
            .context("failed to write plot confirmation")?;
    }

    let report = RadialRunReport::from_table(&table).map_err(CliError::Compute)?;
    writeln!(output, "{}", render_human_summary(&report)).context("failed to write summary")?;

    if let Some(report_path) = &config.report {
        write_report_file(report_path, &report).map_err(CliError::Compute)?;
        info!(path = %report_path.display(), "report written");
        writeln!(output, "JSON report: {}", report_path.display())
            .context("failed to write report confirmation")?;
    }

    output.flush().context("failed to flush output")?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::{RunConfig, run_radial_command};
    use crate::cli::CliError;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn run_with_lines(config: &RunConfig, lines: &str) -> (Result<i32, CliError>, String) {
        let mut input = Cursor::new(lines.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = run_radial_command(config, &mut input, &mut output);
        (result, String::from_utf8(output).expect("output is utf-8"))
    }

    #[test]
    fn default_config_prompts_and_renders() {
        let config = RunConfig::default();
        assert_eq!(config.charge, None);
        assert_eq!(config.principal, None);
        assert!(config.render_plot);
        assert_eq!(config.max_attempts, 10);
    }

    #[test]
    fn prompted_values_drive_the_summary() {
        let config = RunConfig {
            render_plot: false,
            ..RunConfig::default()
        };
        let (result, output) = run_with_lines(&config, "x\n2\n0\n3\n");

        assert_eq!(result.expect("run should succeed"), 0);
        assert!(output.contains("That's not an integer."));
        assert!(output.contains("Value must be a positive integer."));
        assert!(output.contains("Hydrogen-like atom: Z=2, n=3 (3 subshells)"));
        assert!(output.contains("l = 2 (3d)"));
        assert!(!output.contains("Plot written"));
    }

    #[test]
    fn preset_values_skip_prompts() {
        let config = RunConfig {
            charge: Some(1),
            principal: Some(1),
            render_plot: false,
            ..RunConfig::default()
        };
        let (result, output) = run_with_lines(&config, "");

        assert_eq!(result.expect("run should succeed"), 0);
        assert!(!output.contains("How many protons"));
        assert!(output.starts_with("Hydrogen-like atom: Z=1, n=1 (1 subshells)"));
    }

    #[test]
    fn unsupported_chart_extension_fails_before_prompting() {
        let config = RunConfig {
            output: Some(PathBuf::from("chart.gif")),
            ..RunConfig::default()
        };
        let (result, output) = run_with_lines(&config, "1\n1\n");

        let error = match result {
            Err(CliError::Compute(error)) => error,
            other => panic!("expected compute error, got {other:?}"),
        };
        assert_eq!(error.code(), "INPUT.PLOT_FORMAT");
        assert!(output.is_empty());
    }
}
