use crate::common::constants::BOHR_ANGSTROM;
use crate::domain::{ComputeResult, HydrogenError, orbital_label};
use crate::modules::radial::{RadialSeriesSummary, RadialTable};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadialRunReport {
    pub charge: u32,
    pub principal: u32,
    pub domain: DomainReport,
    pub series: Vec<SeriesReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainReport {
    pub start: f64,
    pub end: f64,
    pub point_count: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesReport {
    pub angular: u32,
    pub orbital: String,
    pub peak_radius_bohr: f64,
    pub peak_radius_angstrom: f64,
    pub peak_density: f64,
    pub captured_probability: f64,
    pub mean_radius_bohr: f64,
}

impl SeriesReport {
    fn from_summary(principal: u32, summary: RadialSeriesSummary) -> Self {
        Self {
            angular: summary.angular,
            orbital: orbital_label(principal, summary.angular),
            peak_radius_bohr: summary.peak_radius,
            peak_radius_angstrom: summary.peak_radius * BOHR_ANGSTROM,
            peak_density: summary.peak_density,
            captured_probability: summary.captured_probability,
            mean_radius_bohr: summary.mean_radius,
        }
    }
}

impl RadialRunReport {
    pub fn from_table(table: &RadialTable) -> ComputeResult<Self> {
        let series = table
            .summaries()?
            .into_iter()
            .map(|summary| SeriesReport::from_summary(table.principal(), summary))
            .collect();

        Ok(Self {
            charge: table.charge(),
            principal: table.principal(),
            domain: DomainReport {
                start: table.domain().start(),
                end: table.domain().end(),
                point_count: table.domain().point_count(),
            },
            series,
        })
    }
}

pub fn render_human_summary(report: &RadialRunReport) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "Hydrogen-like atom: Z={}, n={} ({} subshells)",
        report.charge,
        report.principal,
        report.series.len()
    ));
    lines.push(format!(
        "Radial domain: [{}, {}] with {} points",
        report.domain.start, report.domain.end, report.domain.point_count
    ));

    for series in &report.series {
        lines.push(format!(
            "l = {} ({}): peak r={:.4} a0 ({:.4} A), captured probability={:.6}, <r>={:.4} a0",
            series.angular,
            series.orbital,
            series.peak_radius_bohr,
            series.peak_radius_angstrom,
            series.captured_probability,
            series.mean_radius_bohr
        ));
    }

    lines.join("\n")
}

pub fn write_report_file(report_path: &Path, report: &RadialRunReport) -> ComputeResult<()> {
    if let Some(parent_dir) = report_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        fs::create_dir_all(parent_dir).map_err(|source| {
            report_io_error("IO.REPORT_DIRECTORY", parent_dir.to_path_buf(), source)
        })?;
    }

    let report_json = serde_json::to_string_pretty(report).map_err(|source| {
        HydrogenError::internal(
            "SYS.REPORT_SERIALIZE",
            format!(
                "failed to serialize report '{}': {}",
                report_path.display(),
                source
            ),
        )
    })?;
    fs::write(report_path, report_json)
        .map_err(|source| report_io_error("IO.REPORT_WRITE", report_path.to_path_buf(), source))
}

fn report_io_error(code: &'static str, path: PathBuf, source: std::io::Error) -> HydrogenError {
    HydrogenError::io_system(
        code,
        format!("failed to write report path '{}': {}", path.display(), source),
    )
}

#[cfg(test)]
mod tests {
    use super::{RadialRunReport, render_human_summary, write_report_file};
    use crate::modules::radial::evaluate_standard_radial_table;
    use serde_json::Value;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn report_summarizes_every_series() {
        let table = evaluate_standard_radial_table(1, 2, &[0, 1]).expect("n=2 table");
        let report = RadialRunReport::from_table(&table).expect("report");

        assert_eq!(report.charge, 1);
        assert_eq!(report.principal, 2);
        assert_eq!(report.domain.point_count, 10_000);
        assert_eq!(report.series.len(), 2);
        assert_eq!(report.series[0].orbital, "2s");
        assert_eq!(report.series[1].orbital, "2p");
        // 2p density r^4 e^{-r} / 24 peaks at r = 4
        assert!((report.series[1].peak_radius_bohr - 4.0).abs() < 1.0e-3);

        let summary = render_human_summary(&report);
        assert!(summary.starts_with("Hydrogen-like atom: Z=1, n=2 (2 subshells)"));
        assert!(summary.contains("l = 0 (2s)"));
        assert!(summary.contains("l = 1 (2p)"));
    }

    #[test]
    fn report_file_is_written_as_camel_case_json() {
        let temp = TempDir::new().expect("tempdir should be created");
        let report_path = temp.path().join("reports/run.json");
        let table = evaluate_standard_radial_table(1, 1, &[0]).expect("1s table");
        let report = RadialRunReport::from_table(&table).expect("report");

        write_report_file(&report_path, &report).expect("report should be written");

        let parsed: Value = serde_json::from_str(
            &fs::read_to_string(&report_path).expect("report should be readable"),
        )
        .expect("report JSON should parse");
        assert_eq!(parsed["principal"], Value::from(1));
        assert_eq!(parsed["domain"]["pointCount"], Value::from(10_000));
        assert_eq!(parsed["series"][0]["orbital"], Value::from("1s"));
        assert!(parsed["series"][0]["capturedProbability"].as_f64().expect("number") > 0.999);
    }
}
