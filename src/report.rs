use crate::calculations::ChainTable;
use crate::job::{ChainStats, JobId};
use crate::persistence::ChainResult;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ReportFormat {
    #[default]
    Yaml,
    Json,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Yaml => "yaml",
            ReportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(ReportFormat::Yaml),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format '{other}'")),
        }
    }
}

/// Renders whole seconds as `HH:MM:SS`. Hours widen past two digits
/// instead of wrapping.
pub fn format_duration(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs / 60) % 60;
    let seconds = secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

pub fn write_yaml_report<W: Write>(chains: &ChainTable, mut out: W) -> ChainResult<()> {
    for stats in chains.values() {
        writeln!(out, "---")?;
        writeln!(out, "start_job: {}", stats.start_job)?;
        writeln!(out, "last_job: {}", stats.last_job)?;
        writeln!(out, "job_len: {}", stats.job_len)?;
        writeln!(out, "total_runtime: {}", format_duration(stats.total_runtime_secs))?;
        writeln!(out, "avg_runtime: {}", format_duration(stats.avg_runtime_secs))?;
        writeln!(out)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct ChainReportEntry {
    start_job: JobId,
    last_job: JobId,
    job_len: usize,
    total_runtime: String,
    avg_runtime: String,
}

impl From<&ChainStats> for ChainReportEntry {
    fn from(stats: &ChainStats) -> Self {
        Self {
            start_job: stats.start_job,
            last_job: stats.last_job,
            job_len: stats.job_len,
            total_runtime: format_duration(stats.total_runtime_secs),
            avg_runtime: format_duration(stats.avg_runtime_secs),
        }
    }
}

pub fn write_json_report<W: Write>(chains: &ChainTable, mut out: W) -> ChainResult<()> {
    let entries: Vec<ChainReportEntry> = chains.values().map(ChainReportEntry::from).collect();
    serde_json::to_writer_pretty(&mut out, &entries)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_report<W: Write>(chains: &ChainTable, format: ReportFormat, out: W) -> ChainResult<()> {
    match format {
        ReportFormat::Yaml => write_yaml_report(chains, out),
        ReportFormat::Json => write_json_report(chains, out),
    }
}

pub fn render_report(chains: &ChainTable, format: ReportFormat) -> ChainResult<String> {
    let mut buf = Vec::new();
    write_report(chains, format, &mut buf)?;
    String::from_utf8(buf).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_pads_each_component() {
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(45), "00:00:45");
        assert_eq!(format_duration(90), "00:01:30");
    }

    #[test]
    fn format_duration_wraps_minutes_past_an_hour() {
        assert_eq!(format_duration(3600), "01:00:00");
        assert_eq!(format_duration(3661), "01:01:01");
        assert_eq!(format_duration(86_399), "23:59:59");
    }

    #[test]
    fn format_duration_widens_hours() {
        assert_eq!(format_duration(360_000), "100:00:00");
    }

    #[test]
    fn report_format_parses_names() {
        assert_eq!("yaml".parse::<ReportFormat>(), Ok(ReportFormat::Yaml));
        assert_eq!("JSON".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert!("xml".parse::<ReportFormat>().is_err());
    }
}
