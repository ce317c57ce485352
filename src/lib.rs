pub mod calculations;
pub mod graph;
pub mod job;
pub mod persistence;
pub mod pipeline;
pub mod report;

pub use calculations::{ChainResolver, ChainTable, resolve_chains};
pub use graph::JobLinks;
pub use job::{ChainStats, JobId, JobRecord, Link, NO_SUCCESSOR};
pub use persistence::{
    ChainError, ChainResult, ParseError, RecordField, load_links_from_path,
    load_links_from_reader, load_links_from_str,
};
pub use pipeline::{resolve, run, run_with_format};
pub use report::{
    ReportFormat, format_duration, render_report, write_json_report, write_report,
    write_yaml_report,
};
