//! Parse, resolve, render. Every call builds its own links and visited set,
//! so repeated runs over the same input produce identical output.

use crate::calculations::{ChainTable, resolve_chains};
use crate::persistence::{ChainResult, load_links_from_reader};
use crate::report::{ReportFormat, render_report};
use std::io::Read;

pub fn run<R: Read>(input: R) -> ChainResult<String> {
    run_with_format(input, ReportFormat::Yaml)
}

pub fn run_with_format<R: Read>(input: R, format: ReportFormat) -> ChainResult<String> {
    let chains = resolve(input)?;
    render_report(&chains, format)
}

/// Stops before rendering; useful when the caller wants the numbers.
pub fn resolve<R: Read>(input: R) -> ChainResult<ChainTable> {
    let links = load_links_from_reader(input)?;
    Ok(resolve_chains(&links))
}
