use super::{ChainResult, ParseError, RecordField};
use crate::graph::JobLinks;
use crate::job::{JobRecord, NO_SUCCESSOR};
use csv::StringRecord;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Reads `job_id,job_id_next,runtime_secs` lines into forward/backward links.
///
/// Lines starting with `#` and blank lines are skipped but still counted, so
/// error line numbers match the source. Fields are split on `,` only; quotes
/// are not special. The first malformed line aborts the whole load.
pub fn load_links_from_reader<R: Read>(reader: R) -> ChainResult<JobLinks> {
    let mut links = JobLinks::new();
    let mut parsed = 0usize;
    for (idx, text) in BufReader::new(reader).lines().enumerate() {
        let text = text?;
        let line = idx as u64 + 1;
        if text.starts_with('#') {
            debug!(line, "skipping comment");
            continue;
        }
        if text.trim().is_empty() {
            debug!(line, "skipping blank line");
            continue;
        }
        let job = parse_record(&split_record(&text), line)?;
        links.insert(&job);
        parsed += 1;
    }

    info!(records = parsed, jobs = links.len(), "loaded job records");
    Ok(links)
}

pub fn load_links_from_str(input: &str) -> ChainResult<JobLinks> {
    load_links_from_reader(input.as_bytes())
}

pub fn load_links_from_path<P: AsRef<Path>>(path: P) -> ChainResult<JobLinks> {
    let file = File::open(path)?;
    load_links_from_reader(file)
}

/// Parses one record. Fields are checked left to right, so a bad number is
/// reported before a missing separator that follows it.
pub fn parse_record(record: &StringRecord, line: u64) -> Result<JobRecord, ParseError> {
    let job_id = parse_i64(record.get(0).unwrap_or(""), RecordField::JobId, line)?;
    let next = record.get(1).ok_or(ParseError::MissingSeparator {
        line,
        after: RecordField::JobId,
    })?;
    let next_job_id = parse_i64(next, RecordField::NextJobId, line)?;
    let runtime = record.get(2).ok_or(ParseError::MissingSeparator {
        line,
        after: RecordField::NextJobId,
    })?;
    let runtime = parse_i64(runtime, RecordField::Runtime, line)?;

    if record.len() > 3 {
        return Err(ParseError::TrailingField { line });
    }
    if job_id == NO_SUCCESSOR {
        return Err(ParseError::ReservedJobId { line });
    }
    let runtime_secs =
        u64::try_from(runtime).map_err(|_| ParseError::NegativeRuntime { line, value: runtime })?;

    Ok(JobRecord {
        line,
        job_id,
        next_job_id,
        runtime_secs,
    })
}

fn parse_i64(input: &str, field: RecordField, line: u64) -> Result<i64, ParseError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidNumber {
            line,
            field,
            value: input.to_string(),
        })
}

fn split_record(text: &str) -> StringRecord {
    let mut record = StringRecord::from(text.split(',').collect::<Vec<_>>());
    record.trim();
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn parse_record_reads_three_integers() {
        let job = parse_record(&record(&["1", "23", "60"]), 4).unwrap();
        assert_eq!(job.job_id, 1);
        assert_eq!(job.next_job_id, 23);
        assert_eq!(job.runtime_secs, 60);
        assert_eq!(job.line, 4);
    }

    #[test]
    fn parse_record_accepts_signs_and_negative_ids() {
        let job = parse_record(&record(&["-4", "+7", "+12"]), 1).unwrap();
        assert_eq!((job.job_id, job.next_job_id, job.runtime_secs), (-4, 7, 12));
    }

    #[test]
    fn parse_record_reports_missing_separator_position() {
        assert_eq!(
            parse_record(&record(&["1"]), 2),
            Err(ParseError::MissingSeparator {
                line: 2,
                after: RecordField::JobId
            })
        );
        assert_eq!(
            parse_record(&record(&["1", "2"]), 3),
            Err(ParseError::MissingSeparator {
                line: 3,
                after: RecordField::NextJobId
            })
        );
    }

    #[test]
    fn parse_record_rejects_negative_runtime_and_sentinel_start() {
        assert_eq!(
            parse_record(&record(&["1", "0", "-5"]), 1),
            Err(ParseError::NegativeRuntime { line: 1, value: -5 })
        );
        assert_eq!(
            parse_record(&record(&["0", "3", "5"]), 9),
            Err(ParseError::ReservedJobId { line: 9 })
        );
    }

    #[test]
    fn split_record_keeps_quotes_in_fields() {
        let record = split_record("\"1\", 0 ,5");
        assert_eq!(record.len(), 3);
        assert_eq!(&record[0], "\"1\"");
        assert_eq!(&record[1], "0");
    }

    #[test]
    fn parse_record_rejects_extra_fields() {
        assert_eq!(
            parse_record(&record(&["1", "0", "5", "x"]), 1),
            Err(ParseError::TrailingField { line: 1 })
        );
    }
}
