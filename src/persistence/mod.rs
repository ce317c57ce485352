use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    JobId,
    NextJobId,
    Runtime,
}

impl RecordField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordField::JobId => "job_id",
            RecordField::NextJobId => "job_id_next",
            RecordField::Runtime => "runtime_secs",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A malformed input line. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber {
        line: u64,
        field: RecordField,
        value: String,
    },
    MissingSeparator {
        line: u64,
        after: RecordField,
    },
    TrailingField {
        line: u64,
    },
    NegativeRuntime {
        line: u64,
        value: i64,
    },
    ReservedJobId {
        line: u64,
    },
}

impl ParseError {
    pub fn line(&self) -> u64 {
        match self {
            ParseError::InvalidNumber { line, .. }
            | ParseError::MissingSeparator { line, .. }
            | ParseError::TrailingField { line }
            | ParseError::NegativeRuntime { line, .. }
            | ParseError::ReservedJobId { line } => *line,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidNumber { line, field, value } => {
                write!(f, "line {line}: invalid integer '{value}' for {field}")
            }
            ParseError::MissingSeparator { line, after } => {
                write!(f, "line {line}: expected ',' after {after}")
            }
            ParseError::TrailingField { line } => {
                write!(f, "line {line}: expected exactly 3 fields")
            }
            ParseError::NegativeRuntime { line, value } => {
                write!(f, "line {line}: runtime must not be negative (got {value})")
            }
            ParseError::ReservedJobId { line } => {
                write!(f, "line {line}: job id 0 is reserved for end of chain")
            }
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug)]
pub enum ChainError {
    Parse(ParseError),
    Io(io::Error),
    Serialization(SerdeJsonError),
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainError::Parse(err) => write!(f, "parse error: {err}"),
            ChainError::Io(err) => write!(f, "io error: {err}"),
            ChainError::Serialization(err) => write!(f, "serialization error: {err}"),
        }
    }
}

impl std::error::Error for ChainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChainError::Parse(err) => Some(err),
            ChainError::Io(err) => Some(err),
            ChainError::Serialization(err) => Some(err),
        }
    }
}

impl From<ParseError> for ChainError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<io::Error> for ChainError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<SerdeJsonError> for ChainError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

pub type ChainResult<T> = Result<T, ChainError>;

pub mod file;

pub use file::{load_links_from_path, load_links_from_reader, load_links_from_str, parse_record};
