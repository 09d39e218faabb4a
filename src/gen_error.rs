use std::path::PathBuf;
use thiserror::Error;

// Failures while decomposing a single recognized prototype comment
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("parameter `{segment}` does not split into a type and a name")]
    MalformedParameter { segment: String },
    #[error("parameter `{segment}` has an empty type")]
    EmptyParameterType { segment: String },
    #[error("{count} parameters declared, aliases only cover {max}")]
    TooManyParameters { count: usize, max: usize },
}

#[derive(Debug, Error)]
pub enum GenError {
    #[error("I/O error on `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read line {line_no}")]
    Read {
        line_no: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write generated output")]
    Write(#[from] std::io::Error),
    #[error("line {line_no}: malformed prototype `{line}`")]
    MalformedPrototype {
        line_no: usize,
        line: String,
        #[source]
        source: ExtractError,
    },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
