use thiserror::Error;
use tracing::{debug, error};

use crate::engine::errors::TableError;

/// Errors raised while reading the schema description or the data file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed schema line {line}: '{content}'. Expected Name(col1,col2,...)")]
    MalformedSchema { line: usize, content: String },

    #[error("Schema defines no tables")]
    EmptySchema,

    #[error("Data file has no block for table '{0}'")]
    MissingDataBlock(String),

    #[error("Data block {0} has no matching table in the schema")]
    UnexpectedDataBlock(usize),

    #[error("Dimension table '{0}' matches no fact table column")]
    UnknownDimension(String),

    #[error("Table error: {0}")]
    Table(#[from] TableError),
}

impl LoadError {
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn log_error(&self) {
        match self {
            LoadError::Table(inner) => inner.log_error(),
            _ => {
                error!("Load failed: {}", self);
                debug!("Load error details: {:?}", self);
            }
        }
    }
}
