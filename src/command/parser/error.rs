use crate::engine::errors::QueryError;

#[derive(Debug, PartialEq)]
pub enum ParseError {
    /// Filter text does not follow `col = value [AND ...] [OR ...]`
    InvalidFilter(String),

    /// Aggregate text without the `func:column` shape
    MalformedAggregate(String),

    /// `func:column` text could not be turned into a request
    InvalidAggregate(QueryError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidFilter(msg) => {
                write!(
                    f,
                    "Invalid filter: {}. Use: D1 = A AND D2 = X OR D2 = Y (quote values with spaces)",
                    msg
                )
            }
            ParseError::MalformedAggregate(text) => {
                write!(f, "Malformed aggregate '{}'. Use: func:column", text)
            }
            ParseError::InvalidAggregate(err) => {
                write!(f, "Invalid aggregate: {}. Use: func:column", err)
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<QueryError> for ParseError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::MalformedAggregate(text) => ParseError::MalformedAggregate(text),
            other => ParseError::InvalidAggregate(other),
        }
    }
}
