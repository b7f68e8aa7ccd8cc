use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

/// A single table cell, classified once at load time.
///
/// The raw text is always retained: equality, hashing and predicate
/// matching are defined on the text, while aggregation only reads the
/// parsed value of `Numeric` cells. Only finite numbers are `Numeric`;
/// `NaN` and the infinities stay text.
#[derive(Debug, Clone)]
pub enum CellValue {
    Numeric { text: String, value: f64 },
    Text(String),
}

impl CellValue {
    pub fn parse(raw: &str) -> Self {
        let text = raw.trim();
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => CellValue::Numeric {
                text: text.to_string(),
                value,
            },
            _ => CellValue::Text(text.to_string()),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        match self {
            CellValue::Numeric { text, .. } => text,
            CellValue::Text(text) => text,
        }
    }

    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Numeric { value, .. } => Some(*value),
            CellValue::Text(_) => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Numeric { .. })
    }
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for CellValue {}

impl Hash for CellValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl PartialEq<str> for CellValue {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::parse(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::parse(&value)
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A table row: one cell per column, in column order.
pub type Row = Vec<CellValue>;
