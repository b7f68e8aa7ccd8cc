use std::fs;
use std::path::Path;

use crate::loader::errors::LoadError;

/// Name and column list of one table, as declared in the schema file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<String>,
}

/// The fact table declaration followed by the dimension declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub fact: TableSchema,
    pub dimensions: Vec<TableSchema>,
}

impl Schema {
    /// Table declarations in data-file block order.
    pub fn tables(&self) -> impl Iterator<Item = &TableSchema> {
        std::iter::once(&self.fact).chain(self.dimensions.iter())
    }
}

pub fn read_schema(path: &Path) -> Result<Schema, LoadError> {
    let text = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    parse_schema(&text)
}

/// Parses one `Name(col1,col2,...)` declaration per non-blank line.
/// The first declaration is the fact table.
pub fn parse_schema(text: &str) -> Result<Schema, LoadError> {
    let mut tables = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        tables.push(parse_table_line(idx + 1, line)?);
    }

    let mut tables = tables.into_iter();
    let fact = tables.next().ok_or(LoadError::EmptySchema)?;
    Ok(Schema {
        fact,
        dimensions: tables.collect(),
    })
}

fn parse_table_line(line_no: usize, line: &str) -> Result<TableSchema, LoadError> {
    let malformed = || LoadError::MalformedSchema {
        line: line_no,
        content: line.to_string(),
    };

    let (name, rest) = line.split_once('(').ok_or_else(malformed)?;
    let columns = rest.strip_suffix(')').ok_or_else(malformed)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(malformed());
    }

    let columns: Vec<String> = columns.split(',').map(|c| c.trim().to_string()).collect();
    if columns.iter().any(String::is_empty) {
        return Err(malformed());
    }

    Ok(TableSchema {
        name: name.to_string(),
        columns,
    })
}
