use std::collections::HashMap;

use serde::Serialize;

use crate::engine::errors::TableError;
use crate::engine::types::{CellValue, Row};

/// A named, column-ordered collection of rows.
///
/// Column names are unique and resolved through a name -> position map.
/// Rows are appended while loading and only read afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Table {
    name: String,
    columns: Vec<String>,
    #[serde(skip)]
    positions: HashMap<String, usize>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new<S: Into<String>>(name: impl Into<String>, columns: Vec<S>) -> Result<Self, TableError> {
        let name = name.into();
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let mut positions = HashMap::with_capacity(columns.len());
        for (idx, column) in columns.iter().enumerate() {
            if positions.insert(column.clone(), idx).is_some() {
                return Err(TableError::DuplicateColumn {
                    table: name,
                    column: column.clone(),
                });
            }
        }
        Ok(Self {
            name,
            columns,
            positions,
            rows: Vec::new(),
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.positions.get(column).copied()
    }

    pub fn find_column_index(&self, column: &str) -> Result<usize, TableError> {
        self.position(column).ok_or_else(|| TableError::UnknownColumn {
            table: self.name.clone(),
            column: column.to_string(),
        })
    }

    pub fn push_row(&mut self, row: Row) -> Result<(), TableError> {
        if row.len() != self.columns.len() {
            return Err(TableError::RowWidthMismatch {
                table: self.name.clone(),
                row: self.rows.len(),
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Appends a row of raw text cells, classifying each cell once.
    pub fn push_raw<S: AsRef<str>>(&mut self, cells: &[S]) -> Result<(), TableError> {
        let row: Row = cells
            .iter()
            .map(|c| CellValue::parse(c.as_ref()))
            .collect();
        self.push_row(row)
    }
}
