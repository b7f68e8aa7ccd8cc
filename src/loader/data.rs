use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::engine::core::fact::FactTableBuilder;
use crate::engine::core::table::Table;
use crate::engine::query::Catalog;
use crate::loader::errors::LoadError;
use crate::loader::schema::{Schema, read_schema};

/// Reads the schema and data files and builds the indexed catalog.
pub fn load_catalog(schema_path: &Path, data_path: &Path) -> Result<Catalog, LoadError> {
    let schema = read_schema(schema_path)?;
    let text = fs::read_to_string(data_path).map_err(|e| LoadError::io(data_path, e))?;
    fill_tables(&schema, &text)
}

/// Fills the schema's tables from blank-line separated CSV blocks.
///
/// Blocks follow schema order: the fact table first, then one block per
/// dimension table. The fact table is indexed on every column that names a
/// dimension table, once all fact rows are in.
pub fn fill_tables(schema: &Schema, text: &str) -> Result<Catalog, LoadError> {
    let blocks = split_blocks(text);
    let table_count = schema.dimensions.len() + 1;

    if let Some(missing) = schema.tables().nth(blocks.len()) {
        return Err(LoadError::MissingDataBlock(missing.name.clone()));
    }
    for (idx, extra) in blocks.iter().enumerate().skip(table_count) {
        if !extra.is_empty() {
            return Err(LoadError::UnexpectedDataBlock(idx));
        }
        warn!(target: "bitfact::loader", block = idx, "Ignoring empty trailing data block");
    }

    let fact_table = Table::new(schema.fact.name.clone(), schema.fact.columns.clone())?;
    let mut builder = FactTableBuilder::new(fact_table);
    for dimension in &schema.dimensions {
        if builder.table().position(&dimension.name).is_none() {
            return Err(LoadError::UnknownDimension(dimension.name.clone()));
        }
        builder = builder.index_column(dimension.name.clone())?;
    }
    for line in &blocks[0] {
        builder.push_raw(split_cells(line).as_slice())?;
    }

    let mut dimensions = Vec::with_capacity(schema.dimensions.len());
    for (decl, block) in schema.dimensions.iter().zip(blocks.iter().skip(1)) {
        let mut table = Table::new(decl.name.clone(), decl.columns.clone())?;
        for line in block {
            table.push_raw(split_cells(line).as_slice())?;
        }
        dimensions.push(table);
    }

    let fact = builder.finish()?;
    info!(
        target: "bitfact::loader",
        fact_rows = fact.row_count(),
        dimensions = dimensions.len(),
        "Catalog loaded"
    );
    Ok(Catalog::new(fact, dimensions))
}

/// Every blank line closes the current block, so consecutive blank lines
/// yield empty blocks. A final block without a trailing blank line is kept.
fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            blocks.push(std::mem::take(&mut current));
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

fn split_cells(line: &str) -> Vec<&str> {
    line.trim().split(',').map(str::trim).collect()
}
