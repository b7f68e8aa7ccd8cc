use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::info;

use crate::loader::errors::LoadError;

pub const FACT_COLUMNS: &[&str] = &["ID", "D1", "D2", "D3", "Fact1", "Fact2"];

const D1_VALUES: &[&str] = &["A", "B"];
const D2_VALUES: &[&str] = &["X", "Y", "Z"];
const D3_VALUES: &[&str] = &["I", "J", "K", "L"];

pub const DEFAULT_SCHEMA: &str = "Fact(ID,D1,D2,D3,Fact1,Fact2)\n\
D1(D1,Alfa,Beta,Gamma)\n\
D2(D2,Delta)\n\
D3(D3,Epsilon,Eta)\n";

const DIMENSION_BLOCKS: &str = "A,Alfa1,Beta1,Gamma1\nB,Alfa2,Beta2,Gamma2\n\n\
X,Delta1\nY,Delta2\nZ,Delta3\n\n\
I,Epsilon1,Eta1\nJ,Epsilon2,Eta2\nK,Epsilon3,Eta3\nL,Epsilon4,Eta4\n\n";

/// One fact row `id,D1,D2,D3,Fact1,Fact2` with random dimension values.
pub fn random_fact_row<R: Rng>(id: usize, rng: &mut R) -> Vec<String> {
    let pick = |values: &[&str], rng: &mut R| -> String {
        values.choose(rng).copied().unwrap_or_default().to_string()
    };
    vec![
        id.to_string(),
        pick(D1_VALUES, rng),
        pick(D2_VALUES, rng),
        pick(D3_VALUES, rng),
        rng.gen_range(10..=100).to_string(),
        rng.gen_range(100..=1000).to_string(),
    ]
}

/// Writes `rows` fact lines followed by the D1, D2 and D3 blocks.
pub fn generate_data_file<R: Rng>(
    path: &Path,
    rows: usize,
    rng: &mut R,
) -> Result<(), LoadError> {
    let io_err = |e| LoadError::io(path, e);
    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);

    for id in 1..=rows {
        let row = random_fact_row(id, rng);
        writeln!(out, "{}", row.join(",")).map_err(io_err)?;
    }
    writeln!(out).map_err(io_err)?;
    out.write_all(DIMENSION_BLOCKS.as_bytes()).map_err(io_err)?;
    out.flush().map_err(io_err)?;

    info!(target: "bitfact::generate", path = %path.display(), rows, "Generated data file");
    Ok(())
}

pub fn write_default_schema(path: &Path) -> Result<(), LoadError> {
    std::fs::write(path, DEFAULT_SCHEMA).map_err(|e| LoadError::io(path, e))
}
