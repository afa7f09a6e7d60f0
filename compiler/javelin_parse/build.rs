//! Generates the parse tables from the grammar crate and writes them to
//! `OUT_DIR`, where `GrammarTables::load` embeds them.

use std::env;
use std::error::Error;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=build.rs");
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").ok_or("OUT_DIR is not set")?);

    let tables = javelin_grammar::generate()?;
    for conflict in &tables.conflicts {
        println!("cargo:warning=grammar conflict: {conflict}");
    }
    tables.write_to(&out_dir)?;
    Ok(())
}
