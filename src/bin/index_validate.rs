//! Validate a tools index JSON document against the bundled schema.
//!
//! Usage:
//!   index-validate --file data/tools-index.json
//!   index-validate < tools-index.json

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde_json::Value;
use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

const DEFAULT_SCHEMA_PATH: &str = "schema/tools_index.schema.json";

#[derive(Parser, Debug)]
#[command(name = "index-validate")]
#[command(about = "Validate a tools index against the index schema")]
struct Cli {
    /// Optional input file; reads stdin when omitted.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Schema path override.
    #[arg(long)]
    schema: Option<PathBuf>,
}

fn read_input(file: Option<PathBuf>) -> Result<Value> {
    let mut buf = String::new();
    if let Some(path) = file {
        File::open(&path)
            .with_context(|| format!("opening input file {}", path.display()))?
            .read_to_string(&mut buf)
            .with_context(|| format!("reading input file {}", path.display()))?;
    } else {
        stdin()
            .read_to_string(&mut buf)
            .context("reading stdin for input JSON")?;
    }
    let value: Value = serde_json::from_str(&buf).context("parsing input JSON")?;
    Ok(value)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let schema_path = cli
        .schema
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SCHEMA_PATH));
    let input = read_input(cli.file)?;

    let schema_value: Value = serde_json::from_reader(
        File::open(&schema_path)
            .with_context(|| format!("opening index schema {}", schema_path.display()))?,
    )
    .with_context(|| format!("parsing index schema {}", schema_path.display()))?;

    // The compiled validator borrows the schema document for its own
    // lifetime, which is the rest of this process anyway.
    let schema_static: &'static Value = Box::leak(Box::new(schema_value));
    let compiled = jsonschema::JSONSchema::compile(schema_static)
        .with_context(|| format!("compiling index schema {}", schema_path.display()))?;

    if let Err(errors) = compiled.validate(&input) {
        let details = errors.map(|e| e.to_string()).collect::<Vec<_>>().join("\n");
        bail!("tools index failed schema validation:\n{}", details);
    }

    println!("ok");
    Ok(())
}
