#![allow(dead_code)]

// Shared fixtures for integration tests: in-memory records, on-disk index
// files, and the bundled sample dataset.

use anyhow::Result;
use serde_json::{Value, json};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use toolindex::{CatalogSnapshot, ToolRecord};

pub fn tool(name: &str, category: &str, difficulty: Option<&str>, tags: &[&str]) -> ToolRecord {
    ToolRecord {
        name: name.to_string(),
        category: category.to_string(),
        difficulty: difficulty.map(str::to_string),
        tags: if tags.is_empty() {
            None
        } else {
            Some(tags.iter().map(|t| t.to_string()).collect())
        },
        description: format!("a {category} tool"),
        installation: format!("brew install {name}"),
        extra: serde_json::Map::new(),
    }
}

pub fn sample_index_json() -> Value {
    json!({
        "tools": [
            {
                "name": "wget",
                "category": "networking",
                "difficulty": "beginner",
                "tags": ["network"],
                "description": "download files",
                "installation": "brew install wget",
                "homepage": "https://www.gnu.org/software/wget/"
            },
            {
                "name": "curl",
                "category": "networking",
                "difficulty": "intermediate",
                "tags": ["network", "http"],
                "description": "transfer data",
                "installation": "brew install curl"
            },
            {
                "name": "jq",
                "category": "text-processing",
                "description": "json processor",
                "installation": "brew install jq"
            }
        ],
        "categories": {
            "networking": "Networking",
            "text-processing": "Text Processing"
        },
        "metadata": {"source": "fixture", "version": "1.0.0"}
    })
}

pub fn write_index(value: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    serde_json::to_writer(&mut file, value)?;
    file.flush()?;
    Ok(file)
}

pub fn sample_snapshot() -> CatalogSnapshot {
    serde_json::from_value(sample_index_json()).expect("fixture parses")
}

pub fn bundled_index_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/tools-index.json")
}

pub fn bundled_schema_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("schema/tools_index.schema.json")
}
