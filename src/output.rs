//! Serialization of the two documents to disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;

use crate::assemble::build_collection;
use crate::catalog::build_catalog;
use crate::environment::build_environment;

pub const COLLECTION_FILE: &str = "DemoApp.postman_collection.json";
pub const ENVIRONMENT_FILE: &str = "DemoApp.postman_environment.json";

/// Paths of the files written by a generation run.
#[derive(Debug, Clone)]
pub struct WrittenFiles {
    pub collection: PathBuf,
    pub environment: PathBuf,
}

/// Generate both documents under `output_dir`, creating it if needed.
/// Existing files are overwritten.
pub fn write_outputs(output_dir: &Path) -> anyhow::Result<WrittenFiles> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;

    let catalog = build_catalog();
    tracing::debug!(endpoints = catalog.len(), "catalogue loaded");

    let collection_path = output_dir.join(COLLECTION_FILE);
    write_pretty(&collection_path, &build_collection(&catalog))?;
    tracing::info!(path = %collection_path.display(), "wrote collection");

    let environment_path = output_dir.join(ENVIRONMENT_FILE);
    write_pretty(&environment_path, &build_environment())?;
    tracing::info!(path = %environment_path.display(), "wrote environment");

    Ok(WrittenFiles {
        collection: collection_path,
        environment: environment_path,
    })
}

fn write_pretty<T: Serialize>(path: &Path, document: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(document)
        .with_context(|| format!("failed to serialize {}", path.display()))?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
