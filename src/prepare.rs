//! The one-shot preparation step: download, extract, clean up.

use std::fs;

use camino::Utf8Path;
use log::*;

use crate::config::*;
use crate::extract::extract;
use crate::fetch::fetch;
use crate::result::*;

/// Fetches and extracts every source in `config`, in order,
/// deleting each archive once it's been unpacked.
///
/// The first failure stops everything. Whatever was already extracted stays put.
pub fn prepare(config: &PrepareConfig) -> DataResult<()> {
    create_dir(&config.output_root)?;

    for source in &config.sources {
        prepare_source(source, &config.output_root)?;
    }
    info!(
        "Test data for {} sources is ready in {}",
        config.sources.len(),
        config.output_root
    );
    Ok(())
}

fn prepare_source(source: &ArchiveSource, output_root: &Utf8Path) -> DataResult<()> {
    if let Some(parent) = source.archive_path.parent() {
        create_dir(parent)?;
    }

    fetch(&source.url, &source.archive_path)?;
    extract(
        &source.archive_path,
        output_root,
        &source.source_prefix,
        &source.destination_prefix,
    )?;

    debug!("Removing {}", source.archive_path);
    fs::remove_file(&source.archive_path)
        .map_err(|e| DataError::filesystem(&source.archive_path, e))
}

fn create_dir(dir: &Utf8Path) -> DataResult<()> {
    if dir.as_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| DataError::filesystem(dir, e))
}
