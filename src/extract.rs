//! Unpacks the interesting parts of a test suite archive.

use std::fs::{self, File};
use std::io::BufWriter;

use camino::Utf8Path;
use log::*;
use memmap2::Mmap;
use piz::result::ZipError;
use piz::ZipArchive;

use crate::filter;
use crate::paths;
use crate::pump::*;
use crate::result::*;

/// Extracts entries of the ZIP archive at `archive_path` into `output_root`.
///
/// Each entry's name must start with `source_prefix`, which is swapped
/// for `destination_prefix`. The resulting relative path is checked
/// against [`filter::include()`]; rejected entries are skipped.
/// Entries that would land outside of `output_root` abort the extraction.
///
/// Returns the number of files written.
pub fn extract<A, O>(
    archive_path: A,
    output_root: O,
    source_prefix: &str,
    destination_prefix: &str,
) -> DataResult<usize>
where
    A: AsRef<Utf8Path>,
    O: AsRef<Utf8Path>,
{
    let archive_path = archive_path.as_ref();
    let output_root = paths::clean(output_root.as_ref());
    info!("Unzip {} to {}", archive_path, output_root);

    let archive_error = |e: ZipError| DataError::Archive {
        archive: archive_path.to_owned(),
        source: e,
    };

    let zip_file = File::open(archive_path).map_err(|e| archive_error(e.into()))?;
    // SAFETY: The archive is ours (we just downloaded it)
    // and nobody else should be modifying it while we read.
    let mapping = unsafe { Mmap::map(&zip_file) }.map_err(|e| archive_error(e.into()))?;
    let archive = ZipArchive::new(&mapping).map_err(archive_error)?;
    debug!("{} entries in {}", archive.entries().len(), archive_path);

    let mut written = 0;
    let mut mismatched = 0;
    for entry in archive.entries() {
        let name = entry.path.as_str();
        let rest = match name.strip_prefix(source_prefix) {
            Some(rest) => rest,
            None => {
                info!("Prefix does not match {}", name);
                mismatched += 1;
                continue;
            }
        };

        let relative = paths::join_clean(destination_prefix, rest);
        if !filter::include(relative.as_str()) {
            trace!("Skipping {}", relative);
            continue;
        }

        let path = paths::join_clean(&output_root, relative.as_str());
        if !paths::is_within(&output_root, &path) {
            return Err(DataError::PathSafety(path));
        }

        if entry.is_dir() {
            debug!("Creating directory {}", path);
            fs::create_dir_all(&path).map_err(|e| DataError::filesystem(&path, e))?;
            continue;
        }

        // Our filter happily takes files whose directories it skipped.
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| DataError::filesystem(parent, e))?;
        }

        let mut reader = archive.read(entry).map_err(archive_error)?;
        let file = File::create(&path).map_err(|e| DataError::filesystem(&path, e))?;
        let mut sink = BufWriter::new(file);
        let size = pump(&mut reader, &mut sink).map_err(|e| match e {
            PumpError::Read(e) => archive_error(ZipError::Io(e)),
            PumpError::Write(e) => DataError::filesystem(&path, e),
        })?;
        debug!("Wrote {} ({} bytes)", path, size);

        written += 1;
    }

    if mismatched > 0 {
        debug!(
            "{} entries didn't start with {}",
            mismatched, source_prefix
        );
    }
    info!("Unzipped {} files", written);
    Ok(written)
}
