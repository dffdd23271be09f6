//! Read-only access to an extracted test data tree.
//!
//! The tree is usually baked into the binary with [`include_dir`],
//! but anything that can open a file by its relative path will do.

use std::fs::{self, File};
use std::io::{self, Read};

use camino::{Utf8Path, Utf8PathBuf};
use include_dir::Dir;
use log::*;

use crate::paths;
use crate::result::*;

/// Something that can open files in a test data tree by relative path.
pub trait DataSource {
    /// Opens the file at `path` (relative to the root of the tree).
    ///
    /// Returns [`DataError::NotFound`] if there's no file there,
    /// including when `path` is a directory or would leave the tree.
    fn open_by_path(&self, path: &Utf8Path) -> DataResult<Box<dyn Read + '_>>;
}

impl<S: DataSource + ?Sized> DataSource for &S {
    fn open_by_path(&self, path: &Utf8Path) -> DataResult<Box<dyn Read + '_>> {
        (**self).open_by_path(path)
    }
}

/// A tree embedded in the binary at compile time.
///
/// ```ignore
/// static FILES: Dir = include_dir!("$CARGO_MANIFEST_DIR/testdata/github.com/w3c");
/// let source = EmbeddedSource::new(&FILES);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedSource {
    dir: &'static Dir<'static>,
}

impl EmbeddedSource {
    pub const fn new(dir: &'static Dir<'static>) -> Self {
        Self { dir }
    }
}

impl DataSource for EmbeddedSource {
    fn open_by_path(&self, path: &Utf8Path) -> DataResult<Box<dyn Read + '_>> {
        if !paths::stays_relative(path) {
            return Err(DataError::NotFound(path.to_owned()));
        }
        let file = self
            .dir
            .get_file(path.as_std_path())
            .ok_or_else(|| DataError::NotFound(path.to_owned()))?;
        trace!("Found embedded {} ({} bytes)", path, file.contents().len());
        Ok(Box::new(file.contents()))
    }
}

/// A tree read from a plain directory on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySource {
    root: Utf8PathBuf,
}

impl DirectorySource {
    pub fn new<P: Into<Utf8PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }
}

impl DataSource for DirectorySource {
    fn open_by_path(&self, path: &Utf8Path) -> DataResult<Box<dyn Read + '_>> {
        let not_found = || DataError::NotFound(path.to_owned());
        if !paths::stays_relative(path) {
            return Err(not_found());
        }

        let full_path = self.root.join(path);
        match fs::metadata(&full_path) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => return Err(not_found()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(not_found()),
            Err(e) => return Err(DataError::filesystem(full_path, e)),
        }

        let file = File::open(&full_path).map_err(|e| DataError::filesystem(&full_path, e))?;
        trace!("Opened {}", full_path);
        Ok(Box::new(file))
    }
}
