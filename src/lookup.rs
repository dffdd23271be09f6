//! Serves test suite files by their canonical URLs.
//!
//! Test manifests refer to each other (and to their fixtures) with URLs like
//! `https://w3c.github.io/rdf-tests/rdf/rdf11/rdf-turtle/manifest.ttl`.
//! A [`UrlMapper`] turns those into paths within the extracted tree,
//! and [`TestData`] reads them out of a [`DataSource`].

use std::io::{self, Read};

use camino::Utf8PathBuf;
use log::*;

use crate::config::UrlMapping;
use crate::paths;
use crate::result::*;
use crate::source::DataSource;

/// Rewrites canonical test suite URLs into relative paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapper {
    mappings: Vec<UrlMapping>,
}

impl Default for UrlMapper {
    fn default() -> Self {
        Self::new(UrlMapping::defaults())
    }
}

impl UrlMapper {
    /// Mappings are tried in order; the first matching prefix wins.
    pub fn new(mappings: Vec<UrlMapping>) -> Self {
        Self { mappings }
    }

    /// Maps `url` to a path relative to the root of the test data tree.
    ///
    /// Prefixes are matched literally and case-sensitively.
    /// The rest of the URL is joined onto the mapping's subtree,
    /// with `.` and `..` collapsed.
    pub fn map(&self, url: &str) -> DataResult<Utf8PathBuf> {
        for mapping in &self.mappings {
            if let Some(rest) = url.strip_prefix(mapping.url_prefix.as_str()) {
                let path = paths::join_clean(&mapping.subtree, rest);
                trace!("{} -> {}", url, path);
                return Ok(path);
            }
        }
        Err(DataError::UnmappableUrl(url.to_owned()))
    }
}

/// Test suite files, looked up by URL.
#[derive(Debug, Clone)]
pub struct TestData<S> {
    mapper: UrlMapper,
    source: S,
}

impl<S: DataSource> TestData<S> {
    /// Serves `source` with the default W3C URL mappings.
    pub fn new(source: S) -> Self {
        Self::with_mapper(UrlMapper::default(), source)
    }

    pub fn with_mapper(mapper: UrlMapper, source: S) -> Self {
        Self { mapper, source }
    }

    /// Returns the contents of the file `url` refers to.
    ///
    /// Each call reads a fresh copy, positioned at the start.
    pub fn get(&self, url: &str) -> DataResult<io::Cursor<Vec<u8>>> {
        let path = self.mapper.map(url)?;
        let mut reader = self.source.open_by_path(&path)?;

        let mut contents = Vec::new();
        reader
            .read_to_end(&mut contents)
            .map_err(|e| DataError::filesystem(&path, e))?;
        debug!("Read {} ({} bytes) for {}", path, contents.len(), url);

        Ok(io::Cursor::new(contents))
    }
}
