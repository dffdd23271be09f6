//! Where the test suites come from, and where they go.
//!
//! Everything here is plain data with a `Default` describing the real
//! W3C suites. Tests swap in temporary directories and local servers.

use camino::{Utf8Path, Utf8PathBuf};

/// Where extracted test suites live, relative to the crate root.
pub const OUTPUT_ROOT: &str = "testdata/github.com/w3c";

/// A remote ZIP archive and how its entries are renamed on the way out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSource {
    /// Where to download the archive from
    pub url: String,
    /// Where to save the archive while we extract it
    pub archive_path: Utf8PathBuf,
    /// Entries must start with this to be considered
    /// (usually the `<repo>-<branch>/` directory GitHub wraps archives in).
    pub source_prefix: String,
    /// Replaces `source_prefix` in extracted paths.
    pub destination_prefix: String,
}

impl ArchiveSource {
    /// The RDF 1.1/1.2 test suites
    pub fn rdf_tests() -> Self {
        Self {
            url: String::from("https://github.com/jimsmart/rdf-tests/archive/refs/heads/main.zip"),
            archive_path: Utf8PathBuf::from("testdata/rdf-tests.zip"),
            source_prefix: String::from("rdf-tests-main/"),
            destination_prefix: String::from("rdf-tests/"),
        }
    }

    /// The N3 and Turtle test suites from the N3 community group
    pub fn n3_tests() -> Self {
        Self {
            url: String::from("https://github.com/w3c/N3/archive/refs/heads/master.zip"),
            archive_path: Utf8PathBuf::from("testdata/n3.zip"),
            source_prefix: String::from("N3-master/"),
            destination_prefix: String::from("N3/"),
        }
    }
}

/// Everything the preparation step needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepareConfig {
    /// The directory extracted entries are written into
    pub output_root: Utf8PathBuf,
    /// Archives to fetch and extract, in order
    pub sources: Vec<ArchiveSource>,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            output_root: Utf8PathBuf::from(OUTPUT_ROOT),
            sources: vec![ArchiveSource::rdf_tests(), ArchiveSource::n3_tests()],
        }
    }
}

impl PrepareConfig {
    /// Places every relative path in the config under `base`.
    /// Absolute paths are left alone.
    pub fn rooted_at<P: AsRef<Utf8Path>>(mut self, base: P) -> Self {
        let base = base.as_ref();
        self.output_root = base.join(&self.output_root);
        for source in &mut self.sources {
            source.archive_path = base.join(&source.archive_path);
        }
        self
    }
}

/// Maps canonical URLs starting with `url_prefix`
/// to paths under `subtree` (relative to the output root).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub url_prefix: String,
    pub subtree: Utf8PathBuf,
}

impl UrlMapping {
    pub fn new<S: Into<String>, P: Into<Utf8PathBuf>>(url_prefix: S, subtree: P) -> Self {
        Self {
            url_prefix: url_prefix.into(),
            subtree: subtree.into(),
        }
    }

    /// The mappings for the two suites we extract.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("https://w3c.github.io/rdf-tests/", "rdf-tests"),
            Self::new("https://w3c.github.io/N3/tests/", "N3/tests"),
        ]
    }
}
