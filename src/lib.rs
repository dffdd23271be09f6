//! w3c-testdata bundles the W3C RDF and N3 test suites
//! and serves their files by canonical URL:
//!
//! ```no_run
//! # use std::io::Read;
//! # use w3c_testdata::*;
//! let data = TestData::new(DirectorySource::new("testdata/github.com/w3c"));
//! let mut manifest = data.get("https://w3c.github.io/rdf-tests/rdf/rdf11/rdf-turtle/manifest.ttl")?;
//! let mut turtle = String::new();
//! manifest.read_to_string(&mut turtle)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! With the `bundled` feature, the tree is embedded in the library
//! and [`get()`] does the same without touching the filesystem.
//!
//! The tree itself comes from a one-shot preparation step
//! (see the `fetch-testdata` tool) that downloads each suite's
//! GitHub archive and keeps only the manifests, fixtures, and licenses:
//!
//! ```no_run
//! # use w3c_testdata::*;
//! prepare(&PrepareConfig::default())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Only files under a few known test directories survive extraction
//! (see [`filter::include()`]), and no entry is ever written outside the
//! output directory.

pub mod config;
pub mod extract;
pub mod fetch;
pub mod filter;
pub mod lookup;
pub mod paths;
pub mod prepare;
pub mod result;
pub mod source;

pub use config::{ArchiveSource, PrepareConfig, UrlMapping};
pub use lookup::{TestData, UrlMapper};
pub use prepare::prepare;
pub use result::{DataError, DataResult};
pub use source::{DataSource, DirectorySource, EmbeddedSource};

mod pump;

#[cfg(feature = "bundled")]
mod bundled {
    use std::io::{self, Read};

    use camino::Utf8Path;
    use include_dir::{include_dir, Dir};

    use crate::lookup::TestData;
    use crate::result::*;
    use crate::source::{DataSource, EmbeddedSource};

    /// The extracted `rdf-tests` suite, embedded at compile time.
    pub static RDF_TESTS: Dir<'static> =
        include_dir!("$CARGO_MANIFEST_DIR/testdata/github.com/w3c/rdf-tests");

    /// The extracted `N3/tests` suite, embedded at compile time.
    pub static N3_TESTS: Dir<'static> =
        include_dir!("$CARGO_MANIFEST_DIR/testdata/github.com/w3c/N3/tests");

    static SUBTREES: [(&str, EmbeddedSource); 2] = [
        ("rdf-tests", EmbeddedSource::new(&RDF_TESTS)),
        ("N3/tests", EmbeddedSource::new(&N3_TESTS)),
    ];

    /// Only the subtrees URLs can map to are embedded,
    /// so paths are dispatched on their leading components.
    struct Bundled;

    impl DataSource for Bundled {
        fn open_by_path(&self, path: &Utf8Path) -> DataResult<Box<dyn Read + '_>> {
            for (subtree, source) in &SUBTREES {
                if let Ok(rest) = path.strip_prefix(subtree) {
                    return source.open_by_path(rest).map_err(|e| match e {
                        DataError::NotFound(_) => DataError::NotFound(path.to_owned()),
                        other => other,
                    });
                }
            }
            Err(DataError::NotFound(path.to_owned()))
        }
    }

    /// Returns the contents of the bundled file `url` refers to.
    ///
    /// Recognizes `https://w3c.github.io/rdf-tests/...`
    /// and `https://w3c.github.io/N3/tests/...`.
    pub fn get(url: &str) -> DataResult<io::Cursor<Vec<u8>>> {
        TestData::new(Bundled).get(url)
    }
}

#[cfg(feature = "bundled")]
pub use bundled::{get, N3_TESTS, RDF_TESTS};
