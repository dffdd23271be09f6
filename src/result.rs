//! Error types and the related `Result<T>`

use std::io;

use camino::Utf8PathBuf;
use piz::result::ZipError;
use thiserror::Error;

pub type DataResult<T> = Result<T, DataError>;

#[derive(Debug, Error)]
pub enum DataError {
    /// The HTTP request failed, returned an error status,
    /// or the connection dropped while reading the body.
    ///
    /// `source` is a `reqwest::Error` or an `io::Error`.
    #[error("Couldn't fetch {url}")]
    Network {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The archive couldn't be opened, parsed, or decompressed.
    #[error("Couldn't read archive {archive}")]
    Archive {
        archive: Utf8PathBuf,
        #[source]
        source: ZipError,
    },

    /// An archive entry would be written outside the output root.
    #[error("Invalid output path: {0}")]
    PathSafety(Utf8PathBuf),

    /// Creating, writing, or removing something on disk failed.
    #[error("I/O error at {path}")]
    Filesystem {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    /// The URL doesn't start with any known test suite prefix.
    #[error("Cannot map URL to the test data tree: {0}")]
    UnmappableUrl(String),

    /// The URL mapped to a path that isn't a file in the test data tree.
    #[error("No file in the test data tree at {0}")]
    NotFound(Utf8PathBuf),
}

impl DataError {
    pub(crate) fn filesystem<P: Into<Utf8PathBuf>>(path: P, source: io::Error) -> Self {
        DataError::Filesystem {
            path: path.into(),
            source,
        }
    }
}
