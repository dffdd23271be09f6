//! Decides which archive entries make it into the test data tree.

/// Paths under these prefixes are test manifests and their fixtures.
const TEST_PREFIXES: &[&str] = &[
    "rdf-tests/rdf",
    "N3/tests/manifest.ttl",
    "N3/tests/TurtleTests",
    "N3/tests/N3Tests",
];

/// Returns true if the entry at the given (rewritten, relative) path
/// should be extracted.
///
/// Nested archives are always rejected, licenses and readmes are always kept,
/// and everything else has to live under one of the known test directories.
pub fn include(path: &str) -> bool {
    if path.ends_with(".zip") || path.ends_with(".tar.gz") {
        return false;
    }
    if path.contains("LICENSE") || path.contains("README") {
        return true;
    }
    TEST_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}
