//! Downloads an archive to disk.

use std::fs::File;
use std::io::BufWriter;

use camino::Utf8Path;
use log::*;

use crate::pump::*;
use crate::result::*;

/// GETs `url` and writes the response body to `dst`, returning its size in bytes.
///
/// `dst` is created, or truncated if it already exists.
/// There are no retries or timeouts, and a failed download may leave
/// a partial file behind.
pub fn fetch<P: AsRef<Utf8Path>>(url: &str, dst: P) -> DataResult<u64> {
    let dst = dst.as_ref();
    info!("Fetching {}", url);

    let network = |e: Box<dyn std::error::Error + Send + Sync>| DataError::Network {
        url: url.to_owned(),
        source: e,
    };

    let mut response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(|e| network(e.into()))?;
    debug!("{} responded {}", url, response.status());

    let file = File::create(dst).map_err(|e| DataError::filesystem(dst, e))?;
    let mut sink = BufWriter::new(file);

    let n = pump(&mut response, &mut sink).map_err(|e| match e {
        PumpError::Read(e) => network(e.into()),
        PumpError::Write(e) => DataError::filesystem(dst, e),
    })?;

    info!("Saved to {} ({} bytes)", dst, n);
    Ok(n)
}
