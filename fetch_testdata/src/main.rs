use anyhow::*;
use camino::Utf8Path;
use log::*;
use structopt::*;

use w3c_testdata::PrepareConfig;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "fetch-testdata",
    about = "Downloads the W3C test suites into w3c-testdata's testdata/ directory"
)]
struct Opt {
    /// Pass multiple times for additional verbosity (info, debug, trace)
    #[structopt(short, long, parse(from_occurrences))]
    verbosity: usize,
}

fn main() -> Result<()> {
    let args = Opt::from_args();

    let mut errlog = stderrlog::new();
    errlog.verbosity(args.verbosity + 1);
    errlog.init()?;

    // Always fill the library's own testdata/, wherever we're run from.
    let crate_root = Utf8Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .context("fetch-testdata should live inside the w3c-testdata crate")?;

    let config = PrepareConfig::default().rooted_at(crate_root);
    info!("Preparing test data under {}", config.output_root);

    w3c_testdata::prepare(&config).context("Couldn't prepare test data")
}
