//! Orchestration of a single pin operation: read the manifest, run the
//! rewrite engine over its lines, then stage the result.

use crate::cli::PinArgs;
use crate::engine::{Constraint, Target, rewrite};
use crate::error::{PinError, Result};
use crate::stage;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

pub fn execute(args: PinArgs) -> Result<()> {
    // clap's arg group already enforces exactly one, but the library path
    // must not assume it was called through the CLI.
    let constraint = Constraint::select(args.branch, args.version, args.revision)
        .ok_or(PinError::MissingConstraint)?;
    let target = Target::new(&args.name, constraint)?;

    log::debug!(
        "pinning {} in {} (dry_run={})",
        target.name(),
        args.manifest_path.display(),
        args.dry_run
    );

    let file = File::open(&args.manifest_path).map_err(|source| PinError::ReadManifest {
        path: args.manifest_path.clone(),
        source,
    })?;

    let output = rewrite(BufReader::new(file).lines(), &target)?;

    if args.dry_run {
        stage::preview(io::stdout().lock(), &output)?;
    } else {
        stage::replace(&args.manifest_path, &output)?;
        log::debug!("wrote {} lines", output.len());
    }

    Ok(())
}
