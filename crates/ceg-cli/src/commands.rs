use anyhow::Result;
use tracing::info_span;

use ceg_cli::pipeline::{RunOptions, inspect, resolve_config, run};
use ceg_cli::types::{EntityInspection, RunResult};
use ceg_output::OverwritePolicy;

use crate::cli::{GenerateArgs, InspectArgs};

pub fn run_generate(args: &GenerateArgs) -> Result<RunResult> {
    let config = resolve_config(
        args.config.as_deref(),
        args.input.as_deref(),
        args.output_dir.as_deref(),
    )?;
    let options = RunOptions {
        dry_run: args.dry_run,
        overwrite: if args.no_overwrite {
            OverwritePolicy::Fail
        } else {
            OverwritePolicy::Overwrite
        },
        ..RunOptions::default()
    };
    run(&config, &options)
}

pub fn run_inspect(args: &InspectArgs) -> Result<Vec<EntityInspection>> {
    let span = info_span!("inspect", input = %args.input.display());
    let _guard = span.enter();
    inspect(&args.input)
}
