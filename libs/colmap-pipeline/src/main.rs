//! `colmap` command-line entry point.

use colmap_pipeline::{run, Invocation, PipelineError};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let invocation = match Invocation::parse(std::env::args().skip(1)) {
        Ok(invocation) => invocation,
        Err(PipelineError::Usage(message)) => {
            eprintln!("{message}");
            return ExitCode::from(2);
        }
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&invocation) {
        Ok(summary) if summary.failed == 0 => {
            log::info!(
                "{} finished: {} processed, {} missing",
                invocation.command,
                summary.processed,
                summary.missing
            );
            ExitCode::SUCCESS
        }
        Ok(summary) => {
            log::error!("{} finished with {} failures", invocation.command, summary.failed);
            ExitCode::FAILURE
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
