use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::prelude::*;
use chrono::Utc;

/// Walks through the whole batch: collect, validate, confirm, send, report.
///
/// Returns the path of the results file, or `None` if the user declined.
pub async fn run_batch_send<R: BufRead, W: Write>(
    cli_args: &CliArgs,
    prompter: &mut Prompter<R, W>,
) -> Result<Option<PathBuf>, CliError> {
    let profile = Profile::try_from(cli_args)?;
    let inputs = collect_inputs(cli_args, &profile, prompter)?;
    debug!("Collected inputs: {inputs:?}");

    let request = preflight(inputs, &profile, cli_args)?;
    if !confirm(&request, cli_args.yes, prompter)? {
        return Ok(None);
    }

    let records = send_batch(&request).await?;
    let path = save_report(&records, &cli_args.output_dir, Utc::now())?;
    prompter.say(&format!("Results saved to {}", path.display()))?;
    Ok(Some(path))
}

pub async fn run(cli_args: CliArgs) -> ExitCode {
    let stdin = std::io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());

    match run_batch_send(&cli_args, &mut prompter).await {
        Ok(Some(_)) => {
            info!("{BINARY_NAME} ran successfully");
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error running {BINARY_NAME}: {e}");
            ExitCode::FAILURE
        }
    }
}
