use std::io::{BufRead, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::prelude::*;

pub const WALLET_PATH_QUESTION: &str = "Enter the path to your wallet file: ";
pub const ADDRESSES_PATH_QUESTION: &str = "Enter the path to your addresses csv file: ";
pub const PASSPHRASE_QUESTION: &str = "Enter your wallet passphrase: ";
pub const AMOUNT_QUESTION: &str =
    "Enter the uPOKT amount to send each receiver. [Note this is not POKT amount]: ";
pub const RPC_URL_QUESTION: &str = "Enter your POKT RPC Provider URL: ";
pub const CONFIRM_QUESTION: &str = "Does this seem correct? Confirm by typing yes: ";

const CONFIRMATIONS: [&str; 2] = ["y", "yes"];

/// Asks for whatever the profile and the flags leave open.
pub fn collect_inputs<R: BufRead, W: Write>(
    cli_args: &CliArgs,
    profile: &Profile,
    prompter: &mut Prompter<R, W>,
) -> Result<RawInputs, CliError> {
    let (wallet_path, addresses_path) = match profile.input_mode() {
        InputMode::FixedPaths { wallet, addresses } => (wallet.clone(), addresses.clone()),
        InputMode::Interactive => (
            PathBuf::from(prompter.ask(WALLET_PATH_QUESTION)?.trim()),
            PathBuf::from(prompter.ask(ADDRESSES_PATH_QUESTION)?.trim()),
        ),
    };

    let passphrase = prompter.ask(PASSPHRASE_QUESTION)?;
    let amount = match &cli_args.amount {
        Some(amount) => amount.clone(),
        None => prompter.ask(AMOUNT_QUESTION)?,
    };
    let rpc_url = match &cli_args.rpc_url {
        Some(rpc_url) => rpc_url.clone(),
        None => prompter.ask(RPC_URL_QUESTION)?,
    };

    Ok(RawInputs {
        wallet_path,
        addresses_path,
        passphrase,
        amount,
        rpc_url,
    })
}

fn read_file(path: &Path) -> Result<String, ValidationError> {
    std::fs::read_to_string(path).map_err(|e| ValidationError::FileNotReadable {
        path: path.to_path_buf(),
        underlying: e.to_string(),
    })
}

/// Validates `inputs` in a fixed order and stops at the first problem.
pub fn preflight(
    inputs: RawInputs,
    profile: &Profile,
    cli_args: &CliArgs,
) -> Result<BatchRequest, ValidationError> {
    validate_file_path(&inputs.wallet_path)?;
    let passphrase = validate_passphrase(&inputs.passphrase)?;
    validate_file_path(&inputs.addresses_path)?;
    let amount = validate_amount(&inputs.amount)?;
    let rpc_url = validate_rpc_url(&inputs.rpc_url)?;

    let recipients = validate_recipients_csv(
        &read_file(&inputs.addresses_path)?,
        *profile.address_length(),
    )?;
    let credential = read_file(&inputs.wallet_path)?;

    let max_in_flight = NonZeroUsize::new(cli_args.max_in_flight).unwrap_or(NonZeroUsize::MIN);

    Ok(BatchRequest::builder()
        .credential(credential)
        .passphrase(passphrase)
        .recipients(recipients)
        .amount(amount)
        .rpc_url(rpc_url)
        .chain_id(cli_args.chain_id.unwrap_or(*profile.default_chain_id()))
        .memo(cli_args.memo.clone())
        .max_in_flight(max_in_flight)
        .build())
}

/// Shows what is about to happen and asks for a yes.
pub fn confirm<R: BufRead, W: Write>(
    request: &BatchRequest,
    skip_question: bool,
    prompter: &mut Prompter<R, W>,
) -> Result<bool, CliError> {
    prompter.say(&format!(
        "You are sending {} uPOKT each to {} addresses.",
        request.amount(),
        request.recipients().len()
    ))?;
    prompter.say(&format!(
        "With {} as your RPC provider url on {}",
        request.rpc_url(),
        request.chain_id()
    ))?;
    prompter.say("")?;

    if skip_question {
        return Ok(true);
    }
    let answer = prompter.ask(CONFIRM_QUESTION)?;
    if !CONFIRMATIONS.contains(&answer.trim()) {
        warn!("User confirmation failed, user answered with `{answer}`");
        return Ok(false);
    }
    Ok(true)
}
