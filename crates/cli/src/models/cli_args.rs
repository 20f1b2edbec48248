use std::path::PathBuf;

use crate::prelude::*;
use clap::{Parser, ValueEnum};

pub const BINARY_NAME: &str = "pokt-batch-send";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputSource {
    /// Read the wallet and the addresses from `--wallet` and `--addresses`.
    FixedPaths,
    /// Ask for the wallet and addresses file paths on the prompt.
    Interactive,
}

/// Send the same amount of uPOKT to every address of a CSV file.
///
/// Asks for the wallet passphrase, the amount and the RPC provider url, checks
/// the wallet file and the addresses file, then submits one transfer per
/// address, one after the other. The outcome of every transfer is written to
/// `<output-dir>/<timestamp>-results.csv`.
#[derive(Parser, Debug)]
#[command(name = BINARY_NAME, author, version, about, long_about = None)]
pub struct CliArgs {
    /// Where the wallet file and the addresses file are taken from.
    #[arg(long, value_enum, default_value_t = InputSource::FixedPaths)]
    pub input_source: InputSource,

    /// Wallet (PPK) file, used with `--input-source fixed-paths`.
    #[arg(long, default_value = DEFAULT_WALLET_PATH)]
    pub wallet: PathBuf,

    /// Addresses CSV file, used with `--input-source fixed-paths`.
    #[arg(long, default_value = DEFAULT_ADDRESSES_PATH)]
    pub addresses: PathBuf,

    /// Exact length every address in the CSV file must have.
    #[arg(long, default_value_t = DEFAULT_ADDRESS_LENGTH)]
    pub address_length: usize,

    /// Network to sign for, one of `mainnet`, `testnet`, `localnet`.
    #[arg(long, env = "chainId")]
    pub chain_id: Option<ChainId>,

    /// Directory the results file is written to, created if missing.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Number of transfers awaiting an answer at once. Keep this at 1 unless
    /// you own the RPC node.
    #[arg(long, default_value_t = 1)]
    pub max_in_flight: usize,

    /// Memo attached to every transfer.
    #[arg(long, default_value = DEFAULT_MEMO)]
    pub memo: String,

    /// Amount of uPOKT per address, asked for when not given.
    #[arg(long)]
    pub amount: Option<String>,

    /// RPC provider url, asked for when not given.
    #[arg(long)]
    pub rpc_url: Option<String>,

    /// Do not ask for confirmation before sending.
    #[arg(long, short = 'y', default_value_t = false)]
    pub yes: bool,
}

impl TryFrom<&CliArgs> for Profile {
    type Error = InvalidCliArgs;

    fn try_from(cli_args: &CliArgs) -> Result<Self, Self::Error> {
        if cli_args.address_length == 0 {
            return Err(InvalidCliArgs::AddressLengthMustBePositive);
        }
        if cli_args.max_in_flight == 0 {
            return Err(InvalidCliArgs::MaxInFlightCannotBeZero);
        }

        let input_mode = match cli_args.input_source {
            InputSource::FixedPaths => InputMode::FixedPaths {
                wallet: cli_args.wallet.clone(),
                addresses: cli_args.addresses.clone(),
            },
            InputSource::Interactive => InputMode::Interactive,
        };

        Ok(Profile::builder()
            .address_length(cli_args.address_length)
            .default_chain_id(cli_args.chain_id.unwrap_or_default())
            .input_mode(input_mode)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once(BINARY_NAME).chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_match_the_input_folder_layout() {
        let cli_args = parse(&[]);
        assert_eq!(cli_args.input_source, InputSource::FixedPaths);
        assert_eq!(cli_args.output_dir, PathBuf::from("output"));
        assert_eq!(cli_args.memo, "Nodies Batch Send Script");

        let profile = Profile::try_from(&cli_args).unwrap();
        assert_eq!(*profile.address_length(), 40);
        assert_eq!(
            profile.input_mode(),
            &InputMode::FixedPaths {
                wallet: PathBuf::from("input/wallet.json"),
                addresses: PathBuf::from("input/addresses-template.csv"),
            }
        );
    }

    #[test]
    fn interactive_short_address_testnet() {
        let cli_args = parse(&[
            "--input-source",
            "interactive",
            "--address-length",
            "20",
            "--chain-id",
            "testnet",
        ]);
        let profile = Profile::try_from(&cli_args).unwrap();
        assert_eq!(*profile.address_length(), 20);
        assert_eq!(*profile.default_chain_id(), ChainId::Testnet);
        assert_eq!(profile.input_mode(), &InputMode::Interactive);
    }

    #[test]
    fn zero_limits_are_rejected() {
        assert!(matches!(
            Profile::try_from(&parse(&["--address-length", "0"])),
            Err(InvalidCliArgs::AddressLengthMustBePositive)
        ));
        assert!(matches!(
            Profile::try_from(&parse(&["--max-in-flight", "0"])),
            Err(InvalidCliArgs::MaxInFlightCannotBeZero)
        ));
    }

    #[test]
    fn unknown_chain_id_fails_to_parse() {
        assert!(CliArgs::try_parse_from([BINARY_NAME, "--chain-id", "devnet"]).is_err());
    }
}
