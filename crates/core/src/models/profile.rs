use std::path::PathBuf;

use crate::prelude::*;

pub const DEFAULT_ADDRESS_LENGTH: usize = 40;
pub const DEFAULT_WALLET_PATH: &str = "input/wallet.json";
pub const DEFAULT_ADDRESSES_PATH: &str = "input/addresses-template.csv";

/// Where the wallet file and the recipients file come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Read from fixed locations, never asked for.
    FixedPaths { wallet: PathBuf, addresses: PathBuf },
    /// Asked for on the prompt.
    Interactive,
}

impl Default for InputMode {
    fn default() -> Self {
        Self::FixedPaths {
            wallet: PathBuf::from(DEFAULT_WALLET_PATH),
            addresses: PathBuf::from(DEFAULT_ADDRESSES_PATH),
        }
    }
}

/// Everything that differs between deployments of the batch sender.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Builder)]
pub struct Profile {
    #[builder(default = DEFAULT_ADDRESS_LENGTH)]
    #[getset(get = "pub")]
    address_length: usize,

    #[builder(default)]
    #[getset(get = "pub")]
    default_chain_id: ChainId,

    #[builder(default)]
    #[getset(get = "pub")]
    input_mode: InputMode,
}

impl Default for Profile {
    fn default() -> Self {
        Self::builder().build()
    }
}
