use std::path::PathBuf;

/// Answers as typed, before any validation.
#[derive(Clone, PartialEq, Eq, derive_more::Debug)]
pub struct RawInputs {
    pub wallet_path: PathBuf,
    pub addresses_path: PathBuf,
    #[debug(skip)]
    pub passphrase: String,
    pub amount: String,
    pub rpc_url: String,
}
