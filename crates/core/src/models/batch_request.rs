use std::num::NonZeroUsize;

use crate::prelude::*;

pub const DEFAULT_MEMO: &str = "Nodies Batch Send Script";

/// Contents of the wallet file. Only the signer knows how to read it.
#[derive(Clone, PartialEq, Eq, From, derive_more::Debug)]
#[debug("Credential(<{} bytes>)", _0.len())]
pub struct Credential(String);

impl Credential {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A fully validated batch, ready to be sent.
#[derive(Debug, Clone, Getters, Builder)]
pub struct BatchRequest {
    #[builder(into)]
    #[getset(get = "pub")]
    credential: Credential,

    #[getset(get = "pub")]
    passphrase: Passphrase,

    #[getset(get = "pub")]
    recipients: Vec<RecipientAddress>,

    #[getset(get = "pub")]
    amount: Amount,

    #[getset(get = "pub")]
    rpc_url: Url,

    #[builder(default)]
    #[getset(get = "pub")]
    chain_id: ChainId,

    #[builder(into, default = DEFAULT_MEMO.to_owned())]
    #[getset(get = "pub")]
    memo: String,

    /// How many submissions may be awaiting an answer at once.
    #[builder(default = NonZeroUsize::MIN)]
    #[getset(get = "pub")]
    max_in_flight: NonZeroUsize,
}
