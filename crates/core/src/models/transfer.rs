use crate::prelude::*;

/// A single token transfer, ready to be signed and submitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Builder, Getters, derive_more::Display)]
#[display("Transfer {{ from: {from_address}, to: {to_address}, amount: {amount} }}")]
pub struct TransferMsg {
    #[builder(into)]
    #[getset(get = "pub")]
    from_address: String,

    #[builder(into)]
    #[getset(get = "pub")]
    to_address: String,

    #[getset(get = "pub")]
    amount: Amount,
}

/// What the chain answered for an accepted transaction.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Getters)]
pub struct TxResponse {
    #[builder(into)]
    #[getset(get = "pub")]
    tx_hash: String,
}
