use std::future::Future;

use crate::prelude::*;

/// The seam between the batch loop and the chain.
///
/// `send` only describes the transfer; nothing touches the network until
/// `submit` is awaited.
pub trait TransactionBuilder {
    fn send(&self, to_address: &str, amount: &Amount) -> TransferMsg;

    fn submit(
        &self,
        memo: &str,
        msg: TransferMsg,
    ) -> impl Future<Output = Result<TxResponse, SubmitError>> + Send;
}
