use crate::prelude::*;

impl BatchSender<PocketTransactionBuilder> {
    /// Builds the provider, signer and transaction builder for `request`.
    ///
    /// Fails if the wallet cannot be unlocked with the passphrase or the
    /// HTTP client cannot be created. Nothing is sent yet.
    pub fn bootstrap(request: &BatchRequest) -> Result<Self, Error> {
        let provider = JsonRpcProvider::single_node(request.rpc_url().clone())?;

        let signer = KeyManager::from_ppk(request.passphrase(), request.credential().as_str())
            .map_err(BootstrapBatchSenderError::from)?;
        info!("Sending from wallet {}", signer.address());

        let transaction_builder = PocketTransactionBuilder::builder()
            .provider(provider)
            .signer(signer)
            .chain_id(*request.chain_id())
            .build();

        Ok(Self::builder()
            .transaction_builder(transaction_builder)
            .amount(request.amount().clone())
            .memo(request.memo().clone())
            .max_in_flight(*request.max_in_flight())
            .build())
    }
}

/// Sends `request.amount()` to every recipient of `request`.
///
/// Returns one record per recipient, in recipient order. Only bootstrap
/// failures are errors; failed transfers are recorded and skipped.
pub async fn send_batch(request: &BatchRequest) -> Result<Vec<SubmissionRecord>> {
    let sender = BatchSender::bootstrap(request)?;
    Ok(sender.send_all(request.recipients()).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(credential: &str, passphrase: &str) -> BatchRequest {
        BatchRequest::builder()
            .credential(Credential::from(credential.to_owned()))
            .passphrase(Passphrase::new(passphrase).unwrap())
            .recipients(vec![RecipientAddress::new("ab".repeat(20))])
            .amount(Amount::parse("1").unwrap())
            .rpc_url(Url::parse("http://127.0.0.1:1").unwrap())
            .chain_id(ChainId::Testnet)
            .build()
    }

    #[test]
    fn bootstrap_fails_on_unreadable_wallet() {
        let Err(err) = BatchSender::bootstrap(&request("{}", "pass")) else {
            panic!("bootstrap should fail")
        };
        assert!(matches!(
            err,
            Error::Bootstrap(BootstrapBatchSenderError::KeyImport(
                KeyManagerError::MalformedPpk { .. }
            ))
        ));
    }

    #[test]
    fn bootstrap_carries_request_settings() {
        let passphrase = Passphrase::new("pass").unwrap();
        let key_manager = KeyManager::create_random();
        let ppk = key_manager.to_ppk(&passphrase, "").unwrap();

        let sender = BatchSender::bootstrap(&request(&ppk, "pass")).unwrap();
        assert_eq!(
            sender.transaction_builder().signer().address(),
            key_manager.address()
        );
        assert_eq!(*sender.transaction_builder().chain_id(), ChainId::Testnet);
        assert_eq!(sender.memo(), DEFAULT_MEMO);
        assert_eq!(sender.max_in_flight().get(), 1);
    }
}
