use crate::prelude::*;

use rand::Rng;

/// Signs transfers with a [`KeyManager`] and broadcasts them through a
/// [`JsonRpcProvider`].
#[derive(Debug, Clone, Getters, Builder)]
pub struct PocketTransactionBuilder {
    #[getset(get = "pub")]
    provider: JsonRpcProvider,

    #[getset(get = "pub")]
    signer: KeyManager,

    #[builder(default)]
    #[getset(get = "pub")]
    chain_id: ChainId,
}

fn new_entropy() -> i64 {
    rand::thread_rng().gen_range(0..i64::MAX)
}

impl PocketTransactionBuilder {
    fn sign_and_encode(&self, memo: &str, msg: TransferMsg) -> Result<String, SubmitError> {
        let unsigned = UnsignedSend::builder()
            .msg(msg)
            .chain_id(self.chain_id)
            .memo(memo)
            .entropy(new_entropy())
            .build();
        let signature = self.signer.sign(&unsigned.sign_bytes()?);
        let raw = unsigned.into_signed_bytes(self.signer.public_key(), signature)?;
        Ok(hex::encode(raw))
    }
}

impl TransactionBuilder for PocketTransactionBuilder {
    fn send(&self, to_address: &str, amount: &Amount) -> TransferMsg {
        TransferMsg::builder()
            .from_address(self.signer.address())
            .to_address(to_address)
            .amount(amount.clone())
            .build()
    }

    async fn submit(&self, memo: &str, msg: TransferMsg) -> Result<TxResponse, SubmitError> {
        let raw_hex_bytes = self.sign_and_encode(memo, msg)?;
        self.provider
            .send_transaction(self.signer.address(), &raw_hex_bytes)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> PocketTransactionBuilder {
        let provider =
            JsonRpcProvider::single_node(Url::parse("http://127.0.0.1:1").unwrap()).unwrap();
        PocketTransactionBuilder::builder()
            .provider(provider)
            .signer(KeyManager::from_private_key(&[3u8; 32]).unwrap())
            .chain_id(ChainId::Testnet)
            .build()
    }

    #[test]
    fn send_is_from_the_signer() {
        let builder = builder();
        let msg = builder.send(&"cd".repeat(20), &Amount::parse("5").unwrap());
        assert_eq!(msg.from_address(), builder.signer().address());
        assert_eq!(msg.to_address(), &"cd".repeat(20));
        assert_eq!(msg.amount().as_str(), "5");
    }

    #[test]
    fn encoded_tx_is_hex() {
        let builder = builder();
        let msg = builder.send(&"cd".repeat(20), &Amount::parse("5").unwrap());
        let raw = builder.sign_and_encode("memo", msg).unwrap();
        assert!(hex::decode(raw).is_ok());
    }

    #[tokio::test]
    async fn malformed_recipient_fails_before_network() {
        let builder = builder();
        let msg = builder.send("zz", &Amount::parse("5").unwrap());
        assert_eq!(
            builder.submit("memo", msg).await.unwrap_err(),
            SubmitError::InvalidAddress {
                address: "zz".to_owned()
            }
        );
    }
}
