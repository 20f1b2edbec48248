//! Wire format of a Pocket `pos/Send` transaction.
//!
//! The signature covers the amino-style JSON sign document, while the bytes
//! sent to the node are the protobuf encoded `ProtoStdTx`.

use crate::prelude::*;

use prost::Message;
use serde_json::json;

pub(crate) const SEND_MSG_TYPE: &str = "pos/Send";
pub(crate) const SEND_MSG_TYPE_URL: &str = "/x.nodes.MsgSend";
pub(crate) const FEE_DENOM: &str = "upokt";
pub(crate) const DEFAULT_FEE: &str = "10000";

#[derive(Clone, PartialEq, Message)]
pub(crate) struct ProtoAny {
    #[prost(string, tag = "1")]
    pub type_url: String,
    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,
}

#[derive(Clone, PartialEq, Message)]
pub(crate) struct ProtoMsgSend {
    #[prost(bytes = "vec", tag = "1")]
    pub from_address: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub to_address: Vec<u8>,
    #[prost(string, tag = "3")]
    pub amount: String,
}

#[derive(Clone, PartialEq, Message)]
pub(crate) struct ProtoCoin {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(string, tag = "2")]
    pub amount: String,
}

#[derive(Clone, PartialEq, Message)]
pub(crate) struct ProtoStdSignature {
    #[prost(bytes = "vec", tag = "1")]
    pub public_key: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub signature: Vec<u8>,
}

#[derive(Clone, PartialEq, Message)]
pub(crate) struct ProtoStdTx {
    #[prost(message, optional, tag = "1")]
    pub msg: Option<ProtoAny>,
    #[prost(message, repeated, tag = "2")]
    pub fee: Vec<ProtoCoin>,
    #[prost(message, optional, tag = "3")]
    pub signature: Option<ProtoStdSignature>,
    #[prost(string, tag = "4")]
    pub memo: String,
    #[prost(int64, tag = "5")]
    pub entropy: i64,
}

fn address_bytes(address: &str) -> Result<Vec<u8>, SubmitError> {
    hex::decode(address).map_err(|_| SubmitError::InvalidAddress {
        address: address.to_owned(),
    })
}

/// A transfer together with everything that gets signed alongside it.
#[derive(Debug, Clone, Builder)]
pub(crate) struct UnsignedSend {
    msg: TransferMsg,
    chain_id: ChainId,
    #[builder(into)]
    memo: String,
    entropy: i64,
    #[builder(into, default = DEFAULT_FEE.to_owned())]
    fee: String,
}

impl UnsignedSend {
    /// Keys are sorted, as the node re-serializes the document that way
    /// before verifying.
    pub(crate) fn sign_bytes(&self) -> Result<Vec<u8>, SubmitError> {
        let doc = json!({
            "chain_id": self.chain_id.to_string(),
            "entropy": self.entropy,
            "fee": [{ "amount": self.fee, "denom": FEE_DENOM }],
            "memo": self.memo,
            "msg": {
                "type": SEND_MSG_TYPE,
                "value": {
                    "amount": self.msg.amount().as_str(),
                    "from_address": self.msg.from_address(),
                    "to_address": self.msg.to_address(),
                },
            },
        });
        serde_json::to_vec(&doc).map_err(|e| SubmitError::Encoding {
            underlying: e.to_string(),
        })
    }

    pub(crate) fn into_signed_bytes(
        self,
        public_key: Vec<u8>,
        signature: Vec<u8>,
    ) -> Result<Vec<u8>, SubmitError> {
        let send = ProtoMsgSend {
            from_address: address_bytes(self.msg.from_address())?,
            to_address: address_bytes(self.msg.to_address())?,
            amount: self.msg.amount().to_string(),
        };
        let tx = ProtoStdTx {
            msg: Some(ProtoAny {
                type_url: SEND_MSG_TYPE_URL.to_owned(),
                value: send.encode_to_vec(),
            }),
            fee: vec![ProtoCoin {
                denom: FEE_DENOM.to_owned(),
                amount: self.fee,
            }],
            signature: Some(ProtoStdSignature {
                public_key,
                signature,
            }),
            memo: self.memo,
            entropy: self.entropy,
        };
        Ok(tx.encode_to_vec())
    }
}
