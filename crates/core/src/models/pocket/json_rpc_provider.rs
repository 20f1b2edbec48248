use crate::prelude::*;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const RAW_TX_ROUTE: &str = "/v1/client/rawtx";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Serialize)]
struct RawTxRequest<'a> {
    address: &'a str,
    raw_hex_bytes: &'a str,
}

#[derive(Debug, Deserialize)]
struct RawTxResponse {
    #[serde(default)]
    txhash: Option<String>,
    #[serde(default)]
    code: Option<u32>,
    #[serde(default)]
    raw_log: Option<String>,
}

/// Talks to a Pocket node over its HTTP JSON-RPC interface.
#[derive(Debug, Clone, Getters)]
pub struct JsonRpcProvider {
    #[getset(get = "pub")]
    rpc_url: Url,

    /// Nodes allowed to broadcast on our behalf.
    #[getset(get = "pub")]
    dispatchers: Vec<Url>,

    client: reqwest::Client,
}

impl JsonRpcProvider {
    pub fn new(rpc_url: Url, dispatchers: Vec<Url>) -> Result<Self, BootstrapBatchSenderError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| BootstrapBatchSenderError::CreateProviderFailure {
                underlying: e.to_chain_string(),
            })?;
        Ok(Self {
            rpc_url,
            dispatchers,
            client,
        })
    }

    /// Provider that also uses `rpc_url` as its only dispatcher.
    pub fn single_node(rpc_url: Url) -> Result<Self, BootstrapBatchSenderError> {
        Self::new(rpc_url.clone(), vec![rpc_url])
    }

    /// Appended rather than joined, provider urls often end with an app id
    /// that `Url::join` would replace.
    fn route(base: &Url, route: &str) -> Result<Url, SubmitError> {
        let joined = format!("{}{}", base.as_str().trim_end_matches('/'), route);
        Url::parse(&joined).map_err(|e| SubmitError::Encoding {
            underlying: e.to_string(),
        })
    }

    fn broadcast_url(&self) -> Result<Url, SubmitError> {
        let node = self.dispatchers.first().unwrap_or(&self.rpc_url);
        Self::route(node, RAW_TX_ROUTE)
    }

    pub async fn send_transaction(
        &self,
        signer_address: &str,
        raw_hex_bytes: &str,
    ) -> Result<TxResponse, SubmitError> {
        let url = self.broadcast_url()?;
        debug!("Broadcasting {} bytes to {}", raw_hex_bytes.len() / 2, url);
        let response = self
            .client
            .post(url)
            .json(&RawTxRequest {
                address: signer_address,
                raw_hex_bytes,
            })
            .send()
            .await
            .map_err(|e| SubmitError::Network {
                underlying: e.to_chain_string(),
            })?;
        let status = response.status();
        let body = response.text().await.map_err(|e| SubmitError::Network {
            underlying: e.to_chain_string(),
        })?;
        parse_raw_tx_response(status, &body)
    }
}

fn parse_raw_tx_response(status: StatusCode, body: &str) -> Result<TxResponse, SubmitError> {
    if !status.is_success() {
        return Err(SubmitError::HttpStatus {
            status: status.as_u16(),
            body: body.to_owned(),
        });
    }
    let parsed: RawTxResponse =
        serde_json::from_str(body).map_err(|_| SubmitError::MissingTxHash {
            body: body.to_owned(),
        })?;
    if let Some(code) = parsed.code.filter(|code| *code != 0) {
        return Err(SubmitError::Rejected {
            code,
            raw_log: parsed.raw_log.unwrap_or_default(),
        });
    }
    match parsed.txhash {
        Some(tx_hash) if !tx_hash.is_empty() => Ok(TxResponse::builder().tx_hash(tx_hash).build()),
        _ => Err(SubmitError::MissingTxHash {
            body: body.to_owned(),
        }),
    }
}
