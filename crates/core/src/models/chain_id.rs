/// Pocket network the transactions are signed for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ChainId {
    #[default]
    #[display("mainnet")]
    Mainnet,
    #[display("testnet")]
    Testnet,
    #[display("localnet")]
    Localnet,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown chain id `{bad_value}`, expected one of mainnet, testnet, localnet")]
pub struct UnknownChainId {
    pub bad_value: String,
}

impl std::str::FromStr for ChainId {
    type Err = UnknownChainId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Self::Mainnet),
            "testnet" => Ok(Self::Testnet),
            "localnet" => Ok(Self::Localnet),
            _ => Err(UnknownChainId {
                bad_value: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_what_it_displays() {
        for chain_id in [ChainId::Mainnet, ChainId::Testnet, ChainId::Localnet] {
            assert_eq!(chain_id.to_string().parse::<ChainId>(), Ok(chain_id));
        }
    }

    #[test]
    fn rejects_unknown() {
        assert!("Mainnet".parse::<ChainId>().is_err());
    }
}
