use serde::{Deserialize, Serialize};

/// Networks the registry knows about.
///
/// Registry lookups take a raw `u64` chain id so that an unrecognized
/// network degrades to "no tokens supported" rather than a type error;
/// callers are expected to source ids from these constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainId {
    /// Ethereum Sepolia testnet (chain ID 11155111).
    #[serde(rename = "ethereum-sepolia")]
    EthereumSepolia,
    /// Base Sepolia testnet (chain ID 84532).
    #[serde(rename = "base-sepolia")]
    BaseSepolia,
    /// Arbitrum Sepolia testnet (chain ID 421614).
    #[serde(rename = "arbitrum-sepolia")]
    ArbitrumSepolia,
    /// HyperEVM mainnet (chain ID 999).
    #[serde(rename = "hyperevm")]
    HyperEvm,
}

impl ChainId {
    /// The EIP-155 chain id.
    pub fn id(self) -> u64 {
        match self {
            ChainId::EthereumSepolia => 11155111,
            ChainId::BaseSepolia => 84532,
            ChainId::ArbitrumSepolia => 421614,
            ChainId::HyperEvm => 999,
        }
    }

    /// Look up a known network by chain id.
    pub fn from_id(chain_id: u64) -> Option<ChainId> {
        match chain_id {
            11155111 => Some(ChainId::EthereumSepolia),
            84532 => Some(ChainId::BaseSepolia),
            421614 => Some(ChainId::ArbitrumSepolia),
            999 => Some(ChainId::HyperEvm),
            _ => None,
        }
    }

    /// Human-readable network name.
    pub fn name(self) -> &'static str {
        match self {
            ChainId::EthereumSepolia => "Ethereum Sepolia",
            ChainId::BaseSepolia => "Base Sepolia",
            ChainId::ArbitrumSepolia => "Arbitrum Sepolia",
            ChainId::HyperEvm => "HyperEVM",
        }
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
