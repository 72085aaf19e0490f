//! Per-chain token tables.
//!
//! Compiled-in configuration: the tables are defined once here and never
//! mutated at runtime. Absence of a (chain, symbol) entry means the token
//! is unsupported on that chain, which is a normal outcome rather than an
//! error.

use crate::address::addr_eq;
use crate::chain::ChainId;
use crate::token::TokenSymbol;

/// Where a token lives on a given chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenLocation {
    /// The chain's base currency; transferred via the protocol's built-in
    /// value transfer, no contract address.
    Native,
    /// An ERC-20 deployment at this address.
    Contract(&'static str),
}

struct ChainTokens {
    chain: ChainId,
    entries: &'static [(TokenSymbol, TokenLocation)],
}

/// <https://sepolia.etherscan.io/>
static ETHEREUM_SEPOLIA: &[(TokenSymbol, TokenLocation)] = &[
    (TokenSymbol::Eth, TokenLocation::Native),
    (
        TokenSymbol::Weth,
        TokenLocation::Contract("0xfFf9976782d46CC05630D1f6eBAb18b2324d6B14"),
    ),
    (
        TokenSymbol::Usdc,
        TokenLocation::Contract("0x1c7D4B196Cb0C7B01d743Fbc6116a902379C7238"),
    ),
    (
        TokenSymbol::Wbtc,
        TokenLocation::Contract("0x29f2D40B0605204364af54EC677bD022dA425d03"),
    ),
];

/// <https://sepolia.basescan.org/>
static BASE_SEPOLIA: &[(TokenSymbol, TokenLocation)] = &[
    (TokenSymbol::Eth, TokenLocation::Native),
    (
        TokenSymbol::Weth,
        TokenLocation::Contract("0x4200000000000000000000000000000000000006"),
    ),
    (
        TokenSymbol::Usdc,
        TokenLocation::Contract("0x036CbD53842c5426634e7929541eC2318f3dCF7e"),
    ),
    (
        TokenSymbol::Cent,
        TokenLocation::Contract("0x8eC1877698acF262Fe8aD8A295Ad94D6400521b7"),
    ),
];

/// <https://sepolia.arbiscan.io/>
static ARBITRUM_SEPOLIA: &[(TokenSymbol, TokenLocation)] = &[
    (TokenSymbol::Eth, TokenLocation::Native),
    (
        TokenSymbol::Weth,
        TokenLocation::Contract("0x980B62Da83eFf3D4576C647993b0c1D7faf17c73"),
    ),
    (
        TokenSymbol::Usdc,
        TokenLocation::Contract("0x75faf114eafb1BDbe2F0316DF893fd58CE46AA4d"),
    ),
];

/// <https://hyperevmscan.io/>
static HYPEREVM: &[(TokenSymbol, TokenLocation)] = &[
    (TokenSymbol::Hype, TokenLocation::Native),
    (
        TokenSymbol::Whype,
        TokenLocation::Contract("0x5555555555555555555555555555555555555555"),
    ),
    (
        TokenSymbol::Ubtc,
        TokenLocation::Contract("0x9FDBdA0A5e284c32744D2f17Ee5c74B284993463"),
    ),
    (
        TokenSymbol::Cent,
        TokenLocation::Contract("0x3F5c0A9e7B42D6318c4dE09A1f2b8C5d7E6A4901"),
    ),
];

static REGISTRY: &[ChainTokens] = &[
    ChainTokens {
        chain: ChainId::EthereumSepolia,
        entries: ETHEREUM_SEPOLIA,
    },
    ChainTokens {
        chain: ChainId::BaseSepolia,
        entries: BASE_SEPOLIA,
    },
    ChainTokens {
        chain: ChainId::ArbitrumSepolia,
        entries: ARBITRUM_SEPOLIA,
    },
    ChainTokens {
        chain: ChainId::HyperEvm,
        entries: HYPEREVM,
    },
];

fn chain_entries(chain_id: u64) -> &'static [(TokenSymbol, TokenLocation)] {
    REGISTRY
        .iter()
        .find(|c| c.chain.id() == chain_id)
        .map(|c| c.entries)
        .unwrap_or(&[])
}

/// Where a token lives on a chain, or `None` if the pair is unregistered.
pub fn location(chain_id: u64, symbol: TokenSymbol) -> Option<TokenLocation> {
    chain_entries(chain_id)
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, loc)| *loc)
}

/// The contract address for a token on a chain.
///
/// `None` when the chain is unknown, the token is unsupported on that
/// chain, or the token is the chain's native currency (which has no
/// contract address). The address is returned exactly as registered,
/// checksum case preserved.
pub fn resolve_address(chain_id: u64, symbol: TokenSymbol) -> Option<&'static str> {
    match location(chain_id, symbol)? {
        TokenLocation::Native => None,
        TokenLocation::Contract(addr) => Some(addr),
    }
}

/// Whether a token is usable on a chain, via either a contract deployment
/// or the chain's native currency.
pub fn is_supported(chain_id: u64, symbol: TokenSymbol) -> bool {
    location(chain_id, symbol).is_some()
}

/// Tokens registered for a chain, in registration order.
/// Empty for an unrecognized chain.
pub fn supported_tokens(chain_id: u64) -> Vec<TokenSymbol> {
    chain_entries(chain_id).iter().map(|(s, _)| *s).collect()
}

/// Reverse lookup: which registered token sits at this address on this
/// chain. Comparison is case-insensitive.
pub fn find_token(chain_id: u64, address: &str) -> Option<TokenSymbol> {
    chain_entries(chain_id).iter().find_map(|(s, loc)| match loc {
        TokenLocation::Contract(addr) if addr_eq(addr, address) => Some(*s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::parse_address;

    #[test]
    fn test_resolve_known_pair() {
        assert_eq!(
            resolve_address(ChainId::ArbitrumSepolia.id(), TokenSymbol::Usdc),
            Some("0x75faf114eafb1BDbe2F0316DF893fd58CE46AA4d")
        );
        assert_eq!(
            resolve_address(ChainId::BaseSepolia.id(), TokenSymbol::Weth),
            Some("0x4200000000000000000000000000000000000006")
        );
    }

    #[test]
    fn test_native_never_resolves_to_address() {
        for chain in [
            ChainId::EthereumSepolia,
            ChainId::BaseSepolia,
            ChainId::ArbitrumSepolia,
        ] {
            assert_eq!(resolve_address(chain.id(), TokenSymbol::Eth), None);
            assert!(is_supported(chain.id(), TokenSymbol::Eth));
        }
        assert_eq!(resolve_address(ChainId::HyperEvm.id(), TokenSymbol::Hype), None);
        assert!(is_supported(ChainId::HyperEvm.id(), TokenSymbol::Hype));
    }

    #[test]
    fn test_unknown_chain() {
        assert_eq!(resolve_address(1, TokenSymbol::Usdc), None);
        assert!(!is_supported(1, TokenSymbol::Usdc));
        assert!(supported_tokens(1).is_empty());
        assert_eq!(find_token(1, "0x4200000000000000000000000000000000000006"), None);
    }

    #[test]
    fn test_unsupported_pair() {
        // WBTC is only deployed on Ethereum Sepolia
        assert_eq!(
            resolve_address(ChainId::BaseSepolia.id(), TokenSymbol::Wbtc),
            None
        );
        assert!(!is_supported(ChainId::BaseSepolia.id(), TokenSymbol::Wbtc));
        // HYPE does not exist on the Sepolia networks
        assert!(!is_supported(ChainId::EthereumSepolia.id(), TokenSymbol::Hype));
    }

    #[test]
    fn test_supported_tokens_registration_order() {
        assert_eq!(
            supported_tokens(ChainId::HyperEvm.id()),
            vec![
                TokenSymbol::Hype,
                TokenSymbol::Whype,
                TokenSymbol::Ubtc,
                TokenSymbol::Cent,
            ]
        );
        assert_eq!(
            supported_tokens(ChainId::ArbitrumSepolia.id()),
            vec![TokenSymbol::Eth, TokenSymbol::Weth, TokenSymbol::Usdc]
        );
    }

    #[test]
    fn test_find_token_case_insensitive() {
        let lower = "0x75faf114eafb1bdbe2f0316df893fd58ce46aa4d";
        let upper = "0x75FAF114EAFB1BDBE2F0316DF893FD58CE46AA4D";
        assert_eq!(
            find_token(ChainId::ArbitrumSepolia.id(), lower),
            Some(TokenSymbol::Usdc)
        );
        assert_eq!(
            find_token(ChainId::ArbitrumSepolia.id(), upper),
            Some(TokenSymbol::Usdc)
        );
    }

    #[test]
    fn test_registry_consistency() {
        for chain in REGISTRY {
            for (symbol, loc) in chain.entries {
                match loc {
                    TokenLocation::Native => {
                        assert!(
                            symbol.is_native(),
                            "{} registered native on {} but is_native() is false",
                            symbol,
                            chain.chain
                        );
                    }
                    TokenLocation::Contract(addr) => {
                        assert!(
                            !symbol.is_native(),
                            "native symbol {} has a contract address on {}",
                            symbol,
                            chain.chain
                        );
                        parse_address(addr).unwrap_or_else(|e| {
                            panic!("bad address for {} on {}: {}", symbol, chain.chain, e)
                        });
                    }
                }
                // metadata exists and agrees with itself for every entry
                assert_eq!(symbol.metadata().symbol, *symbol);
            }
        }
    }

    #[test]
    fn test_addresses_unique_per_chain() {
        for chain in REGISTRY {
            let addrs: Vec<&str> = chain
                .entries
                .iter()
                .filter_map(|(_, loc)| match loc {
                    TokenLocation::Contract(a) => Some(*a),
                    TokenLocation::Native => None,
                })
                .collect();
            for (i, a) in addrs.iter().enumerate() {
                for b in &addrs[i + 1..] {
                    assert!(!a.eq_ignore_ascii_case(b), "duplicate address {a} on {}", chain.chain);
                }
            }
        }
    }
}
