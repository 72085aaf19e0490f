//! Multi-chain token registry and amount codec.
//!
//! Maps (chain id, token symbol) pairs to contract deployments or the
//! chain's native currency, and converts token amounts between
//! human-readable decimal strings and smallest-unit integers. The tables
//! are compiled-in configuration; every operation is a pure function over
//! them, safe to call from anywhere without coordination.
//!
//! ```
//! use num_bigint::BigUint;
//! use token_registry::{ChainId, TokenSymbol};
//!
//! let chain = ChainId::ArbitrumSepolia.id();
//! let usdc = token_registry::resolve_address(chain, TokenSymbol::Usdc).unwrap();
//! assert!(usdc.starts_with("0x"));
//!
//! let raw = token_registry::parse_amount("1.5", TokenSymbol::Usdc).unwrap();
//! assert_eq!(raw, BigUint::from(1_500_000u32));
//! assert_eq!(token_registry::format_amount(&raw, TokenSymbol::Usdc), "1.50");
//! ```

pub mod address;
pub mod amount;
pub mod chain;
pub mod error;
pub mod registry;
pub mod token;

// Re-exports for convenience
pub use address::{addr_eq, parse_address, to_checksum};
pub use amount::{format_amount, format_units, parse_amount, parse_units};
pub use chain::ChainId;
pub use error::{AddressError, AmountError, Error};
pub use registry::{find_token, is_supported, resolve_address, supported_tokens, TokenLocation};
pub use token::{AssetClass, TokenMetadata, TokenSymbol};

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    // Balance display path: resolve the token, then format the raw balance.
    #[test]
    fn test_arbitrum_usdc_end_to_end() {
        let chain = ChainId::ArbitrumSepolia.id();

        let addr = resolve_address(chain, TokenSymbol::Usdc).unwrap();
        assert_eq!(addr, "0x75faf114eafb1BDbe2F0316DF893fd58CE46AA4d");
        assert!(is_supported(chain, TokenSymbol::Usdc));

        let raw = BigUint::from(1_234_567u32);
        assert_eq!(format_amount(&raw, TokenSymbol::Usdc), "1.23");
    }

    // Transaction construction path: parse the user's input, resolve the
    // target contract.
    #[test]
    fn test_wrap_flow() {
        let chain = ChainId::BaseSepolia.id();

        // Native ETH has no contract; the wrap call targets WETH
        assert!(TokenSymbol::Eth.is_native());
        assert_eq!(resolve_address(chain, TokenSymbol::Eth), None);
        let weth = resolve_address(chain, TokenSymbol::Weth).unwrap();
        assert_eq!(weth, "0x4200000000000000000000000000000000000006");

        let value = parse_amount("0.25", TokenSymbol::Eth).unwrap();
        assert_eq!(value, BigUint::from(250_000_000_000_000_000u64));
    }

    #[test]
    fn test_every_registered_contract_resolves() {
        for chain in [
            ChainId::EthereumSepolia,
            ChainId::BaseSepolia,
            ChainId::ArbitrumSepolia,
            ChainId::HyperEvm,
        ] {
            for symbol in supported_tokens(chain.id()) {
                assert!(is_supported(chain.id(), symbol));
                match resolve_address(chain.id(), symbol) {
                    Some(addr) => {
                        assert_eq!(find_token(chain.id(), addr), Some(symbol));
                        // Checksumming never changes the underlying hex
                        let parsed = parse_address(addr).unwrap();
                        assert!(addr_eq(&to_checksum(&parsed), addr));
                    }
                    None => assert!(symbol.is_native()),
                }
            }
        }
    }
}
