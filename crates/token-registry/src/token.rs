use serde::{Deserialize, Serialize};

/// Logical assets the registry knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenSymbol {
    #[serde(rename = "ETH")]
    Eth,
    #[serde(rename = "WETH")]
    Weth,
    #[serde(rename = "USDC")]
    Usdc,
    #[serde(rename = "WBTC")]
    Wbtc,
    #[serde(rename = "CENT")]
    Cent,
    #[serde(rename = "HYPE")]
    Hype,
    #[serde(rename = "WHYPE")]
    Whype,
    #[serde(rename = "UBTC")]
    Ubtc,
}

/// Token metadata. Decimals are fixed per symbol across all chains.
#[derive(Debug, Clone)]
pub struct TokenMetadata {
    pub symbol: TokenSymbol,
    pub name: &'static str,
    pub decimals: u8,
}

/// Display granularity classes: how many fractional digits a balance
/// of this asset is rendered with in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetClass {
    /// Bitcoin-denominated assets, 6 fractional digits.
    Bitcoin,
    /// USD-pegged assets, 2 fractional digits.
    Stablecoin,
    /// Everything else (gas tokens and their wrappers), 4 fractional digits.
    Standard,
}

impl AssetClass {
    /// Fractional digits used when rendering balances of this class.
    pub fn display_decimals(self) -> usize {
        match self {
            AssetClass::Bitcoin => 6,
            AssetClass::Stablecoin => 2,
            AssetClass::Standard => 4,
        }
    }
}

static ETH: TokenMetadata = TokenMetadata {
    symbol: TokenSymbol::Eth,
    name: "Ethereum",
    decimals: 18,
};
static WETH: TokenMetadata = TokenMetadata {
    symbol: TokenSymbol::Weth,
    name: "Wrapped Ether",
    decimals: 18,
};
static USDC: TokenMetadata = TokenMetadata {
    symbol: TokenSymbol::Usdc,
    name: "USD Coin",
    decimals: 6,
};
static WBTC: TokenMetadata = TokenMetadata {
    symbol: TokenSymbol::Wbtc,
    name: "Wrapped Bitcoin",
    decimals: 8,
};
static CENT: TokenMetadata = TokenMetadata {
    symbol: TokenSymbol::Cent,
    name: "Cent",
    decimals: 6,
};
static HYPE: TokenMetadata = TokenMetadata {
    symbol: TokenSymbol::Hype,
    name: "Hyperliquid",
    decimals: 18,
};
static WHYPE: TokenMetadata = TokenMetadata {
    symbol: TokenSymbol::Whype,
    name: "Wrapped HYPE",
    decimals: 18,
};
static UBTC: TokenMetadata = TokenMetadata {
    symbol: TokenSymbol::Ubtc,
    name: "Unit Bitcoin",
    decimals: 8,
};

impl TokenSymbol {
    /// Metadata record for this symbol.
    pub fn metadata(self) -> &'static TokenMetadata {
        match self {
            TokenSymbol::Eth => &ETH,
            TokenSymbol::Weth => &WETH,
            TokenSymbol::Usdc => &USDC,
            TokenSymbol::Wbtc => &WBTC,
            TokenSymbol::Cent => &CENT,
            TokenSymbol::Hype => &HYPE,
            TokenSymbol::Whype => &WHYPE,
            TokenSymbol::Ubtc => &UBTC,
        }
    }

    /// Power-of-ten scale between the smallest on-chain unit and the
    /// human-readable unit.
    pub fn decimals(self) -> u8 {
        self.metadata().decimals
    }

    /// Human-readable asset name.
    pub fn name(self) -> &'static str {
        self.metadata().name
    }

    /// The ticker string.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenSymbol::Eth => "ETH",
            TokenSymbol::Weth => "WETH",
            TokenSymbol::Usdc => "USDC",
            TokenSymbol::Wbtc => "WBTC",
            TokenSymbol::Cent => "CENT",
            TokenSymbol::Hype => "HYPE",
            TokenSymbol::Whype => "WHYPE",
            TokenSymbol::Ubtc => "UBTC",
        }
    }

    /// Whether this symbol stands for a chain's base currency.
    ///
    /// Symbol-level on purpose: a native symbol is native on every chain
    /// where it is registered, so the check does not take a chain id.
    pub fn is_native(self) -> bool {
        matches!(self, TokenSymbol::Eth | TokenSymbol::Hype)
    }

    /// Display granularity class for balance rendering.
    pub fn asset_class(self) -> AssetClass {
        match self {
            TokenSymbol::Wbtc | TokenSymbol::Ubtc => AssetClass::Bitcoin,
            TokenSymbol::Usdc | TokenSymbol::Cent => AssetClass::Stablecoin,
            TokenSymbol::Eth | TokenSymbol::Weth | TokenSymbol::Hype | TokenSymbol::Whype => {
                AssetClass::Standard
            }
        }
    }
}

impl std::fmt::Display for TokenSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
