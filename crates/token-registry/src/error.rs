use thiserror::Error;

/// Unified error type for the token registry library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("amount error: {0}")]
    Amount(#[from] AmountError),

    #[error("address error: {0}")]
    Address(#[from] AddressError),
}

/// Errors from parsing user-entered decimal amounts.
///
/// Unsupported (chain, token) pairs are not errors; registry lookups
/// signal those by returning `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("empty amount")]
    Empty,

    #[error("invalid character {found:?} in amount {input:?}")]
    InvalidDigit { input: String, found: char },

    #[error("more than one decimal point in amount {0:?}")]
    MultipleSeparators(String),

    #[error("amount must be an unsigned decimal: {0:?}")]
    Signed(String),
}

/// Errors from parsing hex contract addresses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("address must be 40 hex digits, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex in address: {0}")]
    InvalidHex(String),
}
