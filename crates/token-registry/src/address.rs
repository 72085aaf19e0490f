use crate::error::AddressError;

/// Parse a hex contract address into raw bytes.
///
/// Accepts an optional `0x` prefix and either hex case.
pub fn parse_address(address: &str) -> Result<[u8; 20], AddressError> {
    let digits = address.strip_prefix("0x").unwrap_or(address);
    if digits.len() != 40 {
        return Err(AddressError::InvalidLength(digits.len()));
    }
    let bytes = hex::decode(digits).map_err(|e| AddressError::InvalidHex(e.to_string()))?;
    let mut addr = [0u8; 20];
    addr.copy_from_slice(&bytes);
    Ok(addr)
}

/// EIP-55 mixed-case checksum encoding.
pub fn to_checksum(addr: &[u8; 20]) -> String {
    use tiny_keccak::{Hasher, Keccak};

    let hex_addr = hex::encode(addr);
    let mut hasher = Keccak::v256();
    hasher.update(hex_addr.as_bytes());
    let mut hash = [0u8; 32];
    hasher.finalize(&mut hash);

    let mut result = String::with_capacity(42);
    result.push_str("0x");
    for (i, c) in hex_addr.chars().enumerate() {
        let hash_nibble = if i % 2 == 0 {
            (hash[i / 2] >> 4) & 0x0f
        } else {
            hash[i / 2] & 0x0f
        };
        if hash_nibble >= 8 {
            result.push(c.to_ascii_uppercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Case-insensitive address equality.
///
/// Hex addresses circulate in lowercase, uppercase, and EIP-55 mixed
/// case; all registry comparisons go through this.
pub fn addr_eq(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}
