//! EVM address syntax validation

/// Validate EVM wallet address format.
///
/// An address is valid when it is exactly 42 characters long, starts with
/// `0x`, and the remaining 40 characters are hexadecimal digits
/// (case-insensitive). No EIP-55 checksum validation is performed.
/// Never panics; malformed input simply returns `false`.
pub fn validate_address(address: &str) -> bool {
    if !address.starts_with("0x") {
        return false;
    }
    if address.len() != 42 {
        return false;
    }
    address.as_bytes()[2..].iter().all(u8::is_ascii_hexdigit)
}
