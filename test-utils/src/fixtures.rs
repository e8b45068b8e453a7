//! Common test fixtures and constants

/// Well-formed owner addresses
pub mod addresses {
    /// 32 zero bytes in base58
    pub const SOLANA_SELF: &str = "11111111111111111111111111111111";
    pub const SOLANA_A: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";
    pub const SOLANA_B: &str = "So11111111111111111111111111111111111111112";
    pub const SOLANA_C: &str = "ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL";
    pub const SOLANA_D: &str = "SysvarRent111111111111111111111111111111111";

    pub const EVM_SELF: &str = "0x0000000000000000000000000000000000000001";
    pub const EVM_A: &str = "0x52908400098527886E0F7030069857D2E4169EE7";
    pub const EVM_B: &str = "0xde709f2102306220921060314715629080e2fb77";
}

/// Malformed owner addresses
pub mod malformed {
    /// Contains characters outside the base58 alphabet
    pub const NOT_BASE58: &str = "0OIl-not-an-address";
    /// Valid base58 but only a few bytes long
    pub const SHORT_BASE58: &str = "3mJr7AoUXx2Wqd";
    /// Hex without the 0x prefix
    pub const UNPREFIXED_HEX: &str = "52908400098527886E0F7030069857D2E4169EE7";
}

/// Invited Solana owners, distinct from [`addresses::SOLANA_SELF`]
pub fn solana_owners() -> Vec<&'static str> {
    vec![addresses::SOLANA_A, addresses::SOLANA_B, addresses::SOLANA_C, addresses::SOLANA_D]
}
