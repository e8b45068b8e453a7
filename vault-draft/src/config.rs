//! Configuration for vault draft sessions.

/// Owner limit of the on-chain multisig programs this draft targets.
pub const DEFAULT_MAX_OWNERS: usize = 10;
/// Default cap on the vault name length.
pub const DEFAULT_MAX_NAME_LEN: usize = 64;
/// Default cap on the vault description length.
pub const DEFAULT_MAX_DESCRIPTION_LEN: usize = 200;

/// Accepted textual encoding of owner addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFormat {
    /// Base58 public key, e.g. a Solana account address.
    Base58 {
        bytes: usize,
    },
    /// `0x`-prefixed hex, e.g. an EVM account address.
    Hex {
        bytes: usize,
    },
    /// No format check beyond being non-empty.
    Any,
}

impl Default for AddressFormat {
    fn default() -> Self {
        AddressFormat::Base58 {
            bytes: 32,
        }
    }
}

impl AddressFormat {
    /// Key under which two addresses compare equal
    pub fn canonical(&self, address: &str) -> String {
        match self {
            AddressFormat::Hex {
                ..
            } => address.to_ascii_lowercase(),
            AddressFormat::Base58 {
                ..
            }
            | AddressFormat::Any => address.to_string(),
        }
    }

    /// Check that `address` decodes in this format.
    pub fn check(&self, address: &str) -> Result<(), String> {
        match *self {
            AddressFormat::Base58 {
                bytes,
            } => {
                let decoded = bs58::decode(address)
                    .into_vec()
                    .map_err(|e| format!("invalid base58: {}", e))?;
                if decoded.len() != bytes {
                    return Err(format!("expected {} bytes, got {}", bytes, decoded.len()));
                }
                Ok(())
            }
            AddressFormat::Hex {
                bytes,
            } => {
                let digits = address
                    .strip_prefix("0x")
                    .or_else(|| address.strip_prefix("0X"))
                    .ok_or_else(|| "missing 0x prefix".to_string())?;
                let decoded = hex::decode(digits).map_err(|e| format!("invalid hex: {}", e))?;
                if decoded.len() != bytes {
                    return Err(format!("expected {} bytes, got {}", bytes, decoded.len()));
                }
                Ok(())
            }
            AddressFormat::Any => {
                if address.is_empty() {
                    return Err("empty address".to_string());
                }
                Ok(())
            }
        }
    }
}

/// Configuration for a vault draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftConfig {
    /// Format every invited owner address must have.
    pub address_format: AddressFormat,

    /// Maximum number of members in the submitted payload.
    pub max_owners: usize,

    /// Maximum vault name length, in characters.
    pub max_name_len: usize,

    /// Maximum vault description length, in characters.
    pub max_description_len: usize,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            address_format: AddressFormat::default(),
            max_owners: DEFAULT_MAX_OWNERS,
            max_name_len: DEFAULT_MAX_NAME_LEN,
            max_description_len: DEFAULT_MAX_DESCRIPTION_LEN,
        }
    }
}

impl DraftConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for Solana wallets (base58, 32-byte keys).
    pub fn solana() -> Self {
        Self::default()
    }

    /// Configuration for EVM wallets (hex, 20-byte addresses).
    pub fn evm() -> Self {
        Self {
            address_format: AddressFormat::Hex {
                bytes: 20,
            },
            ..Self::default()
        }
    }

    pub fn with_address_format(mut self, format: AddressFormat) -> Self {
        self.address_format = format;
        self
    }

    pub fn with_max_owners(mut self, max: usize) -> Self {
        self.max_owners = max;
        self
    }

    pub fn with_max_name_len(mut self, max: usize) -> Self {
        self.max_name_len = max;
        self
    }

    pub fn with_max_description_len(mut self, max: usize) -> Self {
        self.max_description_len = max;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_owners == 0 {
            return Err("max_owners must be > 0".to_string());
        }

        match self.address_format {
            AddressFormat::Base58 {
                bytes: 0,
            }
            | AddressFormat::Hex {
                bytes: 0,
            } => Err("address_format must decode to at least one byte".to_string()),
            _ => Ok(()),
        }
    }
}
