//! Vault creation payload
//!
//! The payload shape (threshold, members with address and three permission
//! flags) is the contract toward the creation service. Settings and metadata
//! ride along unchanged.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::settings::AdvancedSettings;

/// Capabilities a member holds in the vault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MemberPermissions {
    pub proposer: bool,
    pub voter: bool,
    pub executor: bool,
}

impl MemberPermissions {
    /// Propose, vote and execute
    pub const fn full() -> Self {
        Self {
            proposer: true,
            voter: true,
            executor: true,
        }
    }
}

/// A vault member in the creation payload
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Member {
    pub address: String,
    pub permissions: MemberPermissions,
}

/// Optional descriptive information about the vault
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VaultMetadata {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub description: Option<String>,
}

impl VaultMetadata {
    /// Blank text is stored as `None`
    pub fn normalize(text: impl Into<String>) -> Option<String> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

/// Validated input for the vault creation service
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VaultCreationPayload {
    pub threshold: u32,
    pub members: Vec<Member>,
    pub settings: AdvancedSettings,
    pub metadata: VaultMetadata,
}

impl VaultCreationPayload {
    pub fn member_addresses(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.address.as_str())
    }
}

/// Identifier of a created vault, as returned by the creation service
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VaultHandle {
    pub address: String,
}

impl VaultHandle {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}
