//! Prospective vault owners.
//!
//! The owner list always starts with the connected wallet, which can be
//! neither removed nor edited. Invited owners follow in insertion order and
//! may carry an empty address while the user is still typing it.

use crate::error::OwnerError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Index of the connected wallet owner in every [`OwnerSet`].
pub const SELF_OWNER_INDEX: usize = 0;

/// A prospective vault owner
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Owner {
    /// The connected wallet. Its address comes from the wallet context.
    Connected {
        address: String,
    },
    /// An owner added by the user
    Invited {
        address: String,
    },
}

impl Owner {
    /// The address as currently entered
    pub fn address(&self) -> &str {
        match self {
            Owner::Connected {
                address,
            }
            | Owner::Invited {
                address,
            } => address,
        }
    }

    /// Whether this is the connected wallet owner
    pub fn is_self(&self) -> bool {
        matches!(self, Owner::Connected { .. })
    }

    /// Whether the address is still blank
    pub fn is_blank(&self) -> bool {
        self.address().trim().is_empty()
    }
}

/// Ordered owner list with the connected wallet first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerSet {
    owners: Vec<Owner>,
}

impl OwnerSet {
    /// Create an owner set holding only the connected wallet
    pub fn new(self_address: impl Into<String>) -> Self {
        Self {
            owners: vec![Owner::Connected {
                address: self_address.into(),
            }],
        }
    }

    /// Append an invited owner with an empty address
    pub fn add_owner(&mut self) {
        self.owners.push(Owner::Invited {
            address: String::new(),
        });
    }

    /// Remove the owner at `index`, keeping the order of the others
    pub fn remove_owner(&mut self, index: usize) -> Result<Owner, OwnerError> {
        self.check_editable(index)?;
        Ok(self.owners.remove(index))
    }

    /// Replace the address of the owner at `index`
    ///
    /// No format check happens here; addresses are validated when the
    /// payload is built.
    pub fn update_owner_address(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), OwnerError> {
        self.check_editable(index)?;
        if let Some(Owner::Invited {
            address,
        }) = self.owners.get_mut(index)
        {
            *address = value.into();
        }
        Ok(())
    }

    /// Total number of owners, including the connected wallet
    pub fn size(&self) -> usize {
        self.owners.len()
    }

    /// Same as [`OwnerSet::size`]
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Always false; the connected wallet is always present
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Owner> {
        self.owners.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Owner> {
        self.owners.iter()
    }

    /// The connected wallet owner
    pub fn self_owner(&self) -> &Owner {
        &self.owners[SELF_OWNER_INDEX]
    }

    /// Owners added by the user, in insertion order
    pub fn invited(&self) -> &[Owner] {
        &self.owners[SELF_OWNER_INDEX + 1..]
    }

    fn check_editable(&self, index: usize) -> Result<(), OwnerError> {
        if index == SELF_OWNER_INDEX {
            return Err(OwnerError::ImmutableOwner);
        }
        if index >= self.owners.len() {
            return Err(OwnerError::InvalidIndex {
                index,
                len: self.owners.len(),
            });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a OwnerSet {
    type Item = &'a Owner;
    type IntoIter = std::slice::Iter<'a, Owner>;

    fn into_iter(self) -> Self::IntoIter {
        self.owners.iter()
    }
}
