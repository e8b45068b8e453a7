//! Turns draft state into a [`VaultCreationPayload`].

use std::collections::HashSet;

use crate::config::DraftConfig;
use crate::error::BuildError;
use crate::owner::{Owner, OwnerSet};
use crate::payload::{Member, MemberPermissions, VaultCreationPayload, VaultMetadata};
use crate::settings::AdvancedSettings;
use crate::threshold::ThresholdPolicy;

/// Composes owners, threshold, settings and metadata into a creation payload.
///
/// Building reads the draft state and never modifies it, so a failed build
/// leaves everything as the user entered it.
#[derive(Debug, Clone)]
pub struct VaultDraftBuilder<'a> {
    owners: &'a OwnerSet,
    threshold: &'a ThresholdPolicy,
    config: &'a DraftConfig,
    settings: AdvancedSettings,
    metadata: VaultMetadata,
}

impl<'a> VaultDraftBuilder<'a> {
    pub fn new(owners: &'a OwnerSet, threshold: &'a ThresholdPolicy, config: &'a DraftConfig) -> Self {
        Self {
            owners,
            threshold,
            config,
            settings: AdvancedSettings::default(),
            metadata: VaultMetadata::default(),
        }
    }

    pub fn with_settings(mut self, settings: AdvancedSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_metadata(mut self, metadata: VaultMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Validate the draft and produce the payload.
    pub fn build(&self) -> Result<VaultCreationPayload, BuildError> {
        let retained = self.retained_owners();

        if retained.is_empty() {
            return Err(BuildError::EmptyOwnerSet);
        }

        if retained.len() > self.config.max_owners {
            return Err(BuildError::TooManyOwners {
                count: retained.len(),
                max: self.config.max_owners,
            });
        }

        for (index, owner, address) in &retained {
            if owner.is_self() {
                continue;
            }
            self.config.address_format.check(address).map_err(|reason| {
                BuildError::InvalidAddress {
                    index: *index,
                    address: address.to_string(),
                    reason,
                }
            })?;
        }

        let mut seen = HashSet::with_capacity(retained.len());
        for (_, _, address) in &retained {
            if !seen.insert(self.config.address_format.canonical(address)) {
                return Err(BuildError::DuplicateOwner {
                    address: address.to_string(),
                });
            }
        }

        self.check_metadata()?;

        // Re-checked against the filtered members, which may be fewer than
        // the owners the threshold was clamped to.
        let threshold = self.threshold.required();
        if threshold as usize > retained.len() {
            return Err(BuildError::ThresholdOutOfRange {
                threshold,
                members: retained.len(),
            });
        }

        let members = retained
            .into_iter()
            .map(|(_, _, address)| Member {
                address: address.to_string(),
                permissions: MemberPermissions::full(),
            })
            .collect();

        Ok(VaultCreationPayload {
            threshold,
            members,
            settings: self.settings,
            metadata: self.metadata.clone(),
        })
    }

    /// Owners that make it into the payload, with their position in the set.
    ///
    /// Invited addresses are trimmed and dropped when blank. The connected
    /// wallet address is taken as given and only dropped when empty.
    fn retained_owners(&self) -> Vec<(usize, &'a Owner, &'a str)> {
        self.owners
            .iter()
            .enumerate()
            .filter_map(|(index, owner)| {
                let address = match owner {
                    Owner::Connected {
                        address,
                    } => address.as_str(),
                    Owner::Invited {
                        address,
                    } => address.trim(),
                };
                (!address.is_empty()).then_some((index, owner, address))
            })
            .collect()
    }

    fn check_metadata(&self) -> Result<(), BuildError> {
        let fields = [
            ("name", &self.metadata.name, self.config.max_name_len),
            ("description", &self.metadata.description, self.config.max_description_len),
        ];
        for (field, value, max) in fields {
            if let Some(text) = value {
                let len = text.chars().count();
                if len > max {
                    return Err(BuildError::MetadataTooLong {
                        field,
                        len,
                        max,
                    });
                }
            }
        }
        Ok(())
    }
}
