//! Test data builders for creating draft objects

use vault_draft::{AdvancedSettings, DraftConfig, Result, VaultCreationService, VaultDraft};

use crate::fixtures::addresses;

/// Builder for drafts pre-filled with owners and settings
pub struct TestDraftBuilder {
    self_address: String,
    owners: Vec<String>,
    required: Option<u32>,
    config: DraftConfig,
    settings: AdvancedSettings,
    name: Option<String>,
    description: Option<String>,
}

impl Default for TestDraftBuilder {
    fn default() -> Self {
        Self {
            self_address: addresses::SOLANA_SELF.to_string(),
            owners: vec![],
            required: None,
            config: DraftConfig::default(),
            settings: AdvancedSettings::default(),
            name: None,
            description: None,
        }
    }
}

impl TestDraftBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_self_address(mut self, address: impl Into<String>) -> Self {
        self.self_address = address.into();
        self
    }

    /// Add an invited owner with the given address
    pub fn with_owner(mut self, address: impl Into<String>) -> Self {
        self.owners.push(address.into());
        self
    }

    /// Add an invited owner whose address is still empty
    pub fn with_blank_owner(self) -> Self {
        self.with_owner("")
    }

    pub fn with_required(mut self, required: u32) -> Self {
        self.required = Some(required);
        self
    }

    pub fn with_config(mut self, config: DraftConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_settings(mut self, settings: AdvancedSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn build<S: VaultCreationService>(self, service: S) -> Result<VaultDraft<S>> {
        let mut draft = VaultDraft::with_address(self.self_address, service, self.config)?;
        for address in self.owners {
            draft.add_owner()?;
            let index = draft.owners().size() - 1;
            draft.update_owner_address(index, address)?;
        }
        if let Some(required) = self.required {
            draft.set_required_signatures(required)?;
        }
        draft.set_settings(self.settings)?;
        if let Some(name) = self.name {
            draft.set_name(name)?;
        }
        if let Some(description) = self.description {
            draft.set_description(description)?;
        }
        Ok(draft)
    }
}
