//! Vault draft session
//!
//! A [`VaultDraft`] owns the owner list, threshold, settings and metadata the
//! user is editing, and drives the submission lifecycle:
//!
//! ```text
//! Editing -> Submitting -> Succeeded
//!                       -> Failed -> Editing
//! ```
//!
//! Edits take `&mut self` and submission takes `&self`, so the model cannot be
//! edited while a submission is in flight. Only one submission may be in
//! flight at a time; a second one is rejected, not queued.

use std::mem;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::builder::VaultDraftBuilder;
use crate::config::DraftConfig;
use crate::error::{DraftError, Result};
use crate::owner::{Owner, OwnerSet};
use crate::payload::{VaultCreationPayload, VaultHandle, VaultMetadata};
use crate::service::{VaultCreationService, WalletContext};
use crate::settings::{AdvancedSettings, DailyLimit, LimitAsset};
use crate::threshold::{SecurityLevel, ThresholdPolicy};

/// Lifecycle state of a draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftState {
    /// Values are being entered
    Editing,
    /// The creation service call is in flight
    Submitting,
    /// The vault was created
    Succeeded(VaultHandle),
    /// The creation service failed; all values are kept for a retry
    Failed(String),
}

/// One vault-creation flow
#[derive(Debug)]
pub struct VaultDraft<S> {
    config: DraftConfig,
    owners: OwnerSet,
    threshold: ThresholdPolicy,
    settings: AdvancedSettings,
    metadata: VaultMetadata,
    state: Mutex<DraftState>,
    service: S,
}

impl<S: VaultCreationService> VaultDraft<S> {
    /// Start a draft owned by the connected wallet
    pub fn new<W: WalletContext + ?Sized>(wallet: &W, service: S, config: DraftConfig) -> Result<Self> {
        Self::with_address(wallet.connected_address(), service, config)
    }

    /// Start a draft with an explicit connected-wallet address
    pub fn with_address(
        self_address: impl Into<String>,
        service: S,
        config: DraftConfig,
    ) -> Result<Self> {
        config.validate().map_err(DraftError::Config)?;

        let owners = OwnerSet::new(self_address);
        let threshold = ThresholdPolicy::new(count_as_u32(owners.size()));
        tracing::debug!("Started vault draft for {}", owners.self_owner().address());

        Ok(Self {
            config,
            owners,
            threshold,
            settings: AdvancedSettings::default(),
            metadata: VaultMetadata::default(),
            state: Mutex::new(DraftState::Editing),
            service,
        })
    }

    pub fn config(&self) -> &DraftConfig {
        &self.config
    }

    pub fn owners(&self) -> &OwnerSet {
        &self.owners
    }

    pub fn threshold(&self) -> &ThresholdPolicy {
        &self.threshold
    }

    pub fn required_signatures(&self) -> u32 {
        self.threshold.required()
    }

    pub fn describe_threshold(&self) -> SecurityLevel {
        self.threshold.describe()
    }

    pub fn settings(&self) -> &AdvancedSettings {
        &self.settings
    }

    pub fn metadata(&self) -> &VaultMetadata {
        &self.metadata
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Current lifecycle state
    pub fn state(&self) -> DraftState {
        self.lock_state().clone()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(*self.lock_state(), DraftState::Submitting)
    }

    /// Append an invited owner with an empty address
    pub fn add_owner(&mut self) -> Result<()> {
        self.ensure_editable()?;
        self.owners.add_owner();
        self.owner_count_changed();
        self.mark_edited();
        tracing::debug!("Added owner slot {}", self.owners.size() - 1);
        Ok(())
    }

    /// Remove an invited owner and re-clamp the threshold
    pub fn remove_owner(&mut self, index: usize) -> Result<Owner> {
        self.ensure_editable()?;
        let removed = self.owners.remove_owner(index)?;
        self.owner_count_changed();
        self.mark_edited();
        tracing::debug!(
            "Removed owner {}; {} of {} signatures required",
            index,
            self.threshold.required(),
            self.threshold.total_owners()
        );
        Ok(removed)
    }

    /// Replace the address of an invited owner
    pub fn update_owner_address(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        self.ensure_editable()?;
        self.owners.update_owner_address(index, value)?;
        self.mark_edited();
        Ok(())
    }

    /// Set the required signatures, clamped to the owner count
    ///
    /// Returns the value actually stored.
    pub fn set_required_signatures(&mut self, n: u32) -> Result<u32> {
        self.ensure_editable()?;
        self.threshold.set_required(n);
        self.mark_edited();
        if self.threshold.required() != n {
            tracing::debug!("Clamped required signatures {} to {}", n, self.threshold.required());
        }
        Ok(self.threshold.required())
    }

    pub fn set_settings(&mut self, settings: AdvancedSettings) -> Result<()> {
        self.ensure_editable()?;
        self.settings = settings;
        self.mark_edited();
        Ok(())
    }

    /// Edit the advanced settings in place
    pub fn update_settings(&mut self, edit: impl FnOnce(&mut AdvancedSettings)) -> Result<()> {
        self.ensure_editable()?;
        edit(&mut self.settings);
        self.mark_edited();
        Ok(())
    }

    /// Parse and set the daily limit, e.g. `("5.0", LimitAsset::Eth)`
    pub fn set_daily_limit(&mut self, amount: &str, asset: LimitAsset) -> Result<()> {
        self.ensure_editable()?;
        let limit = DailyLimit::parse(amount, asset)?;
        self.settings.daily_limit = limit;
        self.mark_edited();
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.ensure_editable()?;
        self.metadata.name = VaultMetadata::normalize(name);
        self.mark_edited();
        Ok(())
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> Result<()> {
        self.ensure_editable()?;
        self.metadata.description = VaultMetadata::normalize(description);
        self.mark_edited();
        Ok(())
    }

    /// Return a failed draft to editing
    pub fn resume_editing(&mut self) -> Result<()> {
        self.ensure_editable()?;
        self.mark_edited();
        Ok(())
    }

    /// Validate the current values and build the creation payload
    pub fn build(&self) -> Result<VaultCreationPayload> {
        let payload = VaultDraftBuilder::new(&self.owners, &self.threshold, &self.config)
            .with_settings(self.settings)
            .with_metadata(self.metadata.clone())
            .build()?;
        Ok(payload)
    }

    /// Build the payload and hand it to the creation service
    ///
    /// Fails with [`DraftError::SubmissionInProgress`] while another
    /// submission is in flight. A build error or a dropped future leaves the
    /// draft as it was; a service error moves it to [`DraftState::Failed`].
    pub async fn submit(&self) -> Result<VaultHandle> {
        let previous = self.enter_submitting()?;
        let guard = SubmissionGuard {
            state: &self.state,
            restore: Some(previous),
        };

        let payload = match self.build() {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Vault draft rejected before submission: {}", e);
                return Err(e);
            }
        };

        tracing::info!(
            "Submitting vault creation: {} of {} signatures required",
            payload.threshold,
            payload.members.len()
        );

        match self.service.create_vault(payload).await {
            Ok(handle) => {
                tracing::info!("Vault created at {}", handle.address);
                guard.finish(DraftState::Succeeded(handle.clone()));
                Ok(handle)
            }
            Err(e) => {
                tracing::warn!("Vault creation failed, draft kept for retry: {}", e);
                guard.finish(DraftState::Failed(e.to_string()));
                Err(e.into())
            }
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, DraftState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn enter_submitting(&self) -> Result<DraftState> {
        let mut state = self.lock_state();
        match *state {
            DraftState::Submitting => Err(DraftError::SubmissionInProgress),
            DraftState::Succeeded(_) => Err(DraftError::AlreadySubmitted),
            DraftState::Editing | DraftState::Failed(_) => {
                Ok(mem::replace(&mut *state, DraftState::Submitting))
            }
        }
    }

    fn ensure_editable(&mut self) -> Result<()> {
        match self.state.get_mut().unwrap_or_else(PoisonError::into_inner) {
            DraftState::Editing | DraftState::Failed(_) => Ok(()),
            DraftState::Submitting => Err(DraftError::SubmissionInProgress),
            DraftState::Succeeded(_) => Err(DraftError::AlreadySubmitted),
        }
    }

    fn mark_edited(&mut self) {
        let state = self.state.get_mut().unwrap_or_else(PoisonError::into_inner);
        if matches!(state, DraftState::Failed(_)) {
            *state = DraftState::Editing;
        }
    }

    /// Every size-changing owner mutation goes through here
    fn owner_count_changed(&mut self) {
        self.threshold.on_owner_count_changed(count_as_u32(self.owners.size()));
    }
}

/// Restores the pre-submission state unless the submission completes
struct SubmissionGuard<'a> {
    state: &'a Mutex<DraftState>,
    restore: Option<DraftState>,
}

impl SubmissionGuard<'_> {
    fn finish(mut self, outcome: DraftState) {
        self.restore = None;
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = outcome;
    }
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.restore.take() {
            *self.state.lock().unwrap_or_else(PoisonError::into_inner) = previous;
        }
    }
}

fn count_as_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
