//! Collaborators the draft consumes.
//!
//! The wallet connection supplies the connected owner's address. The vault
//! creation service receives the finished payload.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::CreationError;
use crate::payload::{VaultCreationPayload, VaultHandle};

/// Read-only view of the connected wallet
pub trait WalletContext {
    /// Address of the connected wallet; becomes the first vault owner
    fn connected_address(&self) -> String;
}

/// Remote service that creates the vault from a payload
///
/// The draft calls [`VaultCreationService::create_vault`] once per successful
/// build and never retries. Timeouts and cancellation belong to the
/// implementation.
#[async_trait]
pub trait VaultCreationService: Send + Sync {
    async fn create_vault(
        &self,
        payload: VaultCreationPayload,
    ) -> Result<VaultHandle, CreationError>;
}

#[async_trait]
impl<T: VaultCreationService + ?Sized> VaultCreationService for Arc<T> {
    async fn create_vault(
        &self,
        payload: VaultCreationPayload,
    ) -> Result<VaultHandle, CreationError> {
        (**self).create_vault(payload).await
    }
}

impl<T: WalletContext + ?Sized> WalletContext for &T {
    fn connected_address(&self) -> String {
        (**self).connected_address()
    }
}
