//! Test helper functions and utilities

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Notify;
use vault_draft::{
    CreationError, VaultCreationPayload, VaultCreationService, VaultHandle, WalletContext,
};

/// Wallet context with a fixed connected address
#[derive(Debug, Clone)]
pub struct StaticWallet {
    address: String,
}

impl StaticWallet {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

impl WalletContext for StaticWallet {
    fn connected_address(&self) -> String {
        self.address.clone()
    }
}

/// Mock vault creation service
///
/// Records every payload it receives, fails with queued errors, and can hold
/// calls in flight until [`MockCreationService::release_calls`] is called.
/// Clones share state, so a test can keep one while the draft owns another.
#[derive(Debug, Clone, Default)]
pub struct MockCreationService {
    inner: Arc<MockState>,
}

#[derive(Debug, Default)]
struct MockState {
    received: Mutex<Vec<VaultCreationPayload>>,
    failures: Mutex<VecDeque<CreationError>>,
    hold: AtomicBool,
    calls: AtomicUsize,
    entered: Notify,
    release: Notify,
}

impl MockCreationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next call with `error`
    pub fn fail_next(&self, error: CreationError) {
        self.inner.failures.lock().unwrap().push_back(error);
    }

    /// Make calls wait until released
    pub fn hold_calls(&self) {
        self.inner.hold.store(true, Ordering::SeqCst);
    }

    /// Let held calls, and all later ones, complete
    pub fn release_calls(&self) {
        self.inner.hold.store(false, Ordering::SeqCst);
        self.inner.release.notify_waiters();
    }

    /// Wait until a held call has started
    pub async fn wait_for_call(&self) {
        self.inner.entered.notified().await;
    }

    /// Number of calls started so far
    pub fn call_count(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }

    /// Payloads received so far, in call order
    pub fn received(&self) -> Vec<VaultCreationPayload> {
        self.inner.received.lock().unwrap().clone()
    }

    pub fn last_payload(&self) -> Option<VaultCreationPayload> {
        self.inner.received.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl VaultCreationService for MockCreationService {
    async fn create_vault(
        &self,
        payload: VaultCreationPayload,
    ) -> Result<VaultHandle, CreationError> {
        let call = self.inner.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.received.lock().unwrap().push(payload);

        if self.inner.hold.load(Ordering::SeqCst) {
            let released = self.inner.release.notified();
            self.inner.entered.notify_one();
            released.await;
        }

        let failure = self.inner.failures.lock().unwrap().pop_front();
        match failure {
            Some(error) => Err(error),
            None => Ok(VaultHandle::new(format!("vault-{}", call))),
        }
    }
}
