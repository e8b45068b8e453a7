//! Draft model for multi-signature vault creation.
//!
//! This crate covers the configuration-authoring step that precedes vault
//! creation: choosing owners, a signature threshold and operational policies,
//! then turning that draft into the payload a vault creation service expects.
//!
//! ## Features
//!
//! - Owner list with an immutable connected-wallet owner
//! - Threshold that stays within the owner count as owners come and go
//! - Security-level description of the threshold
//! - Spending limit, time lock, recovery and contract-interaction settings
//! - Payload validation (address format, duplicates, threshold range)
//! - Submission lifecycle with a single in-flight submission
//!
//! # Quick Start
//!
//! ```no_run
//! use vault_draft::{
//!     CreationError, DraftConfig, VaultCreationPayload, VaultCreationService, VaultDraft,
//!     VaultHandle,
//! };
//!
//! struct Service;
//!
//! #[async_trait::async_trait]
//! impl VaultCreationService for Service {
//!     async fn create_vault(
//!         &self,
//!         payload: VaultCreationPayload,
//!     ) -> Result<VaultHandle, CreationError> {
//!         Ok(VaultHandle::new(format!("vault-of-{}", payload.members.len())))
//!     }
//! }
//!
//! # async fn run() -> vault_draft::Result<()> {
//! let mut draft = VaultDraft::with_address(
//!     "11111111111111111111111111111111",
//!     Service,
//!     DraftConfig::solana(),
//! )?;
//! draft.add_owner()?;
//! draft.update_owner_address(1, "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA")?;
//! draft.set_required_signatures(2)?;
//! println!("{}", draft.describe_threshold());
//!
//! let handle = draft.submit().await?;
//! println!("created {}", handle.address);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod draft;
pub mod error;
pub mod logging;
pub mod owner;
pub mod payload;
pub mod service;
pub mod settings;
pub mod threshold;


pub use builder::VaultDraftBuilder;
pub use config::{AddressFormat, DraftConfig};
pub use draft::{DraftState, VaultDraft};
pub use error::{
    BuildError, CreationError, DraftError, LoggingError, LoggingResult, OwnerError, Result,
    SettingsError,
};
pub use logging::{LogFileConfig, LoggingConfig, LoggingGuard, init_console_logging, init_logging};
pub use owner::{Owner, OwnerSet};
pub use payload::{Member, MemberPermissions, VaultCreationPayload, VaultHandle, VaultMetadata};
pub use service::{VaultCreationService, WalletContext};
pub use settings::{AdvancedSettings, DailyLimit, LimitAsset, TimeLock};
pub use threshold::{SecurityLevel, ThresholdPolicy};

pub use tracing::level_filters::LevelFilter;
