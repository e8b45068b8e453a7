//! Error types for vault draft authoring.

use std::io;
use thiserror::Error;

use crate::settings::LimitAsset;

/// Main error type for a vault draft session.
#[derive(Debug, Error)]
pub enum DraftError {
    #[error("Owner error: {0}")]
    Owner(#[from] OwnerError),

    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("Vault creation failed: {0}")]
    Creation(#[from] CreationError),

    #[error("A submission is already in progress")]
    SubmissionInProgress,

    #[error("Vault has already been created from this draft")]
    AlreadySubmitted,

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Owner list mutation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OwnerError {
    #[error("Owner index {index} out of bounds (owners: {len})")]
    InvalidIndex {
        index: usize,
        len: usize,
    },

    #[error("The connected wallet owner cannot be removed or edited")]
    ImmutableOwner,
}

/// Payload validation errors raised at build time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("No owners with an address to submit")]
    EmptyOwnerSet,

    #[error("Threshold {threshold} out of range for {members} members")]
    ThresholdOutOfRange {
        threshold: u32,
        members: usize,
    },

    #[error("Invalid address for owner {index} ({address}): {reason}")]
    InvalidAddress {
        index: usize,
        address: String,
        reason: String,
    },

    #[error("Duplicate owner address: {address}")]
    DuplicateOwner {
        address: String,
    },

    #[error("Too many owners: {count} (max {max})")]
    TooManyOwners {
        count: usize,
        max: usize,
    },

    #[error("Vault {field} too long: {len} characters (max {max})")]
    MetadataTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
}

/// Advanced settings parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Too many decimal places for {asset} (max {decimals})")]
    TooPrecise {
        asset: LimitAsset,
        decimals: u32,
    },

    #[error("Amount overflows base units")]
    Overflow,

    #[error("Unknown option: {0}")]
    UnknownOption(String),
}

/// Errors reported by the external vault creation service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreationError {
    #[error("Rejected by creation service: {0}")]
    Rejected(String),

    #[error("Creation service unavailable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Other(String),
}

/// Logging-related errors.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to prepare log file: {0}")]
    Io(#[from] io::Error),

    #[error("Subscriber initialization failed: {0}")]
    SubscriberInit(String),
}

/// Type alias for draft operation results.
pub type Result<T> = std::result::Result<T, DraftError>;

/// Type alias for logging operation results.
pub type LoggingResult<T> = std::result::Result<T, LoggingError>;
