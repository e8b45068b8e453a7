//! Required-signature threshold.
//!
//! The threshold is kept within `[0, total_owners]` at all times. Out of range
//! input is clamped instead of rejected, and every change in owner count
//! re-applies the clamp.

use core::fmt;

/// Number of signatures a fresh draft requires.
pub const DEFAULT_REQUIRED_SIGNATURES: u32 = 1;

/// Signature threshold bound to the current owner count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdPolicy {
    required: u32,
    total_owners: u32,
}

impl ThresholdPolicy {
    /// Create a policy over `total_owners` owners with the default threshold
    pub fn new(total_owners: u32) -> Self {
        let mut policy = Self {
            required: 0,
            total_owners,
        };
        policy.set_required(DEFAULT_REQUIRED_SIGNATURES);
        policy
    }

    /// Set the required signatures, clamped into `[0, total_owners]`
    pub fn set_required(&mut self, n: u32) {
        self.required = n.min(self.total_owners);
    }

    /// Track a new owner count and re-apply the clamp
    pub fn on_owner_count_changed(&mut self, new_total: u32) {
        self.total_owners = new_total;
        self.required = self.required.min(new_total);
    }

    pub fn required(&self) -> u32 {
        self.required
    }

    pub fn total_owners(&self) -> u32 {
        self.total_owners
    }

    /// Classify the current threshold
    ///
    /// A single required signature is always minimal security, even when
    /// it is also the only owner.
    pub fn describe(&self) -> SecurityLevel {
        if self.required == 1 {
            SecurityLevel::Minimal
        } else if self.required == self.total_owners && self.total_owners > 1 {
            SecurityLevel::Maximum
        } else {
            SecurityLevel::Partial {
                required: self.required,
                total: self.total_owners,
            }
        }
    }
}

/// Human-readable security classification of a threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityLevel {
    /// One signature is enough
    Minimal,
    /// Every owner must sign
    Maximum,
    /// Some but not all owners must sign
    Partial {
        required: u32,
        total: u32,
    },
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecurityLevel::Minimal => {
                write!(f, "Only 1 signature is required. This provides minimal security.")
            }
            SecurityLevel::Maximum => write!(
                f,
                "All owners must sign. This provides maximum security but may delay transactions."
            ),
            SecurityLevel::Partial {
                required,
                total,
            } => write!(f, "{} of {} owners must sign each transaction.", required, total),
        }
    }
}
