//! Advanced vault settings
//!
//! These values are passed through to the creation service as entered. Only
//! their type and range are checked here.

use core::fmt;
use core::str::FromStr;
use core::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Asset the daily limit is denominated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum LimitAsset {
    #[default]
    Eth,
    Usdc,
    Dai,
}

impl LimitAsset {
    /// Number of decimal places in one whole unit
    pub fn decimals(&self) -> u32 {
        match self {
            LimitAsset::Eth | LimitAsset::Dai => 18,
            LimitAsset::Usdc => 6,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            LimitAsset::Eth => "ETH",
            LimitAsset::Usdc => "USDC",
            LimitAsset::Dai => "DAI",
        }
    }
}

impl fmt::Display for LimitAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LimitAsset {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "eth" => Ok(LimitAsset::Eth),
            "usdc" => Ok(LimitAsset::Usdc),
            "dai" => Ok(LimitAsset::Dai),
            other => Err(SettingsError::UnknownOption(format!("asset '{}'", other))),
        }
    }
}

/// Maximum amount that may leave the vault in 24 hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DailyLimit {
    /// Amount in the asset's smallest unit
    #[cfg_attr(feature = "serde", serde(with = "base_units_string"))]
    pub base_units: u128,
    pub asset: LimitAsset,
}

impl DailyLimit {
    /// Parse a non-negative decimal amount such as `"5.0"`
    pub fn parse(text: &str, asset: LimitAsset) -> Result<Self, SettingsError> {
        let text = text.trim();
        let (whole, frac) = text.split_once('.').unwrap_or((text, ""));

        let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !is_digits(whole) || !is_digits(frac) {
            return Err(SettingsError::InvalidAmount(text.to_string()));
        }

        let decimals = asset.decimals();
        let frac = frac.trim_end_matches('0');
        if frac.len() > decimals as usize {
            return Err(SettingsError::TooPrecise {
                asset,
                decimals,
            });
        }

        let whole: u128 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| SettingsError::Overflow)?
        };
        let frac_units: u128 = if frac.is_empty() {
            0
        } else {
            let digits: u128 = frac.parse().map_err(|_| SettingsError::Overflow)?;
            digits * 10u128.pow(decimals - frac.len() as u32)
        };

        let base_units = whole
            .checked_mul(10u128.pow(decimals))
            .and_then(|w| w.checked_add(frac_units))
            .ok_or(SettingsError::Overflow)?;

        Ok(Self {
            base_units,
            asset,
        })
    }

    pub fn is_zero(&self) -> bool {
        self.base_units == 0
    }
}

impl fmt::Display for DailyLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = 10u128.pow(self.asset.decimals());
        let whole = self.base_units / scale;
        let frac = self.base_units % scale;
        if frac == 0 {
            return write!(f, "{} {}", whole, self.asset);
        }
        let frac = format!("{:0width$}", frac, width = self.asset.decimals() as usize);
        write!(f, "{}.{} {}", whole, frac.trim_end_matches('0'), self.asset)
    }
}

// u128 base units are serialized as decimal strings
#[cfg(feature = "serde")]
mod base_units_string {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Delay between approval and execution of vault transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeLock {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "none"))]
    None,
    #[cfg_attr(feature = "serde", serde(rename = "1h"))]
    OneHour,
    #[cfg_attr(feature = "serde", serde(rename = "6h"))]
    SixHours,
    #[cfg_attr(feature = "serde", serde(rename = "24h"))]
    TwentyFourHours,
    /// Duration chosen outside this model
    #[cfg_attr(feature = "serde", serde(rename = "custom"))]
    Custom,
}

impl TimeLock {
    /// Fixed delay, if this option has one
    pub fn duration(&self) -> Option<Duration> {
        const HOUR: u64 = 60 * 60;
        match self {
            TimeLock::None | TimeLock::Custom => None,
            TimeLock::OneHour => Some(Duration::from_secs(HOUR)),
            TimeLock::SixHours => Some(Duration::from_secs(6 * HOUR)),
            TimeLock::TwentyFourHours => Some(Duration::from_secs(24 * HOUR)),
        }
    }
}

impl FromStr for TimeLock {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(TimeLock::None),
            "1h" => Ok(TimeLock::OneHour),
            "6h" => Ok(TimeLock::SixHours),
            "24h" => Ok(TimeLock::TwentyFourHours),
            "custom" => Ok(TimeLock::Custom),
            other => Err(SettingsError::UnknownOption(format!("time lock '{}'", other))),
        }
    }
}

/// Operational policies for the vault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AdvancedSettings {
    pub daily_limit: DailyLimit,
    pub time_lock: TimeLock,
    /// Allow recovery of funds if access is lost
    pub emergency_recovery_enabled: bool,
    /// Allow the vault to interact with smart contracts
    pub contract_interaction_enabled: bool,
}

impl Default for AdvancedSettings {
    fn default() -> Self {
        Self {
            daily_limit: DailyLimit::default(),
            time_lock: TimeLock::None,
            emergency_recovery_enabled: false,
            contract_interaction_enabled: true,
        }
    }
}

impl AdvancedSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_daily_limit(mut self, limit: DailyLimit) -> Self {
        self.daily_limit = limit;
        self
    }

    pub fn with_time_lock(mut self, time_lock: TimeLock) -> Self {
        self.time_lock = time_lock;
        self
    }

    pub fn with_emergency_recovery(mut self, enabled: bool) -> Self {
        self.emergency_recovery_enabled = enabled;
        self
    }

    pub fn with_contract_interaction(mut self, enabled: bool) -> Self {
        self.contract_interaction_enabled = enabled;
        self
    }
}
