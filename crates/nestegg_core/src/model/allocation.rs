//! Allocation profiles and the built-in catalog
//!
//! A profile is a named cash / fixed-income / equity mix with the expected
//! nominal return and volatility the projection samples around. The catalog
//! is a static table; adding a row is all it takes to offer a new profile.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// A named investment mix. Percentages are not required to sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationProfile {
    pub name: Cow<'static, str>,
    pub cash_pct: f64,
    pub fixed_income_pct: f64,
    pub equity_pct: f64,
    pub expected_nominal_return_pct: f64,
    pub volatility_pct: f64,
    #[serde(default)]
    pub description: Cow<'static, str>,
}

impl AllocationProfile {
    pub const CONSERVATIVE: AllocationProfile = AllocationProfile {
        name: Cow::Borrowed("Conservative"),
        cash_pct: 5.0,
        fixed_income_pct: 50.0,
        equity_pct: 45.0,
        expected_nominal_return_pct: 5.2,
        volatility_pct: 8.0,
        description: Cow::Borrowed("Lower risk, stable returns"),
    };
    pub const MODERATE: AllocationProfile = AllocationProfile {
        name: Cow::Borrowed("Moderate"),
        cash_pct: 5.0,
        fixed_income_pct: 25.0,
        equity_pct: 70.0,
        expected_nominal_return_pct: 6.5,
        volatility_pct: 12.0,
        description: Cow::Borrowed("Balanced risk and return"),
    };
    pub const AGGRESSIVE: AllocationProfile = AllocationProfile {
        name: Cow::Borrowed("Aggressive"),
        cash_pct: 2.0,
        fixed_income_pct: 8.0,
        equity_pct: 90.0,
        expected_nominal_return_pct: 7.5,
        volatility_pct: 15.0,
        description: Cow::Borrowed("Higher risk, higher potential return"),
    };

    /// Share of the portfolio held in cash and fixed income, in percent.
    #[must_use]
    pub fn safe_assets_pct(&self) -> f64 {
        self.cash_pct + self.fixed_income_pct
    }

    /// Human-readable mix, e.g. "70% Stocks, 25% Bonds, 5% Cash"
    #[must_use]
    pub fn mix_summary(&self) -> String {
        format!(
            "{}% Stocks, {}% Bonds, {}% Cash",
            self.equity_pct, self.fixed_income_pct, self.cash_pct
        )
    }
}

impl Default for AllocationProfile {
    fn default() -> Self {
        AllocationProfile::MODERATE
    }
}

static BUILTIN_PROFILES: [(&str, AllocationProfile); 3] = [
    ("conservative", AllocationProfile::CONSERVATIVE),
    ("moderate", AllocationProfile::MODERATE),
    ("aggressive", AllocationProfile::AGGRESSIVE),
];

/// Read-only registry of the built-in allocation profiles.
pub struct AllocationCatalog;

impl AllocationCatalog {
    /// Look up a profile by key (ASCII case-insensitive).
    pub fn get(key: &str) -> Result<&'static AllocationProfile, LookupError> {
        let key = key.trim();
        BUILTIN_PROFILES
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, profile)| profile)
            .ok_or_else(|| LookupError::UnknownAllocation(key.to_string()))
    }

    /// Catalog keys in table order
    pub fn keys() -> impl Iterator<Item = &'static str> {
        BUILTIN_PROFILES.iter().map(|(k, _)| *k)
    }

    pub fn entries() -> impl Iterator<Item = (&'static str, &'static AllocationProfile)> {
        BUILTIN_PROFILES.iter().map(|(k, p)| (*k, p))
    }
}
