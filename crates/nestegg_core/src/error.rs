use std::fmt;

/// Errors related to catalog lookups
#[derive(Debug, Clone, PartialEq)]
pub enum LookupError {
    UnknownAllocation(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::UnknownAllocation(key) => write!(f, "unknown allocation '{key}'"),
        }
    }
}

impl std::error::Error for LookupError {}

/// Reasons a `SimulationConfig` (or the trial count passed alongside it)
/// is rejected before any simulation work happens.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    CurrentAgeBelowMinimum {
        current_age: u32,
        minimum: u32,
    },
    RetirementBeforeCurrentAge {
        current_age: u32,
        retirement_age: u32,
    },
    LifeExpectancyBeforeRetirement {
        retirement_age: u32,
        life_expectancy: u32,
    },
    LifeExpectancyAboveMaximum {
        life_expectancy: u32,
        maximum: u32,
    },
    /// A currency amount that must be zero or positive was negative or not finite
    InvalidAmount {
        field: &'static str,
        value: f64,
    },
    /// Desired retirement income must be strictly positive
    NonPositiveIncome(f64),
    InvalidInflationRate(f64),
    InvalidAllocation {
        name: String,
        reason: &'static str,
    },
    NonPositiveTrialCount,
    Lookup(LookupError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::CurrentAgeBelowMinimum {
                current_age,
                minimum,
            } => write!(f, "current age {current_age} is below the minimum of {minimum}"),
            ConfigError::RetirementBeforeCurrentAge {
                current_age,
                retirement_age,
            } => write!(
                f,
                "retirement age {retirement_age} is before current age {current_age}"
            ),
            ConfigError::LifeExpectancyBeforeRetirement {
                retirement_age,
                life_expectancy,
            } => write!(
                f,
                "life expectancy {life_expectancy} is before retirement age {retirement_age}"
            ),
            ConfigError::LifeExpectancyAboveMaximum {
                life_expectancy,
                maximum,
            } => write!(
                f,
                "life expectancy {life_expectancy} exceeds the maximum of {maximum}"
            ),
            ConfigError::InvalidAmount { field, value } => {
                write!(f, "{field} must be a non-negative amount (got {value})")
            }
            ConfigError::NonPositiveIncome(value) => {
                write!(f, "desired retirement income must be positive (got {value})")
            }
            ConfigError::InvalidInflationRate(value) => {
                write!(f, "inflation rate must be finite and above -100% (got {value})")
            }
            ConfigError::InvalidAllocation { name, reason } => {
                write!(f, "invalid allocation '{name}': {reason}")
            }
            ConfigError::NonPositiveTrialCount => write!(f, "trial count must be at least 1"),
            ConfigError::Lookup(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Lookup(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LookupError> for ConfigError {
    fn from(err: LookupError) -> Self {
        ConfigError::Lookup(err)
    }
}

/// Errors surfaced by the projection engine
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionError {
    InvalidConfiguration(ConfigError),
    /// The running balance left the representable range at `age`
    NumericOverflow { age: u32 },
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionError::InvalidConfiguration(e) => write!(f, "invalid configuration: {e}"),
            ProjectionError::NumericOverflow { age } => {
                write!(f, "portfolio balance is no longer finite at age {age}")
            }
        }
    }
}

impl std::error::Error for ProjectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProjectionError::InvalidConfiguration(e) => Some(e),
            ProjectionError::NumericOverflow { .. } => None,
        }
    }
}

impl From<ConfigError> for ProjectionError {
    fn from(err: ConfigError) -> Self {
        ProjectionError::InvalidConfiguration(err)
    }
}

impl From<LookupError> for ProjectionError {
    fn from(err: LookupError) -> Self {
        ProjectionError::InvalidConfiguration(ConfigError::Lookup(err))
    }
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
