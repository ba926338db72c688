//! Trailing history window keywords.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Trailing window of daily history, counted back from today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Period {
    /// Last trading day.
    #[serde(rename = "1d")]
    OneDay,
    /// Last 5 days.
    #[serde(rename = "5d")]
    FiveDays,
    /// Last month.
    #[serde(rename = "1mo")]
    OneMonth,
    /// Last 3 months.
    #[serde(rename = "3mo")]
    ThreeMonths,
    /// Last 6 months.
    #[serde(rename = "6mo")]
    SixMonths,
    /// Last year.
    #[default]
    #[serde(rename = "1y")]
    OneYear,
    /// Last 2 years.
    #[serde(rename = "2y")]
    TwoYears,
    /// Last 5 years.
    #[serde(rename = "5y")]
    FiveYears,
    /// Last 10 years.
    #[serde(rename = "10y")]
    TenYears,
    /// Since January 1 of the current year.
    #[serde(rename = "ytd")]
    YearToDate,
    /// Entire available history.
    #[serde(rename = "max")]
    Max,
}

impl Period {
    /// Returns the keyword understood by the data provider.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OneDay => "1d",
            Self::FiveDays => "5d",
            Self::OneMonth => "1mo",
            Self::ThreeMonths => "3mo",
            Self::SixMonths => "6mo",
            Self::OneYear => "1y",
            Self::TwoYears => "2y",
            Self::FiveYears => "5y",
            Self::TenYears => "10y",
            Self::YearToDate => "ytd",
            Self::Max => "max",
        }
    }

    /// Returns all available periods.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::OneDay,
            Self::FiveDays,
            Self::OneMonth,
            Self::ThreeMonths,
            Self::SixMonths,
            Self::OneYear,
            Self::TwoYears,
            Self::FiveYears,
            Self::TenYears,
            Self::YearToDate,
            Self::Max,
        ]
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1d" => Ok(Self::OneDay),
            "5d" => Ok(Self::FiveDays),
            "1mo" => Ok(Self::OneMonth),
            "3mo" => Ok(Self::ThreeMonths),
            "6mo" => Ok(Self::SixMonths),
            "1y" | "12mo" => Ok(Self::OneYear),
            "2y" => Ok(Self::TwoYears),
            "5y" => Ok(Self::FiveYears),
            "10y" => Ok(Self::TenYears),
            "ytd" => Ok(Self::YearToDate),
            "max" | "all" => Ok(Self::Max),
            _ => Err(PeriodParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid period string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodParseError(String);

impl std::fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid period '{}', expected one of: 1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max",
            self.0
        )
    }
}

impl std::error::Error for PeriodParseError {}
