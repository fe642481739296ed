use crate::common::CryptowatchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// OHLC candle period. Cryptowatch only serves these thirteen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub enum Period {
    OneMinute,
    ThreeMinutes,
    FiveMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    OneHour,
    TwoHours,
    FourHours,
    SixHours,
    TwelveHours,
    OneDay,
    ThreeDays,
    OneWeek,
}

impl Period {
    pub const ALL: [Period; 13] = [
        Period::OneMinute,
        Period::ThreeMinutes,
        Period::FiveMinutes,
        Period::FifteenMinutes,
        Period::ThirtyMinutes,
        Period::OneHour,
        Period::TwoHours,
        Period::FourHours,
        Period::SixHours,
        Period::TwelveHours,
        Period::OneDay,
        Period::ThreeDays,
        Period::OneWeek,
    ];

    pub fn seconds(&self) -> u64 {
        match self {
            Period::OneMinute => 60,
            Period::ThreeMinutes => 180,
            Period::FiveMinutes => 300,
            Period::FifteenMinutes => 900,
            Period::ThirtyMinutes => 1800,
            Period::OneHour => 3600,
            Period::TwoHours => 7200,
            Period::FourHours => 14400,
            Period::SixHours => 21600,
            Period::TwelveHours => 43200,
            Period::OneDay => 86400,
            Period::ThreeDays => 259200,
            Period::OneWeek => 604800,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::OneMinute => "1m",
            Period::ThreeMinutes => "3m",
            Period::FiveMinutes => "5m",
            Period::FifteenMinutes => "15m",
            Period::ThirtyMinutes => "30m",
            Period::OneHour => "1h",
            Period::TwoHours => "2h",
            Period::FourHours => "4h",
            Period::SixHours => "6h",
            Period::TwelveHours => "12h",
            Period::OneDay => "1d",
            Period::ThreeDays => "3d",
            Period::OneWeek => "1w",
        }
    }
}

impl TryFrom<u64> for Period {
    type Error = CryptowatchError;

    fn try_from(seconds: u64) -> Result<Self, Self::Error> {
        Period::ALL
            .into_iter()
            .find(|p| p.seconds() == seconds)
            .ok_or_else(|| CryptowatchError::malformed(format!("Unknown OHLC period: {}", seconds)))
    }
}

impl From<Period> for u64 {
    fn from(period: Period) -> Self {
        period.seconds()
    }
}

/// Accepts either the number of seconds (`"3600"`) or the label (`"1h"`).
impl FromStr for Period {
    type Err = CryptowatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(seconds) = s.parse::<u64>() {
            return Period::try_from(seconds);
        }
        Period::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| CryptowatchError::malformed(format!("Unknown OHLC period: {}", s)))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
