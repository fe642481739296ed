// src/common/utils.rs
use crate::common::CryptowatchError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

// Convert Unix seconds to a UTC date-time, rejecting values chrono cannot represent
pub fn datetime_from_unix(secs: i64, field_name: &str) -> Result<DateTime<Utc>, CryptowatchError> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| {
        CryptowatchError::malformed(format!("Invalid {} timestamp: {}", field_name, secs))
    })
}

// Parse a string to a f64, return a CryptowatchError if the parsing fails
pub fn parse_f64(value: &str, field_name: &str) -> Result<f64, CryptowatchError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| CryptowatchError::malformed(format!("Invalid {} format: {}", field_name, value)))
}

// Accept a JSON number or a numeric string (some endpoints quote their decimals)
pub fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => parse_f64(&s, "number").map_err(serde::de::Error::custom),
    }
}
