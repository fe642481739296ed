use crate::common::CryptowatchError;
use std::time::Duration;
use url::Url;

pub const CRYPTOWATCH_API_BASE: &str = "https://api.cryptowat.ch";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const ENV_API_KEY: &str = "CRYPTOWATCH_API_KEY";
const ENV_API_BASE: &str = "CRYPTOWATCH_API_BASE";
const ENV_TIMEOUT_SECS: &str = "CRYPTOWATCH_TIMEOUT_SECS";

/// Settings shared by every resource client.
///
/// The API key is attached to each request as the `apikey` query parameter.
#[derive(Clone)]
pub struct CryptowatchConfig {
    pub api_key: String,
    pub api_base: Url,
    pub timeout: Duration,
}

impl CryptowatchConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: Url::parse(CRYPTOWATCH_API_BASE).expect("Invalid Cryptowatch API base"),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Build the configuration from the environment, loading `.env` first when present.
    ///
    /// `CRYPTOWATCH_API_KEY` is required; `CRYPTOWATCH_API_BASE` and
    /// `CRYPTOWATCH_TIMEOUT_SECS` override the defaults.
    pub fn from_env() -> Result<Self, CryptowatchError> {
        let _ = dotenvy::dotenv();

        let api_key = std::env::var(ENV_API_KEY)
            .map_err(|_| CryptowatchError::ConfigError(format!("{} is not set", ENV_API_KEY)))?;
        let mut config = Self::new(api_key);

        if let Ok(base) = std::env::var(ENV_API_BASE) {
            config = config.with_api_base(&base)?;
        }

        if let Ok(secs) = std::env::var(ENV_TIMEOUT_SECS) {
            let secs = secs.trim().parse::<u64>().map_err(|_| {
                CryptowatchError::ConfigError(format!("Invalid {} value: {}", ENV_TIMEOUT_SECS, secs))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn with_api_base(mut self, api_base: &str) -> Result<Self, CryptowatchError> {
        self.api_base = Url::parse(api_base)?;
        if self.api_base.cannot_be_a_base() {
            return Err(CryptowatchError::ConfigError(format!(
                "API base cannot carry a path: {}",
                api_base
            )));
        }
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// Keep the key out of debug output.
impl std::fmt::Debug for CryptowatchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptowatchConfig")
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}
