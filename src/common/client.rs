use crate::common::{CryptowatchConfig, CryptowatchError};

pub fn create_http_client(
    config: &CryptowatchConfig,
) -> Result<reqwest::Client, CryptowatchError> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .user_agent(concat!("cryptowatch-rs/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}
