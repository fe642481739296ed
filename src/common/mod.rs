pub mod client;
pub mod config;
pub mod errors;
pub mod records;
pub mod resource;
pub mod utils;

// Re-export
pub use client::create_http_client;
pub use config::{CRYPTOWATCH_API_BASE, CryptowatchConfig};
pub use errors::{CryptowatchError, Result};
pub use records::{Allowance, Asset, Market};
pub use resource::ResourceTrait;
pub use utils::{datetime_from_unix, number_or_string, parse_f64};
