mod types;

use crate::common::resource::create_resource;
use crate::common::{Market, ResourceTrait, Result};

pub use types::{ExchangeDetails, ExchangeInfo, ExchangeRoutes};

create_resource!(Exchanges, "Exchanges");

impl Exchanges {
    /// GET /exchanges
    pub async fn list(&self) -> Result<Vec<ExchangeInfo>> {
        self.get(&["exchanges"], &[]).await
    }

    /// GET /exchanges/{exchange}
    pub async fn details(&self, exchange: &str) -> Result<ExchangeDetails> {
        self.get(&["exchanges", exchange], &[]).await
    }

    /// Every market listed on `exchange`.
    ///
    /// GET /markets/{exchange}
    pub async fn markets(&self, exchange: &str) -> Result<Vec<Market>> {
        self.get(&["markets", exchange], &[]).await
    }
}
