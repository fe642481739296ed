mod types;

use crate::common::resource::create_resource;
use crate::common::{Market, ResourceTrait, Result};
use types::PairDetailsResponse;

pub use types::Pair;

create_resource!(Pairs, "Pairs");

impl Pairs {
    /// GET /pairs
    pub async fn list(&self) -> Result<Vec<Pair>> {
        self.get(&["pairs"], &[]).await
    }

    /// Markets trading `pair` across all exchanges.
    ///
    /// GET /pairs/{pair}
    pub async fn details(&self, pair: &str) -> Result<Vec<Market>> {
        let response: PairDetailsResponse = self.get(&["pairs", pair], &[]).await?;
        Ok(response.markets)
    }
}
