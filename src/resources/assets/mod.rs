mod types;

use crate::common::resource::create_resource;
use crate::common::{Asset, ResourceTrait, Result};

pub use types::{AssetDetails, AssetMarkets};

create_resource!(Assets, "Assets");

impl Assets {
    /// All assets known to Cryptowatch, in API order.
    ///
    /// GET /assets
    pub async fn list(&self) -> Result<Vec<Asset>> {
        self.get(&["assets"], &[]).await
    }

    /// Markets in which `asset` is the base or the quote currency.
    ///
    /// Unknown symbols surface as an `ApiError` whose `is_not_found()` is true.
    ///
    /// GET /assets/{asset}
    pub async fn details(&self, asset: &str) -> Result<AssetMarkets> {
        Ok(self.info(asset).await?.markets)
    }

    /// Same request as [`Assets::details`], keeping the asset's own fields.
    pub async fn info(&self, asset: &str) -> Result<AssetDetails> {
        self.get(&["assets", asset], &[]).await
    }
}
