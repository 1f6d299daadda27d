//! The all-or-nothing concurrent snapshot fetch.

use crate::index::{group_by, index_by};
use crate::records::{CatalogItem, InventoryLevel, StockLevel, StorefrontProduct};
use crate::sources::{CatalogSource, StorefrontSource};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Indexed views over the four source datasets, ready for merging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSnapshot {
    /// Catalog items grouped by model.
    pub items_by_model: HashMap<String, Vec<CatalogItem>>,
    /// Catalog stock levels grouped by model.
    pub stocks_by_model: HashMap<String, Vec<StockLevel>>,
    /// Storefront products indexed by handle.
    pub products_by_handle: HashMap<String, StorefrontProduct>,
    /// Storefront inventory levels indexed by inventory item id.
    pub inventory_by_item: HashMap<i64, InventoryLevel>,
}

/// Fetch all four datasets concurrently and index them.
///
/// The four fetches are spawned up front and every one runs to completion
/// before the outcome is decided; a failing fetch does not cancel its
/// siblings. Returns `None` if any fetch failed, discarding the rest.
pub async fn fetch_snapshot<C, S>(catalog: C, storefront: S) -> Option<SourceSnapshot>
where
    C: CatalogSource + Clone + Send + Sync + 'static,
    S: StorefrontSource + Clone + Send + Sync + 'static,
{
    let items = tokio::spawn({
        let source = catalog.clone();
        async move { source.fetch_items().await }
    });
    let stocks = tokio::spawn(async move { catalog.fetch_stocks().await });
    let products = tokio::spawn({
        let source = storefront.clone();
        async move { source.fetch_products().await }
    });
    let inventories = tokio::spawn(async move { storefront.fetch_inventories().await });

    // Full barrier: every slot is awaited before any is inspected.
    let (items, stocks, products, inventories) =
        tokio::join!(items, stocks, products, inventories);

    let (Ok(Some(items)), Ok(Some(stocks)), Ok(Some(products)), Ok(Some(inventories))) =
        (items, stocks, products, inventories)
    else {
        warn!("failed to fetch source data");
        return None;
    };

    debug!(
        items = items.len(),
        stocks = stocks.len(),
        products = products.len(),
        inventories = inventories.len(),
        "indexing source data"
    );

    Some(SourceSnapshot {
        items_by_model: group_by(items, CatalogItem::model_key),
        stocks_by_model: group_by(stocks, |stock| stock.model_code.clone()),
        products_by_handle: index_by(products, |product| product.handle.clone()),
        inventory_by_item: index_by(inventories, |level| level.inventory_item_id),
    })
}
