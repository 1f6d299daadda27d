//! Seams to the two remote sources.
//!
//! Implementations live with the hosts that own the HTTP clients (and the
//! test doubles); this crate only depends on the fetch contracts. A fetch
//! resolving to `None` means it failed; the orchestrator treats the whole
//! snapshot as failed once every sibling has finished.

use crate::records::{CatalogItem, InventoryLevel, StockLevel, StorefrontProduct};
use std::future::Future;

/// Read access to the catalog backend.
pub trait CatalogSource {
    /// Fetch every sellable item.
    fn fetch_items(&self) -> impl Future<Output = Option<Vec<CatalogItem>>> + Send;

    /// Fetch per-store stock levels for every model.
    fn fetch_stocks(&self) -> impl Future<Output = Option<Vec<StockLevel>>> + Send;
}

/// Read access to the storefront backend.
pub trait StorefrontSource {
    /// Fetch every product with its variants.
    fn fetch_products(&self) -> impl Future<Output = Option<Vec<StorefrontProduct>>> + Send;

    /// Fetch every tracked inventory level.
    fn fetch_inventories(&self) -> impl Future<Output = Option<Vec<InventoryLevel>>> + Send;
}
