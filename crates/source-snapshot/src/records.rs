//! Record types fetched from the two sources.

use serde::{Deserialize, Serialize};

/// One sellable item from the catalog backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// The item's own code, unique per variant.
    pub item_code: String,
    /// The model the item belongs to; empty when the backend has none.
    pub model_code: String,
}

impl CatalogItem {
    /// The storefront handle this item maps onto: the model code (item code
    /// when the model code is empty) with `/` folded to `-`.
    pub fn storefront_handle(&self) -> String {
        let source = if self.model_code.is_empty() {
            &self.item_code
        } else {
            &self.model_code
        };
        source.replace('/', "-").to_lowercase()
    }

    /// Grouping key for items of the same model. Items without a model code
    /// fall back to their derived handle so they still group consistently.
    pub fn model_key(&self) -> String {
        if self.model_code.is_empty() {
            self.storefront_handle()
        } else {
            self.model_code.clone()
        }
    }
}

/// Per-store stock level for one model, from the catalog backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockLevel {
    /// Model the stock belongs to.
    pub model_code: String,
    /// Store reporting the stock.
    pub store_code: String,
    /// Units on hand.
    pub quantity: i64,
}

/// A storefront product with its purchasable variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorefrontProduct {
    /// URL handle, the join key against catalog items.
    pub handle: String,
    /// The product's variants.
    pub variants: Vec<ProductVariant>,
}

impl StorefrontProduct {
    /// The inventory levels backing this product's variants, looked up by
    /// inventory item id. Variants with no tracked inventory are skipped.
    pub fn inventory_levels(
        &self,
        by_item: &std::collections::HashMap<i64, InventoryLevel>,
    ) -> Vec<InventoryLevel> {
        self.variants
            .iter()
            .filter_map(|variant| by_item.get(&variant.inventory_item_id).cloned())
            .collect()
    }
}

/// One purchasable variant of a storefront product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Stock-keeping unit.
    pub sku: String,
    /// Id of the inventory item tracking this variant's stock.
    pub inventory_item_id: i64,
}

/// Available stock for one inventory item on the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryLevel {
    /// Id of the tracked inventory item.
    pub inventory_item_id: i64,
    /// Units available for sale.
    pub available: i64,
}
