//! Concurrent fetch and indexing of the two external inventory sources.
//!
//! A snapshot pulls four datasets in one concurrent sweep (catalog items
//! and stock levels from the catalog backend, products and inventory levels
//! from the storefront), then indexes them for the merge step that runs as
//! the action's business logic.
//!
//! All four fetches start eagerly and run to completion; a failing fetch
//! never cancels its siblings. The snapshot is all-or-nothing: if any fetch
//! fails, partial results are discarded.

mod index;
mod records;
mod snapshot;
mod sources;

pub use index::{group_by, index_by};
pub use records::{CatalogItem, InventoryLevel, ProductVariant, StockLevel, StorefrontProduct};
pub use snapshot::{fetch_snapshot, SourceSnapshot};
pub use sources::{CatalogSource, StorefrontSource};
