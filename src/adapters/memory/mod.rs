//! In-memory adapters.
//!
//! - `InMemoryRecordStore` - record-store ports without a database
//! - `InMemoryCartStore` - per-member session carts

mod cart_store;
mod record_store;

pub use cart_store::InMemoryCartStore;
pub use record_store::InMemoryRecordStore;
