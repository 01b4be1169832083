//! Domain models for the storefront demo.
//!
//! These are plain value records with single-owner composition: the catalog
//! owns its devices, each customer owns their purchase history. Serde shapes
//! match the seed fixtures in `data/` (camelCase field names).

pub mod customer;
pub mod device;
pub mod purchase;

pub use customer::Customer;
pub use device::Device;
pub use purchase::Purchase;
