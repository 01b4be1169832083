//! Device domain type.

use serde::{Deserialize, Serialize};

use gadget_grove_core::{DeviceCategory, DeviceId, Price};

/// A purchasable device in the catalog.
///
/// Immutable after initialization; the catalog is read-only for the whole
/// life of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Unique device ID.
    pub id: DeviceId,
    /// Display name (e.g., "iPhone 15 Pro").
    pub name: String,
    /// Manufacturer brand.
    pub brand: String,
    /// Unit price.
    pub price: Price,
    /// Catalog category.
    pub category: DeviceCategory,
    /// Whether the device can currently be purchased.
    pub in_stock: bool,
    /// Icon shown on the catalog card.
    pub icon: String,
}
