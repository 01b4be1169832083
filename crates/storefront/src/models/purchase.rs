//! Purchase snapshot domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gadget_grove_core::{DeviceId, Price};

use super::Device;

/// Timestamp format used on purchase records, e.g. `Aug 6, 2026, 02:30 PM`.
const PURCHASE_DATE_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// An immutable record of a sale.
///
/// Captures device identity, price, and time at the moment of purchase.
/// The device name and price are denormalized on purpose: later catalog
/// changes must not rewrite history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    /// Device that was sold.
    pub device_id: DeviceId,
    /// Device display name at purchase time.
    pub device_name: String,
    /// Price at purchase time.
    pub price: Price,
    /// Formatted purchase timestamp.
    pub date: String,
}

impl Purchase {
    /// Snapshot a device into a purchase record dated `at`.
    #[must_use]
    pub fn snapshot(device: &Device, at: DateTime<Utc>) -> Self {
        Self {
            device_id: device.id,
            device_name: device.name.clone(),
            price: device.price,
            date: format_purchase_date(at),
        }
    }
}

/// Format a timestamp the way purchase records display it.
#[must_use]
pub fn format_purchase_date(at: DateTime<Utc>) -> String {
    at.format(PURCHASE_DATE_FORMAT).to_string()
}
