//! The fixed set of purchasable devices.

use gadget_grove_core::DeviceId;

use crate::models::Device;

/// Read-only device catalog with lookup by ID.
#[derive(Debug, Clone)]
pub struct Catalog {
    devices: Vec<Device>,
}

impl Catalog {
    /// Build a catalog from a list of devices.
    #[must_use]
    pub const fn new(devices: Vec<Device>) -> Self {
        Self { devices }
    }

    /// Look up a device by ID.
    #[must_use]
    pub fn get(&self, id: DeviceId) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    /// Iterate devices in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Device> {
        self.devices.iter()
    }

    /// Number of devices in the catalog.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.devices.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}
