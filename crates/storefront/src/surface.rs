//! The rendering surface the storefront writes into.
//!
//! The hosting page exposes five identified regions; the core only ever
//! replaces their content wholesale. It assumes the regions exist and never
//! creates or tears them down.

use std::collections::HashMap;

/// One of the identified regions on the hosting page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    DeviceGrid,
    CustomerList,
    CustomerDetails,
    PurchaseHistory,
    StatusBanner,
}

impl Region {
    /// All regions, in page order.
    pub const ALL: [Self; 5] = [
        Self::DeviceGrid,
        Self::CustomerList,
        Self::CustomerDetails,
        Self::PurchaseHistory,
        Self::StatusBanner,
    ];

    /// The element ID of this region on the hosting page.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::DeviceGrid => "devicesGrid",
            Self::CustomerList => "customersList",
            Self::CustomerDetails => "customerDetails",
            Self::PurchaseHistory => "purchaseHistory",
            Self::StatusBanner => "statusMessage",
        }
    }
}

/// Receiver for rendered region content.
pub trait Surface {
    /// Replace the content of `region` with `html`.
    fn apply(&mut self, region: Region, html: String);
}

/// An in-memory surface holding the latest content of each region.
///
/// Stands in for the hosting page in the interactive binary and in tests.
#[derive(Debug, Default, Clone)]
pub struct PageBuffer {
    regions: HashMap<Region, String>,
}

impl PageBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last content applied to `region`, if it has been rendered.
    #[must_use]
    pub fn region(&self, region: Region) -> Option<&str> {
        self.regions.get(&region).map(String::as_str)
    }
}

impl Surface for PageBuffer {
    fn apply(&mut self, region: Region, html: String) {
        self.regions.insert(region, html);
    }
}
