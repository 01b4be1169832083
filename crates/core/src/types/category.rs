//! Device catalog categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Catalog category a device is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceCategory {
    #[serde(rename = "iPhone")]
    Iphone,
    Android,
    Accessories,
}

impl DeviceCategory {
    /// Human-readable label, as shown on the catalog card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Iphone => "iPhone",
            Self::Android => "Android",
            Self::Accessories => "Accessories",
        }
    }
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
