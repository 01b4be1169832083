//! Customer tier classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Customer classification label.
///
/// Purely descriptive in the current scope: tiers carry no pricing or
/// behavioral effect, they only change how a customer is badged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "VIP")]
    Vip,
    Regular,
}

impl Tier {
    /// Human-readable label, as shown on the customer badge.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vip => "VIP",
            Self::Regular => "Regular",
        }
    }

    /// Lowercased label used as the badge CSS class.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Vip => "vip",
            Self::Regular => "regular",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
