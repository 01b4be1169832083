//! Unified error handling for the storefront demo.
//!
//! Purchase validation failures are not represented here as application
//! errors: they are expected, recoverable outcomes that surface through the
//! status banner and never propagate. `AppError` covers the remaining
//! failures (bad configuration, malformed seed data, template rendering).

use thiserror::Error;

use gadget_grove_core::DeviceId;

use crate::config::ConfigError;
use crate::seed::SeedError;

/// Why a purchase attempt was rejected.
///
/// Every variant is recoverable by construction: validation happens
/// strictly before any state change.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PurchaseError {
    /// No customer is selected to record the purchase against.
    #[error("no customer selected")]
    NoCustomerSelected,

    /// The device ID does not resolve to a catalog entry.
    #[error("unknown device: {0}")]
    DeviceNotFound(DeviceId),

    /// The device exists but is out of stock.
    #[error("device out of stock: {0}")]
    OutOfStock(DeviceId),
}

impl PurchaseError {
    /// The message shown to the user on the status banner.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::NoCustomerSelected => "Please select a customer first",
            Self::DeviceNotFound(_) => "Device not found",
            Self::OutOfStock(_) => "Device is out of stock",
        }
    }
}

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Seed fixtures could not be parsed.
    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),

    /// A region template failed to render.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
