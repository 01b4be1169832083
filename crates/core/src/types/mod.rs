//! Core types for Gadget Grove.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod price;
pub mod tier;

pub use category::DeviceCategory;
pub use id::*;
pub use price::{CurrencyCode, Price};
pub use tier::Tier;
