//! Integration tests for Gadget Grove.
//!
//! The tests drive the storefront exactly as the hosting page would - events
//! in, rendered regions out - and assert on both the state and the HTML that
//! lands in the page buffer.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p gadget-grove-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_flow` - Selection and purchase scenarios end to end
//! - `region_rendering` - Rendered region content across state changes

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::{DateTime, TimeZone, Utc};

use gadget_grove_storefront::app::Storefront;
use gadget_grove_storefront::config::StorefrontConfig;
use gadget_grove_storefront::surface::PageBuffer;

/// A mounted demo storefront over the seed data and default configuration.
///
/// # Panics
///
/// Panics if the seed fixtures fail to parse or the initial render fails;
/// both are test-environment defects.
#[must_use]
pub fn demo() -> Storefront<PageBuffer> {
    let mut app = Storefront::new(StorefrontConfig::default(), PageBuffer::new())
        .expect("seed fixtures must parse");
    app.mount().expect("initial render must succeed");
    app
}

/// A fixed afternoon timestamp for deterministic purchase dates.
///
/// # Panics
///
/// Panics if the hard-coded timestamp is somehow invalid.
#[must_use]
pub fn demo_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 6, 14, 30, 0)
        .single()
        .expect("valid timestamp")
}
