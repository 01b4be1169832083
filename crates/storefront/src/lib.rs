//! Gadget Grove Storefront library.
//!
//! An in-memory storefront demo: a fixed device catalog, a customer roster,
//! and click-driven purchase recording rendered into five identified page
//! regions. All state is volatile and reset on restart.
//!
//! # Modules
//!
//! - [`app`] - The event-handling facade over state, rendering, and surface
//! - [`catalog`] - The read-only device catalog
//! - [`config`] - Environment-based configuration with defaults
//! - [`error`] - Purchase validation and application error types
//! - [`models`] - Device, customer, and purchase value records
//! - [`notifier`] - Single-slot transient status messages
//! - [`render`] - Askama templates for the five page regions
//! - [`seed`] - Embedded JSON mock data
//! - [`state`] - The application state value and its pure transitions
//! - [`surface`] - The hosting-page abstraction the regions render into

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod notifier;
pub mod render;
pub mod seed;
pub mod state;
pub mod surface;
