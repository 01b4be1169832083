//! Embedded seed fixtures.
//!
//! The demo ships its mock data as JSON compiled into the binary. Parsing
//! happens once at startup; there is no other source of catalog or roster
//! data and nothing is ever written back.

use thiserror::Error;

use crate::catalog::Catalog;
use crate::models::{Customer, Device};

const CATALOG_JSON: &str = include_str!("../data/catalog.json");
const CUSTOMERS_JSON: &str = include_str!("../data/customers.json");

/// Error parsing an embedded seed fixture.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("malformed seed fixture: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The seed device catalog.
///
/// # Errors
///
/// Returns [`SeedError::Parse`] if the embedded fixture is malformed.
pub fn catalog() -> Result<Catalog, SeedError> {
    let devices: Vec<Device> = serde_json::from_str(CATALOG_JSON)?;
    Ok(Catalog::new(devices))
}

/// The seed customer roster, all with empty purchase histories.
///
/// # Errors
///
/// Returns [`SeedError::Parse`] if the embedded fixture is malformed.
pub fn customers() -> Result<Vec<Customer>, SeedError> {
    Ok(serde_json::from_str(CUSTOMERS_JSON)?)
}
