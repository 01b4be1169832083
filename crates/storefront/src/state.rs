//! Application state and its pure transitions.
//!
//! There are no ambient globals: the whole demo is one [`AppState`] value,
//! and every handler is a transition from one state value to the next.
//! Transitions validate strictly before they touch anything, so a rejected
//! event always returns the state unchanged.

use chrono::{DateTime, Utc};

use gadget_grove_core::{CustomerId, DeviceId};

use crate::catalog::Catalog;
use crate::error::PurchaseError;
use crate::models::{Customer, Purchase};
use crate::notifier::StatusMessage;
use crate::seed::{self, SeedError};

/// The complete state of the storefront demo.
///
/// Cloning is cheap at demo scale, which is what lets the transitions stay
/// value-in, value-out.
#[derive(Debug, Clone)]
pub struct AppState {
    catalog: Catalog,
    customers: Vec<Customer>,
    selection: Option<CustomerId>,
    status: Option<StatusMessage>,
}

impl AppState {
    /// Build a state with nothing selected and no status showing.
    #[must_use]
    pub const fn new(catalog: Catalog, customers: Vec<Customer>) -> Self {
        Self {
            catalog,
            customers,
            selection: None,
            status: None,
        }
    }

    /// Build the initial state from the embedded seed fixtures.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if a fixture is malformed.
    pub fn seeded() -> Result<Self, SeedError> {
        Ok(Self::new(seed::catalog()?, seed::customers()?))
    }

    /// The device catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The customer roster, in seed order.
    #[must_use]
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// The currently selected customer ID, if any.
    #[must_use]
    pub const fn selection(&self) -> Option<CustomerId> {
        self.selection
    }

    /// Look up a customer by ID.
    #[must_use]
    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// The currently selected customer, if any.
    #[must_use]
    pub fn selected_customer(&self) -> Option<&Customer> {
        self.selection.and_then(|id| self.customer(id))
    }

    /// Whether `id` resolves to a roster entry.
    #[must_use]
    pub fn contains_customer(&self, id: CustomerId) -> bool {
        self.customer(id).is_some()
    }

    /// The status message currently on the banner, if any.
    #[must_use]
    pub const fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Select a customer.
    ///
    /// Unknown IDs leave the state unchanged; the selection state machine
    /// only ranges over the roster.
    #[must_use]
    pub fn with_selection(&self, id: CustomerId) -> Self {
        if !self.contains_customer(id) {
            return self.clone();
        }
        Self {
            selection: Some(id),
            ..self.clone()
        }
    }

    /// Replace the status slot with `message`.
    ///
    /// Replacement is what supersedes a still-visible message: the new
    /// message carries its own expiry, and the old one's is forgotten.
    #[must_use]
    pub fn with_status(&self, message: StatusMessage) -> Self {
        Self {
            status: Some(message),
            ..self.clone()
        }
    }

    /// Clear the status slot if its message has expired as of `now`.
    ///
    /// The `bool` reports whether anything changed (i.e., the banner needs
    /// a re-render).
    #[must_use]
    pub fn without_expired_status(&self, now: DateTime<Utc>) -> (Self, bool) {
        match &self.status {
            Some(message) if message.is_expired_at(now) => (
                Self {
                    status: None,
                    ..self.clone()
                },
                true,
            ),
            _ => (self.clone(), false),
        }
    }

    /// Attempt to record a purchase of `device_id` for the selected customer.
    ///
    /// Validation order follows the user-visible contract: selection first,
    /// then device resolution, then stock. On success the snapshot is
    /// appended to the selected customer's history and returned alongside
    /// the new state; on failure the state comes back unchanged.
    #[must_use]
    pub fn record_purchase(
        &self,
        device_id: DeviceId,
        now: DateTime<Utc>,
    ) -> (Self, Result<Purchase, PurchaseError>) {
        let Some(customer_id) = self.selection else {
            return (self.clone(), Err(PurchaseError::NoCustomerSelected));
        };
        let Some(device) = self.catalog.get(device_id) else {
            return (self.clone(), Err(PurchaseError::DeviceNotFound(device_id)));
        };
        if !device.in_stock {
            return (self.clone(), Err(PurchaseError::OutOfStock(device_id)));
        }

        let purchase = Purchase::snapshot(device, now);
        let customers = self
            .customers
            .iter()
            .map(|c| {
                if c.id == customer_id {
                    c.clone().with_purchase(purchase.clone())
                } else {
                    c.clone()
                }
            })
            .collect();

        let next = Self {
            customers,
            ..self.clone()
        };
        (next, Ok(purchase))
    }
}
