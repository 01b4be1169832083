//! The storefront application facade.
//!
//! [`Storefront`] owns the state, the configuration, and the surface. Event
//! handlers apply a pure state transition and then re-render exactly the
//! regions that depend on what changed, mirroring the page's update cycle:
//!
//! - selection: customer list, details, history, and the catalog (button
//!   enabled-state depends on whether anyone is selected)
//! - successful purchase: details, history, status banner
//! - rejected purchase: status banner only
//! - tick: status banner, once the current message expires

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

use gadget_grove_core::{CustomerId, DeviceId};

use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::notifier::{StatusKind, StatusMessage};
use crate::render;
use crate::state::AppState;
use crate::surface::{Region, Surface};

/// The storefront demo application.
pub struct Storefront<S: Surface> {
    state: AppState,
    surface: S,
    config: StorefrontConfig,
}

impl<S: Surface> Storefront<S> {
    /// Build a storefront over the embedded seed data.
    ///
    /// # Errors
    ///
    /// Returns an error if a seed fixture is malformed.
    pub fn new(config: StorefrontConfig, surface: S) -> Result<Self> {
        Ok(Self::with_state(config, surface, AppState::seeded()?))
    }

    /// Build a storefront over an explicit initial state.
    #[must_use]
    pub const fn with_state(config: StorefrontConfig, surface: S, state: AppState) -> Self {
        Self {
            state,
            surface,
            config,
        }
    }

    /// The current application state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// The surface being rendered into.
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Perform the initial full render of every region.
    ///
    /// # Errors
    ///
    /// Returns an error if a region template fails to render.
    pub fn mount(&mut self) -> Result<()> {
        self.refresh(&Region::ALL)?;
        info!(
            devices = self.state.catalog().len(),
            customers = self.state.customers().len(),
            "storefront mounted"
        );
        Ok(())
    }

    /// Handle a click on a customer entry.
    ///
    /// Unknown IDs are ignored: the roster is fixed, so there is nothing
    /// sensible to select.
    ///
    /// # Errors
    ///
    /// Returns an error if a region template fails to render.
    #[instrument(skip(self))]
    pub fn select_customer(&mut self, id: CustomerId) -> Result<()> {
        if !self.state.contains_customer(id) {
            warn!(customer_id = %id, "ignoring selection of unknown customer");
            return Ok(());
        }

        self.state = self.state.with_selection(id);
        debug!(customer_id = %id, "customer selected");
        self.refresh(&[
            Region::CustomerList,
            Region::CustomerDetails,
            Region::PurchaseHistory,
            Region::DeviceGrid,
        ])
    }

    /// Handle a click on a device's buy control at time `now`.
    ///
    /// Validation failures do not change purchase state; they only put an
    /// error message on the status banner.
    ///
    /// # Errors
    ///
    /// Returns an error if a region template fails to render.
    #[instrument(skip(self, now))]
    pub fn purchase(&mut self, device_id: DeviceId, now: DateTime<Utc>) -> Result<()> {
        let (next, outcome) = self.state.record_purchase(device_id, now);
        self.state = next;

        match outcome {
            Ok(purchase) => {
                // selection is guaranteed by record_purchase succeeding
                let buyer = self
                    .state
                    .selected_customer()
                    .map_or_else(String::new, |c| c.full_name.clone());
                info!(
                    device = %purchase.device_name,
                    customer = %buyer,
                    price = %purchase.price,
                    "purchase recorded"
                );
                self.show_status(
                    format!("Purchase added: {} for {}", purchase.device_name, buyer),
                    StatusKind::Success,
                    now,
                );
                self.refresh(&[
                    Region::CustomerDetails,
                    Region::PurchaseHistory,
                    Region::StatusBanner,
                ])
            }
            Err(err) => {
                warn!(device_id = %device_id, error = %err, "purchase rejected");
                self.show_status(err.user_message(), StatusKind::Error, now);
                self.refresh(&[Region::StatusBanner])
            }
        }
    }

    /// Advance time to `now`, hiding the status banner if its message has
    /// expired.
    ///
    /// # Errors
    ///
    /// Returns an error if the banner template fails to render.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Result<()> {
        let (next, changed) = self.state.without_expired_status(now);
        self.state = next;
        if changed {
            debug!("status banner expired");
            self.refresh(&[Region::StatusBanner])?;
        }
        Ok(())
    }

    /// Put a message on the status banner, superseding any current one.
    fn show_status(&mut self, text: impl Into<String>, kind: StatusKind, now: DateTime<Utc>) {
        self.state = self.state.with_status(StatusMessage::show(
            text,
            kind,
            now,
            self.config.status_visible,
        ));
    }

    /// Re-render the given regions into the surface.
    fn refresh(&mut self, regions: &[Region]) -> Result<()> {
        for region in regions {
            let html = render::render_region(&self.state, *region)?;
            self.surface.apply(*region, html);
        }
        Ok(())
    }
}
