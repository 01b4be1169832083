//! Region rendering.
//!
//! Each of the five page regions has one Askama template fed from the view
//! structs in [`views`]. Rendering is a pure function of [`AppState`]; the
//! caller decides which regions actually need refreshing after an event.

use askama::Template;

use crate::state::AppState;
use crate::surface::Region;

pub mod views;

use views::{
    CustomerDetailsView, CustomerEntryView, DeviceCardView, HistoryView, StatusView,
};

/// Catalog grid: one card per device.
#[derive(Template)]
#[template(path = "device_grid.html")]
struct DeviceGridTemplate {
    devices: Vec<DeviceCardView>,
}

/// Customer roster list.
#[derive(Template)]
#[template(path = "customer_list.html")]
struct CustomerListTemplate {
    customers: Vec<CustomerEntryView>,
}

/// Selected customer details panel.
#[derive(Template)]
#[template(path = "customer_details.html")]
struct CustomerDetailsTemplate {
    details: Option<CustomerDetailsView>,
}

/// Purchase history panel. `None` means no customer is selected.
#[derive(Template)]
#[template(path = "purchase_history.html")]
struct PurchaseHistoryTemplate {
    history: Option<HistoryView>,
}

/// Status banner. `None` renders the hidden banner markup.
#[derive(Template)]
#[template(path = "status_banner.html")]
struct StatusBannerTemplate {
    status: Option<StatusView>,
}

/// Render the content of one region from the current state.
///
/// # Errors
///
/// Returns [`askama::Error`] if template rendering fails.
pub fn render_region(state: &AppState, region: Region) -> askama::Result<String> {
    match region {
        Region::DeviceGrid => DeviceGridTemplate {
            devices: state
                .catalog()
                .iter()
                .map(|d| DeviceCardView::from_device(d, state.selection().is_some()))
                .collect(),
        }
        .render(),
        Region::CustomerList => CustomerListTemplate {
            customers: state
                .customers()
                .iter()
                .map(|c| CustomerEntryView::from_customer(c, state.selection()))
                .collect(),
        }
        .render(),
        Region::CustomerDetails => CustomerDetailsTemplate {
            details: state.selected_customer().map(CustomerDetailsView::from),
        }
        .render(),
        Region::PurchaseHistory => PurchaseHistoryTemplate {
            history: state.selected_customer().map(HistoryView::from),
        }
        .render(),
        Region::StatusBanner => StatusBannerTemplate {
            status: state.status().map(StatusView::from),
        }
        .render(),
    }
}
