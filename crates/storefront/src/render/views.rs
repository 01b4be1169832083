//! Display data passed into the region templates.
//!
//! Formatting happens here, at view-construction time, so the templates
//! only ever interpolate ready-made strings.

use gadget_grove_core::{CustomerId, DeviceId};

use crate::models::{Customer, Device, Purchase};
use crate::notifier::StatusMessage;

/// Device display data for the catalog grid.
#[derive(Clone)]
pub struct DeviceCardView {
    pub id: DeviceId,
    pub name: String,
    pub brand: String,
    pub category: String,
    pub price: String,
    pub icon: String,
    pub in_stock: bool,
    /// Whether the buy control is enabled (in stock AND a customer selected).
    pub purchasable: bool,
}

impl DeviceCardView {
    /// Build a card for `device` given whether any customer is selected.
    #[must_use]
    pub fn from_device(device: &Device, customer_selected: bool) -> Self {
        Self {
            id: device.id,
            name: device.name.clone(),
            brand: device.brand.clone(),
            category: device.category.to_string(),
            price: device.price.to_string(),
            icon: device.icon.clone(),
            in_stock: device.in_stock,
            purchasable: device.in_stock && customer_selected,
        }
    }
}

/// Customer display data for the roster list.
#[derive(Clone)]
pub struct CustomerEntryView {
    pub id: CustomerId,
    pub name: String,
    pub tier_label: &'static str,
    pub tier_class: &'static str,
    pub selected: bool,
}

impl CustomerEntryView {
    /// Build a list entry for `customer` given the current selection.
    #[must_use]
    pub fn from_customer(customer: &Customer, selection: Option<CustomerId>) -> Self {
        Self {
            id: customer.id,
            name: customer.full_name.clone(),
            tier_label: customer.tier.label(),
            tier_class: customer.tier.css_class(),
            selected: selection == Some(customer.id),
        }
    }
}

/// Customer display data for the details panel.
#[derive(Clone)]
pub struct CustomerDetailsView {
    pub name: String,
    pub tier_label: &'static str,
    pub purchase_count: usize,
    pub total_spent: String,
}

impl From<&Customer> for CustomerDetailsView {
    fn from(customer: &Customer) -> Self {
        Self {
            name: customer.full_name.clone(),
            tier_label: customer.tier.label(),
            purchase_count: customer.purchase_count(),
            total_spent: customer.total_spent().to_string(),
        }
    }
}

/// One row of the purchase history table.
#[derive(Clone)]
pub struct PurchaseRowView {
    pub device_name: String,
    pub price: String,
    pub date: String,
}

impl From<&Purchase> for PurchaseRowView {
    fn from(purchase: &Purchase) -> Self {
        Self {
            device_name: purchase.device_name.clone(),
            price: purchase.price.to_string(),
            date: purchase.date.clone(),
        }
    }
}

/// Purchase history display data for a selected customer.
#[derive(Clone)]
pub struct HistoryView {
    pub rows: Vec<PurchaseRowView>,
    pub purchase_count: usize,
    pub total_spent: String,
}

impl From<&Customer> for HistoryView {
    fn from(customer: &Customer) -> Self {
        Self {
            rows: customer.purchases.iter().map(PurchaseRowView::from).collect(),
            purchase_count: customer.purchase_count(),
            total_spent: customer.total_spent().to_string(),
        }
    }
}

/// Status banner display data.
#[derive(Clone)]
pub struct StatusView {
    pub text: String,
    pub css_class: &'static str,
}

impl From<&StatusMessage> for StatusView {
    fn from(message: &StatusMessage) -> Self {
        Self {
            text: message.text().to_string(),
            css_class: message.kind().css_class(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use gadget_grove_core::{CurrencyCode, DeviceCategory, Price, Tier};
    use rust_decimal::Decimal;

    fn device(in_stock: bool) -> Device {
        Device {
            id: DeviceId::new(1),
            name: "iPhone 15 Pro".to_string(),
            brand: "Apple".to_string(),
            price: Price::new(Decimal::from(999), CurrencyCode::USD),
            category: DeviceCategory::Iphone,
            in_stock,
            icon: "📱".to_string(),
        }
    }

    #[test]
    fn test_card_purchasable_needs_stock_and_selection() {
        assert!(DeviceCardView::from_device(&device(true), true).purchasable);
        assert!(!DeviceCardView::from_device(&device(true), false).purchasable);
        assert!(!DeviceCardView::from_device(&device(false), true).purchasable);
    }

    #[test]
    fn test_card_formats_price() {
        let card = DeviceCardView::from_device(&device(true), true);
        assert_eq!(card.price, "$999.00");
        assert_eq!(card.category, "iPhone");
    }

    #[test]
    fn test_entry_marks_only_the_selected_customer() {
        let customer = Customer {
            id: CustomerId::new(2),
            full_name: "Bob Smith".to_string(),
            tier: Tier::Regular,
            purchases: Vec::new(),
        };

        let entry = CustomerEntryView::from_customer(&customer, Some(CustomerId::new(2)));
        assert!(entry.selected);
        assert_eq!(entry.tier_class, "regular");

        let entry = CustomerEntryView::from_customer(&customer, Some(CustomerId::new(1)));
        assert!(!entry.selected);

        let entry = CustomerEntryView::from_customer(&customer, None);
        assert!(!entry.selected);
    }
}
