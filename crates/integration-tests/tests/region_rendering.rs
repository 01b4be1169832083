//! Rendered region content across state changes.
//!
//! The catalog grid, roster list, and placeholder panels are pure views of
//! the state; these tests pin the parts of the markup the demo's behavior
//! contract depends on (button enabled-state, selection marker, placeholder
//! copy).

#![allow(clippy::unwrap_used)]

use gadget_grove_core::{CustomerId, DeviceId};
use gadget_grove_integration_tests::{demo, demo_time};
use gadget_grove_storefront::surface::Region;

#[test]
fn test_mount_populates_all_regions() {
    let app = demo();
    for region in Region::ALL {
        let html = app.surface().region(region).unwrap();
        assert!(!html.is_empty(), "{region:?} must render on mount");
    }
}

#[test]
fn test_catalog_lists_every_seed_device() {
    let app = demo();
    let grid = app.surface().region(Region::DeviceGrid).unwrap();

    for name in [
        "iPhone 15 Pro",
        "iPhone 14",
        "Samsung Galaxy S24",
        "Google Pixel 8 Pro",
        "OnePlus 12",
        "AirPods Pro",
        "Samsung Galaxy Buds",
        "Wireless Charger",
    ] {
        assert!(grid.contains(name), "missing device card: {name}");
    }
    assert!(grid.contains("$999.00"));
    assert!(grid.contains("$39.00"));
}

#[test]
fn test_buy_buttons_follow_selection() {
    let mut app = demo();
    let devices = app.state().catalog().len();

    // nobody selected: every card's button disabled
    let grid = app.surface().region(Region::DeviceGrid).unwrap();
    assert_eq!(grid.matches("disabled").count(), devices);

    // selection enables everything in stock
    app.select_customer(CustomerId::new(1)).unwrap();
    let grid = app.surface().region(Region::DeviceGrid).unwrap();
    assert_eq!(grid.matches("disabled").count(), 2);
}

#[test]
fn test_roster_lists_every_seed_customer_with_tier_badges() {
    let app = demo();
    let list = app.surface().region(Region::CustomerList).unwrap();

    for name in [
        "Alice Johnson",
        "Bob Smith",
        "Carol Williams",
        "David Brown",
        "Emma Davis",
    ] {
        assert!(list.contains(name), "missing roster entry: {name}");
    }
    assert_eq!(list.matches("customer-tier vip").count(), 2);
    assert_eq!(list.matches("customer-tier regular").count(), 3);
    assert_eq!(list.matches("selected").count(), 0);
}

#[test]
fn test_selection_marker_moves_with_the_selection() {
    let mut app = demo();
    app.select_customer(CustomerId::new(1)).unwrap();
    app.select_customer(CustomerId::new(3)).unwrap();

    let list = app.surface().region(Region::CustomerList).unwrap();
    assert_eq!(list.matches("customer-item selected").count(), 1);

    // the marked entry is Carol's
    let marked = list
        .split("customer-item selected")
        .nth(1)
        .unwrap();
    assert!(marked.trim_start().starts_with(r#"" data-customer-id="3""#));
}

#[test]
fn test_history_shows_dated_rows_after_purchases() {
    let mut app = demo();
    app.select_customer(CustomerId::new(3)).unwrap();
    app.purchase(DeviceId::new(7), demo_time()).unwrap();

    let history = app.surface().region(Region::PurchaseHistory).unwrap();
    assert!(history.contains("Samsung Galaxy Buds"));
    assert!(history.contains("$149.00"));
    assert!(history.contains("Aug 6, 2026, 02:30 PM"));
    assert!(history.contains("Total Purchases:</strong> 1"));
}
