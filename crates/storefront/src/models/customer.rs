//! Customer domain type.

use serde::{Deserialize, Serialize};

use gadget_grove_core::{CurrencyCode, CustomerId, Price, Tier};

use super::Purchase;

/// A customer with an owned purchase history.
///
/// Purchases are appended with value semantics: [`Customer::with_purchase`]
/// returns a new record instead of mutating in place, so tests never need
/// shared-state reset between cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Unique customer ID.
    pub id: CustomerId,
    /// Full display name.
    pub full_name: String,
    /// Classification badge.
    pub tier: Tier,
    /// Ordered purchase history, oldest first.
    #[serde(default)]
    pub purchases: Vec<Purchase>,
}

impl Customer {
    /// Return this customer with `purchase` appended to their history.
    #[must_use]
    pub fn with_purchase(mut self, purchase: Purchase) -> Self {
        self.purchases.push(purchase);
        self
    }

    /// Number of recorded purchases.
    #[must_use]
    pub fn purchase_count(&self) -> usize {
        self.purchases.len()
    }

    /// Sum of all purchase prices.
    ///
    /// An empty history totals to zero in the default currency; otherwise
    /// the first purchase's currency carries the total.
    #[must_use]
    pub fn total_spent(&self) -> Price {
        let currency = self
            .purchases
            .first()
            .map_or_else(CurrencyCode::default, |p| p.price.currency_code);
        self.purchases
            .iter()
            .fold(Price::zero(currency), |total, p| total.plus(p.price))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use gadget_grove_core::DeviceId;
    use rust_decimal::Decimal;

    fn customer() -> Customer {
        Customer {
            id: CustomerId::new(1),
            full_name: "Alice Johnson".to_string(),
            tier: Tier::Vip,
            purchases: Vec::new(),
        }
    }

    fn purchase(name: &str, dollars: i64) -> Purchase {
        Purchase {
            device_id: DeviceId::new(1),
            device_name: name.to_string(),
            price: Price::new(Decimal::from(dollars), CurrencyCode::USD),
            date: "Aug 6, 2026, 02:30 PM".to_string(),
        }
    }

    #[test]
    fn test_with_purchase_appends_in_order() {
        let customer = customer()
            .with_purchase(purchase("iPhone 15 Pro", 999))
            .with_purchase(purchase("AirPods Pro", 249));

        assert_eq!(customer.purchase_count(), 2);
        let names: Vec<_> = customer
            .purchases
            .iter()
            .map(|p| p.device_name.as_str())
            .collect();
        assert_eq!(names, ["iPhone 15 Pro", "AirPods Pro"]);
    }

    #[test]
    fn test_with_purchase_leaves_original_value_untouched() {
        let before = customer();
        let after = before.clone().with_purchase(purchase("iPhone 14", 799));

        assert_eq!(before.purchase_count(), 0);
        assert_eq!(after.purchase_count(), 1);
    }

    #[test]
    fn test_total_spent_sums_prices() {
        let customer = customer()
            .with_purchase(purchase("iPhone 15 Pro", 999))
            .with_purchase(purchase("Samsung Galaxy Buds", 149));

        let total = customer.total_spent();
        assert_eq!(total.amount, Decimal::from(1148));
        assert_eq!(total.to_string(), "$1148.00");
    }

    #[test]
    fn test_total_spent_for_empty_history_is_zero() {
        assert_eq!(customer().total_spent().to_string(), "$0.00");
    }

    #[test]
    fn test_deserialize_fixture_defaults_purchases_to_empty() {
        let customer: Customer =
            serde_json::from_str(r#"{ "id": 1, "fullName": "Alice Johnson", "tier": "VIP" }"#)
                .unwrap();
        assert_eq!(customer.full_name, "Alice Johnson");
        assert_eq!(customer.tier, Tier::Vip);
        assert!(customer.purchases.is_empty());
    }
}
