//! # Order Payload
//!
//! The snapshot of a finished cart that the cashier hands to the order
//! service. Building it has no side effects; sending it is the host's job.
//!
//! ## Snapshot Pattern
//! Line items, promos and totals are copied out of the cart, so the payload
//! stays valid after the cart is cleared for the next customer.
//!
//! ```json
//! {
//!   "draftId": "550e8400-e29b-41d4-a716-446655440000",
//!   "items": [ { "id": "ck", "kind": "service", "measure": { "unit": "weight", "value": "0.5" }, ... } ],
//!   "promos": [ { "code": "POTONG5K", "kind": { "type": "fixed_amount", "amount": 5000 } } ],
//!   "subtotal": 19000,
//!   "discount": 5000,
//!   "total": 14000,
//!   "createdAt": "2024-05-01T08:30:00Z"
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::{Cart, LineItem};
use crate::money::Money;
use crate::promo::PromoCode;

/// Everything the order service needs to create an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    /// Idempotency key: resubmitting the same payload must not create a
    /// second order.
    #[ts(as = "String")]
    pub draft_id: Uuid,
    pub items: Vec<LineItem>,
    pub promos: Vec<PromoCode>,
    pub subtotal: Money,
    pub discount: Money,
    pub total: Money,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl OrderPayload {
    /// Snapshots `cart` under a fresh draft id.
    pub fn from_cart(cart: &Cart) -> Self {
        let totals = cart.totals();

        OrderPayload {
            draft_id: Uuid::new_v4(),
            items: cart.items().to_vec(),
            promos: cart.promos().to_vec(),
            subtotal: totals.subtotal,
            discount: totals.discount,
            total: totals.total,
            created_at: Utc::now(),
        }
    }

    /// Serializes to the JSON body expected by the order service.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;
    use crate::promo::PromoDirectory;

    fn filled_cart() -> Cart {
        let promos: PromoDirectory =
            vec![PromoCode::fixed_amount("POTONG5K", Money::from_rupiah(5_000))]
                .into_iter()
                .collect();
        let mut cart = Cart::new();
        cart.add_item(
            &CatalogEntry::product("setrika", "STR", "Setrika Kemeja", Money::from_rupiah(15_000)),
            None,
        );
        cart.add_item(
            &CatalogEntry::service("ck", "CK", "Cuci Kering", Money::from_rupiah(8_000)),
            None,
        );
        cart.apply_promo("POTONG5K", &promos).unwrap();
        cart
    }

    #[test]
    fn test_snapshot_totals() {
        let payload = OrderPayload::from_cart(&filled_cart());

        assert_eq!(payload.items.len(), 2);
        assert_eq!(payload.promos.len(), 1);
        assert_eq!(payload.subtotal.rupiah(), 19_000);
        assert_eq!(payload.discount.rupiah(), 5_000);
        assert_eq!(payload.total.rupiah(), 14_000);
    }

    #[test]
    fn test_snapshot_survives_clear() {
        let mut cart = filled_cart();
        let payload = OrderPayload::from_cart(&cart);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(payload.items.len(), 2);
    }

    #[test]
    fn test_each_payload_gets_a_new_draft_id() {
        let cart = filled_cart();
        assert_ne!(
            OrderPayload::from_cart(&cart).draft_id,
            OrderPayload::from_cart(&cart).draft_id
        );
    }

    #[test]
    fn test_json_shape() {
        let json: serde_json::Value =
            serde_json::from_str(&OrderPayload::from_cart(&filled_cart()).to_json().unwrap())
                .unwrap();

        assert_eq!(json["total"], 14_000);
        assert_eq!(json["items"][0]["id"], "setrika");
        assert_eq!(json["items"][0]["unitPrice"], 15_000);
        assert_eq!(json["items"][0]["measure"]["unit"], "quantity");
        assert_eq!(json["items"][1]["kind"], "service");
        assert_eq!(json["items"][1]["measure"]["value"], "0.5");
        assert_eq!(json["promos"][0]["kind"]["type"], "fixed_amount");
        assert!(json["draftId"].is_string());
    }
}
