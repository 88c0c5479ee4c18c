//! Order types and draft assembly.

use crate::cart::{Cart, CartLine, CartTotals, PromoCode};
use crate::checkout::CustomerDetails;
use crate::ids::OrderId;
use serde::{Deserialize, Serialize};

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order created, awaiting payment confirmation.
    #[default]
    Pending,
    /// Payment confirmed (or the order was free).
    Paid,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Paid => "Paid",
        }
    }
}

/// How the order was (or will be) paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Zero-total order; no payment was taken.
    Free,
    /// Card payment through the processor.
    Card,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Free => "free",
            PaymentMethod::Card => "card",
        }
    }
}

/// The payload handed to the order backend.
///
/// A pure mapping of the cart snapshot plus customer details; submission
/// is the backend collaborator's responsibility. Lines are snapshots,
/// not live catalog references.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDraft {
    /// Customer contact details.
    pub customer: CustomerDetails,
    /// Cart line snapshots at submission time.
    pub lines: Vec<CartLine>,
    /// Pricing breakdown at submission time.
    pub totals: CartTotals,
    /// Active promo code, if any (carries code and discount rate).
    pub promo: Option<PromoCode>,
    /// Free-text service-requirements notes.
    pub requirements: Option<String>,
    /// Status appropriate to the branch taken: `Paid` for free orders,
    /// `Pending` for orders that still need payment.
    pub status: OrderStatus,
    /// `Free` for zero-total orders; `None` until the processor is chosen.
    pub payment_method: Option<PaymentMethod>,
}

impl OrderDraft {
    /// Assemble a draft from the current cart and customer details.
    pub fn from_cart(cart: &Cart, customer: &CustomerDetails, requirements: Option<&str>) -> Self {
        let totals = *cart.totals();
        let free = totals.is_free();
        Self {
            customer: customer.clone(),
            lines: cart.lines().to_vec(),
            totals,
            promo: cart.promo().cloned(),
            requirements: requirements
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from),
            status: if free {
                OrderStatus::Paid
            } else {
                OrderStatus::Pending
            },
            payment_method: if free { Some(PaymentMethod::Free) } else { None },
        }
    }

    /// Check if this draft describes a free order.
    pub fn is_free(&self) -> bool {
        self.totals.is_free()
    }
}

/// A created order: an immutable snapshot except for the status
/// transition from pending to paid on payment confirmation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Line snapshots at submission time.
    pub lines: Vec<CartLine>,
    /// Customer contact details.
    pub customer: CustomerDetails,
    /// Order status.
    pub status: OrderStatus,
    /// Pricing breakdown.
    pub totals: CartTotals,
    /// Promo code used, if any.
    pub promo: Option<PromoCode>,
    /// Free-text service-requirements notes.
    pub requirements: Option<String>,
    /// Payment method tag.
    pub payment_method: PaymentMethod,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl Order {
    /// Materialize an order from a draft, as the order backend would.
    pub fn from_draft(id: OrderId, draft: &OrderDraft) -> Self {
        Self {
            id,
            lines: draft.lines.clone(),
            customer: draft.customer.clone(),
            status: draft.status,
            totals: draft.totals,
            promo: draft.promo.clone(),
            requirements: draft.requirements.clone(),
            payment_method: draft.payment_method.unwrap_or(PaymentMethod::Card),
            created_at: current_timestamp(),
        }
    }

    /// Total item count.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Check if the order is paid.
    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Paid
    }

    /// Transition from pending to paid on payment confirmation.
    ///
    /// Returns `false` if the order was not pending.
    pub fn mark_paid(&mut self) -> bool {
        if self.status != OrderStatus::Pending {
            return false;
        }
        self.status = OrderStatus::Paid;
        true
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::cart::PromoRegistry;
    use crate::ids::ProductId;

    fn customer() -> CustomerDetails {
        CustomerDetails::new("jess@example.com", "Jess", "Park")
    }

    fn paid_cart() -> Cart {
        let catalog = Catalog::with_default_services();
        let mut cart = Cart::default();
        cart.add_item(catalog.get(&ProductId::new("ai-resume-review")).unwrap())
            .unwrap();
        cart
    }

    fn free_cart() -> Cart {
        let catalog = Catalog::with_default_services();
        let mut cart = Cart::default();
        cart.add_item(catalog.get(&ProductId::new("ats-scan")).unwrap())
            .unwrap();
        cart
    }

    #[test]
    fn test_draft_for_paid_order() {
        let draft = OrderDraft::from_cart(&paid_cart(), &customer(), Some("Focus on tech roles"));

        assert_eq!(draft.status, OrderStatus::Pending);
        assert_eq!(draft.payment_method, None);
        assert!(!draft.is_free());
        assert_eq!(draft.lines.len(), 1);
        assert_eq!(draft.totals.total.amount_cents, 2750);
        assert_eq!(draft.requirements.as_deref(), Some("Focus on tech roles"));
    }

    #[test]
    fn test_draft_for_free_order() {
        let draft = OrderDraft::from_cart(&free_cart(), &customer(), None);

        assert_eq!(draft.status, OrderStatus::Paid);
        assert_eq!(draft.payment_method, Some(PaymentMethod::Free));
        assert!(draft.is_free());
    }

    #[test]
    fn test_draft_carries_promo() {
        let registry = PromoRegistry::with_defaults();
        let mut cart = paid_cart();
        let _ = cart.apply_promo(&registry, "SAVE10").unwrap();

        let draft = OrderDraft::from_cart(&cart, &customer(), None);
        let promo = draft.promo.unwrap();
        assert_eq!(promo.code, "SAVE10");
        assert!((promo.rate - 0.10).abs() < f64::EPSILON);
        assert_eq!(draft.totals.discount.amount_cents, 250);
    }

    #[test]
    fn test_blank_requirements_dropped() {
        let draft = OrderDraft::from_cart(&paid_cart(), &customer(), Some("   "));
        assert_eq!(draft.requirements, None);
    }

    #[test]
    fn test_mark_paid_only_from_pending() {
        let draft = OrderDraft::from_cart(&paid_cart(), &customer(), None);
        let mut order = Order::from_draft(OrderId::new("ord-1"), &draft);

        assert!(!order.is_paid());
        assert!(order.mark_paid());
        assert!(order.is_paid());
        assert!(!order.mark_paid());
    }

    #[test]
    fn test_free_order_materializes_paid() {
        let draft = OrderDraft::from_cart(&free_cart(), &customer(), None);
        let order = Order::from_draft(OrderId::new("ord-2"), &draft);

        assert!(order.is_paid());
        assert_eq!(order.payment_method, PaymentMethod::Free);
    }
}
