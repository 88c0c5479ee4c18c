//! Cart pricing calculations.
//!
//! The pricing engine is a pure function over the cart's line snapshot
//! and the active promo code. Ordering is load-bearing: the discount is
//! taken on the full subtotal, and GST is charged on the post-discount
//! amount, never the other way around.

use crate::cart::{CartLine, PromoCode};
use crate::error::CheckoutError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Flat goods-and-services tax rate applied to the post-discount subtotal.
pub const GST_RATE: f64 = 0.10;

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Sum of line totals before discounts.
    pub subtotal: Money,
    /// Discount taken on the full subtotal.
    pub discount: Money,
    /// GST charged on the post-discount amount.
    pub tax: Money,
    /// Final total (subtotal - discount + tax).
    pub total: Money,
}

impl CartTotals {
    /// Zero totals in the given currency.
    pub fn empty(currency: Currency) -> Self {
        Self {
            subtotal: Money::zero(currency),
            discount: Money::zero(currency),
            tax: Money::zero(currency),
            total: Money::zero(currency),
        }
    }

    /// A cart whose total is exactly zero is a free order and bypasses
    /// the payment step.
    pub fn is_free(&self) -> bool {
        self.total.is_zero()
    }

    /// Check if any discount is applied.
    pub fn has_discount(&self) -> bool {
        self.discount.is_positive()
    }
}

/// Compute subtotal, discount, tax and total for a set of cart lines.
///
/// Fails only on arithmetic overflow or a currency mismatch between
/// lines; well-formed carts never hit either.
pub fn compute_totals(
    lines: &[CartLine],
    promo: Option<&PromoCode>,
    currency: Currency,
) -> Result<CartTotals, CheckoutError> {
    for line in lines {
        if line.unit_price.currency != currency {
            return Err(CheckoutError::CurrencyMismatch {
                expected: currency.code().to_string(),
                got: line.unit_price.currency.code().to_string(),
            });
        }
    }

    let line_totals = lines
        .iter()
        .map(CartLine::line_total)
        .collect::<Result<Vec<_>, _>>()?;
    let subtotal =
        Money::try_sum(line_totals.iter(), currency).ok_or(CheckoutError::Overflow)?;

    let discount = match promo {
        Some(promo) => subtotal.percentage_of(promo.rate),
        None => Money::zero(currency),
    };

    let taxable = subtotal
        .try_subtract(&discount)
        .ok_or(CheckoutError::Overflow)?;
    let tax = taxable.percentage_of(GST_RATE);
    let total = taxable.try_add(&tax).ok_or(CheckoutError::Overflow)?;

    Ok(CartTotals {
        subtotal,
        discount,
        tax,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Product, ServiceCategory};

    fn line(id: &str, cents: i64, quantity: u32) -> CartLine {
        let mut line = CartLine::new(&Product::new(
            id,
            id,
            Money::new(cents, Currency::AUD),
            ServiceCategory::AiService,
            "Instant delivery",
        ));
        line.quantity = quantity;
        line
    }

    #[test]
    fn test_single_line_no_promo() {
        // AU$25.00 -> tax 2.50, total 27.50
        let totals = compute_totals(&[line("a", 2500, 1)], None, Currency::AUD).unwrap();
        assert_eq!(totals.subtotal.amount_cents, 2500);
        assert_eq!(totals.discount.amount_cents, 0);
        assert_eq!(totals.tax.amount_cents, 250);
        assert_eq!(totals.total.amount_cents, 2750);
        assert!(!totals.has_discount());
    }

    #[test]
    fn test_discount_applied_before_tax() {
        // AU$25.00 with 10% off -> discount 2.50, taxable 22.50, tax 2.25, total 24.75
        let promo = PromoCode::new("SAVE10", 0.10, "10% off");
        let totals = compute_totals(&[line("a", 2500, 1)], Some(&promo), Currency::AUD).unwrap();
        assert_eq!(totals.discount.amount_cents, 250);
        assert_eq!(totals.tax.amount_cents, 225);
        assert_eq!(totals.total.amount_cents, 2475);
    }

    #[test]
    fn test_multi_line_with_promo() {
        // AU$25.00 + AU$85.00 = 110.00; WELCOME 15% -> discount 16.50
        let lines = [line("a", 2500, 1), line("b", 8500, 1)];
        let totals = compute_totals(&lines, None, Currency::AUD).unwrap();
        assert_eq!(totals.subtotal.amount_cents, 11000);
        assert_eq!(totals.tax.amount_cents, 1100);
        assert_eq!(totals.total.amount_cents, 12100);

        let promo = PromoCode::new("WELCOME", 0.15, "15% welcome discount");
        let totals = compute_totals(&lines, Some(&promo), Currency::AUD).unwrap();
        assert_eq!(totals.discount.amount_cents, 1650);
    }

    #[test]
    fn test_quantity_multiplies_subtotal() {
        let totals = compute_totals(&[line("a", 2500, 3)], None, Currency::AUD).unwrap();
        assert_eq!(totals.subtotal.amount_cents, 7500);
    }

    #[test]
    fn test_free_lines_count_toward_subtotal() {
        let lines = [line("free", 0, 1), line("a", 2500, 1)];
        let totals = compute_totals(&lines, None, Currency::AUD).unwrap();
        assert_eq!(totals.subtotal.amount_cents, 2500);
    }

    #[test]
    fn test_all_free_cart_is_free_order() {
        let totals = compute_totals(&[line("free", 0, 2)], None, Currency::AUD).unwrap();
        assert!(totals.is_free());
        assert_eq!(totals.total.amount_cents, 0);
    }

    #[test]
    fn test_empty_cart_totals_are_zero() {
        let totals = compute_totals(&[], None, Currency::AUD).unwrap();
        assert!(totals.is_free());
        assert_eq!(totals.subtotal.amount_cents, 0);
    }

    #[test]
    fn test_total_identity() {
        // total == subtotal * (1 - rate) * 1.10 across a spread of prices
        let promo = PromoCode::new("SAVE10", 0.10, "10% off");
        for cents in [100, 999, 2500, 8500, 12000] {
            for quantity in 1..=5 {
                let totals =
                    compute_totals(&[line("a", cents, quantity)], Some(&promo), Currency::AUD)
                        .unwrap();
                let taxable = totals.subtotal.amount_cents - totals.discount.amount_cents;
                assert_eq!(totals.total.amount_cents, taxable + totals.tax.amount_cents);
            }
        }
    }

    #[test]
    fn test_currency_mismatch_rejected() {
        let mixed = [line("a", 2500, 1)];
        let result = compute_totals(&mixed, None, Currency::USD);
        assert!(matches!(
            result,
            Err(CheckoutError::CurrencyMismatch { .. })
        ));
    }
}
