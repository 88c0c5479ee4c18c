//! The cart aggregate.

use crate::cart::{
    compute_totals, conflicting_lines, CartLine, CartTotals, PromoCode, PromoRegistry,
    MAX_QUANTITY_PER_LINE,
};
use crate::catalog::Product;
use crate::error::CheckoutError;
use crate::ids::{CartId, ProductId};
use crate::money::Currency;
use serde::{Deserialize, Serialize};

/// Result of applying a promo code.
///
/// Invalid user input on the promo field is routine, so an unknown code
/// is a value, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum PromoOutcome {
    /// The code was valid and is now active.
    Applied,
    /// The code is unknown; the cart is untouched.
    Invalid,
}

/// A shopping cart: an ordered collection of lines keyed by product
/// identifier, an optional active promo code, and derived totals.
///
/// Totals are recomputed synchronously inside every mutating operation,
/// so no state with stale totals is ever observable. Lines and promo are
/// private to protect the package/component exclusivity and quantity
/// invariants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Unique cart identifier.
    pub id: CartId,
    /// Cart currency.
    pub currency: Currency,
    lines: Vec<CartLine>,
    promo: Option<PromoCode>,
    /// Derived, never persisted; recomputed after deserialization.
    #[serde(skip)]
    totals: CartTotals,
}

impl Cart {
    /// Create a new empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            id: CartId::generate(),
            currency,
            lines: Vec::new(),
            promo: None,
            totals: CartTotals::empty(currency),
        }
    }

    /// Add a product to the cart.
    ///
    /// If the product is already a line, its quantity is incremented
    /// (clamped at [`MAX_QUANTITY_PER_LINE`]); adding beyond the cap is a
    /// no-op, not an error. Otherwise any lines the product supersedes
    /// are removed and a new line is inserted at quantity 1, atomically
    /// with the totals recomputation.
    pub fn add_item(&mut self, product: &Product) -> Result<(), CheckoutError> {
        if product.price.currency != self.currency {
            return Err(CheckoutError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: product.price.currency.code().to_string(),
            });
        }

        let superseded = conflicting_lines(&self.lines, product);
        self.lines
            .retain(|line| !superseded.contains(&line.product_id));

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.increment();
        } else {
            self.lines.push(CartLine::new(product));
        }

        self.recompute()
    }

    /// Increase the named line's quantity by one, clamped at the cap.
    ///
    /// Returns `Ok(false)` if no such line exists.
    pub fn increment_quantity(&mut self, product_id: &ProductId) -> Result<bool, CheckoutError> {
        let Some(line) = self.lines.iter_mut().find(|l| &l.product_id == product_id) else {
            return Ok(false);
        };
        line.increment();
        self.recompute()?;
        Ok(true)
    }

    /// Decrease the named line's quantity by one.
    ///
    /// At quantity 1 the line is removed entirely rather than left at 0.
    /// Returns `Ok(false)` if no such line exists.
    pub fn decrement_quantity(&mut self, product_id: &ProductId) -> Result<bool, CheckoutError> {
        let Some(line) = self.lines.iter_mut().find(|l| &l.product_id == product_id) else {
            return Ok(false);
        };
        if line.quantity <= 1 {
            self.lines.retain(|l| &l.product_id != product_id);
        } else {
            line.quantity -= 1;
        }
        self.recompute()?;
        Ok(true)
    }

    /// Set the named line's quantity directly, clamped to the cap.
    ///
    /// Quantity 0 behaves like removal. Returns `Ok(false)` if no such
    /// line exists.
    pub fn set_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<bool, CheckoutError> {
        if quantity == 0 {
            return self.remove_item(product_id);
        }
        let Some(line) = self.lines.iter_mut().find(|l| &l.product_id == product_id) else {
            return Ok(false);
        };
        line.quantity = quantity.min(MAX_QUANTITY_PER_LINE);
        self.recompute()?;
        Ok(true)
    }

    /// Delete the named line unconditionally.
    ///
    /// Returns `Ok(false)` if no such line exists.
    pub fn remove_item(&mut self, product_id: &ProductId) -> Result<bool, CheckoutError> {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.product_id != product_id);
        if self.lines.len() == len_before {
            return Ok(false);
        }
        self.recompute()?;
        Ok(true)
    }

    /// Empty all lines and clear any active promo.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.promo = None;
        self.totals = CartTotals::empty(self.currency);
    }

    /// Apply a promo code from the registry.
    ///
    /// An unknown code leaves the cart untouched and reports
    /// [`PromoOutcome::Invalid`].
    pub fn apply_promo(
        &mut self,
        registry: &PromoRegistry,
        code: &str,
    ) -> Result<PromoOutcome, CheckoutError> {
        let Some(promo) = registry.lookup(code) else {
            return Ok(PromoOutcome::Invalid);
        };
        self.promo = Some(promo.clone());
        self.recompute()?;
        Ok(PromoOutcome::Applied)
    }

    /// Clear the active promo.
    pub fn remove_promo(&mut self) -> Result<(), CheckoutError> {
        self.promo = None;
        self.recompute()
    }

    /// All lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get a line by product identifier.
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product_id == product_id)
    }

    /// The active promo code, if any.
    pub fn promo(&self) -> Option<&PromoCode> {
        self.promo.as_ref()
    }

    /// The current derived totals.
    pub fn totals(&self) -> &CartTotals {
        &self.totals
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Recompute derived totals from the current lines and promo.
    ///
    /// Called from every mutation and after deserializing a persisted
    /// snapshot (totals are not part of the snapshot).
    pub(crate) fn recompute(&mut self) -> Result<(), CheckoutError> {
        self.totals = compute_totals(&self.lines, self.promo.as_ref(), self.currency)?;
        Ok(())
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::AUD)
    }
}
