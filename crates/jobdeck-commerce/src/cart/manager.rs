//! The persistent cart aggregate.
//!
//! Wraps a [`Cart`] with an injected [`CartStore`] and persists the
//! snapshot after every mutating operation, so the cart survives a
//! reload.

use crate::cart::{Cart, CartStore, CartTotals, PromoOutcome, PromoRegistry};
use crate::catalog::Product;
use crate::error::CheckoutError;
use crate::ids::ProductId;
use tracing::debug;

/// Cart aggregate with durable persistence.
///
/// Owned by the UI's root composition and threaded through explicitly;
/// persistence is an injected collaborator, not an ambient global.
pub struct CartManager {
    cart: Cart,
    store: Box<dyn CartStore>,
}

impl CartManager {
    /// Open the cart, loading any persisted snapshot from the store.
    pub fn open(store: Box<dyn CartStore>) -> Result<Self, CheckoutError> {
        let mut cart = store.load()?.unwrap_or_default();
        // Totals are not part of the snapshot.
        cart.recompute()?;
        debug!(lines = cart.lines().len(), "cart loaded");
        Ok(Self { cart, store })
    }

    /// The current cart state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The current derived totals.
    pub fn totals(&self) -> &CartTotals {
        self.cart.totals()
    }

    /// Add a product; see [`Cart::add_item`].
    pub fn add_item(&mut self, product: &Product) -> Result<(), CheckoutError> {
        self.cart.add_item(product)?;
        debug!(product = %product.id, "item added to cart");
        self.persist()
    }

    /// Increment a line's quantity; see [`Cart::increment_quantity`].
    pub fn increment_quantity(&mut self, product_id: &ProductId) -> Result<bool, CheckoutError> {
        let changed = self.cart.increment_quantity(product_id)?;
        if changed {
            self.persist()?;
        }
        Ok(changed)
    }

    /// Decrement a line's quantity; see [`Cart::decrement_quantity`].
    pub fn decrement_quantity(&mut self, product_id: &ProductId) -> Result<bool, CheckoutError> {
        let changed = self.cart.decrement_quantity(product_id)?;
        if changed {
            self.persist()?;
        }
        Ok(changed)
    }

    /// Set a line's quantity directly; see [`Cart::set_quantity`].
    pub fn set_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<bool, CheckoutError> {
        let changed = self.cart.set_quantity(product_id, quantity)?;
        if changed {
            self.persist()?;
        }
        Ok(changed)
    }

    /// Remove a line; see [`Cart::remove_item`].
    pub fn remove_item(&mut self, product_id: &ProductId) -> Result<bool, CheckoutError> {
        let removed = self.cart.remove_item(product_id)?;
        if removed {
            debug!(product = %product_id, "item removed from cart");
            self.persist()?;
        }
        Ok(removed)
    }

    /// Apply a promo code; the snapshot is persisted only when the code
    /// was valid (an invalid code leaves the cart untouched).
    pub fn apply_promo(
        &mut self,
        registry: &PromoRegistry,
        code: &str,
    ) -> Result<PromoOutcome, CheckoutError> {
        let outcome = self.cart.apply_promo(registry, code)?;
        match outcome {
            PromoOutcome::Applied => {
                debug!(code, "promo applied");
                self.persist()?;
            }
            PromoOutcome::Invalid => {
                tracing::warn!(code, "unknown promo code rejected");
            }
        }
        Ok(outcome)
    }

    /// Clear the active promo.
    pub fn remove_promo(&mut self) -> Result<(), CheckoutError> {
        self.cart.remove_promo()?;
        self.persist()
    }

    /// Empty the cart and drop the persisted snapshot.
    pub fn clear(&mut self) -> Result<(), CheckoutError> {
        self.cart.clear();
        debug!("cart cleared");
        self.store.clear()
    }

    fn persist(&mut self) -> Result<(), CheckoutError> {
        self.store.save(&self.cart)
    }
}
