//! Shopping cart module.
//!
//! Contains the cart aggregate, its line items, the pricing engine,
//! promo codes, package conflict resolution, and cart persistence.

mod cart;
mod conflict;
mod line;
mod manager;
mod pricing;
mod promo;
mod store;

pub use cart::{Cart, PromoOutcome};
pub use conflict::conflicting_lines;
pub use line::{CartLine, MAX_QUANTITY_PER_LINE};
pub use manager::CartManager;
pub use pricing::{compute_totals, CartTotals, GST_RATE};
pub use promo::{PromoCode, PromoRegistry};
pub use store::{CartStore, FileCartStore, MemoryCartStore};
