//! Cart and checkout domain logic for JobDeck career services.
//!
//! This crate provides the purchasing core of the JobDeck job-board
//! add-on:
//!
//! - **Catalog**: sellable career services (AI and professional reviews,
//!   bundled packages) and their package/component relationships
//! - **Cart**: cart aggregate with line items, promo codes, the pricing
//!   engine (discount before GST), package conflict resolution, and
//!   durable persistence
//! - **Checkout**: the four-step checkout state machine with a free-order
//!   bypass of the payment step, order drafts, and the external
//!   order/payment collaborator seams
//!
//! # Example
//!
//! ```rust,ignore
//! use jobdeck_commerce::prelude::*;
//!
//! let catalog = Catalog::with_default_services();
//! let registry = PromoRegistry::with_defaults();
//!
//! let mut cart = CartManager::open(Box::new(FileCartStore::open("jobdeck.json")?))?;
//! cart.add_item(catalog.get(&ProductId::new("ai-resume-review")).unwrap())?;
//! cart.apply_promo(&registry, "SAVE10")?;
//!
//! println!("Total: {}", cart.totals().total.display());
//!
//! let mut session = CheckoutSession::new();
//! session.enter(&cart)?;
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CheckoutError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CheckoutError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Product, ServiceCategory};

    // Cart
    pub use crate::cart::{
        Cart, CartLine, CartManager, CartStore, CartTotals, FileCartStore, MemoryCartStore,
        PromoCode, PromoOutcome, PromoRegistry, GST_RATE, MAX_QUANTITY_PER_LINE,
    };

    // Checkout
    pub use crate::checkout::{
        CheckoutSession, CheckoutStep, CustomerDetails, Order, OrderDraft, OrderGateway,
        OrderReceipt, OrderStatus, PaymentDetails, PaymentGateway, PaymentMethod,
    };
}
