//! Durable client-side snapshot storage for JobDeck.
//!
//! A small key-addressed JSON document store used to keep state (the
//! shopping cart, most importantly) alive across page loads. The whole
//! document is rewritten on every write; last write wins, which is fine
//! for a single user's session data.
//!
//! # Example
//!
//! ```rust,ignore
//! use jobdeck_store::Store;
//!
//! let mut store = Store::open("jobdeck.json")?;
//! store.set("cart", &cart)?;
//!
//! let cart: Option<Cart> = store.get("cart")?;
//! ```

mod error;
mod store;

pub use error::StoreError;
pub use store::Store;
