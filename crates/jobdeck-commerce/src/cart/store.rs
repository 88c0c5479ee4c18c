//! Cart persistence.
//!
//! The cart snapshot (lines and promo code) is the only state shared
//! across page loads. Writes are last-write-wins; there is no
//! coordination across concurrent tabs.

use crate::cart::Cart;
use crate::error::CheckoutError;
use std::path::Path;

/// Key under which the cart snapshot is stored.
const CART_KEY: &str = "cart";

/// Durable client storage collaborator for the cart snapshot.
///
/// Read once at startup, written after every mutation.
pub trait CartStore: Send {
    /// Load the persisted snapshot, if any.
    fn load(&self) -> Result<Option<Cart>, CheckoutError>;

    /// Persist the given snapshot.
    fn save(&mut self, cart: &Cart) -> Result<(), CheckoutError>;

    /// Remove any persisted snapshot.
    fn clear(&mut self) -> Result<(), CheckoutError>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    snapshot: Option<Cart>,
}

impl MemoryCartStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently held snapshot, if any.
    pub fn snapshot(&self) -> Option<&Cart> {
        self.snapshot.as_ref()
    }
}

impl CartStore for MemoryCartStore {
    fn load(&self) -> Result<Option<Cart>, CheckoutError> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, cart: &Cart) -> Result<(), CheckoutError> {
        self.snapshot = Some(cart.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), CheckoutError> {
        self.snapshot = None;
        Ok(())
    }
}

/// File-backed store over the JobDeck snapshot document.
#[derive(Debug)]
pub struct FileCartStore {
    store: jobdeck_store::Store,
}

impl FileCartStore {
    /// Open a file-backed cart store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CheckoutError> {
        let store = jobdeck_store::Store::open(path.as_ref())?;
        Ok(Self { store })
    }
}

impl CartStore for FileCartStore {
    fn load(&self) -> Result<Option<Cart>, CheckoutError> {
        Ok(self.store.get(CART_KEY)?)
    }

    fn save(&mut self, cart: &Cart) -> Result<(), CheckoutError> {
        self.store.set(CART_KEY, cart)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), CheckoutError> {
        self.store.remove(CART_KEY)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ids::ProductId;

    fn sample_cart() -> Cart {
        let catalog = Catalog::with_default_services();
        let mut cart = Cart::default();
        cart.add_item(catalog.get(&ProductId::new("ai-resume-review")).unwrap())
            .unwrap();
        cart
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryCartStore::new();
        assert!(store.load().unwrap().is_none());

        let cart = sample_cart();
        store.save(&cart).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.lines(), cart.lines());

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobdeck.json");

        let cart = sample_cart();
        {
            let mut store = FileCartStore::open(&path).unwrap();
            store.save(&cart).unwrap();
        }

        let store = FileCartStore::open(&path).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.lines(), cart.lines());
    }

    #[test]
    fn test_file_store_clear() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobdeck.json");

        let mut store = FileCartStore::open(&path).unwrap();
        store.save(&sample_cart()).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
