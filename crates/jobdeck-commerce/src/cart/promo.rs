//! Promo codes and the code registry.

use serde::{Deserialize, Serialize};

/// A promotional code redeemable for a percentage discount on the cart
/// subtotal, applied before tax.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromoCode {
    /// Canonical (upper-cased) code string.
    pub code: String,
    /// Discount rate as a fraction in `0.0..=1.0`.
    pub rate: f64,
    /// Human-readable label (e.g., "10% off").
    pub label: String,
}

impl PromoCode {
    /// Create a new promo code. The code string is canonicalized to
    /// upper case and the rate is clamped into `0.0..=1.0`, so a
    /// misconfigured code can never discount more than the subtotal.
    pub fn new(code: impl Into<String>, rate: f64, label: impl Into<String>) -> Self {
        Self {
            code: code.into().to_uppercase(),
            rate: rate.clamp(0.0, 1.0),
            label: label.into(),
        }
    }
}

/// Registry of valid promo codes.
///
/// An unknown code is rejected by lookup, never silently ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PromoRegistry {
    codes: Vec<PromoCode>,
}

impl PromoRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default JobDeck promo codes.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.insert(PromoCode::new("SAVE10", 0.10, "10% off"));
        registry.insert(PromoCode::new("WELCOME", 0.15, "15% welcome discount"));
        registry
    }

    /// Add a code, replacing any existing entry with the same code.
    pub fn insert(&mut self, promo: PromoCode) {
        self.codes.retain(|p| p.code != promo.code);
        self.codes.push(promo);
    }

    /// Look up a code, case-insensitively.
    pub fn lookup(&self, code: &str) -> Option<&PromoCode> {
        let canonical = code.trim().to_uppercase();
        self.codes.iter().find(|p| p.code == canonical)
    }

    /// Number of registered codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if the registry holds no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
