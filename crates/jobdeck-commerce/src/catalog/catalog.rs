//! In-memory service catalog.

use crate::catalog::{Product, ServiceCategory};
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A read-only collection of sellable services, queried by identifier.
///
/// Insertion order is preserved for display purposes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default JobDeck service catalog.
    pub fn with_default_services() -> Self {
        let mut catalog = Self::new();

        catalog.insert(Product::new(
            "ats-scan",
            "Free ATS Compatibility Scan",
            Money::zero(Currency::AUD),
            ServiceCategory::AiService,
            "Instant delivery",
        ));
        catalog.insert(Product::new(
            "ai-resume-review",
            "AI Resume Review",
            Money::new(2500, Currency::AUD),
            ServiceCategory::AiService,
            "Instant delivery",
        ));
        catalog.insert(Product::new(
            "ai-cover-letter",
            "AI Cover Letter Review",
            Money::new(1500, Currency::AUD),
            ServiceCategory::AiService,
            "Instant delivery",
        ));
        catalog.insert(Product::new(
            "pro-resume-review",
            "Professional Resume Review",
            Money::new(8500, Currency::AUD),
            ServiceCategory::ProfessionalService,
            "3-5 business days",
        ));
        catalog.insert(Product::new(
            "pro-cover-letter",
            "Professional Cover Letter Review",
            Money::new(4500, Currency::AUD),
            ServiceCategory::ProfessionalService,
            "3-5 business days",
        ));
        catalog.insert(Product::package(
            "career-boost",
            "Career Boost Package",
            Money::new(12000, Currency::AUD),
            "5 business days",
            vec![
                ProductId::new("ai-resume-review"),
                ProductId::new("pro-resume-review"),
                ProductId::new("pro-cover-letter"),
            ],
        ));

        catalog
    }

    /// Add a product, replacing any existing product with the same ID.
    pub fn insert(&mut self, product: Product) {
        self.products.retain(|p| p.id != product.id);
        self.products.push(product);
    }

    /// Look up a product by identifier.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// All products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products in a given category.
    pub fn in_category(&self, category: ServiceCategory) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_lookup() {
        let catalog = Catalog::with_default_services();
        let review = catalog.get(&ProductId::new("ai-resume-review")).unwrap();
        assert_eq!(review.price.amount_cents, 2500);
        assert_eq!(review.category, ServiceCategory::AiService);
    }

    #[test]
    fn test_default_catalog_package_components() {
        let catalog = Catalog::with_default_services();
        let package = catalog.get(&ProductId::new("career-boost")).unwrap();

        assert!(package.is_package());
        for component_id in &package.component_ids {
            assert!(
                catalog.get(component_id).is_some(),
                "package component {component_id} missing from catalog"
            );
        }
    }

    #[test]
    fn test_insert_replaces_same_id() {
        let mut catalog = Catalog::new();
        catalog.insert(Product::new(
            "ai-resume-review",
            "AI Resume Review",
            Money::new(2500, Currency::AUD),
            ServiceCategory::AiService,
            "Instant delivery",
        ));
        catalog.insert(Product::new(
            "ai-resume-review",
            "AI Resume Review v2",
            Money::new(3000, Currency::AUD),
            ServiceCategory::AiService,
            "Instant delivery",
        ));

        assert_eq!(catalog.len(), 1);
        let product = catalog.get(&ProductId::new("ai-resume-review")).unwrap();
        assert_eq!(product.price.amount_cents, 3000);
    }

    #[test]
    fn test_in_category() {
        let catalog = Catalog::with_default_services();
        let packages: Vec<_> = catalog.in_category(ServiceCategory::Package).collect();
        assert_eq!(packages.len(), 1);
    }
}
