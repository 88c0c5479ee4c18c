//! Sellable service types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Category of a sellable service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    /// AI-generated review, delivered instantly.
    AiService,
    /// Review performed by a human professional.
    ProfessionalService,
    /// A bundle of individual services at a combined price.
    Package,
}

impl ServiceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::AiService => "ai-service",
            ServiceCategory::ProfessionalService => "professional-service",
            ServiceCategory::Package => "package",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceCategory::AiService => "AI Service",
            ServiceCategory::ProfessionalService => "Professional Service",
            ServiceCategory::Package => "Package",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ai-service" => Some(ServiceCategory::AiService),
            "professional-service" => Some(ServiceCategory::ProfessionalService),
            "package" => Some(ServiceCategory::Package),
            _ => None,
        }
    }
}

/// A sellable service in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price. Zero means the service is free.
    pub price: Money,
    /// Service category.
    pub category: ServiceCategory,
    /// Delivery-time label shown to the customer (e.g., "Instant delivery").
    pub delivery_time: String,
    /// For packages: the individual services this bundle supersedes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub component_ids: Vec<ProductId>,
}

impl Product {
    /// Create a new individual service.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: ServiceCategory,
        delivery_time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category,
            delivery_time: delivery_time.into(),
            component_ids: Vec::new(),
        }
    }

    /// Create a package bundling the given component services.
    pub fn package(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        delivery_time: impl Into<String>,
        component_ids: Vec<ProductId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: ServiceCategory::Package,
            delivery_time: delivery_time.into(),
            component_ids,
        }
    }

    /// Check if this product is a package.
    pub fn is_package(&self) -> bool {
        self.category == ServiceCategory::Package
    }

    /// Check if this product is free.
    pub fn is_free(&self) -> bool {
        self.price.is_zero()
    }

    /// Check if this product (as a package) supersedes the given service.
    pub fn supersedes(&self, product_id: &ProductId) -> bool {
        self.is_package() && self.component_ids.contains(product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_category_round_trip() {
        for category in [
            ServiceCategory::AiService,
            ServiceCategory::ProfessionalService,
            ServiceCategory::Package,
        ] {
            assert_eq!(ServiceCategory::from_str(category.as_str()), Some(category));
        }
        assert_eq!(ServiceCategory::from_str("warranty"), None);
    }

    #[test]
    fn test_package_supersedes_components() {
        let package = Product::package(
            "bundle",
            "Career Bundle",
            Money::new(12000, Currency::AUD),
            "5 business days",
            vec![ProductId::new("ai-resume-review")],
        );

        assert!(package.is_package());
        assert!(package.supersedes(&ProductId::new("ai-resume-review")));
        assert!(!package.supersedes(&ProductId::new("pro-resume-review")));
    }

    #[test]
    fn test_individual_service_supersedes_nothing() {
        let service = Product::new(
            "ai-resume-review",
            "AI Resume Review",
            Money::new(2500, Currency::AUD),
            ServiceCategory::AiService,
            "Instant delivery",
        );

        assert!(!service.is_package());
        assert!(!service.supersedes(&ProductId::new("ai-resume-review")));
    }

    #[test]
    fn test_free_product() {
        let service = Product::new(
            "ats-scan",
            "Free ATS Scan",
            Money::zero(Currency::AUD),
            ServiceCategory::AiService,
            "Instant delivery",
        );
        assert!(service.is_free());
    }
}
