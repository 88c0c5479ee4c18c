//! Package/component conflict resolution.
//!
//! A package and its component services are mutually exclusive in the
//! cart: adding a package prunes any component lines it supersedes.
//! Adding an individual service never removes a package.

use crate::cart::CartLine;
use crate::catalog::Product;
use crate::ids::ProductId;

/// Decide which existing lines are superseded by an incoming product.
///
/// Returns the product IDs of the lines to remove; the removal happens
/// atomically with the package insertion in the cart aggregate. The
/// resolver has no knowledge of pricing.
pub fn conflicting_lines(lines: &[CartLine], incoming: &Product) -> Vec<ProductId> {
    if !incoming.is_package() {
        return Vec::new();
    }
    lines
        .iter()
        .filter(|line| incoming.supersedes(&line.product_id))
        .map(|line| line.product_id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ServiceCategory;
    use crate::money::{Currency, Money};

    fn service(id: &str) -> Product {
        Product::new(
            id,
            id,
            Money::new(2500, Currency::AUD),
            ServiceCategory::ProfessionalService,
            "3-5 business days",
        )
    }

    fn package(id: &str, components: &[&str]) -> Product {
        Product::package(
            id,
            id,
            Money::new(12000, Currency::AUD),
            "5 business days",
            components.iter().map(|c| ProductId::new(*c)).collect(),
        )
    }

    #[test]
    fn test_package_prunes_intersecting_lines_only() {
        let lines = vec![
            CartLine::new(&service("pro-resume-review")),
            CartLine::new(&service("interview-coaching")),
        ];
        let incoming = package("career-boost", &["pro-resume-review", "pro-cover-letter"]);

        let removed = conflicting_lines(&lines, &incoming);
        assert_eq!(removed, vec![ProductId::new("pro-resume-review")]);
    }

    #[test]
    fn test_individual_service_prunes_nothing() {
        let lines = vec![CartLine::new(&package(
            "career-boost",
            &["pro-resume-review"],
        ))];
        let incoming = service("pro-resume-review");

        assert!(conflicting_lines(&lines, &incoming).is_empty());
    }

    #[test]
    fn test_package_with_no_intersection() {
        let lines = vec![CartLine::new(&service("interview-coaching"))];
        let incoming = package("career-boost", &["pro-resume-review"]);

        assert!(conflicting_lines(&lines, &incoming).is_empty());
    }
}
