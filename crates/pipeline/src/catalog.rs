//! Product catalog (open enumeration).
//!
//! The catalog lists the products offered to callers. It does not restrict
//! what a trigger may carry: unknown product names pass through untouched.

use serde::{Deserialize, Serialize};

use orderflow_core::{DomainError, DomainResult};

/// Products every catalog starts with, in display order.
pub const SEEDED_PRODUCTS: [&str; 3] = ["Laptop", "Mouse", "Keyboard"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<String>,
}

impl Catalog {
    pub fn seeded() -> Self {
        Self {
            products: SEEDED_PRODUCTS.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Append a product. Returns `false` if it was already listed.
    pub fn add(&mut self, name: &str) -> DomainResult<bool> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("product name must not be blank"));
        }
        if self.contains(name) {
            return Ok(false);
        }
        self.products.push(name.to_string());
        Ok(true)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.products.iter().any(|p| p == name)
    }

    pub fn products(&self) -> &[String] {
        &self.products
    }

    /// First listed product (the pre-selected choice).
    pub fn default_product(&self) -> Option<&str> {
        self.products.first().map(String::as_str)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_catalog_lists_default_products_in_order() {
        let catalog = Catalog::default();
        assert_eq!(catalog.products(), &["Laptop", "Mouse", "Keyboard"]);
        assert_eq!(catalog.default_product(), Some("Laptop"));
    }

    #[test]
    fn add_appends_new_and_skips_duplicates() {
        let mut catalog = Catalog::seeded();
        assert!(catalog.add(" Monitor ").unwrap());
        assert!(!catalog.add("Mouse").unwrap());
        assert_eq!(catalog.products().len(), 4);
        assert!(catalog.contains("Monitor"));
    }

    #[test]
    fn add_rejects_blank_names() {
        let err = Catalog::seeded().add("  ").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
