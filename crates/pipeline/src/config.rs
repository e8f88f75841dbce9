//! Pipeline configuration (environment driven).

use orderflow_core::DomainResult;

use crate::catalog::Catalog;

/// Comma-separated products appended to the seeded catalog.
pub const EXTRA_PRODUCTS_VAR: &str = "ORDERFLOW_EXTRA_PRODUCTS";

/// When true, the order summary is shown before validation updates status.
pub const SUMMARY_FIRST_VAR: &str = "ORDERFLOW_SUMMARY_FIRST";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PipelineConfig {
    pub extra_products: Vec<String>,
    pub summary_first: bool,
}

impl PipelineConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// Unusable values fall back to defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let extra_products = lookup(EXTRA_PRODUCTS_VAR)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let summary_first = match lookup(SUMMARY_FIRST_VAR) {
            None => false,
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                tracing::warn!(
                    var = SUMMARY_FIRST_VAR,
                    value = %raw,
                    "unrecognised flag value; using false"
                );
                false
            }),
        };

        Self {
            extra_products,
            summary_first,
        }
    }

    /// Seeded catalog extended with the configured products.
    pub fn catalog(&self) -> DomainResult<Catalog> {
        let mut catalog = Catalog::seeded();
        for product in &self.extra_products {
            catalog.add(product)?;
        }
        Ok(catalog)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
