//! URL management for WooCommerce REST API endpoints.

use std::fmt;

#[derive(Debug, Clone)]
pub struct StoreUrl {
    base_url: String,
}

impl StoreUrl {
    /// Joins the store URL and the API version into the REST base URL.
    pub fn new(store_url: impl Into<String>, api_version: &str) -> Self {
        let store_url = store_url.into();
        Self {
            base_url: format!("{}/wp-json/{}", store_url.trim_end_matches('/'), api_version),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn customers_url(&self) -> String {
        format!("{}/customers", self.base_url)
    }

    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    pub fn products_batch_url(&self) -> String {
        format!("{}/products/batch", self.base_url)
    }

    pub fn orders_url(&self) -> String {
        format!("{}/orders", self.base_url)
    }
}

impl fmt::Display for StoreUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base_url)
    }
}
