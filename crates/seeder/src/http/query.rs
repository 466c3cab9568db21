//! Structs for HTTP query parameters sent to the WooCommerce API.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, Builder)]
#[builder(setter(into, strip_option), default)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            per_page: None,
            page: None,
        }
    }
}

impl ListParams {
    /// Window of the first `per_page` records.
    pub fn first_page(per_page: u32) -> Self {
        Self {
            per_page: Some(per_page),
            page: None,
        }
    }
}
