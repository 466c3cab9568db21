// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2025 Store Tools. All rights reserved.
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Configuration for the WooCommerce seeder.
//!
//! Credentials and the store URL come from the environment. Missing values
//! fall back to empty strings so that the connectivity check fails with a
//! clean API error instead of a startup crash.

use serde::{Deserialize, Serialize};

/// Main configuration for the seeder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeederConfig {
    /// Base URL of the WooCommerce store (without the `/wp-json` prefix).
    pub store_url: String,
    /// The REST API consumer key.
    pub consumer_key: String,
    /// The REST API consumer secret.
    pub consumer_secret: String,
    /// WooCommerce REST API version path.
    pub api_version: String,
    /// HTTP timeout in seconds.
    pub http_timeout: u64,
}

impl Default for SeederConfig {
    fn default() -> Self {
        Self {
            store_url: String::new(),
            consumer_key: String::new(),
            consumer_secret: String::new(),
            api_version: "wc/v3".to_string(),
            http_timeout: 30,
        }
    }
}

impl SeederConfig {
    /// Creates a new configuration with the specified store and credentials.
    ///
    /// # Arguments
    ///
    /// * `store_url` - Base URL of the store
    /// * `consumer_key` - The REST API consumer key
    /// * `consumer_secret` - The REST API consumer secret
    ///
    /// # Returns
    ///
    /// A new configuration instance with defaults for the remaining fields.
    pub fn with_credentials(
        store_url: impl Into<String>,
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Self {
        Self {
            store_url: store_url.into(),
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            ..Self::default()
        }
    }

    /// Builds a configuration from `WOOCOMMERCE_*` environment variables.
    pub fn from_env() -> Self {
        Self {
            store_url: std::env::var("WOOCOMMERCE_STORE_URL").unwrap_or_default(),
            consumer_key: std::env::var("WOOCOMMERCE_CONSUMER_KEY").unwrap_or_default(),
            consumer_secret: std::env::var("WOOCOMMERCE_CONSUMER_SECRET").unwrap_or_default(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = SeederConfig::default();
        assert_eq!(config.api_version, "wc/v3");
        assert_eq!(config.http_timeout, 30);
        assert!(config.store_url.is_empty());
    }

    #[test]
    fn test_config_with_credentials() {
        let config =
            SeederConfig::with_credentials("https://shop.example.com", "ck_test", "cs_test");
        assert_eq!(config.store_url, "https://shop.example.com");
        assert_eq!(config.consumer_key, "ck_test");
        assert_eq!(config.consumer_secret, "cs_test");
        assert_eq!(config.api_version, "wc/v3");
    }
}
