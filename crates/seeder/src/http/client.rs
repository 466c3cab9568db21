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

//! Authenticated HTTP client for the WooCommerce REST API.
//!
//! The client consumes only the resource endpoints the seeding workflow
//! needs: `GET/POST customers`, `GET products`, `POST products/batch`, and
//! `POST orders`. Authentication is HTTP basic with the consumer key and
//! secret, the scheme WooCommerce supports for `wc/v3` over TLS.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::SeederConfig;
use crate::http::error::WooHttpError;
use crate::http::models::{
    BatchCreateRequest, BatchCreateResponse, Customer, NewCustomer, NewOrder, Order, Product,
};
use crate::http::query::ListParams;
use crate::urls::StoreUrl;

// Low-level client holding the reqwest handle and credentials.
struct WooHttpInnerClient {
    client: Client,
    urls: StoreUrl,
    consumer_key: String,
    consumer_secret: String,
}

/// Clonable WooCommerce REST client.
#[derive(Clone)]
pub struct WooHttpClient {
    inner: Arc<WooHttpInnerClient>,
}

impl WooHttpInnerClient {
    fn new(config: &SeederConfig) -> Result<Self, WooHttpError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout))
            .build()
            .map_err(|e| WooHttpError::ConnectionError(e.to_string()))?;

        Ok(Self {
            client,
            urls: StoreUrl::new(config.store_url.clone(), &config.api_version),
            consumer_key: config.consumer_key.clone(),
            consumer_secret: config.consumer_secret.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &ListParams,
    ) -> Result<T, WooHttpError> {
        let response = self
            .client
            .get(url)
            .basic_auth(&self.consumer_key, Some(&self.consumer_secret))
            .query(params)
            .send()
            .await
            .map_err(|e| WooHttpError::RequestError(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| WooHttpError::RequestError(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(WooHttpError::from_http_status(status, text));
        }

        serde_json::from_str(&text)
            .map_err(|e| WooHttpError::JsonDecodeError(format!("Invalid JSON response: {e}")))
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, WooHttpError> {
        let response = self
            .client
            .post(url)
            .basic_auth(&self.consumer_key, Some(&self.consumer_secret))
            .json(body)
            .send()
            .await
            .map_err(|e| WooHttpError::RequestError(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| WooHttpError::RequestError(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(WooHttpError::from_http_status(status, text));
        }

        serde_json::from_str(&text)
            .map_err(|e| WooHttpError::JsonDecodeError(format!("Invalid JSON response: {e}")))
    }
}

impl WooHttpClient {
    /// Creates a new client from the seeder configuration.
    pub fn new(config: &SeederConfig) -> Result<Self, WooHttpError> {
        Ok(Self {
            inner: Arc::new(WooHttpInnerClient::new(config)?),
        })
    }

    /// Probes the store with a one-product read. Used as the connectivity
    /// check before a seeding run; the fetched data is discarded.
    pub async fn check_connectivity(&self) -> Result<(), WooHttpError> {
        let _: Vec<Product> = self
            .inner
            .get_json(&self.inner.urls.products_url(), &ListParams::first_page(1))
            .await?;
        Ok(())
    }

    pub async fn list_customers(&self, params: &ListParams) -> Result<Vec<Customer>, WooHttpError> {
        self.inner
            .get_json(&self.inner.urls.customers_url(), params)
            .await
    }

    pub async fn list_products(&self, params: &ListParams) -> Result<Vec<Product>, WooHttpError> {
        self.inner
            .get_json(&self.inner.urls.products_url(), params)
            .await
    }

    pub async fn create_customer(&self, customer: &NewCustomer) -> Result<Customer, WooHttpError> {
        self.inner
            .post_json(&self.inner.urls.customers_url(), customer)
            .await
    }

    pub async fn create_products_batch(
        &self,
        batch: &BatchCreateRequest,
    ) -> Result<BatchCreateResponse, WooHttpError> {
        self.inner
            .post_json(&self.inner.urls.products_batch_url(), batch)
            .await
    }

    pub async fn create_order(&self, order: &NewOrder) -> Result<Order, WooHttpError> {
        self.inner
            .post_json(&self.inner.urls.orders_url(), order)
            .await
    }
}
