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

//! Seeding orchestrator.
//!
//! One `StoreSeeder` drives one seeding run: sequential single creates for
//! customers and orders, paced batches for products. Every remote call is
//! awaited in strict sequence; an individual failure is recorded in the
//! [`SeedReport`] and never aborts the remaining items.

use std::time::Duration;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{SeederError, SeederResult};
use crate::fixtures::{customer_fixture, product_fixture, random_order_status, random_quantity};
use crate::http::client::WooHttpClient;
use crate::http::models::{Address, BatchCreateRequest, Customer, LineItem, NewOrder, Product};
use crate::http::query::ListParams;

/// Products submitted per bulk-create call.
pub const PRODUCT_BATCH_SIZE: usize = 5;

/// Window size for the customer/product fetches that feed order seeding.
/// Stores with more records are under-sampled; see the crate README.
pub const FETCH_PAGE_SIZE: u32 = 100;

/// Pause after each product batch, to stay inside the store's rate limits.
pub const DEFAULT_BATCH_DELAY: Duration = Duration::from_millis(3000);

/// Structured outcome of seeding one entity type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedReport {
    pub entity: String,
    pub requested: u32,
    pub succeeded: u32,
    pub failed: u32,
    pub errors: Vec<String>,
}

impl SeedReport {
    fn new(entity: &str, requested: u32) -> Self {
        Self {
            entity: entity.to_string(),
            requested,
            succeeded: 0,
            failed: 0,
            errors: Vec::new(),
        }
    }

    /// Report for a type whose seeding routine failed before creating
    /// anything (connectivity loss mid-run, empty-store precondition).
    pub fn aborted(entity: &str, requested: u32, error: &SeederError) -> Self {
        Self {
            entity: entity.to_string(),
            requested,
            succeeded: 0,
            failed: requested,
            errors: vec![error.to_string()],
        }
    }

    /// One human-readable line, joined into the response message.
    pub fn summary(&self) -> String {
        if self.failed == 0 {
            format!("Successfully seeded {} {}", self.succeeded, self.entity)
        } else {
            format!(
                "Seeded {} {} ({} failed)",
                self.succeeded, self.entity, self.failed
            )
        }
    }
}

fn batch_sizes(amount: u32) -> Vec<usize> {
    let mut sizes = Vec::new();
    let mut remaining = amount as usize;
    while remaining > 0 {
        let size = remaining.min(PRODUCT_BATCH_SIZE);
        sizes.push(size);
        remaining -= size;
    }
    sizes
}

/// Sequential seeding workflow against one store.
pub struct StoreSeeder<R: Rng> {
    client: WooHttpClient,
    rng: R,
    batch_delay: Duration,
}

impl StoreSeeder<StdRng> {
    pub fn new(client: WooHttpClient) -> Self {
        Self::with_rng(client, StdRng::from_entropy())
    }
}

impl<R: Rng> StoreSeeder<R> {
    /// Creates a seeder with an injected random source, for reproducible runs.
    pub fn with_rng(client: WooHttpClient, rng: R) -> Self {
        Self {
            client,
            rng,
            batch_delay: DEFAULT_BATCH_DELAY,
        }
    }

    /// Overrides the inter-batch pause.
    pub fn batch_delay(mut self, delay: Duration) -> Self {
        self.batch_delay = delay;
        self
    }

    /// Creates `amount` customers, one call each. A failed create is logged
    /// and counted; the remaining customers are still attempted.
    pub async fn seed_customers(&mut self, amount: u32) -> SeederResult<SeedReport> {
        let mut report = SeedReport::new("customers", amount);

        for i in 0..amount {
            let customer = customer_fixture(&mut self.rng, i);
            match self.client.create_customer(&customer).await {
                Ok(created) => {
                    tracing::info!("Created customer {} ({})", created.id, created.email);
                    report.succeeded += 1;
                }
                Err(e) => {
                    tracing::error!("Error creating customer {}: {e}", customer.email);
                    report.failed += 1;
                    report.errors.push(e.to_string());
                }
            }
        }

        Ok(report)
    }

    /// Creates `amount` products in batches of [`PRODUCT_BATCH_SIZE`],
    /// pausing after each batch. Per-item successes are counted from the
    /// `create` array of the bulk response; a rejected batch costs its whole
    /// size but later batches still run. Ends with one verification read
    /// used only for logging.
    pub async fn seed_products(&mut self, amount: u32) -> SeederResult<SeedReport> {
        let mut report = SeedReport::new("products", amount);
        let sizes = batch_sizes(amount);
        let total_batches = sizes.len();

        for (index, size) in sizes.into_iter().enumerate() {
            let batch = BatchCreateRequest {
                create: (0..size).map(|_| product_fixture(&mut self.rng)).collect(),
            };

            tracing::info!(
                "Submitting product batch {}/{} ({} items)",
                index + 1,
                total_batches,
                size
            );

            match self.client.create_products_batch(&batch).await {
                Ok(response) => {
                    let created = response
                        .create
                        .iter()
                        .filter(|item| item.id.is_some())
                        .count()
                        .min(size);
                    for item in response.create.iter().filter(|item| item.id.is_none()) {
                        let message = item
                            .error
                            .as_ref()
                            .map(|e| e.message.clone())
                            .unwrap_or_else(|| "no id in batch response".to_string());
                        tracing::error!("Product rejected in batch {}: {message}", index + 1);
                        report.errors.push(message);
                    }
                    report.succeeded += created as u32;
                    report.failed += (size - created) as u32;
                }
                Err(e) => {
                    tracing::error!("Product batch {} failed: {e}", index + 1);
                    report.failed += size as u32;
                    report.errors.push(e.to_string());
                }
            }

            tokio::time::sleep(self.batch_delay).await;
        }

        match self
            .client
            .list_products(&ListParams::first_page(FETCH_PAGE_SIZE))
            .await
        {
            Ok(products) => {
                tracing::info!("Store reports {} products after seeding", products.len())
            }
            Err(e) => tracing::warn!("Product verification read failed: {e}"),
        }

        Ok(report)
    }

    /// Creates `amount` orders referencing existing customers and products.
    ///
    /// Fetches up to [`FETCH_PAGE_SIZE`] of each first and errors out with
    /// [`SeederError::NoCustomers`] / [`SeederError::NoProducts`] if either
    /// list is empty, before any order is constructed. `items_per_order`
    /// is clamped to the number of products available; when `None`, each
    /// order samples its item count from [1, 5].
    pub async fn seed_orders(
        &mut self,
        amount: u32,
        items_per_order: Option<u32>,
    ) -> SeederResult<SeedReport> {
        let params = ListParams::first_page(FETCH_PAGE_SIZE);
        let customers = self.client.list_customers(&params).await?;
        let products = self.client.list_products(&params).await?;

        if customers.is_empty() {
            return Err(SeederError::NoCustomers);
        }
        if products.is_empty() {
            return Err(SeederError::NoProducts);
        }

        let mut report = SeedReport::new("orders", amount);

        for i in 0..amount {
            let order = self.order_fixture(&customers, &products, items_per_order);
            match self.client.create_order(&order).await {
                Ok(created) => {
                    tracing::info!("Created order {} ({}/{amount})", created.id, i + 1);
                    report.succeeded += 1;
                }
                Err(e) => {
                    tracing::error!("Error creating order for customer {}: {e}", order.customer_id);
                    report.failed += 1;
                    report.errors.push(e.to_string());
                }
            }
        }

        Ok(report)
    }

    fn order_fixture(
        &mut self,
        customers: &[Customer],
        products: &[Product],
        items_per_order: Option<u32>,
    ) -> NewOrder {
        let customer = &customers[self.rng.gen_range(0..customers.len())];
        let item_count = match items_per_order {
            Some(k) => k as usize,
            None => self.rng.gen_range(1..=5),
        };

        // Shuffle-and-take keeps line items unique within the order.
        let mut pool: Vec<&Product> = products.iter().collect();
        pool.shuffle(&mut self.rng);
        pool.truncate(item_count.min(products.len()));

        let mut line_items = Vec::with_capacity(pool.len());
        let mut total = 0.0_f64;
        for product in pool {
            let quantity = random_quantity(&mut self.rng);
            total += product.unit_price() * f64::from(quantity);
            line_items.push(LineItem {
                product_id: product.id,
                quantity,
            });
        }

        NewOrder {
            customer_id: customer.id,
            status: random_order_status(&mut self.rng),
            line_items,
            billing: Address {
                first_name: customer.first_name.clone(),
                last_name: customer.last_name.clone(),
                address_1: "123 Billing St".to_string(),
                city: "Billing City".to_string(),
                state: "BC".to_string(),
                postcode: "12345".to_string(),
                country: "US".to_string(),
                email: Some(customer.email.clone()),
                phone: Some("(555) 555-5555".to_string()),
            },
            shipping: Address {
                first_name: customer.first_name.clone(),
                last_name: customer.last_name.clone(),
                address_1: "123 Shipping St".to_string(),
                city: "Shipping City".to_string(),
                state: "SC".to_string(),
                postcode: "54321".to_string(),
                country: "US".to_string(),
                email: None,
                phone: None,
            },
            total: format!("{total:.2}"),
            set_paid: true,
        }
    }
}
