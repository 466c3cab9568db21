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

//! Request handler for seeding runs.
//!
//! One endpoint, `POST /api/seed`, drives a whole run. Connectivity to the
//! store is probed before anything is created; a failed probe aborts the
//! request with a 500. Per-type failures after that point are folded into
//! the aggregated 200 response so one broken type never hides the others.

use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{SeederError, SeederResult};
use crate::http::client::WooHttpClient;
use crate::seeder::{DEFAULT_BATCH_DELAY, SeedReport, StoreSeeder};

/// Shared state for the router.
#[derive(Clone)]
pub struct AppState {
    pub client: WooHttpClient,
}

/// Inbound request body for `POST /api/seed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedRequest {
    pub types: Vec<String>,
    pub amounts: Amounts,
}

/// Requested amounts per entity type. Unlisted fields default to zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Amounts {
    pub customers: u32,
    pub products: u32,
    pub orders: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products_per_order: Option<u32>,
}

/// Aggregated response for a seeding run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedResponse {
    pub message: String,
    pub results: Vec<SeedReport>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/seed", post(seed))
        .route("/health", get(health))
        .with_state(state)
}

async fn seed(
    State(state): State<AppState>,
    body: Result<Json<SeedRequest>, JsonRejection>,
) -> Response {
    // A body that fails to parse is a processing error, not a client 400;
    // callers get the same `{message, error}` shape as a failed probe.
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::error!("Rejected seed request body: {rejection}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "message": "Error processing request",
                    "error": rejection.body_text(),
                })),
            )
                .into_response();
        }
    };

    match run_seed(&state.client, request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            tracing::error!("Seeding run aborted: {e}");
            let message = match e {
                SeederError::Connectivity(_) => "Failed to connect to WooCommerce API",
                _ => "Error processing request",
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": message, "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Runs one seeding request with an entropy-seeded random source and the
/// default inter-batch pause.
pub async fn run_seed(client: &WooHttpClient, request: SeedRequest) -> SeederResult<SeedResponse> {
    run_seed_with(client, request, StdRng::from_entropy(), DEFAULT_BATCH_DELAY).await
}

/// Runs one seeding request with an injected random source and batch delay.
///
/// Probes connectivity first; any probe failure aborts the run before any
/// fixture is submitted. Each requested type then runs in order with its
/// own failure isolation, so the response always covers every type.
pub async fn run_seed_with<R: Rng + Send>(
    client: &WooHttpClient,
    request: SeedRequest,
    rng: R,
    batch_delay: Duration,
) -> SeederResult<SeedResponse> {
    client
        .check_connectivity()
        .await
        .map_err(|e| SeederError::Connectivity(e.to_string()))?;

    let mut seeder = StoreSeeder::with_rng(client.clone(), rng).batch_delay(batch_delay);
    let mut results: Vec<SeedReport> = Vec::new();
    let mut messages: Vec<String> = Vec::new();

    for entity in &request.types {
        let (requested, outcome) = match entity.as_str() {
            "customers" => (
                request.amounts.customers,
                seeder.seed_customers(request.amounts.customers).await,
            ),
            "products" => (
                request.amounts.products,
                seeder.seed_products(request.amounts.products).await,
            ),
            "orders" => (
                request.amounts.orders,
                seeder
                    .seed_orders(request.amounts.orders, request.amounts.products_per_order)
                    .await,
            ),
            other => {
                tracing::warn!("Ignoring unknown data type {other:?}");
                continue;
            }
        };

        match outcome {
            Ok(report) => {
                messages.push(report.summary());
                results.push(report);
            }
            Err(e) => {
                tracing::error!("Error seeding {entity}: {e}");
                messages.push(format!("Error seeding {entity}: {e}"));
                results.push(SeedReport::aborted(entity, requested, &e));
            }
        }
    }

    Ok(SeedResponse {
        message: messages.join("; "),
        results,
    })
}
