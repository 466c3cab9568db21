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

//! Data models for WooCommerce REST API payloads and responses.
//!
//! Response models keep only the fields the seeding workflow reads; the
//! store returns far more, and serde drops the rest. Prices travel as
//! strings on the wire, as WooCommerce formats them.

use serde::{Deserialize, Serialize};

/// A customer as returned by `GET /customers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: u64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// A product as returned by `GET /products`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
}

impl Product {
    /// Unit price as a float; unparsable prices count as zero.
    pub fn unit_price(&self) -> f64 {
        self.price.parse().unwrap_or_else(|_| {
            tracing::warn!("Unparsable price {:?} for product {}", self.price, self.id);
            0.0
        })
    }
}

/// An order as returned by `POST /orders`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
}

/// Payload for `POST /customers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCustomer {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
}

/// Payload for product creation, one element of a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub regular_price: String,
    pub description: String,
    pub short_description: String,
    pub categories: Vec<CategoryRef>,
    pub images: Vec<ImageRef>,
    pub sku: String,
    pub stock_quantity: u32,
    pub stock_status: String,
}

/// Payload for `POST /products/batch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCreateRequest {
    pub create: Vec<NewProduct>,
}

/// Per-item result inside a bulk-create response. An `id` signals success;
/// rejected items carry an `error` object instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCreated {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub error: Option<BatchItemError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchItemError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

/// Response of `POST /products/batch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCreateResponse {
    #[serde(default)]
    pub create: Vec<BatchCreated>,
}

/// Billing or shipping address attached to an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub first_name: String,
    pub last_name: String,
    pub address_1: String,
    pub city: String,
    pub state: String,
    pub postcode: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// One (product, quantity) pair within an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: u64,
    pub quantity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Processing,
    OnHold,
    Completed,
    Cancelled,
    Refunded,
    Failed,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Processing => write!(f, "processing"),
            OrderStatus::OnHold => write!(f, "on-hold"),
            OrderStatus::Completed => write!(f, "completed"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
            OrderStatus::Refunded => write!(f, "refunded"),
            OrderStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Payload for `POST /orders`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer_id: u64,
    pub status: OrderStatus,
    pub line_items: Vec<LineItem>,
    pub billing: Address,
    pub shipping: Address,
    pub total: String,
    pub set_paid: bool,
}
