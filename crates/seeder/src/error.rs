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

//! Error types for the seeder.

use thiserror::Error;

use crate::http::error::WooHttpError;

#[derive(Error, Debug)]
pub enum SeederError {
    #[error("Failed to connect to WooCommerce API: {0}")]
    Connectivity(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] WooHttpError),

    #[error("cannot seed orders: no customers available")]
    NoCustomers,

    #[error("cannot seed orders: no products available")]
    NoProducts,
}

pub type SeederResult<T> = Result<T, SeederError>;
