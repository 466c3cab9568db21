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

//! HTTP server exposing the seeding endpoint.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use wc_seeder::config::SeederConfig;
use wc_seeder::http::WooHttpClient;
use wc_seeder::server::{AppState, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = SeederConfig::from_env();
    if config.store_url.is_empty() {
        tracing::warn!("WOOCOMMERCE_STORE_URL is not set; seeding requests will fail the connectivity check");
    }
    let client = WooHttpClient::new(&config)?;

    let port = std::env::var("SEEDER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3100);
    let addr: SocketAddr = ([127, 0, 0, 1], port).into();

    let app = router(AppState { client });

    info!("Store seeder running on http://{addr}");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
