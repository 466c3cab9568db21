//! Integration tests for the seeding workflow against a mocked store.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use wc_seeder::config::SeederConfig;
use wc_seeder::error::SeederError;
use wc_seeder::http::WooHttpClient;
use wc_seeder::http::models::BatchCreateRequest;
use wc_seeder::seeder::StoreSeeder;

fn client_for(server: &MockServer) -> WooHttpClient {
    let config = SeederConfig::with_credentials(server.uri(), "ck_test", "cs_test");
    WooHttpClient::new(&config).expect("client should build")
}

fn seeder_for(server: &MockServer) -> StoreSeeder<StdRng> {
    StoreSeeder::with_rng(client_for(server), StdRng::seed_from_u64(42))
        .batch_delay(Duration::ZERO)
}

/// Echoes a bulk-create request back as a fully successful response, so the
/// per-item result count always matches the submitted batch size.
struct BatchEcho;

impl Respond for BatchEcho {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let batch: BatchCreateRequest =
            serde_json::from_slice(&request.body).expect("batch body should parse");
        let create: Vec<Value> = batch
            .create
            .iter()
            .enumerate()
            .map(|(i, product)| json!({ "id": i as u64 + 1, "sku": product.sku }))
            .collect();
        ResponseTemplate::new(200).set_body_json(json!({ "create": create }))
    }
}

fn customer_body(id: u64, first: &str, last: &str) -> Value {
    json!({
        "id": id,
        "email": format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        "first_name": first,
        "last_name": last,
    })
}

fn product_body(id: u64, name: &str, price: &str) -> Value {
    json!({ "id": id, "name": name, "price": price })
}

#[tokio::test]
async fn seed_customers_attempts_every_create() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/wp-json/wc/v3/customers"))
        .respond_with(ResponseTemplate::new(201).set_body_json(customer_body(1, "Alice", "Smith")))
        .expect(3)
        .mount(&server)
        .await;

    let report = seeder_for(&server)
        .seed_customers(3)
        .await
        .expect("customer seeding should not abort");

    assert_eq!(report.requested, 3);
    assert_eq!(report.succeeded, 3);
    assert_eq!(report.failed, 0);
    assert!(report.errors.is_empty());
    assert_eq!(report.summary(), "Successfully seeded 3 customers");
}

#[tokio::test]
async fn seed_customers_isolates_individual_failures() {
    let server = MockServer::start().await;

    // First create is rejected, the rest go through.
    Mock::given(method("POST"))
        .and(path("/wp-json/wc/v3/customers"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/wp-json/wc/v3/customers"))
        .respond_with(ResponseTemplate::new(201).set_body_json(customer_body(2, "Bob", "Jones")))
        .expect(2)
        .mount(&server)
        .await;

    let report = seeder_for(&server).seed_customers(3).await.unwrap();

    assert_eq!(report.succeeded + report.failed, 3);
    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(report.errors.len(), 1);
}

#[tokio::test]
async fn zero_amounts_issue_no_creates() {
    let server = MockServer::start().await;

    // Only the product verification read may reach the store.
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let customers = seeder_for(&server).seed_customers(0).await.unwrap();
    assert_eq!(customers.succeeded + customers.failed, 0);
    assert!(customers.errors.is_empty());

    let products = seeder_for(&server).seed_products(0).await.unwrap();
    assert_eq!(products.succeeded, 0);
    assert_eq!(products.failed, 0);

    let requests = server.received_requests().await.unwrap();
    assert!(
        !requests.iter().any(|r| r.method.to_string() == "POST"),
        "zero requested fixtures must not create anything"
    );
}

#[tokio::test]
async fn seed_products_partitions_into_paced_batches() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/wp-json/wc/v3/products/batch"))
        .respond_with(BatchEcho)
        .expect(3)
        .mount(&server)
        .await;
    // Verification read after all batches.
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let delay = Duration::from_millis(20);
    let mut seeder = StoreSeeder::with_rng(client_for(&server), StdRng::seed_from_u64(7))
        .batch_delay(delay);

    let started = Instant::now();
    let report = seeder.seed_products(12).await.unwrap();
    let elapsed = started.elapsed();

    assert_eq!(report.succeeded, 12);
    assert_eq!(report.failed, 0);

    // One pause after each of the three batches.
    assert!(elapsed >= delay * 3, "expected 3 pauses, elapsed {elapsed:?}");

    let requests = server.received_requests().await.unwrap();
    let batch_sizes: Vec<usize> = requests
        .iter()
        .filter(|r| r.url.path() == "/wp-json/wc/v3/products/batch")
        .map(|r| {
            let batch: BatchCreateRequest = serde_json::from_slice(&r.body).unwrap();
            batch.create.len()
        })
        .collect();
    assert_eq!(batch_sizes, vec![5, 5, 2]);
}

#[tokio::test]
async fn seed_products_isolates_batch_failures() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/wp-json/wc/v3/products/batch"))
        .respond_with(ResponseTemplate::new(500).set_body_string("rejected"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/wp-json/wc/v3/products/batch"))
        .respond_with(BatchEcho)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let report = seeder_for(&server).seed_products(7).await.unwrap();

    // Whole first batch of 5 lost, trailing batch of 2 created.
    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed, 5);
    assert_eq!(report.errors.len(), 1);
}

#[tokio::test]
async fn seed_orders_only_references_fetched_entities() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            customer_body(11, "Alice", "Smith"),
            customer_body(12, "Bob", "Jones"),
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            product_body(101, "Awesome Widget", "10.00"),
            product_body(102, "Superb Gadget", "20.50"),
            product_body(103, "Amazing Gizmo", "33.33"),
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/wp-json/wc/v3/orders"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 99 })))
        .expect(4)
        .mount(&server)
        .await;

    let report = seeder_for(&server).seed_orders(4, Some(2)).await.unwrap();
    assert_eq!(report.succeeded, 4);
    assert_eq!(report.failed, 0);

    let prices: HashMap<u64, f64> =
        HashMap::from([(101, 10.00), (102, 20.50), (103, 33.33)]);
    let requests = server.received_requests().await.unwrap();
    let orders: Vec<Value> = requests
        .iter()
        .filter(|r| r.url.path() == "/wp-json/wc/v3/orders")
        .map(|r| serde_json::from_slice(&r.body).unwrap())
        .collect();
    assert_eq!(orders.len(), 4);

    for order in &orders {
        let customer_id = order["customer_id"].as_u64().unwrap();
        assert!([11, 12].contains(&customer_id));
        assert_eq!(order["set_paid"], json!(true));

        let items = order["line_items"].as_array().unwrap();
        assert_eq!(items.len(), 2);

        let mut expected_total = 0.0;
        let mut seen = Vec::new();
        for item in items {
            let product_id = item["product_id"].as_u64().unwrap();
            let quantity = item["quantity"].as_u64().unwrap();
            assert!(prices.contains_key(&product_id), "unknown product {product_id}");
            assert!(!seen.contains(&product_id), "duplicate line item {product_id}");
            assert!((1..=3).contains(&quantity));
            seen.push(product_id);
            expected_total += prices[&product_id] * quantity as f64;
        }

        assert_eq!(order["total"].as_str().unwrap(), format!("{expected_total:.2}"));
    }
}

#[tokio::test]
async fn seed_orders_clamps_items_to_available_products() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/customers"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([customer_body(1, "Ivy", "Lee")])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            product_body(201, "Fantastic Tool", "15.00"),
            product_body(202, "Incredible Device", "25.00"),
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/wp-json/wc/v3/orders"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 7 })))
        .expect(1)
        .mount(&server)
        .await;

    seeder_for(&server).seed_orders(1, Some(10)).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let order: Value = requests
        .iter()
        .find(|r| r.url.path() == "/wp-json/wc/v3/orders")
        .map(|r| serde_json::from_slice(&r.body).unwrap())
        .unwrap();
    assert_eq!(order["line_items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn seed_orders_fails_fast_when_no_customers_exist() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/products"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([product_body(1, "Superb Widget", "12.00")])),
        )
        .mount(&server)
        .await;

    let result = seeder_for(&server).seed_orders(2, None).await;
    assert!(matches!(result, Err(SeederError::NoCustomers)));

    let requests = server.received_requests().await.unwrap();
    assert!(
        !requests.iter().any(|r| r.url.path() == "/wp-json/wc/v3/orders"),
        "no order may be submitted against an empty store"
    );
}

#[tokio::test]
async fn seed_orders_fails_fast_when_no_products_exist() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/customers"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([customer_body(5, "Sam", "Hall")])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let result = seeder_for(&server).seed_orders(2, None).await;
    assert!(matches!(result, Err(SeederError::NoProducts)));

    let requests = server.received_requests().await.unwrap();
    assert!(!requests.iter().any(|r| r.url.path() == "/wp-json/wc/v3/orders"));
}
