//! Random fixture generators.
//!
//! Pure functions sampling fixed tables and numeric ranges. All of them take
//! the random source as a parameter so tests can pass a seeded [`StdRng`]
//! and get reproducible fixtures.
//!
//! [`StdRng`]: rand::rngs::StdRng

use rand::Rng;

use crate::http::models::{CategoryRef, ImageRef, NewCustomer, NewProduct, OrderStatus};

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Charlie", "David", "Emma", "Frank", "Grace", "Henry", "Ivy", "Jack", "Kate",
    "Liam", "Mia", "Noah", "Olivia", "Peter", "Quinn", "Rachel", "Sam", "Tara", "Uma", "Victor",
    "Wendy", "Xander", "Yara", "Zack",
];

const LAST_NAMES: &[&str] = &[
    "Smith",
    "Johnson",
    "Williams",
    "Brown",
    "Jones",
    "Garcia",
    "Miller",
    "Davis",
    "Rodriguez",
    "Martinez",
    "Anderson",
    "Taylor",
    "Thomas",
    "Hernandez",
    "Moore",
    "Martin",
    "Jackson",
    "Thompson",
    "White",
    "Lopez",
    "Lee",
    "Gonzalez",
    "Harris",
    "Clark",
    "Lewis",
    "Robinson",
    "Walker",
    "Perez",
    "Hall",
    "Young",
];

const ADJECTIVES: &[&str] = &["Awesome", "Fantastic", "Incredible", "Amazing", "Superb"];

const NOUNS: &[&str] = &["Widget", "Gadget", "Tool", "Device", "Gizmo"];

const DESCRIPTIONS: &[&str] = &[
    "This product will change your life!",
    "You won't believe how great this is!",
    "The perfect solution for all your needs.",
    "Innovative design meets exceptional quality.",
    "Experience the difference with our product!",
];

const ORDER_STATUSES: &[OrderStatus] = &[
    OrderStatus::Pending,
    OrderStatus::Processing,
    OrderStatus::OnHold,
    OrderStatus::Completed,
    OrderStatus::Cancelled,
    OrderStatus::Refunded,
    OrderStatus::Failed,
];

const TOKEN_CHARS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const TOKEN_LEN: usize = 8;

fn pick<'a, T>(rng: &mut impl Rng, table: &'a [T]) -> &'a T {
    &table[rng.gen_range(0..table.len())]
}

/// Random (first, last) name pair.
pub fn random_name(rng: &mut impl Rng) -> (&'static str, &'static str) {
    (*pick(rng, FIRST_NAMES), *pick(rng, LAST_NAMES))
}

/// Random base-36 token, used to keep emails, usernames and SKUs from
/// colliding with records already in the store.
pub fn random_token(rng: &mut impl Rng) -> String {
    (0..TOKEN_LEN)
        .map(|_| *pick(rng, TOKEN_CHARS) as char)
        .collect()
}

pub fn random_product_name(rng: &mut impl Rng) -> String {
    format!("{} {}", pick(rng, ADJECTIVES), pick(rng, NOUNS))
}

pub fn random_description(rng: &mut impl Rng) -> &'static str {
    *pick(rng, DESCRIPTIONS)
}

/// Random price in [10.00, 100.00], formatted to 2 decimals.
pub fn random_price(rng: &mut impl Rng) -> String {
    format!("{:.2}", rng.gen_range(10.0..=100.0))
}

pub fn random_sku(rng: &mut impl Rng) -> String {
    random_token(rng).to_uppercase()
}

pub fn random_stock_quantity(rng: &mut impl Rng) -> u32 {
    rng.gen_range(1..=100)
}

/// Random per-line-item quantity in [1, 3].
pub fn random_quantity(rng: &mut impl Rng) -> u32 {
    rng.gen_range(1..=3)
}

pub fn random_order_status(rng: &mut impl Rng) -> OrderStatus {
    *pick(rng, ORDER_STATUSES)
}

/// Builds a complete customer payload. `index` keeps usernames readable
/// within one run; the token carries the uniqueness.
pub fn customer_fixture(rng: &mut impl Rng, index: u32) -> NewCustomer {
    let (first_name, last_name) = random_name(rng);
    let token = random_token(rng);

    NewCustomer {
        email: format!("{token}@email.ghostinspector.com"),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        username: format!(
            "{}{}{}{}",
            first_name.to_lowercase(),
            last_name.to_lowercase(),
            token,
            index + 1
        ),
        password: "password123".to_string(),
    }
}

/// Builds a complete simple-product payload.
pub fn product_fixture(rng: &mut impl Rng) -> NewProduct {
    let name = random_product_name(rng);
    let description = random_description(rng);
    let short = format!("{} - {}...", name, &description[..description.len().min(50)]);

    NewProduct {
        name,
        product_type: "simple".to_string(),
        regular_price: random_price(rng),
        description: description.to_string(),
        short_description: short,
        categories: vec![CategoryRef { id: 1 }],
        images: vec![ImageRef {
            src: format!("https://picsum.photos/id/{}/200/300", rng.gen_range(0..1000)),
        }],
        sku: random_sku(rng),
        stock_quantity: random_stock_quantity(rng),
        stock_status: "instock".to_string(),
    }
}
