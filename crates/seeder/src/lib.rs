#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod fixtures;
pub mod http;
pub mod seeder;
pub mod server;
pub mod urls;

pub use config::*;
pub use error::*;
pub use seeder::*;
pub use urls::*;
