pub mod application;
pub mod auth;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod infrastructure;
pub mod models;

pub use auth::StubAuth;
pub use config::Config;
pub use errors::{ApiError, MarketError};
pub use infrastructure::rest::RestMarketApi;
pub use infrastructure::storage::JsonFileStore;
