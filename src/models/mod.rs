//! Wire types for the marketplace REST API. The backend owns every
//! entity; the client only holds transient copies of what it fetched.

pub mod cart;
pub mod chat;
pub mod order;
pub mod product;
pub mod review;
pub mod user;
