//! Client-side logic over fetched data: status partitioning, price
//! arithmetic and the port traits the application services depend on.

pub mod errors;
pub mod media;
pub mod money;
pub mod order;
pub mod ports;
