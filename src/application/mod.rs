//! One service per canonical screen flow of the original app.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod chat;
pub mod orders;
pub mod reviews;
pub mod search_history;
pub mod shop;
