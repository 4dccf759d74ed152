use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::cart::{AddCartItem, Cart, CartActionResponse};
use crate::models::chat::{Chat, Message, NewMessage, StartChat};
use crate::models::order::{NewOrder, Order, OrderActionResponse};
use crate::models::product::{Category, NewProduct, Product};
use crate::models::review::{NewReview, RatingStats, Review, ReviewResponse};
use crate::models::user::{ContactUpdate, User};

/// Where the bearer token comes from. Consulted synchronously on every
/// request; there is no refresh or expiry handling.
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

#[async_trait]
pub trait UsersApi: Send + Sync {
    async fn me(&self) -> Result<User, ApiError>;
    async fn user(&self, id: i64) -> Result<User, ApiError>;
    async fn update_contact(&self, update: ContactUpdate) -> Result<User, ApiError>;
}

#[async_trait]
pub trait ProductsApi: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<Product>, ApiError>;
    async fn by_seller(&self, seller_id: i64) -> Result<Vec<Product>, ApiError>;
    async fn detail(&self, id: i64) -> Result<Product, ApiError>;
    async fn categories(&self) -> Result<Vec<Category>, ApiError>;
    async fn create(&self, product: NewProduct) -> Result<Product, ApiError>;
}

#[async_trait]
pub trait CartApi: Send + Sync {
    async fn cart(&self) -> Result<Cart, ApiError>;
    async fn add_item(&self, item: AddCartItem) -> Result<CartActionResponse, ApiError>;
}

#[async_trait]
pub trait OrdersApi: Send + Sync {
    async fn orders(&self) -> Result<Vec<Order>, ApiError>;
    async fn create_order(&self, order: NewOrder) -> Result<OrderActionResponse, ApiError>;
    async fn accept(&self, order_id: i64) -> Result<OrderActionResponse, ApiError>;
    async fn decline(&self, order_id: i64) -> Result<OrderActionResponse, ApiError>;
    async fn cancel(&self, order_id: i64) -> Result<OrderActionResponse, ApiError>;
}

#[async_trait]
pub trait ChatsApi: Send + Sync {
    async fn chats(&self) -> Result<Vec<Chat>, ApiError>;
    async fn messages(&self, chat_id: i64) -> Result<Vec<Message>, ApiError>;
    async fn send_message(&self, chat_id: i64, message: NewMessage) -> Result<Message, ApiError>;
    async fn start_chat(&self, request: StartChat) -> Result<Chat, ApiError>;
}

#[async_trait]
pub trait ReviewsApi: Send + Sync {
    async fn submit(&self, review: NewReview) -> Result<ReviewResponse, ApiError>;
    async fn stats(&self, user_id: i64) -> Result<RatingStats, ApiError>;
    async fn user_reviews(&self, user_id: i64) -> Result<Vec<Review>, ApiError>;
}

/// On-device key-value storage, the AsyncStorage analog. Reads treat a
/// missing or unreadable backing store as empty; writes report failure.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> std::io::Result<()>;
    fn remove(&self, key: &str) -> std::io::Result<()>;
}
