use std::sync::Arc;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::config::Config;
use crate::domain::ports::{
    CartApi, ChatsApi, OrdersApi, ProductsApi, ReviewsApi, TokenProvider, UsersApi,
};
use crate::errors::ApiError;
use crate::http::{image_mime, HttpClient};
use crate::models::cart::{AddCartItem, Cart, CartActionResponse};
use crate::models::chat::{Chat, Message, NewMessage, StartChat};
use crate::models::order::{NewOrder, Order, OrderActionResponse};
use crate::models::product::{Category, NewProduct, Product, ProductListResponse};
use crate::models::review::{NewReview, RatingStats, Review, ReviewResponse};
use crate::models::user::{ContactUpdate, User};

/// The one adapter speaking to the marketplace backend. Paths follow
/// the server's routing verbatim, trailing-slash quirks included
/// (`/orders/{id}/cancel` has none, its siblings do).
pub struct RestMarketApi {
    http: HttpClient,
}

impl RestMarketApi {
    pub fn new(config: &Config, auth: Arc<dyn TokenProvider>) -> Result<Self, ApiError> {
        Ok(Self {
            http: HttpClient::new(&config.base_url, config.timeout, auth)?,
        })
    }
}

#[async_trait]
impl UsersApi for RestMarketApi {
    async fn me(&self) -> Result<User, ApiError> {
        self.http.get_json("/api/me/").await
    }

    async fn user(&self, id: i64) -> Result<User, ApiError> {
        self.http.get_json(&format!("/api/users/{id}/")).await
    }

    async fn update_contact(&self, update: ContactUpdate) -> Result<User, ApiError> {
        self.http.patch_json("/api/me/", &update).await
    }
}

#[async_trait]
impl ProductsApi for RestMarketApi {
    async fn search(&self, query: &str) -> Result<Vec<Product>, ApiError> {
        let response: ProductListResponse = self
            .http
            .get_json_with_query("/products", &[("search", query)])
            .await?;
        Ok(response.into_vec())
    }

    async fn by_seller(&self, seller_id: i64) -> Result<Vec<Product>, ApiError> {
        let response: ProductListResponse = self
            .http
            .get_json_with_query("/products/", &[("seller", seller_id)])
            .await?;
        Ok(response.into_vec())
    }

    async fn detail(&self, id: i64) -> Result<Product, ApiError> {
        self.http.get_json(&format!("/products/{id}/")).await
    }

    async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.http.get_json("/categories/").await
    }

    async fn create(&self, product: NewProduct) -> Result<Product, ApiError> {
        let mime = image_mime(&product.image_filename);
        let image = Part::bytes(product.image_bytes)
            .file_name(product.image_filename)
            .mime_str(mime)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let form = Form::new()
            .text("title", product.title)
            .text("price", product.price)
            .text("description", product.description)
            .text("category", product.category.to_string())
            .part("image", image);
        self.http.post_multipart("/products/", form).await
    }
}

#[async_trait]
impl CartApi for RestMarketApi {
    async fn cart(&self) -> Result<Cart, ApiError> {
        self.http.get_json("/cart").await
    }

    async fn add_item(&self, item: AddCartItem) -> Result<CartActionResponse, ApiError> {
        self.http.post_json("/cart", &item).await
    }
}

#[async_trait]
impl OrdersApi for RestMarketApi {
    async fn orders(&self) -> Result<Vec<Order>, ApiError> {
        self.http.get_json("/orders").await
    }

    async fn create_order(&self, order: NewOrder) -> Result<OrderActionResponse, ApiError> {
        self.http.post_json("/orders", &order).await
    }

    async fn accept(&self, order_id: i64) -> Result<OrderActionResponse, ApiError> {
        self.http.post_empty(&format!("/orders/{order_id}/accept/")).await
    }

    async fn decline(&self, order_id: i64) -> Result<OrderActionResponse, ApiError> {
        self.http.post_empty(&format!("/orders/{order_id}/decline/")).await
    }

    async fn cancel(&self, order_id: i64) -> Result<OrderActionResponse, ApiError> {
        self.http.post_empty(&format!("/orders/{order_id}/cancel")).await
    }
}

#[async_trait]
impl ChatsApi for RestMarketApi {
    async fn chats(&self) -> Result<Vec<Chat>, ApiError> {
        self.http.get_json("/chats").await
    }

    async fn messages(&self, chat_id: i64) -> Result<Vec<Message>, ApiError> {
        self.http.get_json(&format!("/chats/{chat_id}/messages")).await
    }

    async fn send_message(&self, chat_id: i64, message: NewMessage) -> Result<Message, ApiError> {
        self.http
            .post_json(&format!("/chats/{chat_id}/messages"), &message)
            .await
    }

    async fn start_chat(&self, request: StartChat) -> Result<Chat, ApiError> {
        self.http.post_json("/chats/start", &request).await
    }
}

#[async_trait]
impl ReviewsApi for RestMarketApi {
    async fn submit(&self, review: NewReview) -> Result<ReviewResponse, ApiError> {
        self.http.post_json("/reviews", &review).await
    }

    async fn stats(&self, user_id: i64) -> Result<RatingStats, ApiError> {
        self.http.get_json(&format!("/reviews/stats/{user_id}")).await
    }

    async fn user_reviews(&self, user_id: i64) -> Result<Vec<Review>, ApiError> {
        self.http.get_json(&format!("/users/{user_id}/reviews")).await
    }
}
