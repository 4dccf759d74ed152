use std::sync::Arc;

use crate::domain::ports::{ProductsApi, ReviewsApi, UsersApi};
use crate::errors::MarketError;
use crate::models::product::Product;
use crate::models::review::{RatingStats, Review};
use crate::models::user::User;

/// Everything a seller storefront shows at once.
#[derive(Debug)]
pub struct ShopView {
    pub profile: User,
    pub products: Vec<Product>,
    pub reviews: Vec<Review>,
    pub stats: RatingStats,
}

/// Seller storefront loader, for someone else's shop or one's own.
pub struct Shop<A> {
    api: Arc<A>,
}

impl<A: UsersApi + ProductsApi + ReviewsApi> Shop<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Fetch the profile, then the listings, reviews and rating
    /// aggregate for it in parallel.
    pub async fn load(&self, seller_id: i64) -> Result<ShopView, MarketError> {
        let profile = self.api.user(seller_id).await?;
        let (products, reviews, stats) = tokio::join!(
            self.api.by_seller(seller_id),
            self.api.user_reviews(seller_id),
            self.api.stats(seller_id),
        );
        Ok(ShopView {
            profile,
            products: products?,
            reviews: reviews?,
            stats: stats?,
        })
    }

    /// The "my shop" tab: resolve our own id first, then load as above.
    pub async fn load_own(&self) -> Result<ShopView, MarketError> {
        let me = self.api.me().await?;
        self.load(me.id).await
    }
}
