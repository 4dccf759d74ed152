use std::sync::Arc;

use crate::domain::media::normalize_image_url;
use crate::domain::money::parse_price;
use crate::domain::ports::ProductsApi;
use crate::errors::MarketError;
use crate::models::product::{Category, NewProduct, Product};

/// The id the home screen pins as its hero product.
const FEATURED_PRODUCT_ID: i64 = 1;

/// Product browsing: search plus the handful of derivations the home
/// and search screens compute over an already-fetched list.
pub struct Catalog<A> {
    api: Arc<A>,
}

impl<A: ProductsApi> Catalog<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Product>, MarketError> {
        Ok(fix_images(self.api.search(query).await?))
    }

    /// The n most recently listed products (highest ids first).
    pub async fn latest(&self, n: usize) -> Result<Vec<Product>, MarketError> {
        Ok(latest(self.search("").await?, n))
    }

    /// The n cheapest products, by parsed price.
    pub async fn cheapest(&self, n: usize) -> Result<Vec<Product>, MarketError> {
        Ok(cheapest(self.search("").await?, n))
    }

    pub async fn featured(&self) -> Result<Option<Product>, MarketError> {
        Ok(featured(self.search("").await?))
    }

    pub async fn by_seller(&self, seller_id: i64) -> Result<Vec<Product>, MarketError> {
        Ok(fix_images(self.api.by_seller(seller_id).await?))
    }

    pub async fn detail(&self, id: i64) -> Result<Product, MarketError> {
        let mut product = self.api.detail(id).await?;
        product.image = product.image.map(|url| normalize_image_url(&url));
        Ok(product)
    }

    pub async fn categories(&self) -> Result<Vec<Category>, MarketError> {
        Ok(self.api.categories().await?)
    }

    pub async fn create(&self, product: NewProduct) -> Result<Product, MarketError> {
        Ok(self.api.create(product).await?)
    }
}

fn fix_images(products: Vec<Product>) -> Vec<Product> {
    products
        .into_iter()
        .map(|mut p| {
            p.image = p.image.map(|url| normalize_image_url(&url));
            p
        })
        .collect()
}

pub fn latest(mut products: Vec<Product>, n: usize) -> Vec<Product> {
    products.sort_by(|a, b| b.id.cmp(&a.id));
    products.truncate(n);
    products
}

pub fn cheapest(mut products: Vec<Product>, n: usize) -> Vec<Product> {
    products.sort_by(|a, b| parse_price(&a.price).cmp(&parse_price(&b.price)));
    products.truncate(n);
    products
}

pub fn featured(products: Vec<Product>) -> Option<Product> {
    products.into_iter().find(|p| p.id == FEATURED_PRODUCT_ID)
}
