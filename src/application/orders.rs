use std::sync::Arc;

use crate::domain::order::{partition, OrderBuckets, OrderCounts};
use crate::domain::ports::OrdersApi;
use crate::errors::MarketError;

/// The activity screen's view of the order list: fetch everything,
/// split by status, request transitions and re-fetch to observe the
/// outcome. The server is the only authority on what may transition;
/// nothing is guarded locally.
pub struct OrderBoard<A> {
    api: Arc<A>,
    buckets: OrderBuckets,
}

impl<A: OrdersApi> OrderBoard<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api, buckets: OrderBuckets::default() }
    }

    pub async fn refresh(&mut self) -> Result<(), MarketError> {
        let orders = self.api.orders().await?;
        self.buckets = partition(orders);
        Ok(())
    }

    pub fn buckets(&self) -> &OrderBuckets {
        &self.buckets
    }

    pub fn counts(&self) -> OrderCounts {
        self.buckets.counts()
    }

    pub async fn accept(&mut self, order_id: i64) -> Result<Option<String>, MarketError> {
        let response = self.api.accept(order_id).await?;
        self.refresh().await?;
        Ok(response.message)
    }

    pub async fn decline(&mut self, order_id: i64) -> Result<Option<String>, MarketError> {
        let response = self.api.decline(order_id).await?;
        self.refresh().await?;
        Ok(response.message)
    }

    pub async fn cancel(&mut self, order_id: i64) -> Result<Option<String>, MarketError> {
        let response = self.api.cancel(order_id).await?;
        self.refresh().await?;
        Ok(response.message)
    }
}
