use std::collections::HashSet;
use std::sync::Arc;

use bigdecimal::{BigDecimal, ToPrimitive};

use crate::domain::errors::DomainError;
use crate::domain::money::line_total;
use crate::domain::ports::{CartApi, OrdersApi, UsersApi};
use crate::errors::MarketError;
use crate::models::cart::{AddCartItem, Cart};
use crate::models::order::NewOrder;

/// The cart screen's state: the fetched cart, a selection over its
/// lines (everything selected after a load) and the checkout flow.
pub struct CartSession<A> {
    api: Arc<A>,
    cart: Option<Cart>,
    selected: HashSet<i64>,
}

impl<A: CartApi + UsersApi + OrdersApi> CartSession<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api, cart: None, selected: HashSet::new() }
    }

    pub async fn load(&mut self) -> Result<(), MarketError> {
        let cart = self.api.cart().await?;
        self.selected = cart.items.iter().map(|item| item.id).collect();
        self.cart = Some(cart);
        Ok(())
    }

    pub fn cart(&self) -> Option<&Cart> {
        self.cart.as_ref()
    }

    pub fn is_selected(&self, item_id: i64) -> bool {
        self.selected.contains(&item_id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn toggle(&mut self, item_id: i64) {
        if !self.selected.remove(&item_id) {
            self.selected.insert(item_id);
        }
    }

    /// Select everything, or clear the selection when everything was
    /// already selected.
    pub fn toggle_all(&mut self) {
        let Some(cart) = &self.cart else { return };
        if self.selected.len() == cart.items.len() {
            self.selected.clear();
        } else {
            self.selected = cart.items.iter().map(|item| item.id).collect();
        }
    }

    /// Total over the selected lines only. A pure function of the item
    /// list, so repeated calls agree.
    pub fn selected_total(&self) -> BigDecimal {
        let Some(cart) = &self.cart else {
            return BigDecimal::from(0);
        };
        cart.items
            .iter()
            .filter(|item| self.selected.contains(&item.id))
            .map(|item| line_total(&item.product.price, item.quantity))
            .sum()
    }

    /// Quantity sum across all lines, the tab-bar badge number.
    pub fn item_count(&self) -> i64 {
        self.cart
            .as_ref()
            .map(|cart| cart.items.iter().map(|item| item.quantity).sum())
            .unwrap_or(0)
    }

    /// Local-only quantity edit. A quantity driven to zero removes the
    /// line, and the cached cart total is recomputed from what remains.
    /// Nothing is persisted; the backend has no update endpoint yet, so
    /// the next `load` discards these edits.
    pub fn adjust_quantity(&mut self, item_id: i64, delta: i64) {
        let Some(cart) = &mut self.cart else { return };

        let items = std::mem::take(&mut cart.items);
        cart.items = items
            .into_iter()
            .filter_map(|mut item| {
                if item.id == item_id {
                    let quantity = item.quantity + delta;
                    if quantity <= 0 {
                        return None;
                    }
                    item.quantity = quantity;
                }
                Some(item)
            })
            .collect();

        let kept: HashSet<i64> = cart.items.iter().map(|item| item.id).collect();
        self.selected.retain(|id| kept.contains(id));

        cart.total_cart_price = cart
            .items
            .iter()
            .map(|item| line_total(&item.product.price, item.quantity))
            .sum::<BigDecimal>()
            .to_f64()
            .unwrap_or(0.0);
    }

    pub async fn add_to_cart(
        &self,
        product_id: i64,
        quantity: i64,
    ) -> Result<Option<String>, MarketError> {
        let response = self
            .api
            .add_item(AddCartItem { product_id, quantity })
            .await?;
        Ok(response.message)
    }

    /// Place an order from the cart. Preconditions are checked here;
    /// the POST carries only the profile's stored address. There is no
    /// idempotency key, so a repeated call places a second order.
    pub async fn checkout(&mut self) -> Result<Option<String>, MarketError> {
        let empty = self.cart.as_ref().map_or(true, |cart| cart.items.is_empty());
        if empty {
            return Err(DomainError::EmptyCart.into());
        }

        let profile = self.api.me().await?;
        let address = profile.address.trim().to_string();
        if address.is_empty() {
            return Err(DomainError::MissingAddress.into());
        }

        let response = self.api.create_order(NewOrder { address }).await?;
        self.load().await?;
        Ok(response.message)
    }
}
