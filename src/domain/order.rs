use crate::models::order::Order;

/// The four order states the backend exposes. Transitions are enforced
/// server-side; the client only reads these back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// `PE` — requested, waiting on the seller.
    Pending,
    /// `DE` — accepted, meeting/delivery arranged.
    Delivering,
    /// `CM` — completed.
    Completed,
    /// `CA` — cancelled or declined.
    Cancelled,
}

impl OrderStatus {
    pub fn parse(code: &str) -> Option<OrderStatus> {
        match code {
            "PE" => Some(OrderStatus::Pending),
            "DE" => Some(OrderStatus::Delivering),
            "CM" => Some(OrderStatus::Completed),
            "CA" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PE",
            OrderStatus::Delivering => "DE",
            OrderStatus::Completed => "CM",
            OrderStatus::Cancelled => "CA",
        }
    }
}

/// One bucket per status, in server-returned order.
#[derive(Debug, Default)]
pub struct OrderBuckets {
    pub requested: Vec<Order>,
    pub meeting: Vec<Order>,
    pub completed: Vec<Order>,
    pub cancelled: Vec<Order>,
}

impl OrderBuckets {
    pub fn counts(&self) -> OrderCounts {
        OrderCounts {
            requested: self.requested.len(),
            meeting: self.meeting.len(),
            completed: self.completed.len(),
            cancelled: self.cancelled.len(),
        }
    }

    pub fn total(&self) -> usize {
        self.requested.len() + self.meeting.len() + self.completed.len() + self.cancelled.len()
    }
}

/// Badge numbers for the activity tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderCounts {
    pub requested: usize,
    pub meeting: usize,
    pub completed: usize,
    pub cancelled: usize,
}

/// Split a flat order list into the four status buckets.
///
/// Orders with a status code outside the known four land in no bucket.
/// The original client dropped them without a trace; here the drop is
/// at least logged so it can be spotted in the field.
pub fn partition(orders: Vec<Order>) -> OrderBuckets {
    let mut buckets = OrderBuckets::default();
    let mut unknown = 0usize;

    for order in orders {
        match OrderStatus::parse(&order.status) {
            Some(OrderStatus::Pending) => buckets.requested.push(order),
            Some(OrderStatus::Delivering) => buckets.meeting.push(order),
            Some(OrderStatus::Completed) => buckets.completed.push(order),
            Some(OrderStatus::Cancelled) => buckets.cancelled.push(order),
            None => {
                log::warn!("dropping order {} with unknown status {:?}", order.id, order.status);
                unknown += 1;
            }
        }
    }

    if unknown > 0 {
        log::warn!("{unknown} order(s) had unknown status codes and were dropped");
    }
    buckets
}

/// Which side of an order the given user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Buyer,
    Seller,
}

impl Order {
    /// The seller match wins when an order somehow lists the same user
    /// on both sides, matching how the original screens branched.
    pub fn role_of(&self, user_id: i64) -> Option<Role> {
        if self.seller == user_id {
            Some(Role::Seller)
        } else if self.buyer == user_id {
            Some(Role::Buyer)
        } else {
            None
        }
    }

    pub fn counterparty_name(&self, user_id: i64) -> &str {
        match self.role_of(user_id) {
            Some(Role::Seller) => &self.buyer_name,
            _ => &self.seller_name,
        }
    }

    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}
