use bigdecimal::{BigDecimal, Zero};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use super::status::{OrderStatus, PaymentMethod, PaymentStatus};

/// One menu item inside an order. Name, price and outlet are a snapshot
/// taken at checkout: later menu edits never alter an existing order.
#[derive(Debug, Clone)]
pub struct LineItem {
    pub menu_item_id: Uuid,
    pub name: String,
    pub unit_price: BigDecimal,
    pub quantity: i32,
    pub outlet_id: Uuid,
}

impl LineItem {
    pub fn line_total(&self) -> BigDecimal {
        &self.unit_price * BigDecimal::from(self.quantity)
    }
}

/// A persisted order. `id`, `user_id` and `created_at` are immutable;
/// `status` moves only through the transitions in [`super::status`].
#[derive(Debug, Clone)]
pub struct OrderRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub items: Vec<LineItem>,
    pub total_amount: BigDecimal,
    pub delivery_address: String,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
}

/// Checkout input, already parsed but not yet validated.
#[derive(Debug, Clone)]
pub struct CreateOrderInput {
    pub items: Vec<LineItem>,
    pub total_amount: BigDecimal,
    pub delivery_address: String,
    pub payment_method: PaymentMethod,
}

impl CreateOrderInput {
    /// Sum of `unit_price × quantity` over all items, used to cross-check
    /// the caller-supplied total when verification is enabled.
    pub fn line_item_total(&self) -> BigDecimal {
        self.items
            .iter()
            .fold(BigDecimal::zero(), |acc, item| acc + item.line_total())
    }
}

/// Inclusive calendar-date range on `created_at`. Either bound may be open.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// The last `days` calendar days up to today (UTC), inclusive.
    pub fn last_days(days: i64) -> Self {
        let today = Utc::now().date_naive();
        Self {
            start: today.checked_sub_days(chrono::Days::new(days as u64)),
            end: Some(today),
        }
    }

    /// Lower bound as a timestamp: midnight at the start date.
    pub fn start_bound(&self) -> Option<DateTime<Utc>> {
        self.start.map(|d| d.and_time(NaiveTime::MIN).and_utc())
    }

    /// Exclusive upper bound: midnight of the day after the end date.
    pub fn end_bound(&self) -> Option<DateTime<Utc>> {
        self.end
            .and_then(|d| d.succ_opt())
            .map(|d| d.and_time(NaiveTime::MIN).and_utc())
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        if let Some(start) = self.start_bound() {
            if at < start {
                return false;
            }
        }
        if let Some(end) = self.end_bound() {
            if at >= end {
                return false;
            }
        }
        true
    }
}

/// Admin listing filter: optional exact status match plus a date range.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub range: DateRange,
}

/// A validated status mutation. The timestamp fields are set exactly when
/// the order enters the corresponding terminal state, never afterwards.
#[derive(Debug, Clone, Copy)]
pub struct StatusChange {
    pub status: OrderStatus,
    pub delivered_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl StatusChange {
    pub fn entering(status: OrderStatus, now: DateTime<Utc>) -> Self {
        Self {
            status,
            delivered_at: (status == OrderStatus::Delivered).then_some(now),
            cancelled_at: (status == OrderStatus::Cancelled).then_some(now),
        }
    }
}
