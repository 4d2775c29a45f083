use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::catalog::{MenuItem, Outlet};
use crate::domain::errors::DomainError;
use crate::domain::order::{LineItem, OrderRecord};
use crate::schema::{menu_items, order_items, orders, outlets};

/// Enum columns are stored as their lowercase string form. A value we
/// cannot parse back means the row was written by something else entirely.
fn stored<T>(field: &'static str, raw: &str) -> Result<T, DomainError>
where
    T: FromStr,
{
    raw.parse()
        .map_err(|_| DomainError::Persistence(format!("unexpected {} '{}' in store", field, raw)))
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub total_amount: BigDecimal,
    pub delivery_address: String,
    pub payment_method: String,
    pub payment_status: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub total_amount: BigDecimal,
    pub delivery_address: String,
    pub payment_method: String,
    pub payment_status: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = order_items)]
#[diesel(belongs_to(OrderRow, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItemRow {
    pub id: Uuid,
    pub order_id: Uuid,
    pub menu_item_id: Uuid,
    pub name: String,
    pub unit_price: BigDecimal,
    pub quantity: i32,
    pub outlet_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = order_items)]
pub struct NewOrderItemRow {
    pub id: Uuid,
    pub order_id: Uuid,
    pub menu_item_id: Uuid,
    pub name: String,
    pub unit_price: BigDecimal,
    pub quantity: i32,
    pub outlet_id: Uuid,
}

impl OrderRow {
    pub fn into_domain(self, items: Vec<OrderItemRow>) -> Result<OrderRecord, DomainError> {
        Ok(OrderRecord {
            id: self.id,
            user_id: self.user_id,
            items: items.into_iter().map(OrderItemRow::into_domain).collect(),
            total_amount: self.total_amount,
            delivery_address: self.delivery_address,
            payment_method: stored("payment method", &self.payment_method)?,
            payment_status: stored("payment status", &self.payment_status)?,
            status: stored("order status", &self.status)?,
            created_at: self.created_at,
            delivered_at: self.delivered_at,
            cancelled_at: self.cancelled_at,
        })
    }
}

impl OrderItemRow {
    fn into_domain(self) -> LineItem {
        LineItem {
            menu_item_id: self.menu_item_id,
            name: self.name,
            unit_price: self.unit_price,
            quantity: self.quantity,
            outlet_id: self.outlet_id,
        }
    }
}

pub fn order_rows(order: &OrderRecord) -> (NewOrderRow, Vec<NewOrderItemRow>) {
    let row = NewOrderRow {
        id: order.id,
        user_id: order.user_id,
        total_amount: order.total_amount.clone(),
        delivery_address: order.delivery_address.clone(),
        payment_method: order.payment_method.as_str().to_string(),
        payment_status: order.payment_status.as_str().to_string(),
        status: order.status.as_str().to_string(),
        created_at: order.created_at,
    };
    let items = order
        .items
        .iter()
        .map(|item| NewOrderItemRow {
            id: Uuid::new_v4(),
            order_id: order.id,
            menu_item_id: item.menu_item_id,
            name: item.name.clone(),
            unit_price: item.unit_price.clone(),
            quantity: item.quantity,
            outlet_id: item.outlet_id,
        })
        .collect();
    (row, items)
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = outlets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OutletRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub cuisine: String,
    pub location: String,
    pub image: String,
    pub delivery_time_minutes: i32,
    pub is_open: bool,
    pub rating: BigDecimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = outlets)]
pub struct NewOutletRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub cuisine: String,
    pub location: String,
    pub image: String,
    pub delivery_time_minutes: i32,
    pub is_open: bool,
    pub rating: BigDecimal,
    pub created_at: DateTime<Utc>,
}

impl From<OutletRow> for Outlet {
    fn from(row: OutletRow) -> Self {
        Outlet {
            id: row.id,
            name: row.name,
            description: row.description,
            cuisine: row.cuisine,
            location: row.location,
            image: row.image,
            delivery_time_minutes: row.delivery_time_minutes,
            is_open: row.is_open,
            rating: row.rating,
            created_at: row.created_at,
        }
    }
}

impl From<&Outlet> for NewOutletRow {
    fn from(outlet: &Outlet) -> Self {
        NewOutletRow {
            id: outlet.id,
            name: outlet.name.clone(),
            description: outlet.description.clone(),
            cuisine: outlet.cuisine.clone(),
            location: outlet.location.clone(),
            image: outlet.image.clone(),
            delivery_time_minutes: outlet.delivery_time_minutes,
            is_open: outlet.is_open,
            rating: outlet.rating.clone(),
            created_at: outlet.created_at,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = menu_items)]
#[diesel(belongs_to(OutletRow, foreign_key = outlet_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MenuItemRow {
    pub id: Uuid,
    pub outlet_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub image: String,
    pub category: String,
    pub is_veg: bool,
    pub is_available: bool,
    pub rating: BigDecimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = menu_items)]
pub struct NewMenuItemRow {
    pub id: Uuid,
    pub outlet_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub image: String,
    pub category: String,
    pub is_veg: bool,
    pub is_available: bool,
    pub rating: BigDecimal,
    pub created_at: DateTime<Utc>,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        MenuItem {
            id: row.id,
            outlet_id: row.outlet_id,
            name: row.name,
            description: row.description,
            price: row.price,
            image: row.image,
            category: row.category,
            is_veg: row.is_veg,
            is_available: row.is_available,
            rating: row.rating,
            created_at: row.created_at,
        }
    }
}

impl From<&MenuItem> for NewMenuItemRow {
    fn from(item: &MenuItem) -> Self {
        NewMenuItemRow {
            id: item.id,
            outlet_id: item.outlet_id,
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.clone(),
            image: item.image.clone(),
            category: item.category.clone(),
            is_veg: item.is_veg,
            is_available: item.is_available,
            rating: item.rating.clone(),
            created_at: item.created_at,
        }
    }
}
