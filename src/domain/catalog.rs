use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A food outlet as browsed by customers.
#[derive(Debug, Clone)]
pub struct Outlet {
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

/// Outlet fields an admin supplies on create or full update.
#[derive(Debug, Clone)]
pub struct OutletDraft {
    pub name: String,
    pub description: String,
    pub cuisine: String,
    pub location: String,
    pub image: String,
    pub delivery_time_minutes: i32,
    pub is_open: bool,
}

#[derive(Debug, Clone)]
pub struct MenuItem {
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

#[derive(Debug, Clone)]
pub struct MenuItemDraft {
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub image: String,
    pub category: String,
    pub is_veg: bool,
    pub is_available: bool,
}

/// Free-text outlet search. `query` matches name or description,
/// `cuisine` and `location` narrow the result further; all matches are
/// case-insensitive substring matches.
#[derive(Debug, Clone, Default)]
pub struct OutletSearch {
    pub query: Option<String>,
    pub cuisine: Option<String>,
    pub location: Option<String>,
}
