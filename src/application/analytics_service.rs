use std::collections::HashMap;

use bigdecimal::BigDecimal;

use crate::domain::analytics::{
    sales_by_day, status_distribution, top_selling_items, total_revenue, DailySales, ItemSales,
};
use crate::domain::auth::Identity;
use crate::domain::errors::DomainError;
use crate::domain::order::DateRange;
use crate::domain::ports::{CatalogRepository, OrderRepository};
use crate::domain::status::OrderStatus;

const TOP_ITEMS_LIMIT: usize = 10;
const DASHBOARD_POPULAR_LIMIT: usize = 5;

/// Combined analytics report for one date range.
#[derive(Debug)]
pub struct AnalyticsReport {
    pub sales_by_day: Vec<DailySales>,
    pub status_distribution: HashMap<OrderStatus, i64>,
    pub top_items: Vec<ItemSales>,
}

/// Headline numbers for the admin dashboard.
#[derive(Debug)]
pub struct DashboardStats {
    pub total_orders: i64,
    pub total_revenue: BigDecimal,
    pub open_outlets: i64,
    pub popular_items: Vec<ItemSales>,
}

/// Read-only reporting over persisted orders. One range query feeds all
/// folds, so a report is internally consistent.
pub struct AnalyticsService<R, C> {
    orders: R,
    catalog: C,
}

impl<R: OrderRepository, C: CatalogRepository> AnalyticsService<R, C> {
    pub fn new(orders: R, catalog: C) -> Self {
        Self { orders, catalog }
    }

    pub fn report(
        &self,
        identity: &Identity,
        range: &DateRange,
    ) -> Result<AnalyticsReport, DomainError> {
        identity.require_admin()?;
        let orders = self.orders.load_in_range(range)?;
        Ok(AnalyticsReport {
            sales_by_day: sales_by_day(&orders),
            status_distribution: status_distribution(&orders),
            top_items: top_selling_items(&orders, TOP_ITEMS_LIMIT),
        })
    }

    pub fn dashboard(&self, identity: &Identity) -> Result<DashboardStats, DomainError> {
        identity.require_admin()?;
        let orders = self.orders.load_in_range(&DateRange::unbounded())?;
        Ok(DashboardStats {
            total_orders: orders.len() as i64,
            total_revenue: total_revenue(&orders),
            open_outlets: self.catalog.count_open_outlets()?,
            popular_items: top_selling_items(&orders, DASHBOARD_POPULAR_LIMIT),
        })
    }
}
