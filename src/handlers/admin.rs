use std::collections::BTreeMap;

use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::analytics_service::{AnalyticsReport, DashboardStats};
use crate::domain::analytics::{DailySales, ItemSales};
use crate::domain::auth::Identity;
use crate::domain::catalog::{MenuItemDraft, OutletDraft};
use crate::domain::order::{DateRange, OrderFilter};
use crate::domain::status::OrderStatus;
use crate::errors::AppError;
use crate::{AnalyticsSvc, CatalogSvc, OrderSvc};

use super::orders::{OrderListResponse, OrderResponse};
use super::outlets::{MenuItemResponse, OutletResponse};
use super::parse_decimal;

// ── Order management ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct ListOrdersParams {
    /// Exact status match, e.g. "pending"
    pub status: Option<String>,
    /// Inclusive start date, e.g. "2025-06-01"
    pub start: Option<NaiveDate>,
    /// Inclusive end date
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    /// One of "pending", "preparing", "ready", "delivered", "cancelled"
    pub status: String,
}

/// GET /admin/orders
///
/// Every order, optionally narrowed by status and creation-date range,
/// newest first. The full result set is returned; there is no pagination.
#[utoipa::path(
    get,
    path = "/admin/orders",
    params(
        ("status" = Option<String>, Query, description = "Exact status filter"),
        ("start" = Option<NaiveDate>, Query, description = "Inclusive start date"),
        ("end" = Option<NaiveDate>, Query, description = "Inclusive end date"),
    ),
    responses(
        (status = 200, description = "Matching orders", body = OrderListResponse),
        (status = 403, description = "Caller is not an admin"),
    ),
    tag = "admin"
)]
pub async fn list_orders(
    svc: web::Data<OrderSvc>,
    identity: Identity,
    params: web::Query<ListOrdersParams>,
) -> Result<HttpResponse, AppError> {
    let params = params.into_inner();
    let status = params
        .status
        .as_deref()
        .map(str::parse::<OrderStatus>)
        .transpose()?;
    let filter = OrderFilter {
        status,
        range: DateRange {
            start: params.start,
            end: params.end,
        },
    };
    let orders = web::block(move || svc.admin_list_orders(&identity, &filter))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;
    Ok(HttpResponse::Ok().json(OrderListResponse::from(orders)))
}

/// PUT /admin/orders/{id}/status
///
/// Move a non-terminal order to any status. Delivering stamps
/// `delivered_at`; once delivered or cancelled the order is frozen.
#[utoipa::path(
    put,
    path = "/admin/orders/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Order UUID"),
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = OrderResponse),
        (status = 400, description = "Unknown status value"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Order is in a terminal status"),
    ),
    tag = "admin"
)]
pub async fn update_order_status(
    svc: web::Data<OrderSvc>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdateStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();
    let new_status: OrderStatus = body.into_inner().status.parse()?;
    let order = web::block(move || svc.update_order_status(&identity, order_id, new_status))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;
    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

// ── Analytics ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyticsParams {
    /// Shortcut range: "week", "month" or "year". Overrides start/end.
    pub range: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

fn resolve_range(params: &AnalyticsParams) -> Result<DateRange, AppError> {
    match params.range.as_deref() {
        Some("week") => Ok(DateRange::last_days(7)),
        Some("month") => Ok(DateRange::last_days(30)),
        Some("year") => Ok(DateRange::last_days(365)),
        Some(other) => Err(AppError::BadRequest(format!(
            "unknown range '{}', expected week, month or year",
            other
        ))),
        None => Ok(DateRange {
            start: params.start,
            end: params.end,
        }),
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DailySalesResponse {
    pub date: NaiveDate,
    pub amount: String,
}

impl From<DailySales> for DailySalesResponse {
    fn from(day: DailySales) -> Self {
        DailySalesResponse {
            date: day.date,
            amount: day.amount.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ItemSalesResponse {
    pub menu_item_id: Uuid,
    pub name: String,
    pub quantity: i64,
}

impl From<ItemSales> for ItemSalesResponse {
    fn from(item: ItemSales) -> Self {
        ItemSalesResponse {
            menu_item_id: item.menu_item_id,
            name: item.name,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyticsResponse {
    pub sales_by_day: Vec<DailySalesResponse>,
    pub status_distribution: BTreeMap<String, i64>,
    pub top_items: Vec<ItemSalesResponse>,
}

impl From<AnalyticsReport> for AnalyticsResponse {
    fn from(report: AnalyticsReport) -> Self {
        AnalyticsResponse {
            sales_by_day: report
                .sales_by_day
                .into_iter()
                .map(DailySalesResponse::from)
                .collect(),
            status_distribution: report
                .status_distribution
                .into_iter()
                .map(|(status, count)| (status.to_string(), count))
                .collect(),
            top_items: report
                .top_items
                .into_iter()
                .map(ItemSalesResponse::from)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    pub total_orders: i64,
    pub total_revenue: String,
    pub open_outlets: i64,
    pub popular_items: Vec<ItemSalesResponse>,
}

impl From<DashboardStats> for DashboardResponse {
    fn from(stats: DashboardStats) -> Self {
        DashboardResponse {
            total_orders: stats.total_orders,
            total_revenue: stats.total_revenue.to_string(),
            open_outlets: stats.open_outlets,
            popular_items: stats
                .popular_items
                .into_iter()
                .map(ItemSalesResponse::from)
                .collect(),
        }
    }
}

/// GET /admin/analytics
///
/// Sales per day, status distribution and top-selling items for the range.
#[utoipa::path(
    get,
    path = "/admin/analytics",
    params(
        ("range" = Option<String>, Query, description = "week | month | year"),
        ("start" = Option<NaiveDate>, Query, description = "Inclusive start date"),
        ("end" = Option<NaiveDate>, Query, description = "Inclusive end date"),
    ),
    responses(
        (status = 200, description = "Analytics report", body = AnalyticsResponse),
        (status = 403, description = "Caller is not an admin"),
    ),
    tag = "admin"
)]
pub async fn analytics(
    svc: web::Data<AnalyticsSvc>,
    identity: Identity,
    params: web::Query<AnalyticsParams>,
) -> Result<HttpResponse, AppError> {
    let range = resolve_range(&params)?;
    let report = web::block(move || svc.report(&identity, &range))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;
    Ok(HttpResponse::Ok().json(AnalyticsResponse::from(report)))
}

/// GET /admin/dashboard
#[utoipa::path(
    get,
    path = "/admin/dashboard",
    responses(
        (status = 200, description = "Headline stats", body = DashboardResponse),
        (status = 403, description = "Caller is not an admin"),
    ),
    tag = "admin"
)]
pub async fn dashboard(
    svc: web::Data<AnalyticsSvc>,
    identity: Identity,
) -> Result<HttpResponse, AppError> {
    let stats = web::block(move || svc.dashboard(&identity))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;
    Ok(HttpResponse::Ok().json(DashboardResponse::from(stats)))
}

// ── Outlet / menu back-office ────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct OutletRequest {
    pub name: String,
    pub description: String,
    pub cuisine: String,
    pub location: String,
    pub image: String,
    pub delivery_time_minutes: i32,
    #[serde(default = "default_true")]
    pub is_open: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MenuItemRequest {
    pub name: String,
    pub description: String,
    /// Decimal price as a string, e.g. "45.00"
    pub price: String,
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub is_veg: bool,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

fn default_true() -> bool {
    true
}

impl From<OutletRequest> for OutletDraft {
    fn from(req: OutletRequest) -> Self {
        OutletDraft {
            name: req.name,
            description: req.description,
            cuisine: req.cuisine,
            location: req.location,
            image: req.image,
            delivery_time_minutes: req.delivery_time_minutes,
            is_open: req.is_open,
        }
    }
}

impl MenuItemRequest {
    fn into_draft(self) -> Result<MenuItemDraft, AppError> {
        Ok(MenuItemDraft {
            name: self.name,
            description: self.description,
            price: parse_decimal("price", &self.price)?,
            image: self.image,
            category: self.category,
            is_veg: self.is_veg,
            is_available: self.is_available,
        })
    }
}

/// POST /admin/outlets
#[utoipa::path(
    post,
    path = "/admin/outlets",
    request_body = OutletRequest,
    responses(
        (status = 201, description = "Outlet created", body = OutletResponse),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Caller is not an admin"),
    ),
    tag = "admin"
)]
pub async fn create_outlet(
    svc: web::Data<CatalogSvc>,
    identity: Identity,
    body: web::Json<OutletRequest>,
) -> Result<HttpResponse, AppError> {
    let draft = OutletDraft::from(body.into_inner());
    let outlet = web::block(move || svc.create_outlet(&identity, draft))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;
    Ok(HttpResponse::Created().json(OutletResponse::from(outlet)))
}

/// PUT /admin/outlets/{id}
#[utoipa::path(
    put,
    path = "/admin/outlets/{id}",
    params(
        ("id" = Uuid, Path, description = "Outlet UUID"),
    ),
    request_body = OutletRequest,
    responses(
        (status = 200, description = "Outlet updated", body = OutletResponse),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Outlet not found"),
    ),
    tag = "admin"
)]
pub async fn update_outlet(
    svc: web::Data<CatalogSvc>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<OutletRequest>,
) -> Result<HttpResponse, AppError> {
    let outlet_id = path.into_inner();
    let draft = OutletDraft::from(body.into_inner());
    let outlet = web::block(move || svc.update_outlet(&identity, outlet_id, draft))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;
    Ok(HttpResponse::Ok().json(OutletResponse::from(outlet)))
}

/// DELETE /admin/outlets/{id}
#[utoipa::path(
    delete,
    path = "/admin/outlets/{id}",
    params(
        ("id" = Uuid, Path, description = "Outlet UUID"),
    ),
    responses(
        (status = 204, description = "Outlet deleted"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Outlet not found"),
    ),
    tag = "admin"
)]
pub async fn delete_outlet(
    svc: web::Data<CatalogSvc>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let outlet_id = path.into_inner();
    web::block(move || svc.delete_outlet(&identity, outlet_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;
    Ok(HttpResponse::NoContent().finish())
}

/// POST /admin/outlets/{id}/menu
#[utoipa::path(
    post,
    path = "/admin/outlets/{id}/menu",
    params(
        ("id" = Uuid, Path, description = "Outlet UUID"),
    ),
    request_body = MenuItemRequest,
    responses(
        (status = 201, description = "Menu item added", body = MenuItemResponse),
        (status = 400, description = "Validation failed"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Outlet not found"),
    ),
    tag = "admin"
)]
pub async fn add_menu_item(
    svc: web::Data<CatalogSvc>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<MenuItemRequest>,
) -> Result<HttpResponse, AppError> {
    let outlet_id = path.into_inner();
    let draft = body.into_inner().into_draft()?;
    let item = web::block(move || svc.add_menu_item(&identity, outlet_id, draft))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;
    Ok(HttpResponse::Created().json(MenuItemResponse::from(item)))
}

/// PUT /admin/outlets/{outlet_id}/menu/{item_id}
#[utoipa::path(
    put,
    path = "/admin/outlets/{outlet_id}/menu/{item_id}",
    params(
        ("outlet_id" = Uuid, Path, description = "Outlet UUID"),
        ("item_id" = Uuid, Path, description = "Menu item UUID"),
    ),
    request_body = MenuItemRequest,
    responses(
        (status = 200, description = "Menu item updated", body = MenuItemResponse),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Menu item not found"),
    ),
    tag = "admin"
)]
pub async fn update_menu_item(
    svc: web::Data<CatalogSvc>,
    identity: Identity,
    path: web::Path<(Uuid, Uuid)>,
    body: web::Json<MenuItemRequest>,
) -> Result<HttpResponse, AppError> {
    let (outlet_id, item_id) = path.into_inner();
    let draft = body.into_inner().into_draft()?;
    let item = web::block(move || svc.update_menu_item(&identity, outlet_id, item_id, draft))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;
    Ok(HttpResponse::Ok().json(MenuItemResponse::from(item)))
}

/// DELETE /admin/outlets/{outlet_id}/menu/{item_id}
#[utoipa::path(
    delete,
    path = "/admin/outlets/{outlet_id}/menu/{item_id}",
    params(
        ("outlet_id" = Uuid, Path, description = "Outlet UUID"),
        ("item_id" = Uuid, Path, description = "Menu item UUID"),
    ),
    responses(
        (status = 204, description = "Menu item deleted"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "Menu item not found"),
    ),
    tag = "admin"
)]
pub async fn delete_menu_item(
    svc: web::Data<CatalogSvc>,
    identity: Identity,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse, AppError> {
    let (outlet_id, item_id) = path.into_inner();
    web::block(move || svc.delete_menu_item(&identity, outlet_id, item_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;
    Ok(HttpResponse::NoContent().finish())
}
