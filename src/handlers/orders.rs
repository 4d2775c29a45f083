use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::auth::Identity;
use crate::domain::errors::DomainError;
use crate::domain::order::{CreateOrderInput, LineItem, OrderRecord};
use crate::errors::AppError;
use crate::OrderSvc;

use super::parse_decimal;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct LineItemRequest {
    pub menu_item_id: Uuid,
    pub name: String,
    /// Decimal price as a string to avoid floating-point issues, e.g. "45.00"
    pub unit_price: String,
    pub quantity: i32,
    pub outlet_id: Uuid,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub items: Vec<LineItemRequest>,
    /// Decimal total as a string, e.g. "250.00"
    pub total_amount: String,
    pub delivery_address: String,
    /// One of "cod", "card", "upi"
    pub payment_method: String,
}

impl CreateOrderRequest {
    fn into_domain(self) -> Result<CreateOrderInput, DomainError> {
        let items = self
            .items
            .into_iter()
            .map(|item| {
                Ok(LineItem {
                    menu_item_id: item.menu_item_id,
                    name: item.name,
                    unit_price: parse_decimal("unit_price", &item.unit_price)?,
                    quantity: item.quantity,
                    outlet_id: item.outlet_id,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;
        Ok(CreateOrderInput {
            items,
            total_amount: parse_decimal("total_amount", &self.total_amount)?,
            delivery_address: self.delivery_address,
            payment_method: self.payment_method.parse()?,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LineItemResponse {
    pub menu_item_id: Uuid,
    pub name: String,
    pub unit_price: String,
    pub quantity: i32,
    pub outlet_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub items: Vec<LineItemResponse>,
    pub total_amount: String,
    pub delivery_address: String,
    pub payment_method: String,
    pub payment_status: String,
    pub status: String,
    pub created_at: String,
    pub delivered_at: Option<String>,
    pub cancelled_at: Option<String>,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        OrderResponse {
            id: order.id,
            user_id: order.user_id,
            items: order
                .items
                .into_iter()
                .map(|item| LineItemResponse {
                    menu_item_id: item.menu_item_id,
                    name: item.name,
                    unit_price: item.unit_price.to_string(),
                    quantity: item.quantity,
                    outlet_id: item.outlet_id,
                })
                .collect(),
            total_amount: order.total_amount.to_string(),
            delivery_address: order.delivery_address,
            payment_method: order.payment_method.to_string(),
            payment_status: order.payment_status.to_string(),
            status: order.status.to_string(),
            created_at: order.created_at.to_rfc3339(),
            delivered_at: order.delivered_at.map(|t| t.to_rfc3339()),
            cancelled_at: order.cancelled_at.map(|t| t.to_rfc3339()),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderListResponse {
    pub count: usize,
    pub orders: Vec<OrderResponse>,
}

impl From<Vec<OrderRecord>> for OrderListResponse {
    fn from(orders: Vec<OrderRecord>) -> Self {
        let orders: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from).collect();
        OrderListResponse {
            count: orders.len(),
            orders,
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /orders
///
/// Checkout: creates an order with a snapshot of the chosen menu items. The
/// order and its line items are written in one transaction.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = OrderResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Missing identity headers"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    svc: web::Data<OrderSvc>,
    identity: Identity,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let input = body.into_inner().into_domain()?;
    let order = web::block(move || svc.create_order(&identity, input))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;
    Ok(HttpResponse::Created().json(OrderResponse::from(order)))
}

/// GET /orders
///
/// The calling user's orders, newest first.
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "Orders of the calling user", body = OrderListResponse),
        (status = 401, description = "Missing identity headers"),
    ),
    tag = "orders"
)]
pub async fn list_my_orders(
    svc: web::Data<OrderSvc>,
    identity: Identity,
) -> Result<HttpResponse, AppError> {
    let orders = web::block(move || svc.list_orders_for_user(&identity))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;
    Ok(HttpResponse::Ok().json(OrderListResponse::from(orders)))
}

/// GET /orders/{id}
///
/// Visible to the owner and to admins only.
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order UUID"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Order not found"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    svc: web::Data<OrderSvc>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();
    let order = web::block(move || svc.get_order(&identity, order_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;
    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// PUT /orders/{id}/cancel
///
/// Owner (or admin) cancellation; allowed only while the order is pending
/// or preparing.
#[utoipa::path(
    put,
    path = "/orders/{id}/cancel",
    params(
        ("id" = Uuid, Path, description = "Order UUID"),
    ),
    responses(
        (status = 200, description = "Order cancelled", body = OrderResponse),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Order is past the cancellable statuses"),
    ),
    tag = "orders"
)]
pub async fn cancel_order(
    svc: web::Data<OrderSvc>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();
    let order = web::block(move || svc.cancel_order(&identity, order_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;
    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}
