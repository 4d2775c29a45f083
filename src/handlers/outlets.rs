use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::catalog::{MenuItem, Outlet, OutletSearch};
use crate::errors::AppError;
use crate::CatalogSvc;

// ── Response DTOs ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct OutletResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub cuisine: String,
    pub location: String,
    pub image: String,
    pub delivery_time_minutes: i32,
    pub is_open: bool,
    pub rating: String,
    pub created_at: String,
}

impl From<Outlet> for OutletResponse {
    fn from(outlet: Outlet) -> Self {
        OutletResponse {
            id: outlet.id,
            name: outlet.name,
            description: outlet.description,
            cuisine: outlet.cuisine,
            location: outlet.location,
            image: outlet.image,
            delivery_time_minutes: outlet.delivery_time_minutes,
            is_open: outlet.is_open,
            rating: outlet.rating.to_string(),
            created_at: outlet.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OutletListResponse {
    pub count: usize,
    pub outlets: Vec<OutletResponse>,
}

impl From<Vec<Outlet>> for OutletListResponse {
    fn from(outlets: Vec<Outlet>) -> Self {
        let outlets: Vec<OutletResponse> = outlets.into_iter().map(OutletResponse::from).collect();
        OutletListResponse {
            count: outlets.len(),
            outlets,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MenuItemResponse {
    pub id: Uuid,
    pub outlet_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub category: String,
    pub is_veg: bool,
    pub is_available: bool,
    pub rating: String,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        MenuItemResponse {
            id: item.id,
            outlet_id: item.outlet_id,
            name: item.name,
            description: item.description,
            price: item.price.to_string(),
            image: item.image,
            category: item.category,
            is_veg: item.is_veg,
            is_available: item.is_available,
            rating: item.rating.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MenuResponse {
    pub count: usize,
    pub items: Vec<MenuItemResponse>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchParams {
    pub query: Option<String>,
    pub cuisine: Option<String>,
    pub location: Option<String>,
}

// ── Handlers (public, no identity required) ──────────────────────────────────

/// GET /outlets
#[utoipa::path(
    get,
    path = "/outlets",
    responses(
        (status = 200, description = "All outlets", body = OutletListResponse),
    ),
    tag = "outlets"
)]
pub async fn list_outlets(svc: web::Data<CatalogSvc>) -> Result<HttpResponse, AppError> {
    let outlets = web::block(move || svc.list_outlets())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;
    Ok(HttpResponse::Ok().json(OutletListResponse::from(outlets)))
}

/// GET /outlets/search
///
/// Case-insensitive substring search over name/description, cuisine and
/// location; filters combine.
#[utoipa::path(
    get,
    path = "/outlets/search",
    params(
        ("query" = Option<String>, Query, description = "Matches outlet name or description"),
        ("cuisine" = Option<String>, Query, description = "Matches cuisine"),
        ("location" = Option<String>, Query, description = "Matches location"),
    ),
    responses(
        (status = 200, description = "Matching outlets", body = OutletListResponse),
    ),
    tag = "outlets"
)]
pub async fn search_outlets(
    svc: web::Data<CatalogSvc>,
    params: web::Query<SearchParams>,
) -> Result<HttpResponse, AppError> {
    let params = params.into_inner();
    let search = OutletSearch {
        query: params.query,
        cuisine: params.cuisine,
        location: params.location,
    };
    let outlets = web::block(move || svc.search_outlets(&search))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;
    Ok(HttpResponse::Ok().json(OutletListResponse::from(outlets)))
}

/// GET /outlets/{id}
#[utoipa::path(
    get,
    path = "/outlets/{id}",
    params(
        ("id" = Uuid, Path, description = "Outlet UUID"),
    ),
    responses(
        (status = 200, description = "Outlet found", body = OutletResponse),
        (status = 404, description = "Outlet not found"),
    ),
    tag = "outlets"
)]
pub async fn get_outlet(
    svc: web::Data<CatalogSvc>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let outlet_id = path.into_inner();
    let outlet = web::block(move || svc.get_outlet(outlet_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;
    Ok(HttpResponse::Ok().json(OutletResponse::from(outlet)))
}

/// GET /outlets/{id}/menu
#[utoipa::path(
    get,
    path = "/outlets/{id}/menu",
    params(
        ("id" = Uuid, Path, description = "Outlet UUID"),
    ),
    responses(
        (status = 200, description = "Menu of the outlet", body = MenuResponse),
    ),
    tag = "outlets"
)]
pub async fn get_outlet_menu(
    svc: web::Data<CatalogSvc>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let outlet_id = path.into_inner();
    let items = web::block(move || svc.outlet_menu(outlet_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;
    let items: Vec<MenuItemResponse> = items.into_iter().map(MenuItemResponse::from).collect();
    Ok(HttpResponse::Ok().json(MenuResponse {
        count: items.len(),
        items,
    }))
}
