pub mod admin;
pub mod identity;
pub mod orders;
pub mod outlets;

use std::str::FromStr;

use actix_web::HttpResponse;
use bigdecimal::BigDecimal;

use crate::domain::errors::DomainError;

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Decimal wire values travel as strings (e.g. "45.00") to avoid
/// floating-point drift.
pub(crate) fn parse_decimal(field: &str, raw: &str) -> Result<BigDecimal, DomainError> {
    BigDecimal::from_str(raw)
        .map_err(|e| DomainError::Validation(format!("invalid {} '{}': {}", field, raw, e)))
}
