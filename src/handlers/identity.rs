use std::future::{ready, Ready};
use std::str::FromStr;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use uuid::Uuid;

use crate::domain::auth::{Identity, Role};
use crate::errors::AppError;

/// Headers set by the authenticating gateway in front of this service.
/// The service trusts them; it performs authorization, not authentication.
pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

fn parse_identity(req: &HttpRequest) -> Result<Identity, AppError> {
    let user_id = req
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| Uuid::parse_str(v).ok())
        .ok_or(AppError::Unauthorized)?;
    let role = req
        .headers()
        .get(USER_ROLE_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| Role::from_str(v).ok())
        .ok_or(AppError::Unauthorized)?;
    Ok(Identity { user_id, role })
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(parse_identity(req))
    }
}
