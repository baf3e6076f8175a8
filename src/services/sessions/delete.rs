use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SessionService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, not_found};

pub async fn delete_session(
    service: &SessionService,
    request: &HttpRequest,
    session_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_session(session_id).await {
        Ok(true) => {
            info!(
                "Session {} deleted by admin {:?}",
                session_id,
                RequireJWT::extract_admin_id(request)
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Session deleted successfully")))
        }
        Ok(false) => Ok(not_found(ErrorCode::SessionNotFound, "Session not found")),
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::SessionNotFound,
            ErrorCode::SessionInvalid,
        )),
    }
}
