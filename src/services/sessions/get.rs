use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SessionService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, not_found};

pub async fn get_session(
    service: &SessionService,
    request: &HttpRequest,
    session_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_session(session_id).await {
        Ok(Some(session)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            session,
            "Session retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::SessionNotFound, "Session not found")),
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::SessionNotFound,
            ErrorCode::SessionInvalid,
        )),
    }
}
