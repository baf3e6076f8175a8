use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SessionService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

pub async fn list_sessions(
    service: &SessionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_sessions().await {
        Ok(sessions) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            sessions,
            "Session list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::SessionNotFound,
            ErrorCode::SessionInvalid,
        )),
    }
}
