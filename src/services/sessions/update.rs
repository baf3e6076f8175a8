use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SessionService;
use crate::models::sessions::requests::UpdateSessionRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, invalid_request, not_found};
use crate::utils::validate::validate_name;

pub async fn update_session(
    service: &SessionService,
    request: &HttpRequest,
    session_id: i64,
    mut update_data: UpdateSessionRequest,
) -> ActixResult<HttpResponse> {
    if let Some(name) = update_data.name.as_deref() {
        match validate_name(name) {
            Ok(name) => update_data.name = Some(name),
            Err(msg) => return Ok(invalid_request(ErrorCode::SessionInvalid, msg)),
        }
    }

    let storage = service.get_storage(request)?;

    match storage.update_session(session_id, update_data).await {
        Ok(Some(session)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            session,
            "Session updated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::SessionNotFound, "Session not found")),
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::SessionNotFound,
            ErrorCode::SessionInvalid,
        )),
    }
}
