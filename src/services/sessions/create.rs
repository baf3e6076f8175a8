use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SessionService;
use crate::models::sessions::requests::CreateSessionRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, invalid_request};
use crate::utils::validate::validate_name;

pub async fn create_session(
    service: &SessionService,
    request: &HttpRequest,
    mut session_data: CreateSessionRequest,
) -> ActixResult<HttpResponse> {
    session_data.name = match validate_name(&session_data.name) {
        Ok(name) => name,
        Err(msg) => return Ok(invalid_request(ErrorCode::SessionInvalid, msg)),
    };

    let storage = service.get_storage(request)?;

    match storage.create_session(session_data).await {
        Ok(session) => {
            info!("Session {} created", session.name);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(session, "Session created successfully")))
        }
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::SessionNotFound,
            ErrorCode::SessionInvalid,
        )),
    }
}
