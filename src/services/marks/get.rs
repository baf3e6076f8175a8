use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MarkService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, not_found};

pub async fn get_mark(
    service: &MarkService,
    request: &HttpRequest,
    mark_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_mark(mark_id).await {
        Ok(Some(mark)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(mark, "Mark retrieved successfully")))
        }
        Ok(None) => Ok(not_found(ErrorCode::MarkNotFound, "Mark not found")),
        Err(e) => Ok(error_response(&e, ErrorCode::MarkNotFound, ErrorCode::MarkInvalid)),
    }
}
