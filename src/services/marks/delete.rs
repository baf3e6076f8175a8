use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MarkService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, not_found};

pub async fn delete_mark(
    service: &MarkService,
    request: &HttpRequest,
    mark_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_mark(mark_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Mark deleted successfully"))),
        Ok(false) => Ok(not_found(ErrorCode::MarkNotFound, "Mark not found")),
        Err(e) => Ok(error_response(&e, ErrorCode::MarkNotFound, ErrorCode::MarkInvalid)),
    }
}
