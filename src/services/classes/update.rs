use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::classes::requests::UpdateClassRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, invalid_request, not_found};
use crate::utils::validate::validate_name;

pub async fn update_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    mut update_data: UpdateClassRequest,
) -> ActixResult<HttpResponse> {
    if let Some(name) = update_data.name.as_deref() {
        match validate_name(name) {
            Ok(name) => update_data.name = Some(name),
            Err(msg) => return Ok(invalid_request(ErrorCode::ClassInvalid, msg)),
        }
    }

    let storage = service.get_storage(request)?;

    match storage.update_class(class_id, update_data).await {
        Ok(Some(class)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            class,
            "Class information updated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::ClassNotFound, "Class not found")),
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::ClassNotFound,
            ErrorCode::ClassInvalid,
        )),
    }
}
