use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassService;
use crate::models::classes::requests::CreateClassRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, invalid_request};
use crate::utils::validate::validate_name;

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    mut class_data: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    class_data.name = match validate_name(&class_data.name) {
        Ok(name) => name,
        Err(msg) => return Ok(invalid_request(ErrorCode::ClassInvalid, msg)),
    };

    let storage = service.get_storage(request)?;

    // 学期不存在时存储层返回 NotFound
    match storage.create_class(class_data).await {
        Ok(class) => {
            info!("Class {} created in session {}", class.name, class.session_id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(class, "Class created successfully")))
        }
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::SessionNotFound,
            ErrorCode::ClassInvalid,
        )),
    }
}
