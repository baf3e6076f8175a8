use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MarkService;
use crate::models::marks::requests::UpdateMarkRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

pub async fn update_mark(
    service: &MarkService,
    request: &HttpRequest,
    mark_data: UpdateMarkRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 学生和科目必须存在且属于同一班级，得分必须是非负数
    match storage.update_mark(mark_data).await {
        Ok(mark) => Ok(HttpResponse::Ok().json(ApiResponse::success(mark, "Mark saved successfully"))),
        Err(e) => Ok(error_response(&e, ErrorCode::MarkNotFound, ErrorCode::MarkInvalid)),
    }
}
