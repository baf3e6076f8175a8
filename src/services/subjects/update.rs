use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::subjects::requests::UpdateSubjectRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, invalid_request, not_found};
use crate::utils::validate::{validate_exam_date, validate_name};

pub async fn update_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_id: i64,
    mut update_data: UpdateSubjectRequest,
) -> ActixResult<HttpResponse> {
    if let Some(name) = update_data.name.as_deref() {
        match validate_name(name) {
            Ok(name) => update_data.name = Some(name),
            Err(msg) => return Ok(invalid_request(ErrorCode::SubjectInvalid, msg)),
        }
    }

    // 空字符串表示清除日期
    if let Some(date) = update_data.date.as_deref() {
        match validate_exam_date(Some(date)) {
            Ok(date) => update_data.date = Some(date.unwrap_or_default()),
            Err(msg) => return Ok(invalid_request(ErrorCode::SubjectInvalid, msg)),
        }
    }

    let storage = service.get_storage(request)?;

    match storage.update_subject(subject_id, update_data).await {
        Ok(Some(subject)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            subject,
            "Subject updated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::SubjectNotFound, "Subject not found")),
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::SubjectNotFound,
            ErrorCode::SubjectInvalid,
        )),
    }
}
