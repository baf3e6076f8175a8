use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubjectService;
use crate::models::subjects::requests::CreateSubjectRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, invalid_request};
use crate::utils::validate::{validate_exam_date, validate_name};

pub async fn create_subject(
    service: &SubjectService,
    request: &HttpRequest,
    mut subject_data: CreateSubjectRequest,
) -> ActixResult<HttpResponse> {
    subject_data.name = match validate_name(&subject_data.name) {
        Ok(name) => name,
        Err(msg) => return Ok(invalid_request(ErrorCode::SubjectInvalid, msg)),
    };
    subject_data.date = match validate_exam_date(subject_data.date.as_deref()) {
        Ok(date) => date,
        Err(msg) => return Ok(invalid_request(ErrorCode::SubjectInvalid, msg)),
    };

    let storage = service.get_storage(request)?;

    // 满分由存储层校验，班级不存在时返回 NotFound
    match storage.create_subject(subject_data).await {
        Ok(subject) => {
            info!("Subject {} created in class {}", subject.name, subject.class_id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(subject, "Subject created successfully")))
        }
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::ClassNotFound,
            ErrorCode::SubjectInvalid,
        )),
    }
}
