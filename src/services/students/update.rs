use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{StudentService, normalize_roll_no};
use crate::models::students::requests::UpdateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, invalid_request, not_found};
use crate::utils::validate::validate_name;

pub async fn update_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    mut update_data: UpdateStudentRequest,
) -> ActixResult<HttpResponse> {
    if let Some(name) = update_data.name.as_deref() {
        match validate_name(name) {
            Ok(name) => update_data.name = Some(name),
            Err(msg) => return Ok(invalid_request(ErrorCode::StudentInvalid, msg)),
        }
    }
    if let Some(roll_no) = update_data.roll_no.as_deref() {
        match normalize_roll_no(roll_no) {
            Ok(roll_no) => update_data.roll_no = Some(roll_no),
            Err(msg) => return Ok(invalid_request(ErrorCode::StudentInvalid, msg)),
        }
    }

    let storage = service.get_storage(request)?;

    // 换班由存储层拒绝
    match storage.update_student(student_id, update_data).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            student,
            "Student updated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::StudentNotFound,
            ErrorCode::StudentInvalid,
        )),
    }
}
