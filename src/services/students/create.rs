use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{StudentService, normalize_roll_no};
use crate::models::students::requests::CreateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, invalid_request};
use crate::utils::validate::validate_name;

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    mut student_data: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    student_data.name = match validate_name(&student_data.name) {
        Ok(name) => name,
        Err(msg) => return Ok(invalid_request(ErrorCode::StudentInvalid, msg)),
    };
    student_data.roll_no = match normalize_roll_no(&student_data.roll_no) {
        Ok(roll_no) => roll_no,
        Err(msg) => return Ok(invalid_request(ErrorCode::StudentInvalid, msg)),
    };

    let storage = service.get_storage(request)?;

    match storage.create_student(student_data).await {
        Ok(student) => {
            info!("Student {} created in class {}", student.name, student.class_id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(student, "Student created successfully")))
        }
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::ClassNotFound,
            ErrorCode::StudentInvalid,
        )),
    }
}
