use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::models::marks::requests::SaveMarkItem;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, invalid_request, not_found};
use crate::utils::validate::{validate_exam_date, validate_name};

pub async fn save_marks(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    mut items: Vec<SaveMarkItem>,
) -> ActixResult<HttpResponse> {
    // 科目名和日期在进入事务前统一校验，科目名为空的项由存储层跳过
    for item in items.iter_mut() {
        if !item.subject.trim().is_empty() {
            match validate_name(&item.subject) {
                Ok(name) => item.subject = name,
                Err(msg) => return Ok(invalid_request(ErrorCode::MarkInvalid, msg)),
            }
        }
        match validate_exam_date(item.date.as_deref()) {
            Ok(date) => item.date = date,
            Err(msg) => {
                return Ok(invalid_request(
                    ErrorCode::MarkInvalid,
                    format!("{}: {msg}", item.subject.trim()),
                ));
            }
        }
    }

    let storage = service.get_storage(request)?;
    let count = items.len();

    match storage.save_student_marks(student_id, items).await {
        Ok(Some(student)) => {
            info!("Saved {} mark(s) for student {}", count, student_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(student, "Marks saved successfully")))
        }
        Ok(None) => Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => Ok(error_response(&e, ErrorCode::MarkNotFound, ErrorCode::MarkInvalid)),
    }
}
