pub mod admins;
pub mod auth;
pub mod classes;
pub mod marks;
pub mod sessions;
pub mod settings;
pub mod students;
pub mod subjects;

pub use admins::AdminService;
pub use auth::AuthService;
pub use classes::ClassService;
pub use marks::MarkService;
pub use sessions::SessionService;
pub use settings::SettingService;
pub use students::StudentService;
pub use subjects::SubjectService;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;
use tracing::error;

use crate::errors::MarksheetError;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 从 app data 取存储实例，未注册时返回 500
pub(crate) fn storage_from_request(request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| {
            error!("Storage not found in app data");
            actix_web::error::ErrorInternalServerError("Storage not configured")
        })
}

/// 把存储层错误映射为 HTTP 响应
///
/// `not_found` / `invalid` 为该资源对应的业务错误码
pub(crate) fn error_response(
    err: &MarksheetError,
    not_found: ErrorCode,
    invalid: ErrorCode,
) -> HttpResponse {
    match err {
        MarksheetError::NotFound(msg) => {
            HttpResponse::NotFound().json(ApiResponse::error_empty(not_found, msg))
        }
        MarksheetError::Validation(msg) | MarksheetError::DateParse(msg) => {
            HttpResponse::BadRequest().json(ApiResponse::error_empty(invalid, msg))
        }
        MarksheetError::Conflict(msg) => {
            HttpResponse::Conflict().json(ApiResponse::error_empty(ErrorCode::Conflict, msg))
        }
        MarksheetError::Authentication(msg) => {
            HttpResponse::Unauthorized().json(ApiResponse::error_empty(ErrorCode::Unauthorized, msg))
        }
        MarksheetError::Authorization(msg) => {
            HttpResponse::Forbidden().json(ApiResponse::error_empty(ErrorCode::Forbidden, msg))
        }
        e if e.is_transient() => {
            error!("{}", e);
            HttpResponse::ServiceUnavailable().json(ApiResponse::error_empty(
                ErrorCode::ServiceUnavailable,
                "Storage temporarily unavailable, please retry",
            ))
        }
        e => {
            error!("{}", e);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                e.format_simple(),
            ))
        }
    }
}

/// 请求参数校验失败
pub(crate) fn invalid_request(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, message))
}

/// 资源不存在
pub(crate) fn not_found(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(code, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    fn status_of(err: MarksheetError) -> StatusCode {
        error_response(&err, ErrorCode::ClassNotFound, ErrorCode::ClassInvalid).status()
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(status_of(MarksheetError::not_found("x")), StatusCode::NOT_FOUND);
        assert_eq!(status_of(MarksheetError::validation("x")), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(MarksheetError::date_parse("x")), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(MarksheetError::conflict("x")), StatusCode::CONFLICT);
        assert_eq!(
            status_of(MarksheetError::authentication("x")),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(status_of(MarksheetError::authorization("x")), StatusCode::FORBIDDEN);
        assert_eq!(
            status_of(MarksheetError::database_connection("x")),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_of(MarksheetError::database_operation("x")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
