use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SettingService;
use crate::models::settings::responses::SettingValueResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

pub async fn get_setting(
    service: &SettingService,
    request: &HttpRequest,
    key: &str,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 不存在的键返回 null 而不是 404
    match storage.get_setting(key).await {
        Ok(value) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SettingValueResponse { value },
            "Setting retrieved successfully",
        ))),
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::NotFound,
            ErrorCode::SettingKeyInvalid,
        )),
    }
}
