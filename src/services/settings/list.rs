use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SettingService;
use crate::models::settings::responses::SettingListResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

pub async fn list_settings(
    service: &SettingService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_settings().await {
        Ok(settings) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SettingListResponse { settings },
            "Settings retrieved successfully",
        ))),
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::NotFound,
            ErrorCode::SettingKeyInvalid,
        )),
    }
}
