use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SettingService;
use crate::middlewares::RequireJWT;
use crate::models::settings::requests::SetSettingRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, invalid_request};
use crate::utils::validate::validate_setting_key;

pub async fn set_setting(
    service: &SettingService,
    request: &HttpRequest,
    setting: SetSettingRequest,
) -> ActixResult<HttpResponse> {
    let key = setting.key.trim();
    if let Err(msg) = validate_setting_key(key) {
        return Ok(invalid_request(ErrorCode::SettingKeyInvalid, msg));
    }

    let storage = service.get_storage(request)?;

    match storage.set_setting(key, &setting.value).await {
        Ok(saved) => {
            info!(
                "Setting {} updated by admin {:?}",
                saved.key,
                RequireJWT::extract_admin_id(request)
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(saved, "Setting saved successfully")))
        }
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::NotFound,
            ErrorCode::SettingUpdateFailed,
        )),
    }
}
