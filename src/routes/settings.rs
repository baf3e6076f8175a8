use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::settings::requests::SetSettingRequest;
use crate::services::SettingService;
use crate::utils::SafeSettingKey;

static SETTING_SERVICE: Lazy<SettingService> = Lazy::new(SettingService::new_lazy);

pub async fn get_setting(req: HttpRequest, key: SafeSettingKey) -> ActixResult<HttpResponse> {
    SETTING_SERVICE.get_setting(&req, &key.0).await
}

pub async fn set_setting(
    req: HttpRequest,
    setting: web::Json<SetSettingRequest>,
) -> ActixResult<HttpResponse> {
    SETTING_SERVICE.set_setting(&req, setting.into_inner()).await
}

pub async fn list_settings(req: HttpRequest) -> ActixResult<HttpResponse> {
    SETTING_SERVICE.list_settings(&req).await
}

// 配置路由：单个键公开读取，列表和写入需要登录
pub fn configure_settings_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/settings")
            .service(
                web::resource("")
                    .route(web::get().to(list_settings).wrap(middlewares::RequireJWT))
                    .route(web::post().to(set_setting).wrap(middlewares::RequireJWT)),
            )
            .service(web::resource("/{key}").route(web::get().to(get_setting))),
    );
}
