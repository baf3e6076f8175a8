use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::sessions::requests::{CreateSessionRequest, UpdateSessionRequest};
use crate::services::SessionService;
use crate::utils::SafeSessionId;

static SESSION_SERVICE: Lazy<SessionService> = Lazy::new(SessionService::new_lazy);

pub async fn list_sessions(req: HttpRequest) -> ActixResult<HttpResponse> {
    SESSION_SERVICE.list_sessions(&req).await
}

pub async fn create_session(
    req: HttpRequest,
    session_data: web::Json<CreateSessionRequest>,
) -> ActixResult<HttpResponse> {
    SESSION_SERVICE
        .create_session(&req, session_data.into_inner())
        .await
}

pub async fn get_session(req: HttpRequest, session_id: SafeSessionId) -> ActixResult<HttpResponse> {
    SESSION_SERVICE.get_session(&req, session_id.0).await
}

pub async fn update_session(
    req: HttpRequest,
    session_id: SafeSessionId,
    update_data: web::Json<UpdateSessionRequest>,
) -> ActixResult<HttpResponse> {
    SESSION_SERVICE
        .update_session(&req, session_id.0, update_data.into_inner())
        .await
}

pub async fn delete_session(
    req: HttpRequest,
    session_id: SafeSessionId,
) -> ActixResult<HttpResponse> {
    SESSION_SERVICE.delete_session(&req, session_id.0).await
}

// 配置路由：读取公开，写入需要登录
pub fn configure_sessions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/sessions")
            .service(
                web::resource("")
                    .route(web::get().to(list_sessions))
                    .route(
                        web::post()
                            .to(create_session)
                            .wrap(middlewares::RequireJWT),
                    ),
            )
            .service(
                web::resource("/{session_id}")
                    .route(web::get().to(get_session))
                    .route(
                        web::patch()
                            .to(update_session)
                            .wrap(middlewares::RequireJWT),
                    )
                    .route(
                        web::delete()
                            .to(delete_session)
                            .wrap(middlewares::RequireJWT),
                    ),
            ),
    );
}
