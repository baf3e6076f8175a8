use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::marks::requests::UpdateMarkRequest;
use crate::services::MarkService;
use crate::utils::SafeMarkId;

static MARK_SERVICE: Lazy<MarkService> = Lazy::new(MarkService::new_lazy);

pub async fn update_mark(
    req: HttpRequest,
    mark_data: web::Json<UpdateMarkRequest>,
) -> ActixResult<HttpResponse> {
    MARK_SERVICE.update_mark(&req, mark_data.into_inner()).await
}

pub async fn get_mark(req: HttpRequest, mark_id: SafeMarkId) -> ActixResult<HttpResponse> {
    MARK_SERVICE.get_mark(&req, mark_id.0).await
}

pub async fn delete_mark(req: HttpRequest, mark_id: SafeMarkId) -> ActixResult<HttpResponse> {
    MARK_SERVICE.delete_mark(&req, mark_id.0).await
}

// 配置路由
pub fn configure_marks_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/marks")
            .service(
                web::resource("").route(web::put().to(update_mark).wrap(middlewares::RequireJWT)),
            )
            .service(
                web::resource("/{mark_id}")
                    .route(web::get().to(get_mark))
                    .route(web::delete().to(delete_mark).wrap(middlewares::RequireJWT)),
            ),
    );
}
