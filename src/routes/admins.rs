use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::admins::entities::AdminRole;
use crate::models::admins::requests::CreateAdminRequest;
use crate::services::AdminService;

static ADMIN_SERVICE: Lazy<AdminService> = Lazy::new(AdminService::new_lazy);

pub async fn create_admin(
    req: HttpRequest,
    admin_data: web::Json<CreateAdminRequest>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE
        .create_admin(&req, admin_data.into_inner())
        .await
}

// 配置路由
pub fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/admins").route(
            web::post()
                .to(create_admin)
                // 仅超级管理员可以创建管理员
                .wrap(middlewares::RequireRole::new_any(AdminRole::super_roles()))
                .wrap(middlewares::RequireJWT),
        ),
    );
}
