/*!
 * JWT 认证中间件
 *
 * 校验 `Authorization: Bearer <token>` 中的访问令牌，加载对应的管理员并放入请求扩展。
 * 所有写操作路由都由它保护，未通过时返回 401。
 *
 * ```rust,ignore
 * web::resource("")
 *     .route(web::get().to(list_sessions))
 *     .route(web::post().to(create_session).wrap(RequireJWT))
 * ```
 *
 * 处理函数中通过 `RequireJWT::extract_admin(&req)` 取得当前管理员。
 * 管理员记录按 `admin:{id}` 缓存，缓存未命中时回源到存储层。
 */

use crate::cache::{ObjectCache, get_json, insert_json};
use crate::config::AppConfig;
use crate::models::ErrorCode;
use crate::models::admins::entities::{Admin, AdminRole};
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info, warn};

use super::create_error_response;

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct RequireJWT;

/// 管理员缓存键
pub fn admin_cache_key(admin_id: i64) -> String {
    format!("admin:{admin_id}")
}

// 提取并验证访问令牌，返回对应的管理员
async fn extract_and_validate_jwt(req: &ServiceRequest) -> Result<Admin, String> {
    let token = req
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| "Missing or invalid Authorization header".to_string())?;

    let claims = JwtUtils::verify_access_token(token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        "Invalid JWT token".to_string()
    })?;

    let admin_id = claims
        .admin_id()
        .ok_or_else(|| "Invalid admin ID in JWT".to_string())?;

    let cache = req
        .app_data::<web::Data<Arc<dyn ObjectCache>>>()
        .map(|data| data.get_ref().clone());

    if let Some(cache) = &cache
        && let Some(admin) = get_json::<Admin>(cache.as_ref(), &admin_cache_key(admin_id)).await
    {
        return Ok(admin);
    }

    let storage = req
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| {
            warn!("Storage not found in app data");
            "Authentication backend unavailable".to_string()
        })?;

    let admin = storage
        .get_admin_by_id(admin_id)
        .await
        .map_err(|e| {
            warn!("Failed to load admin {}: {}", admin_id, e);
            "Failed to retrieve admin from storage".to_string()
        })?
        .ok_or_else(|| "Admin not found".to_string())?;

    if let Some(cache) = &cache {
        insert_json(
            cache.as_ref(),
            admin_cache_key(admin.id),
            &admin,
            AppConfig::get().cache.default_ttl,
        )
        .await;
    }

    Ok(admin)
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 预检请求直接放行
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, ErrorCode::Success, "")
                        .map_into_right_body(),
                ));
            }

            match extract_and_validate_jwt(&req).await {
                Ok(admin) => {
                    debug!("JWT authentication successful for admin {}", admin.id);
                    req.extensions_mut().insert(admin);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

impl RequireJWT {
    /// 从请求扩展中取出当前管理员，只能在 RequireJWT 保护的路由中使用
    pub fn extract_admin(req: &actix_web::HttpRequest) -> Option<Admin> {
        req.extensions().get::<Admin>().cloned()
    }

    pub fn extract_admin_id(req: &actix_web::HttpRequest) -> Option<i64> {
        req.extensions().get::<Admin>().map(|admin| admin.id)
    }

    pub fn extract_admin_role(req: &actix_web::HttpRequest) -> Option<AdminRole> {
        req.extensions().get::<Admin>().map(Admin::role)
    }
}
