use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse},
};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

use crate::services::error_response;

use super::AuthService;

const LOGIN_FAILED: &str = "Email or password is incorrect";

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let config = service.get_config();

    let email = login_request.email.trim().to_lowercase();
    if email.is_empty() || login_request.password.is_empty() {
        return Ok(HttpResponse::Unauthorized()
            .json(ApiResponse::error_empty(ErrorCode::AuthFailed, LOGIN_FAILED)));
    }

    // 1. 根据邮箱获取管理员
    let admin = match storage.get_admin_by_email(&email).await {
        Ok(Some(admin)) => admin,
        Ok(None) => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::AuthFailed, LOGIN_FAILED)));
        }
        Err(e) => {
            return Ok(error_response(
                &e,
                ErrorCode::AdminNotFound,
                ErrorCode::AuthFailed,
            ));
        }
    };

    // 2. 验证密码
    if !verify_password(&login_request.password, &admin.password_hash) {
        tracing::info!("Login rejected for {}", email);
        return Ok(HttpResponse::Unauthorized()
            .json(ApiResponse::error_empty(ErrorCode::AuthFailed, LOGIN_FAILED)));
    }

    // 3. 更新最后登录时间，失败不影响登录
    if let Err(e) = storage.update_admin_last_login(admin.id).await {
        tracing::warn!("Failed to update last login for admin {}: {}", admin.id, e);
    }

    // 4. 生成令牌对
    let role = admin.role();
    let tokens = JwtUtils::generate_access_token(admin.id, &role).and_then(|access| {
        JwtUtils::generate_refresh_token(admin.id, &role).map(|refresh| (access, refresh))
    });

    match tokens {
        Ok((access_token, refresh_token)) => {
            tracing::info!("Admin {} logged in successfully", admin.email);

            let response = LoginResponse {
                access_token,
                expires_in: config.jwt.access_token_expiry * 60,
                admin,
                created_at: chrono::Utc::now(),
            };

            Ok(HttpResponse::Ok()
                .cookie(JwtUtils::create_refresh_token_cookie(&refresh_token))
                .json(ApiResponse::success(response, "Login successful")))
        }
        Err(e) => {
            tracing::error!("Failed to generate JWT token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, unable to generate token",
                )),
            )
        }
    }
}
