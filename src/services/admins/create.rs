use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AdminService;
use crate::middlewares::RequireJWT;
use crate::models::admins::requests::CreateAdminRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, invalid_request};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password};

pub async fn create_admin(
    service: &AdminService,
    request: &HttpRequest,
    create_request: CreateAdminRequest,
) -> ActixResult<HttpResponse> {
    let email = create_request.email.trim().to_lowercase();
    if let Err(msg) = validate_email(&email) {
        return Ok(invalid_request(ErrorCode::AdminEmailInvalid, msg));
    }

    let policy = validate_password(&create_request.password);
    if !policy.is_valid {
        return Ok(invalid_request(
            ErrorCode::AdminPasswordInvalid,
            policy.error_message(),
        ));
    }

    let storage = service.get_storage(request)?;

    match storage.get_admin_by_email(&email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AdminAlreadyExists,
                "An admin with this email already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(error_response(
                &e,
                ErrorCode::AdminNotFound,
                ErrorCode::AdminCreationFailed,
            ));
        }
    }

    let password_hash = match hash_password(&create_request.password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Password hashing failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::AdminCreationFailed,
                    "Unable to create admin",
                )),
            );
        }
    };

    // 通过接口创建的一律是普通管理员
    match storage.create_admin(&email, &password_hash, false).await {
        Ok(admin) => {
            tracing::info!(
                "Admin {} created by admin {:?}",
                admin.email,
                RequireJWT::extract_admin_id(request)
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(admin, "Admin created")))
        }
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::AdminNotFound,
            ErrorCode::AdminCreationFailed,
        )),
    }
}
