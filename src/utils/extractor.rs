//! 路径参数提取器
//!
//! 在进入处理函数之前校验路径参数，非法值直接返回 400 和统一的错误响应。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_setting_key;

fn bad_path_param(message: String) -> actix_web::Error {
    let response =
        HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(ErrorCode::BadRequest, &message));
    InternalError::from_response(message, response).into()
}

/// 解析正整数 ID
fn parse_positive_id(raw: Option<&str>, param: &str) -> Result<i64, actix_web::Error> {
    let raw = raw.ok_or_else(|| bad_path_param(format!("Missing path parameter: {param}")))?;
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(bad_path_param(format!(
            "Invalid {param}: must be a positive integer"
        ))),
    }
}

macro_rules! define_safe_id {
    ($(#[$meta:meta])* $name:ident, $param:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                ready(parse_positive_id(req.match_info().get($param), $param).map($name))
            }
        }
    };
}

define_safe_id!(
    /// `{session_id}`
    SafeSessionId,
    "session_id"
);
define_safe_id!(
    /// `{class_id}`
    SafeClassId,
    "class_id"
);
define_safe_id!(
    /// `{student_id}`
    SafeStudentId,
    "student_id"
);
define_safe_id!(
    /// `{subject_id}`
    SafeSubjectId,
    "subject_id"
);
define_safe_id!(
    /// `{mark_id}`
    SafeMarkId,
    "mark_id"
);

/// `{key}`，设置键
#[derive(Debug, Clone)]
pub struct SafeSettingKey(pub String);

impl FromRequest for SafeSettingKey {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let key = req.match_info().get("key").unwrap_or_default();
        ready(match validate_setting_key(key) {
            Ok(()) => Ok(SafeSettingKey(key.to_string())),
            Err(msg) => Err(bad_path_param(msg.to_string())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_id() {
        assert_eq!(parse_positive_id(Some("42"), "class_id").unwrap(), 42);
        assert!(parse_positive_id(Some("0"), "class_id").is_err());
        assert!(parse_positive_id(Some("-3"), "class_id").is_err());
        assert!(parse_positive_id(Some("abc"), "class_id").is_err());
        assert!(parse_positive_id(None, "class_id").is_err());
    }

    #[actix_web::test]
    async fn test_extract_from_path() {
        use actix_web::test::TestRequest;

        let req = TestRequest::default()
            .param("student_id", "7")
            .to_http_request();
        let id = SafeStudentId::extract(&req).await.unwrap();
        assert_eq!(id.0, 7);

        let req = TestRequest::default().param("key", "app_name").to_http_request();
        let key = SafeSettingKey::extract(&req).await.unwrap();
        assert_eq!(key.0, "app_name");

        let req = TestRequest::default().param("key", "bad key").to_http_request();
        assert!(SafeSettingKey::extract(&req).await.is_err());
    }
}
