//! 请求体和查询参数的解析错误处理
//!
//! 把 actix 默认的纯文本 400 替换为统一的 JSON 错误响应。

use actix_web::{
    HttpRequest, HttpResponse,
    error::{InternalError, JsonPayloadError, QueryPayloadError},
};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("JSON payload error on {}: {}", req.path(), err);

    let (status, code) = match &err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            (actix_web::http::StatusCode::PAYLOAD_TOO_LARGE, ErrorCode::BadRequest)
        }
        _ => (actix_web::http::StatusCode::BAD_REQUEST, ErrorCode::BadRequest),
    };

    let response = HttpResponse::build(status).json(ApiResponse::<()>::error_empty(
        code,
        format!("Invalid request body: {err}"),
    ));
    InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Query parameter error on {}: {}", req.path(), err);

    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid query parameters: {err}"),
    ));
    InternalError::from_response(err, response).into()
}
