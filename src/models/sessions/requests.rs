use serde::Deserialize;
use ts_rs::TS;

// 创建学期请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/session.ts")]
pub struct CreateSessionRequest {
    pub name: String,
}

// 更新学期请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/session.ts")]
pub struct UpdateSessionRequest {
    pub name: Option<String>,
}
