use serde::Deserialize;
use ts_rs::TS;

// 创建管理员请求（仅超级管理员可用）
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/admin.ts")]
pub struct CreateAdminRequest {
    pub email: String,
    pub password: String,
}
