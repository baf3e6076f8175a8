use serde::Deserialize;
use ts_rs::TS;

/// 写入设置请求（存在则更新，否则插入）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/setting.ts")]
pub struct SetSettingRequest {
    pub key: String,
    pub value: String,
}
