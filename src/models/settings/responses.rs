use serde::Serialize;
use ts_rs::TS;

use super::entities::Setting;

/// 单个设置的值，不存在时为 null
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/setting.ts")]
pub struct SettingValueResponse {
    pub value: Option<String>,
}

/// 管理员设置列表
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/setting.ts")]
pub struct SettingListResponse {
    pub settings: Vec<Setting>,
}
