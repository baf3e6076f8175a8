use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 前端使用的已知设置键
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KnownSettingKey {
    AppName,
    AppNameDisplay,
    AppLink,
    SessionName,
    Director,
    Manager,
}

impl KnownSettingKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            KnownSettingKey::AppName => "app_name",
            KnownSettingKey::AppNameDisplay => "app_name_display",
            KnownSettingKey::AppLink => "app_link",
            KnownSettingKey::SessionName => "session_name",
            KnownSettingKey::Director => "director",
            KnownSettingKey::Manager => "manager",
        }
    }
}

/// 键值设置
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/setting.ts")]
pub struct Setting {
    pub key: String,
    pub value: String,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
