use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学期（学年），下属多个班级
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/session.ts")]
pub struct Session {
    pub id: i64,
    pub name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
