use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub max_marks: i32,
    // 考试日期，YYYY-MM-DD
    pub date: Option<String>,
    pub class_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
