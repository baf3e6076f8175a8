use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::subjects::entities::Subject;

/// 某学生某科目的成绩，(student_id, subject_id) 唯一
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/mark.ts")]
pub struct Mark {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    // 十进制字符串，例如 "42.5"
    pub obtained: String,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/mark.ts")]
pub struct MarkWithSubject {
    #[serde(flatten)]
    #[ts(flatten)]
    pub mark: Mark,
    pub subject: Subject,
}
