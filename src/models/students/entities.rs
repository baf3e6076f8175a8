use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::marks::entities::MarkWithSubject;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    pub id: i64,
    pub name: String,
    // 学号，按班级内显示，不要求全局唯一
    pub roll_no: String,
    pub class_id: i64,
    pub is_paid: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// 学生及其全部成绩（每条成绩带科目信息）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentWithMarks {
    #[serde(flatten)]
    #[ts(flatten)]
    pub student: Student,
    pub marks: Vec<MarkWithSubject>,
}
