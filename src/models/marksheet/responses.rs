use serde::Serialize;
use ts_rs::TS;

use super::MarkSummary;
use crate::models::students::entities::Student;

/// 成绩单抬头
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/marksheet.ts")]
pub struct InstituteHeader {
    pub app_name: String,
    pub director: String,
    pub manager: String,
}

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/marksheet.ts")]
pub struct MarksheetRow {
    pub mark_id: i64,
    pub subject_id: i64,
    pub subject: String,
    pub date: Option<String>,
    pub obtained: String,
    pub max: i32,
}

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/marksheet.ts")]
pub struct MarksheetResponse {
    pub institute: InstituteHeader,
    pub student: Student,
    pub class_name: Option<String>,
    pub session_name: Option<String>,
    pub rows: Vec<MarksheetRow>,
    pub summary: MarkSummary,
}
