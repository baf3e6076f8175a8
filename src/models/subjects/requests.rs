use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::number::deserialize_string_to_i64;

// 科目查询参数
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectQueryParams {
    pub class_id: Option<i64>,
}

// 创建科目请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct CreateSubjectRequest {
    pub name: String,
    #[serde(deserialize_with = "deserialize_string_to_i64")]
    #[ts(type = "number")]
    pub max_marks: i64,
    pub date: Option<String>,
    pub class_id: i64,
}

// 更新科目请求
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct UpdateSubjectRequest {
    pub name: Option<String>,
    pub max_marks: Option<i64>,
    pub date: Option<String>,
    pub class_id: Option<i64>,
}
