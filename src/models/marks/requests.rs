use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::number::{deserialize_decimal_string, deserialize_string_to_i64};

// 单条成绩写入（按学生+科目 upsert）
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/mark.ts")]
pub struct UpdateMarkRequest {
    pub student_id: i64,
    pub subject_id: i64,
    #[serde(deserialize_with = "deserialize_decimal_string")]
    #[ts(type = "string | number")]
    pub obtained: String,
}

// 成绩单批量保存中的一项
//
// id 为已有成绩的 ID；没有 id 时按科目名称在学生所在班级内匹配，匹配不到则新建科目
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/mark.ts")]
pub struct SaveMarkItem {
    pub id: Option<i64>,
    pub subject: String,
    pub date: Option<String>,
    #[serde(deserialize_with = "deserialize_decimal_string")]
    #[ts(type = "string | number")]
    pub obtained: String,
    #[serde(deserialize_with = "deserialize_string_to_i64")]
    #[ts(type = "number")]
    pub max: i64,
}
