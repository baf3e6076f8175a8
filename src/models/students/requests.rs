use serde::Deserialize;
use ts_rs::TS;

// 学生查询参数
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentQueryParams {
    pub class_id: Option<i64>,
}

// 创建学生请求
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub name: String,
    pub roll_no: String,
    pub class_id: i64,
    #[serde(default)]
    pub is_paid: bool,
}

// 更新学生请求
//
// class_id 仅允许与当前班级相同，换班会破坏已有成绩的班级一致性
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub roll_no: Option<String>,
    pub is_paid: Option<bool>,
    pub class_id: Option<i64>,
}
