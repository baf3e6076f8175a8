pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod marks;
pub mod marksheet;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::marks::requests::SaveMarkItem;
use crate::models::students::requests::{
    CreateStudentRequest, StudentQueryParams, UpdateStudentRequest,
};
use crate::storage::Storage;
use crate::utils::validate::MAX_NAME_LENGTH;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 学生列表，每个学生带全部成绩
    pub async fn list_students(
        &self,
        request: &HttpRequest,
        query: StudentQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_students(self, request, query).await
    }

    pub async fn get_student(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_student(self, request, student_id).await
    }

    // 创建学生，同时为班级内每个科目生成 0 分成绩
    pub async fn create_student(
        &self,
        request: &HttpRequest,
        student_data: CreateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_student(self, request, student_data).await
    }

    pub async fn update_student(
        &self,
        request: &HttpRequest,
        student_id: i64,
        update_data: UpdateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, request, student_id, update_data).await
    }

    pub async fn delete_student(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_student(self, request, student_id).await
    }

    // 成绩单批量保存
    pub async fn save_marks(
        &self,
        request: &HttpRequest,
        student_id: i64,
        items: Vec<SaveMarkItem>,
    ) -> ActixResult<HttpResponse> {
        marks::save_marks(self, request, student_id, items).await
    }

    // 成绩单（抬头、成绩行和汇总）
    pub async fn get_marksheet(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        marksheet::get_marksheet(self, request, student_id).await
    }
}

/// 学号去除首尾空白，允许为空
pub(crate) fn normalize_roll_no(roll_no: &str) -> Result<String, &'static str> {
    let trimmed = roll_no.trim();
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err("Roll number must be at most 100 characters");
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_roll_no() {
        assert_eq!(normalize_roll_no("  A-12 ").unwrap(), "A-12");
        assert_eq!(normalize_roll_no("").unwrap(), "");
        assert!(normalize_roll_no(&"9".repeat(101)).is_err());
    }
}
