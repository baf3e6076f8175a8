pub mod delete;
pub mod get;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::marks::requests::UpdateMarkRequest;
use crate::storage::Storage;

pub struct MarkService {
    storage: Option<Arc<dyn Storage>>,
}

impl MarkService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn get_mark(&self, request: &HttpRequest, mark_id: i64) -> ActixResult<HttpResponse> {
        get::get_mark(self, request, mark_id).await
    }

    // 按 (学生, 科目) 写入单条成绩
    pub async fn update_mark(
        &self,
        request: &HttpRequest,
        mark_data: UpdateMarkRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_mark(self, request, mark_data).await
    }

    pub async fn delete_mark(
        &self,
        request: &HttpRequest,
        mark_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_mark(self, request, mark_id).await
    }
}
