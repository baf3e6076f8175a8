pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::sessions::requests::{CreateSessionRequest, UpdateSessionRequest};
use crate::storage::Storage;

pub struct SessionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SessionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 获取全部学期
    pub async fn list_sessions(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_sessions(self, request).await
    }

    pub async fn get_session(
        &self,
        request: &HttpRequest,
        session_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_session(self, request, session_id).await
    }

    pub async fn create_session(
        &self,
        request: &HttpRequest,
        session_data: CreateSessionRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_session(self, request, session_data).await
    }

    pub async fn update_session(
        &self,
        request: &HttpRequest,
        session_id: i64,
        update_data: UpdateSessionRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_session(self, request, session_id, update_data).await
    }

    // 删除学期，级联删除其下全部数据
    pub async fn delete_session(
        &self,
        request: &HttpRequest,
        session_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_session(self, request, session_id).await
    }
}
