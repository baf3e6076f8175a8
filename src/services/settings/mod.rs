pub mod get;
pub mod list;
pub mod set;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::settings::requests::SetSettingRequest;
use crate::storage::Storage;

pub struct SettingService {
    storage: Option<Arc<dyn Storage>>,
}

impl SettingService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 读取单个设置，公开接口
    pub async fn get_setting(&self, request: &HttpRequest, key: &str) -> ActixResult<HttpResponse> {
        get::get_setting(self, request, key).await
    }

    pub async fn set_setting(
        &self,
        request: &HttpRequest,
        setting: SetSettingRequest,
    ) -> ActixResult<HttpResponse> {
        set::set_setting(self, request, setting).await
    }

    pub async fn list_settings(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_settings(self, request).await
    }
}
