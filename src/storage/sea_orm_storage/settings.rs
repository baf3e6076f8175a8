//! 键值设置存储操作

use super::{SeaOrmStorage, db_err};
use crate::entity::settings::{ActiveModel, Column, Entity as Settings};
use crate::errors::Result;
use crate::models::settings::entities::Setting;
use sea_orm::{EntityTrait, QueryOrder, Set, sea_query::OnConflict};

impl SeaOrmStorage {
    /// 读取设置值
    pub async fn get_setting_impl(&self, key: &str) -> Result<Option<String>> {
        let result = Settings::find_by_id(key.to_string())
            .one(&self.db)
            .await
            .map_err(db_err("查询设置失败"))?;

        Ok(result.map(|m| m.value))
    }

    /// 写入设置，键存在时覆盖
    pub async fn set_setting_impl(&self, key: &str, value: &str) -> Result<Setting> {
        let model = ActiveModel {
            key: Set(key.to_string()),
            value: Set(value.to_string()),
            updated_at: Set(chrono::Utc::now().timestamp()),
        };

        Settings::insert(model)
            .on_conflict(
                OnConflict::column(Column::Key)
                    .update_columns([Column::Value, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(db_err("保存设置失败"))?;

        let stored = Settings::find_by_id(key.to_string())
            .one(&self.db)
            .await
            .map_err(db_err("查询设置失败"))?
            .ok_or_else(|| {
                crate::errors::MarksheetError::database_operation(format!("设置写入后丢失: {key}"))
            })?;

        Ok(stored.into_setting())
    }

    /// 列出全部设置，按键排序
    pub async fn list_settings_impl(&self) -> Result<Vec<Setting>> {
        let settings = Settings::find()
            .order_by_asc(Column::Key)
            .all(&self.db)
            .await
            .map_err(db_err("查询设置列表失败"))?;

        Ok(settings.into_iter().map(|m| m.into_setting()).collect())
    }
}
