//! 学期存储操作

use super::{SeaOrmStorage, classes::delete_class_cascade, db_err};
use crate::entity::classes::{Column as ClassColumn, Entity as Classes};
use crate::entity::sessions::{ActiveModel, Column, Entity as Sessions};
use crate::errors::Result;
use crate::models::sessions::{
    entities::Session,
    requests::{CreateSessionRequest, UpdateSessionRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 列出全部学期
    pub async fn list_sessions_impl(&self) -> Result<Vec<Session>> {
        let sessions = Sessions::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询学期列表失败"))?;

        Ok(sessions.into_iter().map(|m| m.into_session()).collect())
    }

    /// 通过 ID 获取学期
    pub async fn get_session_impl(&self, id: i64) -> Result<Option<Session>> {
        let result = Sessions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询学期失败"))?;

        Ok(result.map(|m| m.into_session()))
    }

    /// 创建学期
    pub async fn create_session_impl(&self, req: CreateSessionRequest) -> Result<Session> {
        let model = ActiveModel {
            name: Set(req.name),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("创建学期失败"))?;

        Ok(result.into_session())
    }

    /// 更新学期
    pub async fn update_session_impl(
        &self,
        id: i64,
        update: UpdateSessionRequest,
    ) -> Result<Option<Session>> {
        let Some(existing) = Sessions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询学期失败"))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.clone().into();
        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_session()));
        }

        let result = model.update(&self.db).await.map_err(db_err("更新学期失败"))?;

        Ok(Some(result.into_session()))
    }

    /// 删除学期，连同其下所有班级
    pub async fn delete_session_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await.map_err(db_err("开启事务失败"))?;

        let classes = Classes::find()
            .filter(ClassColumn::SessionId.eq(id))
            .all(&txn)
            .await
            .map_err(db_err("查询学期班级失败"))?;

        for class in classes {
            delete_class_cascade(&txn, class.id).await?;
        }

        let result = Sessions::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err("删除学期失败"))?;

        txn.commit().await.map_err(db_err("提交事务失败"))?;

        Ok(result.rows_affected > 0)
    }
}
