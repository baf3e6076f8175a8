//! 管理员存储操作

use super::{SeaOrmStorage, db_err};
use crate::entity::admins::{ActiveModel, Column, Entity as Admins};
use crate::errors::{MarksheetError, Result};
use crate::models::admins::entities::Admin;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建管理员
    pub async fn create_admin_impl(
        &self,
        email: &str,
        password_hash: &str,
        is_super_admin: bool,
    ) -> Result<Admin> {
        let email = email.trim().to_lowercase();
        if self.get_admin_by_email_impl(&email).await?.is_some() {
            return Err(MarksheetError::conflict(format!("管理员邮箱已存在: {email}")));
        }

        let model = ActiveModel {
            email: Set(email),
            password_hash: Set(password_hash.to_string()),
            is_super_admin: Set(is_super_admin),
            last_login: Set(None),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("创建管理员失败"))?;

        Ok(result.into_admin())
    }

    /// 通过 ID 获取管理员
    pub async fn get_admin_by_id_impl(&self, id: i64) -> Result<Option<Admin>> {
        let result = Admins::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询管理员失败"))?;

        Ok(result.map(|m| m.into_admin()))
    }

    /// 通过邮箱获取管理员（邮箱统一小写存储）
    pub async fn get_admin_by_email_impl(&self, email: &str) -> Result<Option<Admin>> {
        let result = Admins::find()
            .filter(Column::Email.eq(email.trim().to_lowercase()))
            .one(&self.db)
            .await
            .map_err(db_err("查询管理员失败"))?;

        Ok(result.map(|m| m.into_admin()))
    }

    /// 管理员总数
    pub async fn count_admins_impl(&self) -> Result<u64> {
        Admins::find()
            .count(&self.db)
            .await
            .map_err(db_err("统计管理员失败"))
    }

    /// 更新最后登录时间
    pub async fn update_admin_last_login_impl(&self, id: i64) -> Result<bool> {
        let result = Admins::update_many()
            .col_expr(
                Column::LastLogin,
                sea_orm::sea_query::Expr::value(chrono::Utc::now().timestamp()),
            )
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err("更新登录时间失败"))?;

        Ok(result.rows_affected > 0)
    }
}
