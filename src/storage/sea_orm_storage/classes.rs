//! 班级存储操作

use super::{SeaOrmStorage, db_err};
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::entity::marks::{Column as MarkColumn, Entity as Marks};
use crate::entity::sessions::Entity as Sessions;
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::entity::subjects::{Column as SubjectColumn, Entity as Subjects};
use crate::errors::{MarksheetError, Result};
use crate::models::classes::{
    entities::Class,
    requests::{CreateClassRequest, UpdateClassRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

/// 删除班级及其学生、科目和全部相关成绩
///
/// 调用方负责提供事务连接
pub(super) async fn delete_class_cascade<C: ConnectionTrait>(conn: &C, class_id: i64) -> Result<bool> {
    let student_ids: Vec<i64> = Students::find()
        .filter(StudentColumn::ClassId.eq(class_id))
        .all(conn)
        .await
        .map_err(db_err("查询班级学生失败"))?
        .into_iter()
        .map(|s| s.id)
        .collect();

    let subject_ids: Vec<i64> = Subjects::find()
        .filter(SubjectColumn::ClassId.eq(class_id))
        .all(conn)
        .await
        .map_err(db_err("查询班级科目失败"))?
        .into_iter()
        .map(|s| s.id)
        .collect();

    if !student_ids.is_empty() || !subject_ids.is_empty() {
        Marks::delete_many()
            .filter(
                Condition::any()
                    .add(MarkColumn::StudentId.is_in(student_ids))
                    .add(MarkColumn::SubjectId.is_in(subject_ids)),
            )
            .exec(conn)
            .await
            .map_err(db_err("删除班级成绩失败"))?;
    }

    Students::delete_many()
        .filter(StudentColumn::ClassId.eq(class_id))
        .exec(conn)
        .await
        .map_err(db_err("删除班级学生失败"))?;

    Subjects::delete_many()
        .filter(SubjectColumn::ClassId.eq(class_id))
        .exec(conn)
        .await
        .map_err(db_err("删除班级科目失败"))?;

    let result = Classes::delete_by_id(class_id)
        .exec(conn)
        .await
        .map_err(db_err("删除班级失败"))?;

    Ok(result.rows_affected > 0)
}

impl SeaOrmStorage {
    /// 列出班级，可按学期筛选
    pub async fn list_classes_impl(&self, session_id: Option<i64>) -> Result<Vec<Class>> {
        let mut select = Classes::find();

        if let Some(session_id) = session_id {
            select = select.filter(Column::SessionId.eq(session_id));
        }

        let classes = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询班级列表失败"))?;

        Ok(classes.into_iter().map(|m| m.into_class()).collect())
    }

    /// 通过 ID 获取班级
    pub async fn get_class_impl(&self, id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询班级失败"))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 创建班级，所属学期必须存在
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let txn = self.db.begin().await.map_err(db_err("开启事务失败"))?;

        Sessions::find_by_id(req.session_id)
            .one(&txn)
            .await
            .map_err(db_err("查询学期失败"))?
            .ok_or_else(|| MarksheetError::not_found(format!("学期不存在: {}", req.session_id)))?;

        let model = ActiveModel {
            session_id: Set(req.session_id),
            name: Set(req.name),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model.insert(&txn).await.map_err(db_err("创建班级失败"))?;

        txn.commit().await.map_err(db_err("提交事务失败"))?;

        Ok(result.into_class())
    }

    /// 更新班级
    pub async fn update_class_impl(
        &self,
        id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        let Some(existing) = Classes::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询班级失败"))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.clone().into();
        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_class()));
        }

        let result = model.update(&self.db).await.map_err(db_err("更新班级失败"))?;

        Ok(Some(result.into_class()))
    }

    /// 删除班级
    pub async fn delete_class_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await.map_err(db_err("开启事务失败"))?;
        let deleted = delete_class_cascade(&txn, id).await?;
        txn.commit().await.map_err(db_err("提交事务失败"))?;

        Ok(deleted)
    }
}
