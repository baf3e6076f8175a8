//! 科目存储操作

use super::{
    SeaOrmStorage, db_err,
    marks::insert_zero_marks,
};
use crate::entity::classes::Entity as Classes;
use crate::entity::marks::{Column as MarkColumn, Entity as Marks};
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects, Model as SubjectModel};
use crate::errors::{MarksheetError, Result};
use crate::models::subjects::{
    entities::Subject,
    requests::{CreateSubjectRequest, UpdateSubjectRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

/// 满分必须是正整数
pub(crate) fn validate_max_marks(max_marks: i64) -> Result<i32> {
    match i32::try_from(max_marks) {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(MarksheetError::validation(format!(
            "满分必须是正整数: {max_marks}"
        ))),
    }
}

/// 创建科目并为班级内每个学生补一条 0 分成绩
pub(super) async fn insert_subject_with_marks<C: ConnectionTrait>(
    conn: &C,
    class_id: i64,
    name: String,
    max_marks: i32,
    date: Option<String>,
) -> Result<SubjectModel> {
    let model = ActiveModel {
        class_id: Set(class_id),
        name: Set(name),
        max_marks: Set(max_marks),
        date: Set(date),
        created_at: Set(chrono::Utc::now().timestamp()),
        ..Default::default()
    };

    let subject = model.insert(conn).await.map_err(db_err("创建科目失败"))?;

    let students = Students::find()
        .filter(StudentColumn::ClassId.eq(class_id))
        .all(conn)
        .await
        .map_err(db_err("查询班级学生失败"))?;

    insert_zero_marks(conn, students.iter().map(|s| (s.id, subject.id))).await?;

    Ok(subject)
}

impl SeaOrmStorage {
    /// 列出科目，可按班级筛选
    pub async fn list_subjects_impl(&self, class_id: Option<i64>) -> Result<Vec<Subject>> {
        let mut select = Subjects::find();

        if let Some(class_id) = class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        let subjects = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询科目列表失败"))?;

        Ok(subjects.into_iter().map(|m| m.into_subject()).collect())
    }

    /// 通过 ID 获取科目
    pub async fn get_subject_impl(&self, id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询科目失败"))?;

        Ok(result.map(|m| m.into_subject()))
    }

    /// 创建科目
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let max_marks = validate_max_marks(req.max_marks)?;

        let txn = self.db.begin().await.map_err(db_err("开启事务失败"))?;

        Classes::find_by_id(req.class_id)
            .one(&txn)
            .await
            .map_err(db_err("查询班级失败"))?
            .ok_or_else(|| MarksheetError::not_found(format!("班级不存在: {}", req.class_id)))?;

        let subject =
            insert_subject_with_marks(&txn, req.class_id, req.name, max_marks, req.date).await?;

        txn.commit().await.map_err(db_err("提交事务失败"))?;

        Ok(subject.into_subject())
    }

    /// 更新科目，不允许换班
    pub async fn update_subject_impl(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        let Some(existing) = Subjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询科目失败"))?
        else {
            return Ok(None);
        };

        if let Some(class_id) = update.class_id
            && class_id != existing.class_id
        {
            return Err(MarksheetError::validation("科目不能移动到其他班级"));
        }

        let mut model: ActiveModel = existing.clone().into();
        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(max_marks) = update.max_marks {
            model.max_marks = Set(validate_max_marks(max_marks)?);
        }
        if let Some(date) = update.date {
            // 空字符串表示清除日期
            model.date = Set(Some(date).filter(|d| !d.trim().is_empty()));
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_subject()));
        }

        let result = model.update(&self.db).await.map_err(db_err("更新科目失败"))?;

        Ok(Some(result.into_subject()))
    }

    /// 删除科目及其全部成绩
    pub async fn delete_subject_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await.map_err(db_err("开启事务失败"))?;

        Marks::delete_many()
            .filter(MarkColumn::SubjectId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err("删除科目成绩失败"))?;

        let result = Subjects::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err("删除科目失败"))?;

        txn.commit().await.map_err(db_err("提交事务失败"))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_max_marks() {
        assert_eq!(validate_max_marks(100).unwrap(), 100);
        assert!(validate_max_marks(0).is_err());
        assert!(validate_max_marks(-5).is_err());
        assert!(validate_max_marks(i64::from(i32::MAX) + 1).is_err());
    }
}
