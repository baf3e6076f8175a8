//! 成绩存储操作

use super::{SeaOrmStorage, db_err};
use crate::entity::marks::{ActiveModel, Column, Entity as Marks, Model as MarkModel};
use crate::entity::students::Entity as Students;
use crate::entity::subjects::Entity as Subjects;
use crate::errors::{MarksheetError, Result};
use crate::models::marks::{entities::Mark, requests::UpdateMarkRequest};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set, TransactionTrait,
    sea_query::OnConflict,
};

/// 校验并规范化得分：空白视为 0，其余必须是有限的非负数
pub(crate) fn normalize_obtained(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok("0".to_string());
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(trimmed.to_string()),
        _ => Err(MarksheetError::validation(format!(
            "得分必须是非负数: {trimmed}"
        ))),
    }
}

/// 按 (学生, 科目) 写入成绩，存在则覆盖
pub(super) async fn upsert_mark<C: ConnectionTrait>(
    conn: &C,
    student_id: i64,
    subject_id: i64,
    obtained: String,
) -> Result<MarkModel> {
    let model = ActiveModel {
        student_id: Set(student_id),
        subject_id: Set(subject_id),
        obtained: Set(obtained),
        updated_at: Set(chrono::Utc::now().timestamp()),
        ..Default::default()
    };

    Marks::insert(model)
        .on_conflict(
            OnConflict::columns([Column::StudentId, Column::SubjectId])
                .update_columns([Column::Obtained, Column::UpdatedAt])
                .to_owned(),
        )
        .exec(conn)
        .await
        .map_err(db_err("保存成绩失败"))?;

    Marks::find()
        .filter(Column::StudentId.eq(student_id))
        .filter(Column::SubjectId.eq(subject_id))
        .one(conn)
        .await
        .map_err(db_err("查询成绩失败"))?
        .ok_or_else(|| {
            MarksheetError::database_operation(format!(
                "成绩写入后丢失: 学生 {student_id} 科目 {subject_id}"
            ))
        })
}

/// 为一组 (学生, 科目) 批量插入 0 分成绩
pub(super) async fn insert_zero_marks<C: ConnectionTrait>(
    conn: &C,
    pairs: impl IntoIterator<Item = (i64, i64)>,
) -> Result<()> {
    let now = chrono::Utc::now().timestamp();
    let models: Vec<ActiveModel> = pairs
        .into_iter()
        .map(|(student_id, subject_id)| ActiveModel {
            student_id: Set(student_id),
            subject_id: Set(subject_id),
            obtained: Set("0".to_string()),
            updated_at: Set(now),
            ..Default::default()
        })
        .collect();

    if models.is_empty() {
        return Ok(());
    }

    Marks::insert_many(models)
        .exec(conn)
        .await
        .map_err(db_err("初始化成绩失败"))?;

    Ok(())
}

impl SeaOrmStorage {
    /// 通过 ID 获取成绩
    pub async fn get_mark_impl(&self, id: i64) -> Result<Option<Mark>> {
        let result = Marks::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询成绩失败"))?;

        Ok(result.map(|m| m.into_mark()))
    }

    /// 写入成绩，学生和科目必须存在且属于同一班级
    pub async fn update_mark_impl(&self, req: UpdateMarkRequest) -> Result<Mark> {
        let obtained = normalize_obtained(&req.obtained)?;

        let txn = self.db.begin().await.map_err(db_err("开启事务失败"))?;

        let student = Students::find_by_id(req.student_id)
            .one(&txn)
            .await
            .map_err(db_err("查询学生失败"))?
            .ok_or_else(|| MarksheetError::not_found(format!("学生不存在: {}", req.student_id)))?;

        let subject = Subjects::find_by_id(req.subject_id)
            .one(&txn)
            .await
            .map_err(db_err("查询科目失败"))?
            .ok_or_else(|| MarksheetError::not_found(format!("科目不存在: {}", req.subject_id)))?;

        if student.class_id != subject.class_id {
            return Err(MarksheetError::validation(format!(
                "学生 {} 与科目 {} 不在同一班级",
                student.id, subject.id
            )));
        }

        let mark = upsert_mark(&txn, student.id, subject.id, obtained).await?;

        txn.commit().await.map_err(db_err("提交事务失败"))?;

        Ok(mark.into_mark())
    }

    /// 删除成绩
    pub async fn delete_mark_impl(&self, id: i64) -> Result<bool> {
        let result = Marks::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除成绩失败"))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_obtained() {
        assert_eq!(normalize_obtained(" 42.5 ").unwrap(), "42.5");
        assert_eq!(normalize_obtained("").unwrap(), "0");
        assert_eq!(normalize_obtained("0").unwrap(), "0");
        assert!(normalize_obtained("-1").is_err());
        assert!(normalize_obtained("abc").is_err());
        assert!(normalize_obtained("inf").is_err());
        assert!(normalize_obtained("NaN").is_err());
    }
}
