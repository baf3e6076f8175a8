//! 学生存储操作

use std::collections::HashMap;

use super::{
    SeaOrmStorage, db_err,
    marks::{insert_zero_marks, normalize_obtained, upsert_mark},
    subjects::{insert_subject_with_marks, validate_max_marks},
};
use crate::entity::classes::Entity as Classes;
use crate::entity::marks::{Column as MarkColumn, Entity as Marks};
use crate::entity::students::{ActiveModel, Column, Entity as Students, Model as StudentModel};
use crate::entity::subjects::{
    ActiveModel as SubjectActiveModel, Column as SubjectColumn, Entity as Subjects,
    Model as SubjectModel,
};
use crate::errors::{MarksheetError, Result};
use crate::models::{
    marks::{entities::MarkWithSubject, requests::SaveMarkItem},
    students::{
        entities::{Student, StudentWithMarks},
        requests::{CreateStudentRequest, UpdateStudentRequest},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

/// 为学生附上成绩，每条成绩带科目，按科目 ID 排序
async fn attach_marks<C: ConnectionTrait>(
    conn: &C,
    students: Vec<StudentModel>,
) -> Result<Vec<StudentWithMarks>> {
    let student_ids: Vec<i64> = students.iter().map(|s| s.id).collect();
    if student_ids.is_empty() {
        return Ok(Vec::new());
    }

    let marks = Marks::find()
        .filter(MarkColumn::StudentId.is_in(student_ids))
        .order_by_asc(MarkColumn::SubjectId)
        .all(conn)
        .await
        .map_err(db_err("查询学生成绩失败"))?;

    let mut subject_ids: Vec<i64> = marks.iter().map(|m| m.subject_id).collect();
    subject_ids.sort_unstable();
    subject_ids.dedup();

    let subjects: HashMap<i64, SubjectModel> = if subject_ids.is_empty() {
        HashMap::new()
    } else {
        Subjects::find()
            .filter(SubjectColumn::Id.is_in(subject_ids))
            .all(conn)
            .await
            .map_err(db_err("查询成绩科目失败"))?
            .into_iter()
            .map(|s| (s.id, s))
            .collect()
    };

    let mut by_student: HashMap<i64, Vec<MarkWithSubject>> = HashMap::new();
    for mark in marks {
        if let Some(subject) = subjects.get(&mark.subject_id) {
            by_student
                .entry(mark.student_id)
                .or_default()
                .push(MarkWithSubject {
                    mark: mark.into_mark(),
                    subject: subject.clone().into_subject(),
                });
        }
    }

    Ok(students
        .into_iter()
        .map(|s| {
            let marks = by_student.remove(&s.id).unwrap_or_default();
            StudentWithMarks {
                student: s.into_student(),
                marks,
            }
        })
        .collect())
}

/// 批量保存时同步科目的满分和日期，rename 为 Some 时同时改名
///
/// date 为 None 时保留原日期
async fn sync_subject<C: ConnectionTrait>(
    conn: &C,
    subject: SubjectModel,
    rename: Option<&str>,
    max_marks: i32,
    date: Option<&str>,
) -> Result<SubjectModel> {
    let name_unchanged = rename.is_none_or(|name| subject.name == name);
    let date_unchanged = date.is_none_or(|d| subject.date.as_deref() == Some(d));
    if name_unchanged && subject.max_marks == max_marks && date_unchanged {
        return Ok(subject);
    }

    let mut model: SubjectActiveModel = subject.into();
    if let Some(name) = rename {
        model.name = Set(name.to_string());
    }
    model.max_marks = Set(max_marks);
    if let Some(date) = date {
        model.date = Set(Some(date.to_string()));
    }

    model.update(conn).await.map_err(db_err("更新科目失败"))
}

impl SeaOrmStorage {
    /// 列出学生（带成绩），可按班级筛选
    pub async fn list_students_impl(&self, class_id: Option<i64>) -> Result<Vec<StudentWithMarks>> {
        let mut select = Students::find();

        if let Some(class_id) = class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        let students = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询学生列表失败"))?;

        attach_marks(&self.db, students).await
    }

    /// 通过 ID 获取学生（带成绩）
    pub async fn get_student_impl(&self, id: i64) -> Result<Option<StudentWithMarks>> {
        let Some(student) = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询学生失败"))?
        else {
            return Ok(None);
        };

        Ok(attach_marks(&self.db, vec![student]).await?.pop())
    }

    /// 创建学生并为班级内每个科目补一条 0 分成绩
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let txn = self.db.begin().await.map_err(db_err("开启事务失败"))?;

        Classes::find_by_id(req.class_id)
            .one(&txn)
            .await
            .map_err(db_err("查询班级失败"))?
            .ok_or_else(|| MarksheetError::not_found(format!("班级不存在: {}", req.class_id)))?;

        let model = ActiveModel {
            class_id: Set(req.class_id),
            name: Set(req.name),
            roll_no: Set(req.roll_no),
            is_paid: Set(req.is_paid),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let student = model.insert(&txn).await.map_err(db_err("创建学生失败"))?;

        let subjects = Subjects::find()
            .filter(SubjectColumn::ClassId.eq(req.class_id))
            .all(&txn)
            .await
            .map_err(db_err("查询班级科目失败"))?;

        insert_zero_marks(&txn, subjects.iter().map(|s| (student.id, s.id))).await?;

        txn.commit().await.map_err(db_err("提交事务失败"))?;

        Ok(student.into_student())
    }

    /// 更新学生，不允许换班
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let Some(existing) = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询学生失败"))?
        else {
            return Ok(None);
        };

        if let Some(class_id) = update.class_id
            && class_id != existing.class_id
        {
            return Err(MarksheetError::validation("学生不能移动到其他班级"));
        }

        let mut model: ActiveModel = existing.clone().into();
        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(roll_no) = update.roll_no {
            model.roll_no = Set(roll_no);
        }
        if let Some(is_paid) = update.is_paid {
            model.is_paid = Set(is_paid);
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_student()));
        }

        let result = model.update(&self.db).await.map_err(db_err("更新学生失败"))?;

        Ok(Some(result.into_student()))
    }

    /// 删除学生及其全部成绩
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await.map_err(db_err("开启事务失败"))?;

        Marks::delete_many()
            .filter(MarkColumn::StudentId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err("删除学生成绩失败"))?;

        let result = Students::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err("删除学生失败"))?;

        txn.commit().await.map_err(db_err("提交事务失败"))?;

        Ok(result.rows_affected > 0)
    }

    /// 成绩单批量保存
    ///
    /// 每项先按 id 找到该学生已有的成绩，否则按科目名（忽略大小写）在班级内匹配，
    /// 仍找不到则新建科目。科目名为空的项跳过，未出现在请求中的成绩保持不变。
    /// 任何一项失败则整批回滚。
    pub async fn save_student_marks_impl(
        &self,
        student_id: i64,
        items: Vec<SaveMarkItem>,
    ) -> Result<Option<StudentWithMarks>> {
        let txn = self.db.begin().await.map_err(db_err("开启事务失败"))?;

        let Some(student) = Students::find_by_id(student_id)
            .one(&txn)
            .await
            .map_err(db_err("查询学生失败"))?
        else {
            return Ok(None);
        };

        let mut class_subjects = Subjects::find()
            .filter(SubjectColumn::ClassId.eq(student.class_id))
            .order_by_asc(SubjectColumn::Id)
            .all(&txn)
            .await
            .map_err(db_err("查询班级科目失败"))?;

        for item in items {
            let name = item.subject.trim();
            if name.is_empty() {
                continue;
            }

            let max_marks = validate_max_marks(item.max)?;
            let obtained = normalize_obtained(&item.obtained)?;
            let date = item
                .date
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string);

            let existing_subject = match item.id {
                Some(mark_id) => {
                    let mark = Marks::find_by_id(mark_id)
                        .one(&txn)
                        .await
                        .map_err(db_err("查询成绩失败"))?
                        .filter(|m| m.student_id == student.id)
                        .ok_or_else(|| {
                            MarksheetError::not_found(format!("该学生没有成绩: {mark_id}"))
                        })?;

                    let subject = class_subjects
                        .iter()
                        .position(|s| s.id == mark.subject_id)
                        .ok_or_else(|| {
                            MarksheetError::not_found(format!("科目不存在: {}", mark.subject_id))
                        })?;
                    Some((subject, Some(name)))
                }
                None => {
                    let lowered = name.to_lowercase();
                    class_subjects
                        .iter()
                        .position(|s| s.name.trim().to_lowercase() == lowered)
                        .map(|index| (index, None))
                }
            };

            let subject_id = match existing_subject {
                Some((index, rename)) => {
                    let synced = sync_subject(
                        &txn,
                        class_subjects[index].clone(),
                        rename,
                        max_marks,
                        date.as_deref(),
                    )
                    .await?;
                    let id = synced.id;
                    class_subjects[index] = synced;
                    id
                }
                None => {
                    let created = insert_subject_with_marks(
                        &txn,
                        student.class_id,
                        name.to_string(),
                        max_marks,
                        date,
                    )
                    .await?;
                    let id = created.id;
                    class_subjects.push(created);
                    id
                }
            };

            upsert_mark(&txn, student.id, subject_id, obtained).await?;
        }

        let saved = attach_marks(&txn, vec![student]).await?.pop();

        txn.commit().await.map_err(db_err("提交事务失败"))?;

        Ok(saved)
    }
}
