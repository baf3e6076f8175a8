use std::sync::Arc;

use crate::models::{
    admins::entities::Admin,
    classes::{
        entities::Class,
        requests::{CreateClassRequest, UpdateClassRequest},
    },
    marks::{
        entities::Mark,
        requests::{SaveMarkItem, UpdateMarkRequest},
    },
    sessions::{
        entities::Session,
        requests::{CreateSessionRequest, UpdateSessionRequest},
    },
    settings::entities::Setting,
    students::{
        entities::{Student, StudentWithMarks},
        requests::{CreateStudentRequest, UpdateStudentRequest},
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, UpdateSubjectRequest},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 管理员方法
    // 创建管理员（password_hash 为已哈希的 PHC 字符串）
    async fn create_admin(
        &self,
        email: &str,
        password_hash: &str,
        is_super_admin: bool,
    ) -> Result<Admin>;
    // 通过ID获取管理员
    async fn get_admin_by_id(&self, id: i64) -> Result<Option<Admin>>;
    // 通过邮箱获取管理员
    async fn get_admin_by_email(&self, email: &str) -> Result<Option<Admin>>;
    // 管理员总数
    async fn count_admins(&self) -> Result<u64>;
    // 更新最后登录时间
    async fn update_admin_last_login(&self, id: i64) -> Result<bool>;

    /// 学期方法
    async fn list_sessions(&self) -> Result<Vec<Session>>;
    async fn get_session(&self, id: i64) -> Result<Option<Session>>;
    async fn create_session(&self, req: CreateSessionRequest) -> Result<Session>;
    async fn update_session(
        &self,
        id: i64,
        update: UpdateSessionRequest,
    ) -> Result<Option<Session>>;
    // 级联删除学期下的班级、学生、科目和成绩
    async fn delete_session(&self, id: i64) -> Result<bool>;

    /// 班级方法
    async fn list_classes(&self, session_id: Option<i64>) -> Result<Vec<Class>>;
    async fn get_class(&self, id: i64) -> Result<Option<Class>>;
    async fn create_class(&self, req: CreateClassRequest) -> Result<Class>;
    async fn update_class(&self, id: i64, update: UpdateClassRequest) -> Result<Option<Class>>;
    async fn delete_class(&self, id: i64) -> Result<bool>;

    /// 学生方法
    // 学生带全部成绩，每条成绩带科目
    async fn list_students(&self, class_id: Option<i64>) -> Result<Vec<StudentWithMarks>>;
    async fn get_student(&self, id: i64) -> Result<Option<StudentWithMarks>>;
    // 新学生为班级内每个科目自动生成 0 分成绩
    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student>;
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    async fn delete_student(&self, id: i64) -> Result<bool>;
    // 成绩单批量保存，整批在一个事务内
    async fn save_student_marks(
        &self,
        student_id: i64,
        items: Vec<SaveMarkItem>,
    ) -> Result<Option<StudentWithMarks>>;

    /// 科目方法
    async fn list_subjects(&self, class_id: Option<i64>) -> Result<Vec<Subject>>;
    async fn get_subject(&self, id: i64) -> Result<Option<Subject>>;
    // 新科目为班级内每个学生自动生成 0 分成绩
    async fn create_subject(&self, req: CreateSubjectRequest) -> Result<Subject>;
    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>>;
    async fn delete_subject(&self, id: i64) -> Result<bool>;

    /// 成绩方法
    async fn get_mark(&self, id: i64) -> Result<Option<Mark>>;
    // 按 (学生, 科目) 写入成绩，存在则更新
    async fn update_mark(&self, req: UpdateMarkRequest) -> Result<Mark>;
    async fn delete_mark(&self, id: i64) -> Result<bool>;

    /// 键值设置方法
    async fn get_setting(&self, key: &str) -> Result<Option<String>>;
    async fn set_setting(&self, key: &str, value: &str) -> Result<Setting>;
    async fn list_settings(&self) -> Result<Vec<Setting>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
