//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。
//! 多步写操作（级联删除、自动补零成绩、批量保存）都在单个事务内完成。

mod admins;
mod classes;
mod marks;
mod sessions;
mod settings;
mod students;
mod subjects;

#[cfg(test)]
mod tests;

use crate::config::AppConfig;
use crate::errors::{MarksheetError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

/// 给数据库错误附加上下文；连接类错误保持为连接错误，便于区分暂时性故障
pub(crate) fn db_err(context: &'static str) -> impl FnOnce(DbErr) -> MarksheetError {
    move |e| match e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
            MarksheetError::database_connection(format!("{context}: {e}"))
        }
        _ => MarksheetError::database_operation(format!("{context}: {e}")),
    }
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        let storage = Self::from_connection(db).await?;
        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(storage)
    }

    /// 基于已有连接创建存储并运行迁移
    pub async fn from_connection(db: DatabaseConnection) -> Result<Self> {
        Migrator::up(&db, None)
            .await
            .map_err(|e| MarksheetError::database_operation(format!("数据库迁移失败: {e}")))?;

        Ok(Self { db })
    }

    /// 内存 SQLite，单连接保证所有查询看到同一个库
    pub async fn in_memory() -> Result<Self> {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let db = Database::connect(opt)
            .await
            .map_err(|e| MarksheetError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Self::from_connection(db).await
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| MarksheetError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-16000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| MarksheetError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| MarksheetError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(MarksheetError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 管理员模块
    async fn create_admin(
        &self,
        email: &str,
        password_hash: &str,
        is_super_admin: bool,
    ) -> Result<Admin> {
        self.create_admin_impl(email, password_hash, is_super_admin)
            .await
    }

    async fn get_admin_by_id(&self, id: i64) -> Result<Option<Admin>> {
        self.get_admin_by_id_impl(id).await
    }

    async fn get_admin_by_email(&self, email: &str) -> Result<Option<Admin>> {
        self.get_admin_by_email_impl(email).await
    }

    async fn count_admins(&self) -> Result<u64> {
        self.count_admins_impl().await
    }

    async fn update_admin_last_login(&self, id: i64) -> Result<bool> {
        self.update_admin_last_login_impl(id).await
    }

    // 学期模块
    async fn list_sessions(&self) -> Result<Vec<Session>> {
        self.list_sessions_impl().await
    }

    async fn get_session(&self, id: i64) -> Result<Option<Session>> {
        self.get_session_impl(id).await
    }

    async fn create_session(&self, req: CreateSessionRequest) -> Result<Session> {
        self.create_session_impl(req).await
    }

    async fn update_session(
        &self,
        id: i64,
        update: UpdateSessionRequest,
    ) -> Result<Option<Session>> {
        self.update_session_impl(id, update).await
    }

    async fn delete_session(&self, id: i64) -> Result<bool> {
        self.delete_session_impl(id).await
    }

    // 班级模块
    async fn list_classes(&self, session_id: Option<i64>) -> Result<Vec<Class>> {
        self.list_classes_impl(session_id).await
    }

    async fn get_class(&self, id: i64) -> Result<Option<Class>> {
        self.get_class_impl(id).await
    }

    async fn create_class(&self, req: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(req).await
    }

    async fn update_class(&self, id: i64, update: UpdateClassRequest) -> Result<Option<Class>> {
        self.update_class_impl(id, update).await
    }

    async fn delete_class(&self, id: i64) -> Result<bool> {
        self.delete_class_impl(id).await
    }

    // 学生模块
    async fn list_students(&self, class_id: Option<i64>) -> Result<Vec<StudentWithMarks>> {
        self.list_students_impl(class_id).await
    }

    async fn get_student(&self, id: i64) -> Result<Option<StudentWithMarks>> {
        self.get_student_impl(id).await
    }

    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(req).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    async fn save_student_marks(
        &self,
        student_id: i64,
        items: Vec<SaveMarkItem>,
    ) -> Result<Option<StudentWithMarks>> {
        self.save_student_marks_impl(student_id, items).await
    }

    // 科目模块
    async fn list_subjects(&self, class_id: Option<i64>) -> Result<Vec<Subject>> {
        self.list_subjects_impl(class_id).await
    }

    async fn get_subject(&self, id: i64) -> Result<Option<Subject>> {
        self.get_subject_impl(id).await
    }

    async fn create_subject(&self, req: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(req).await
    }

    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(id, update).await
    }

    async fn delete_subject(&self, id: i64) -> Result<bool> {
        self.delete_subject_impl(id).await
    }

    // 成绩模块
    async fn get_mark(&self, id: i64) -> Result<Option<Mark>> {
        self.get_mark_impl(id).await
    }

    async fn update_mark(&self, req: UpdateMarkRequest) -> Result<Mark> {
        self.update_mark_impl(req).await
    }

    async fn delete_mark(&self, id: i64) -> Result<bool> {
        self.delete_mark_impl(id).await
    }

    // 设置模块
    async fn get_setting(&self, key: &str) -> Result<Option<String>> {
        self.get_setting_impl(key).await
    }

    async fn set_setting(&self, key: &str, value: &str) -> Result<Setting> {
        self.set_setting_impl(key, value).await
    }

    async fn list_settings(&self) -> Result<Vec<Setting>> {
        self.list_settings_impl().await
    }
}
