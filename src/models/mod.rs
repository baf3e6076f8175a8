pub mod admins;
pub mod auth;
pub mod classes;
pub mod common;
pub mod marks;
pub mod marksheet;
pub mod sessions;
pub mod settings;
pub mod students;
pub mod subjects;

pub use common::{ApiResponse, ErrorCode};

/// 程序启动时间，用于启动耗时统计
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
