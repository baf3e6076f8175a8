//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod admins;
pub mod classes;
pub mod marks;
pub mod sessions;
pub mod settings;
pub mod students;
pub mod subjects;

use chrono::{DateTime, Utc};

/// 秒级时间戳转 UTC 时间，非法值退化为 Unix 纪元
pub(crate) fn timestamp_to_datetime(ts: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()
}
