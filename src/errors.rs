//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 存储层、服务层共用此错误类型，HTTP 层再映射为状态码。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_marksheet_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum MarksheetError {
            $($variant(String),)*
        }

        impl MarksheetError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(MarksheetError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(MarksheetError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(MarksheetError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl MarksheetError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        MarksheetError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_marksheet_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    FileOperation("E006", "File Operation Error"),
    Validation("E007", "Validation Error"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
    Conflict("E010", "Resource Conflict"),
    DateParse("E011", "Date Parse Error"),
    Authentication("E012", "Authentication Error"),
    Authorization("E013", "Authorization Error"),
}

impl MarksheetError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for MarksheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for MarksheetError {}

impl MarksheetError {
    /// 连接类错误视为暂时性故障，调用方可自行决定是否重试
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            MarksheetError::DatabaseConnection(_) | MarksheetError::CacheConnection(_)
        )
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for MarksheetError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err {
            sea_orm::DbErr::Conn(e) => MarksheetError::DatabaseConnection(e.to_string()),
            sea_orm::DbErr::ConnectionAcquire(e) => {
                MarksheetError::DatabaseConnection(e.to_string())
            }
            sea_orm::DbErr::RecordNotFound(msg) => MarksheetError::NotFound(msg),
            other => MarksheetError::DatabaseOperation(other.to_string()),
        }
    }
}

impl From<std::io::Error> for MarksheetError {
    fn from(err: std::io::Error) -> Self {
        MarksheetError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for MarksheetError {
    fn from(err: serde_json::Error) -> Self {
        MarksheetError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for MarksheetError {
    fn from(err: chrono::ParseError) -> Self {
        MarksheetError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MarksheetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(MarksheetError::cache_connection("test").code(), "E001");
        assert_eq!(MarksheetError::database_config("test").code(), "E003");
        assert_eq!(MarksheetError::validation("test").code(), "E007");
        assert_eq!(MarksheetError::authentication("test").code(), "E012");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            MarksheetError::cache_connection("test").error_type(),
            "Cache Connection Error"
        );
        assert_eq!(
            MarksheetError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = MarksheetError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_not_found_and_conflict_codes() {
        assert_eq!(MarksheetError::not_found("student 7").code(), "E008");
        assert_eq!(MarksheetError::conflict("email").code(), "E010");
        assert_eq!(
            MarksheetError::conflict("email").error_type(),
            "Resource Conflict"
        );
    }

    #[test]
    fn test_transient_errors() {
        assert!(MarksheetError::database_connection("pool timed out").is_transient());
        assert!(!MarksheetError::database_operation("syntax").is_transient());
        assert!(!MarksheetError::validation("bad").is_transient());
    }

    #[test]
    fn test_format_simple() {
        let err = MarksheetError::validation("Invalid URL");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid URL"));
    }
}
