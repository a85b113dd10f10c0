//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

use sea_orm::{DbErr, SqlErr};

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_school_admin_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SchoolAdminError {
            $($variant(String),)*
        }

        impl SchoolAdminError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SchoolAdminError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SchoolAdminError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SchoolAdminError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SchoolAdminError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SchoolAdminError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_school_admin_errors! {
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

impl SchoolAdminError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 将数据库错误按约束类型归类
    ///
    /// - 唯一约束冲突 -> `Conflict`
    /// - 外键约束冲突 -> `Validation`（引用的记录不存在或仍被引用）
    /// - 记录不存在 -> `NotFound`
    /// - 其他 -> `DatabaseOperation`
    pub fn from_db(context: &str, err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                SchoolAdminError::conflict(format!("{context}: already exists ({detail})"))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                SchoolAdminError::validation(format!(
                    "{context}: referenced record does not exist or is still in use ({detail})"
                ))
            }
            _ => match err {
                DbErr::RecordNotFound(msg) => {
                    SchoolAdminError::not_found(format!("{context}: {msg}"))
                }
                DbErr::RecordNotUpdated => {
                    SchoolAdminError::not_found(format!("{context}: record not found"))
                }
                other => SchoolAdminError::database_operation(format!("{context}: {other}")),
            },
        }
    }
}

/// 生成带上下文的数据库错误映射闭包，配合 `map_err` 使用
pub fn db_err(context: &'static str) -> impl FnOnce(DbErr) -> SchoolAdminError {
    move |err| SchoolAdminError::from_db(context, err)
}

impl fmt::Display for SchoolAdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SchoolAdminError {}

// 为常见的错误类型实现 From trait
impl From<DbErr> for SchoolAdminError {
    fn from(err: DbErr) -> Self {
        SchoolAdminError::from_db("database operation failed", err)
    }
}

impl From<std::io::Error> for SchoolAdminError {
    fn from(err: std::io::Error) -> Self {
        SchoolAdminError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SchoolAdminError {
    fn from(err: serde_json::Error) -> Self {
        SchoolAdminError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for SchoolAdminError {
    fn from(err: chrono::ParseError) -> Self {
        SchoolAdminError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SchoolAdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SchoolAdminError::cache_connection("test").code(), "E001");
        assert_eq!(SchoolAdminError::database_config("test").code(), "E003");
        assert_eq!(SchoolAdminError::validation("test").code(), "E007");
        assert_eq!(SchoolAdminError::conflict("test").code(), "E010");
        assert_eq!(SchoolAdminError::authorization("test").code(), "E013");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SchoolAdminError::not_found("test").error_type(),
            "Resource Not Found"
        );
        assert_eq!(
            SchoolAdminError::conflict("test").error_type(),
            "Resource Conflict"
        );
    }

    #[test]
    fn test_format_simple() {
        let err = SchoolAdminError::validation("start_time must be HH:MM");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("start_time must be HH:MM"));
    }

    #[test]
    fn test_record_not_updated_maps_to_not_found() {
        let err = SchoolAdminError::from_db("update roster", DbErr::RecordNotUpdated);
        assert!(matches!(err, SchoolAdminError::NotFound(_)));
        assert!(err.message().starts_with("update roster"));
    }

    #[test]
    fn test_generic_db_error_maps_to_operation() {
        let err = SchoolAdminError::from_db("list", DbErr::Custom("boom".into()));
        assert!(matches!(err, SchoolAdminError::DatabaseOperation(_)));
    }
}
