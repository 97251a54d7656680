use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkdoError {
    NotFound(String),
    Conflict(String),
    Validation(String),
    Config(String),
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    FileOperation(String),
    Serialization(String),
}

impl LinkdoError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LinkdoError::NotFound(_) => "E001",
            LinkdoError::Conflict(_) => "E002",
            LinkdoError::Validation(_) => "E003",
            LinkdoError::Config(_) => "E004",
            LinkdoError::DatabaseConfig(_) => "E005",
            LinkdoError::DatabaseConnection(_) => "E006",
            LinkdoError::DatabaseOperation(_) => "E007",
            LinkdoError::FileOperation(_) => "E008",
            LinkdoError::Serialization(_) => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LinkdoError::NotFound(_) => "Resource Not Found",
            LinkdoError::Conflict(_) => "Conflict",
            LinkdoError::Validation(_) => "Validation Error",
            LinkdoError::Config(_) => "Configuration Error",
            LinkdoError::DatabaseConfig(_) => "Database Configuration Error",
            LinkdoError::DatabaseConnection(_) => "Database Connection Error",
            LinkdoError::DatabaseOperation(_) => "Database Operation Error",
            LinkdoError::FileOperation(_) => "File Operation Error",
            LinkdoError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            LinkdoError::NotFound(msg)
            | LinkdoError::Conflict(msg)
            | LinkdoError::Validation(msg)
            | LinkdoError::Config(msg)
            | LinkdoError::DatabaseConfig(msg)
            | LinkdoError::DatabaseConnection(msg)
            | LinkdoError::DatabaseOperation(msg)
            | LinkdoError::FileOperation(msg)
            | LinkdoError::Serialization(msg) => msg,
        }
    }

    /// HTTP 状态码映射表
    ///
    /// A duplicate short id is reported as `400 Bad Request`, which is what
    /// existing clients of the shortener expect.
    pub fn http_status(&self) -> StatusCode {
        match self {
            LinkdoError::NotFound(_) => StatusCode::NOT_FOUND,
            LinkdoError::Conflict(_) => StatusCode::BAD_REQUEST,
            LinkdoError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            LinkdoError::Config(_)
            | LinkdoError::DatabaseConfig(_)
            | LinkdoError::DatabaseConnection(_)
            | LinkdoError::DatabaseOperation(_)
            | LinkdoError::FileOperation(_)
            | LinkdoError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the error is caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        self.http_status().is_client_error()
    }

    /// 格式化为彩色输出（用于启动失败时打印到终端）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LinkdoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LinkdoError {}

// 便捷的构造函数
impl LinkdoError {
    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        LinkdoError::NotFound(msg.into())
    }

    pub fn conflict<T: Into<String>>(msg: T) -> Self {
        LinkdoError::Conflict(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LinkdoError::Validation(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        LinkdoError::Config(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        LinkdoError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        LinkdoError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        LinkdoError::DatabaseOperation(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        LinkdoError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LinkdoError::Serialization(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for LinkdoError {
    fn from(err: sea_orm::DbErr) -> Self {
        LinkdoError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for LinkdoError {
    fn from(err: std::io::Error) -> Self {
        LinkdoError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for LinkdoError {
    fn from(err: serde_json::Error) -> Self {
        LinkdoError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for LinkdoError {
    fn from(err: config::ConfigError) -> Self {
        LinkdoError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for LinkdoError {
    fn from(err: toml::ser::Error) -> Self {
        LinkdoError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkdoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_translation_table() {
        assert_eq!(
            LinkdoError::not_found("x").http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            LinkdoError::conflict("x").http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            LinkdoError::validation("x").http_status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            LinkdoError::database_operation("x").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_error_classification() {
        assert!(LinkdoError::not_found("gone").is_client_error());
        assert!(LinkdoError::conflict("dup").is_client_error());
        assert!(!LinkdoError::database_connection("down").is_client_error());
        assert!(!LinkdoError::config("bad").is_client_error());
    }

    #[test]
    fn test_message_and_display() {
        let err = LinkdoError::not_found("URL not found.");
        assert_eq!(err.message(), "URL not found.");
        assert_eq!(err.to_string(), "Resource Not Found: URL not found.");
        assert_eq!(err.code(), "E001");
    }

    #[test]
    fn test_from_db_err() {
        let err: LinkdoError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert!(matches!(err, LinkdoError::DatabaseOperation(_)));
        assert!(err.message().contains("boom"));
    }
}
