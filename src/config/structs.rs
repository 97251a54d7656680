use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 环境变量前缀
pub const ENV_PREFIX: &str = "LINKDO";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// 包含：
/// - short_url: URL 短链服务的监听地址、存储文件、短链前缀
/// - todo: TODO 服务的监听地址、存储文件
/// - database: SQLite 连接参数
/// - logging: 日志配置
///
/// The loaded value is handed to the service being started; nothing reads
/// configuration from a process-wide global.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StaticConfig {
    #[serde(default)]
    pub short_url: ShortUrlConfig,
    #[serde(default)]
    pub todo: TodoConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config.toml > 默认值
    /// ENV 前缀：LINKDO，分隔符：__
    /// 示例：LINKDO__TODO__PORT=9000
    pub fn load(path: Option<&str>) -> Result<Self> {
        use config::{Config, Environment, File};

        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

        let settings = Config::builder()
            // 1. 从 TOML 文件加载（可选）
            .add_source(File::with_name(path).required(false))
            // 2. 从环境变量覆盖
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config = settings.try_deserialize::<StaticConfig>()?;
        if std::path::Path::new(path).exists() {
            eprintln!("[INFO] Configuration loaded from: {}", path);
        }
        Ok(config)
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> Result<String> {
        Ok(toml::to_string_pretty(&Self::default())?)
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// URL 短链服务配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShortUrlConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_short_url_port")]
    pub port: u16,
    #[serde(default = "default_short_url_database")]
    pub database_url: String,
    /// Prefix prepended to every generated short id.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_workers")]
    pub workers: usize,
}

/// TODO 服务配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TodoConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_todo_port")]
    pub port: u16,
    #[serde(default = "default_todo_database")]
    pub database_url: String,
    #[serde(default = "default_workers")]
    pub workers: usize,
}

/// 数据库连接配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatabaseConfig {
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
    #[serde(default = "default_busy_timeout_secs")]
    pub busy_timeout_secs: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_short_url_port() -> u16 {
    8001
}

fn default_todo_port() -> u16 {
    8000
}

fn default_short_url_database() -> String {
    "shorturl.db".to_string()
}

fn default_todo_database() -> String {
    "todo.db".to_string()
}

fn default_base_url() -> String {
    "http://localhost:8001/".to_string()
}

fn default_workers() -> usize {
    num_cpus::get().min(8)
}

fn default_pool_size() -> u32 {
    5
}

fn default_busy_timeout_secs() -> u64 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ShortUrlConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_short_url_port(),
            database_url: default_short_url_database(),
            base_url: default_base_url(),
            workers: default_workers(),
        }
    }
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_todo_port(),
            database_url: default_todo_database(),
            workers: default_workers(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            pool_size: default_pool_size(),
            busy_timeout_secs: default_busy_timeout_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}
