//! 配置基础设施
//!
//! 配置从 TOML 文件加载，所有字段都有默认值，缺失的段落或键使用默认配置。

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::product::service::IdPolicy;

/// 未显式指定路径时依次查找的配置文件
pub const CONFIG_PATHS: [&str; 2] = ["config.toml", "./config/config.toml"];

/// 服务配置
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub server: ServerConfig,
    /// 静态文件配置
    pub static_files: StaticFilesConfig,
    /// 产品存储配置
    pub store: StoreConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 绑定地址
    pub bind_address: String,
    /// 监听端口
    pub port: u16,
    /// 应用名称，仅在启动时输出
    pub app_name: String,
}

/// 静态文件配置
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// 挂载路径前缀
    pub mount_path: String,
    /// 文件目录
    pub directory: PathBuf,
}

/// 产品存储配置
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// 新产品 id 的分配策略 (count, monotonic)
    pub id_policy: IdPolicy,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
    /// 日志文件目录，未设置时只输出到控制台
    pub log_dir: Option<PathBuf>,
    /// 日志文件名前缀
    pub file_prefix: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 3000,
            app_name: "express course".to_string(),
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            mount_path: "/public".to_string(),
            directory: PathBuf::from("./public"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
            file_prefix: "product-store".to_string(),
        }
    }
}

/// 配置来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Default,
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        if self.server.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }

        let mount = &self.static_files.mount_path;
        if !mount.starts_with('/') || mount == "/" {
            return Err(ConfigError::Validation(format!(
                "无效的静态文件挂载路径: {}",
                mount
            )));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }

    /// 监听地址
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("文件写入错误: {0}")]
    FileWrite(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 加载并验证配置
///
/// 显式路径优先，其次是 [`CONFIG_PATHS`]，都不存在时使用默认配置。
pub fn load_config(explicit: Option<&Path>) -> Result<(Config, ConfigSource), ConfigError> {
    let (config, source) = match explicit {
        Some(path) => (Config::load_from_file(path)?, ConfigSource::File(path.to_path_buf())),
        None => match CONFIG_PATHS.iter().map(Path::new).find(|p| p.exists()) {
            Some(path) => (Config::load_from_file(path)?, ConfigSource::File(path.to_path_buf())),
            None => (Config::default(), ConfigSource::Default),
        },
    };

    config.validate()?;
    Ok((config, source))
}
