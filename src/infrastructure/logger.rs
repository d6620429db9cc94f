//! 日志基础设施

use std::io;

use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::LoggingConfig;

pub struct Logger;

impl Logger {
    /// 初始化日志系统
    ///
    /// 控制台输出始终开启；配置了 `log_dir` 时额外写入按日期分割的文件。
    /// `RUST_LOG` 优先于配置中的级别。返回的 guard 必须在进程结束前一直持有。
    pub fn init(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
        let filter = Self::filter(config)?;

        let (file_layer, guard) = match &config.log_dir {
            Some(log_dir) => {
                std::fs::create_dir_all(log_dir)?;
                let file_appender = rolling::daily(log_dir, &config.file_prefix);
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                let layer = fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_target(false);
                (Some(layer), Some(guard))
            }
            None => (None, None),
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(fmt::layer().with_writer(io::stdout).with_target(false))
            .try_init()?;

        Ok(guard)
    }

    fn filter(config: &LoggingConfig) -> anyhow::Result<EnvFilter> {
        Ok(EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_uses_configured_level() {
        std::env::remove_var("RUST_LOG");
        let config = LoggingConfig {
            level: "debug".to_string(),
            ..LoggingConfig::default()
        };
        let filter = Logger::filter(&config).unwrap();
        assert!(filter.to_string().contains("debug"));
    }

    #[test]
    fn test_init_with_log_dir_returns_guard() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            log_dir: Some(dir.path().join("logs")),
            ..LoggingConfig::default()
        };

        // 全局订阅者只能设置一次，这里只验证文件目录与 guard
        if let Ok(guard) = Logger::init(&config) {
            assert!(guard.is_some());
        }
        assert!(dir.path().join("logs").is_dir());
    }
}
