//! 嵌入宿主的启动准备
//!
//! 本引擎作为库运行，宿主进程在启动时调用这里完成日志与存储的
//! 初始化，再把 StartupContext 交给各请求处理端。

use std::sync::Arc;

use tracing::warn;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::storage::Storage;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 初始化日志
///
/// 开发环境输出彩色文本并附带文件/行号，生产环境输出 JSON。
/// 返回的 guard 需由宿主持有至进程退出，否则缓冲日志会丢失。
pub fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let config = AppConfig::get();

    let stdout_log = std::io::stdout();
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    guard
}

/// 准备引擎启动上下文
pub fn prepare_engine_startup() -> Result<StartupContext> {
    let storage = crate::storage::create_storage()?;
    warn!("Storage backend initialized");

    Ok(StartupContext { storage })
}
