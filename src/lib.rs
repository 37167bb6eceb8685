//! Assessment Engine - 教辅社区平台测评核心
//!
//! 测评生命周期与受众解析引擎，作为库被各请求处理端嵌入使用。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储接口与内存实现
//! - `utils`: 工具函数（判分、校验）

pub mod config;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
