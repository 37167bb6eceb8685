use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub storage: StorageConfig,
    pub reminders: ReminderConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(rename = "type")]
    pub storage_type: String, // 存储后端（当前内置 memory，外部实现自行接入）
    pub max_page_size: i64, // 列表查询单页上限
}

/// 提醒配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderConfig {
    pub lead_days: i64, // 未开始测评进入提醒范围的提前天数
}
