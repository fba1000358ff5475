// ==========================================
// 医生排班预处理系统 - 配置层
// ==========================================
// 职责: 输入文件路径、日志级别、输出格式
// 存储: JSON 配置文件
// ==========================================

pub mod config_manager;

// 重导出核心配置管理器
pub use config_manager::{
    ConfigError, ConfigManager, ConfigSource, LogFormat, PrepConfig, CONFIG_DIR_NAME,
    CONFIG_FILE_NAME,
};
