// ==========================================
// 医生排班预处理系统 - 配置管理器
// ==========================================
// 职责: 配置加载、默认值、相对路径解析
// 存储: JSON 配置文件 (camelCase 字段)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "config.json";

/// 默认配置目录名 (位于系统配置目录下)
pub const CONFIG_DIR_NAME: &str = "shift-prep";

/// 配置加载错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("配置文件格式错误 ({path}): {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// 配置来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults(PathBuf), // 配置文件不存在时记录被查找的路径
}

// ==========================================
// PrepConfig - 预处理配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrepConfig {
    /// 医生列表文件
    pub doctors_file: PathBuf,

    /// 班次配置文件
    pub shift_confs_file: PathBuf,

    /// 日历文件
    pub calendar_file: PathBuf,

    /// 日志过滤器 (EnvFilter 语法); 设置了 RUST_LOG 时以环境变量为准
    pub log_filter: String,

    /// 日志格式: text / json
    pub log_format: LogFormat,

    /// 输出 JSON 是否格式化
    pub pretty_print: bool,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            doctors_file: PathBuf::from("tmp/doctors.json"),
            shift_confs_file: PathBuf::from("tmp/shiftConfs.json"),
            calendar_file: PathBuf::from("tmp/calendar.json"),
            log_filter: "info".to_string(),
            log_format: LogFormat::Text,
            pretty_print: true,
        }
    }
}

impl PrepConfig {
    /// 把相对路径解析到 base_dir 下
    pub fn resolve_paths(mut self, base_dir: &Path) -> Self {
        for path in [
            &mut self.doctors_file,
            &mut self.shift_confs_file,
            &mut self.calendar_file,
        ] {
            if path.is_relative() {
                *path = base_dir.join(&*path);
            }
        }
        self
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager;

impl ConfigManager {
    /// 默认配置文件路径: <系统配置目录>/shift-prep/config.json
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// 加载配置文件
    ///
    /// # 规则
    /// - 文件不存在 -> 默认配置
    /// - 文件存在 -> 解析 JSON,缺失字段取默认值
    /// - 两种情况下相对路径都解析到配置文件所在目录
    pub fn load(path: &Path) -> Result<PrepConfig, ConfigError> {
        Self::load_with_source(path).map(|(config, _)| config)
    }

    /// 加载配置文件并返回来源
    ///
    /// 不写日志: 调用方在日志系统初始化之后再报告来源
    pub fn load_with_source(path: &Path) -> Result<(PrepConfig, ConfigSource), ConfigError> {
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));

        if !path.exists() {
            let config = PrepConfig::default().resolve_paths(base_dir);
            return Ok((config, ConfigSource::Defaults(path.to_path_buf())));
        }

        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: PrepConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Ok((
            config.resolve_paths(base_dir),
            ConfigSource::File(path.to_path_buf()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults_next_to_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");

        let (config, source) = ConfigManager::load_with_source(&path).unwrap();

        assert_eq!(source, ConfigSource::Defaults(path));
        assert_eq!(config.doctors_file, dir.path().join("tmp/doctors.json"));
        assert_eq!(config.shift_confs_file, dir.path().join("tmp/shiftConfs.json"));
        assert_eq!(config.calendar_file, dir.path().join("tmp/calendar.json"));
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.log_format, LogFormat::Text);
        assert!(config.pretty_print);
    }

    #[test]
    fn test_existing_file_reports_file_source() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{"logFormat": "json"}"#).unwrap();

        let (config, source) = ConfigManager::load_with_source(&path).unwrap();

        assert_eq!(source, ConfigSource::File(path));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_log_format_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{"logFormat": "xml"}"#).unwrap();
        assert!(matches!(
            ConfigManager::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_partial_file_fills_defaults_and_resolves_paths() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, r#"{{"calendarFile": "input/cal.json", "prettyPrint": false}}"#).unwrap();

        let config = ConfigManager::load(&path).unwrap();

        assert_eq!(config.calendar_file, dir.path().join("input/cal.json"));
        assert_eq!(config.doctors_file, dir.path().join("tmp/doctors.json"));
        assert_eq!(config.log_filter, "info");
        assert!(!config.pretty_print);
    }

    #[test]
    fn test_invalid_json_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            ConfigManager::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_default_config_path_file_name() {
        let path = ConfigManager::default_config_path();
        assert!(path.ends_with(Path::new(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)));
    }
}
