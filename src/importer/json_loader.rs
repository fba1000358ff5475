// ==========================================
// 医生排班预处理系统 - JSON 文件加载器
// ==========================================
// 职责: 从 doctors.json / shiftConfs.json / calendar.json 读取原始记录
// 红线: 字段缺失或类型错误在边界处转换为 ConfigurationError
// ==========================================

use crate::config::PrepConfig;
use crate::domain::calendar::CalendarRecord;
use crate::domain::preference::ShiftConfRecord;
use crate::domain::staff::StaffMember;
use crate::error::ConfigurationError;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::input_loader_trait::InputLoader;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

// ==========================================
// JsonFileLoader
// ==========================================
#[derive(Debug, Clone)]
pub struct JsonFileLoader {
    doctors_file: PathBuf,
    shift_confs_file: PathBuf,
    calendar_file: PathBuf,
}

impl JsonFileLoader {
    pub fn new(
        doctors_file: impl Into<PathBuf>,
        shift_confs_file: impl Into<PathBuf>,
        calendar_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            doctors_file: doctors_file.into(),
            shift_confs_file: shift_confs_file.into(),
            calendar_file: calendar_file.into(),
        }
    }

    pub fn from_config(config: &PrepConfig) -> Self {
        Self::new(
            &config.doctors_file,
            &config.shift_confs_file,
            &config.calendar_file,
        )
    }
}

/// 读取并解析一个 JSON 文件
fn read_json<T: DeserializeOwned>(path: &Path) -> ImportResult<T> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }

    let raw = fs::read_to_string(path)?;
    let value: T = serde_json::from_str(&raw).map_err(|e| ConfigurationError::MalformedRecord {
        source_name: path.display().to_string(),
        message: e.to_string(),
    })?;

    tracing::debug!("已读取 {}", path.display());
    Ok(value)
}

impl InputLoader for JsonFileLoader {
    fn load_staff(&self) -> ImportResult<Vec<StaffMember>> {
        read_json(&self.doctors_file)
    }

    fn load_shift_confs(&self) -> ImportResult<Vec<ShiftConfRecord>> {
        read_json(&self.shift_confs_file)
    }

    fn load_calendar(&self) -> ImportResult<CalendarRecord> {
        read_json(&self.calendar_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let loader = JsonFileLoader::new(
            dir.path().join("doctors.json"),
            dir.path().join("shiftConfs.json"),
            dir.path().join("calendar.json"),
        );
        assert!(matches!(
            loader.load_staff(),
            Err(ImportError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_missing_field_is_malformed_record() {
        let dir = TempDir::new().unwrap();
        let doctors = dir.path().join("doctors.json");
        fs::write(&doctors, r#"[{"id": 1}]"#).unwrap();

        let loader = JsonFileLoader::new(
            &doctors,
            dir.path().join("shiftConfs.json"),
            dir.path().join("calendar.json"),
        );

        match loader.load_staff() {
            Err(ImportError::Configuration(ConfigurationError::MalformedRecord {
                source_name,
                message,
            })) => {
                assert!(source_name.ends_with("doctors.json"));
                assert!(message.contains("doesConsultations"));
            }
            other => panic!("期望 MalformedRecord, 实际: {:?}", other),
        }
    }

    #[test]
    fn test_load_staff() {
        let dir = TempDir::new().unwrap();
        let doctors = dir.path().join("doctors.json");
        fs::write(
            &doctors,
            r#"[{"id": 1, "doesConsultations": false}, {"id": 3, "doesConsultations": true}]"#,
        )
        .unwrap();

        let loader = JsonFileLoader::new(&doctors, "unused", "unused");
        let staff = loader.load_staff().unwrap();

        assert_eq!(staff, vec![StaffMember::new(1, false), StaffMember::new(3, true)]);
    }
}
