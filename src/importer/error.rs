// ==========================================
// 医生排班预处理系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::error::{CalendarMismatchError, ConfigurationError, PrepError};
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    // ===== 记录校验错误 =====
    // JSON 解析失败、星期名称非法、医生 id 重复都归入此处
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    CalendarMismatch(#[from] CalendarMismatchError),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 展开 PrepError, 每类错误只有一个变体
impl From<PrepError> for ImportError {
    fn from(err: PrepError) -> Self {
        match err {
            PrepError::Configuration(e) => ImportError::Configuration(e),
            PrepError::CalendarMismatch(e) => ImportError::CalendarMismatch(e),
        }
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prep_error_flattens_into_single_variant() {
        let err: ImportError =
            PrepError::Configuration(ConfigurationError::DuplicateStaff(3)).into();
        assert!(matches!(
            err,
            ImportError::Configuration(ConfigurationError::DuplicateStaff(3))
        ));

        let err: ImportError =
            PrepError::CalendarMismatch(CalendarMismatchError::InvalidMonth { year: 2024, month: 13 })
                .into();
        assert!(matches!(
            err,
            ImportError::CalendarMismatch(CalendarMismatchError::InvalidMonth { month: 13, .. })
        ));
    }
}
