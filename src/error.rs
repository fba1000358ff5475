// ==========================================
// 医生排班预处理系统 - 核心错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 配置错误与日历错误均为致命错误,不产生部分输出
//       偏好冲突只是诊断 (见 domain::diagnostic),不走错误通道
// ==========================================

use crate::domain::types::{PreferenceCategory, StaffId};
use thiserror::Error;

/// 配置错误（输入记录不合法）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("未知的星期名称 (医生 {staff_id}, 字段 {category}): {value}")]
    UnknownWeekday {
        staff_id: StaffId,
        category: PreferenceCategory,
        value: String,
    },

    #[error("医生 id 重复: {0}")]
    DuplicateStaff(StaffId),

    #[error("输入记录格式错误 ({source_name}): {message}")]
    MalformedRecord {
        source_name: String,
        message: String,
    },
}

/// 日历形状错误（日配置与月份天数不一致）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarMismatchError {
    #[error("无效的年月: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("{year}-{month} 应有 {expected} 天, 但提供了 {actual} 条日配置")]
    DayCountMismatch {
        year: i32,
        month: u32,
        expected: usize,
        actual: usize,
    },

    #[error("日配置缺少第 {expected} 天 (该位置为第 {found} 天)")]
    MissingDay { expected: u32, found: u32 },
}

/// 预处理错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrepError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    CalendarMismatch(#[from] CalendarMismatchError),
}

/// Result 类型别名
pub type PrepResult<T> = Result<T, PrepError>;
