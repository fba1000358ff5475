// ==========================================
// 医生排班预处理系统 - 领域类型定义
// ==========================================
// 职责: 员工标识、星期、偏好类别、偏好类别对、决策变量种类
// ==========================================

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 员工（医生）标识
pub type StaffId = i64;

/// 一周七天,按 num_days_from_monday 排列
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// 解析规范星期名称
///
/// 只接受 `Monday` ... `Sunday` 七个规范写法（区分大小写,不接受缩写）
pub fn parse_weekday_name(name: &str) -> Option<Weekday> {
    match name {
        "Monday" => Some(Weekday::Mon),
        "Tuesday" => Some(Weekday::Tue),
        "Wednesday" => Some(Weekday::Wed),
        "Thursday" => Some(Weekday::Thu),
        "Friday" => Some(Weekday::Fri),
        "Saturday" => Some(Weekday::Sat),
        "Sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// 星期的规范名称（日志与诊断输出用）
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

// ==========================================
// 偏好类别 (Preference Category)
// ==========================================
// 序列化格式: 与输入文件字段名一致 (wantedShifts 等)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreferenceCategory {
    #[serde(rename = "wantedShifts")]
    Wanted, // 希望值班
    #[serde(rename = "unwantedShifts")]
    Unwanted, // 不希望值班
    #[serde(rename = "mandatoryShifts")]
    Mandatory, // 必须值班
    #[serde(rename = "unavailableShifts")]
    Unavailable, // 无法值班
}

impl PreferenceCategory {
    /// 输入记录中的字段名
    pub fn key(&self) -> &'static str {
        match self {
            PreferenceCategory::Wanted => "wantedShifts",
            PreferenceCategory::Unwanted => "unwantedShifts",
            PreferenceCategory::Mandatory => "mandatoryShifts",
            PreferenceCategory::Unavailable => "unavailableShifts",
        }
    }
}

impl fmt::Display for PreferenceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

// ==========================================
// 偏好类别对 (Preference Pair)
// ==========================================
// 一对互斥的类别: primary 与 secondary
// 固定两组: 请求(软约束) / 要求(硬约束)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencePair {
    pub primary: PreferenceCategory,
    pub secondary: PreferenceCategory,
}

impl PreferencePair {
    /// 请求: wanted / unwanted
    pub const REQUESTS: PreferencePair = PreferencePair {
        primary: PreferenceCategory::Wanted,
        secondary: PreferenceCategory::Unwanted,
    };

    /// 要求: mandatory / unavailable
    pub const REQUIREMENTS: PreferencePair = PreferencePair {
        primary: PreferenceCategory::Mandatory,
        secondary: PreferenceCategory::Unavailable,
    };
}

impl fmt::Display for PreferencePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.primary, self.secondary)
    }
}

// ==========================================
// 决策变量种类 (Variable Kind)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariableKind {
    Shift,        // 值班
    Consultation, // 门诊
}

impl VariableKind {
    /// 变量名后缀
    pub fn suffix(&self) -> &'static str {
        match self {
            VariableKind::Shift => "s",
            VariableKind::Consultation => "c",
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableKind::Shift => write!(f, "SHIFT"),
            VariableKind::Consultation => write!(f, "CONSULTATION"),
        }
    }
}
