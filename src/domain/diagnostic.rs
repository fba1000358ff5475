// ==========================================
// 医生排班预处理系统 - 偏好冲突诊断
// ==========================================
// 红线: 冲突只报告,不排除,不修改任何集合
// ==========================================

use crate::domain::types::{weekday_name, PreferenceCategory, StaffId};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// 冲突范围: 某个星期 (周期偏好) 或某一天 (日期覆写)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConflictScope {
    Weekday(Weekday),
    Day(u32),
}

impl fmt::Display for ConflictScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictScope::Weekday(weekday) => write!(f, "{}", weekday_name(*weekday)),
            ConflictScope::Day(day) => write!(f, "第 {} 天", day),
        }
    }
}

// ==========================================
// ConflictWarning - 偏好冲突
// ==========================================
// 同一范围内医生同时出现在一对类别的两侧
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictWarning {
    pub scope: ConflictScope,
    pub primary: PreferenceCategory,
    pub secondary: PreferenceCategory,
    pub staff_ids: BTreeSet<StaffId>,
}

impl fmt::Display for ConflictWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "医生 {:?} 在 {} 同时选择了 {} 和 {}",
            self.staff_ids, self.scope, self.primary, self.secondary
        )
    }
}
