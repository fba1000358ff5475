// ==========================================
// 医生排班预处理系统 - 周期偏好领域模型
// ==========================================
// 职责: 班次配置原始记录 + 校验后的周期（按星期）偏好
// 红线: 星期名称在此边界完成校验,引擎层只接触 chrono::Weekday
// ==========================================

use crate::domain::types::{parse_weekday_name, PreferenceCategory, StaffId};
use crate::error::ConfigurationError;
use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// 班次配置中的一条星期条目: {"shift": "Monday"}
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayEntry {
    pub shift: String,
}

impl WeekdayEntry {
    pub fn new(shift: impl Into<String>) -> Self {
        Self {
            shift: shift.into(),
        }
    }
}

// ==========================================
// ShiftConfRecord - 班次配置原始记录
// ==========================================
// 输入文件 shiftConfs.json 中的一项,每位医生一条
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftConfRecord {
    pub doctor_id: StaffId,
    pub wanted_shifts: Vec<WeekdayEntry>,
    pub unwanted_shifts: Vec<WeekdayEntry>,
    pub mandatory_shifts: Vec<WeekdayEntry>,
    pub unavailable_shifts: Vec<WeekdayEntry>,
}

impl ShiftConfRecord {
    /// 空配置（四个类别均为空）
    pub fn empty(doctor_id: StaffId) -> Self {
        Self {
            doctor_id,
            wanted_shifts: Vec::new(),
            unwanted_shifts: Vec::new(),
            mandatory_shifts: Vec::new(),
            unavailable_shifts: Vec::new(),
        }
    }

    pub fn entries(&self, category: PreferenceCategory) -> &[WeekdayEntry] {
        match category {
            PreferenceCategory::Wanted => &self.wanted_shifts,
            PreferenceCategory::Unwanted => &self.unwanted_shifts,
            PreferenceCategory::Mandatory => &self.mandatory_shifts,
            PreferenceCategory::Unavailable => &self.unavailable_shifts,
        }
    }
}

// ==========================================
// RecurringPreference - 周期偏好
// ==========================================
// 每个类别下的星期列表,作用于当月该星期的每一天
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringPreference {
    pub staff_id: StaffId,
    pub wanted: Vec<Weekday>,
    pub unwanted: Vec<Weekday>,
    pub mandatory: Vec<Weekday>,
    pub unavailable: Vec<Weekday>,
}

impl RecurringPreference {
    pub fn new(staff_id: StaffId) -> Self {
        Self {
            staff_id,
            wanted: Vec::new(),
            unwanted: Vec::new(),
            mandatory: Vec::new(),
            unavailable: Vec::new(),
        }
    }

    /// 追加一个 (类别, 星期) 偏好
    pub fn with(mut self, category: PreferenceCategory, weekday: Weekday) -> Self {
        self.weekdays_mut(category).push(weekday);
        self
    }

    pub fn weekdays(&self, category: PreferenceCategory) -> &[Weekday] {
        match category {
            PreferenceCategory::Wanted => &self.wanted,
            PreferenceCategory::Unwanted => &self.unwanted,
            PreferenceCategory::Mandatory => &self.mandatory,
            PreferenceCategory::Unavailable => &self.unavailable,
        }
    }

    fn weekdays_mut(&mut self, category: PreferenceCategory) -> &mut Vec<Weekday> {
        match category {
            PreferenceCategory::Wanted => &mut self.wanted,
            PreferenceCategory::Unwanted => &mut self.unwanted,
            PreferenceCategory::Mandatory => &mut self.mandatory,
            PreferenceCategory::Unavailable => &mut self.unavailable,
        }
    }

    /// 从原始记录构建,校验所有星期名称
    ///
    /// # 错误
    /// - ConfigurationError::UnknownWeekday: 任一类别中出现非规范星期名称
    pub fn from_record(record: &ShiftConfRecord) -> Result<Self, ConfigurationError> {
        let mut preference = Self::new(record.doctor_id);

        for category in [
            PreferenceCategory::Wanted,
            PreferenceCategory::Unwanted,
            PreferenceCategory::Mandatory,
            PreferenceCategory::Unavailable,
        ] {
            for entry in record.entries(category) {
                let weekday = parse_weekday_name(&entry.shift).ok_or_else(|| {
                    ConfigurationError::UnknownWeekday {
                        staff_id: record.doctor_id,
                        category,
                        value: entry.shift.clone(),
                    }
                })?;
                preference.weekdays_mut(category).push(weekday);
            }
        }

        Ok(preference)
    }
}

impl TryFrom<&ShiftConfRecord> for RecurringPreference {
    type Error = ConfigurationError;

    fn try_from(record: &ShiftConfRecord) -> Result<Self, Self::Error> {
        Self::from_record(record)
    }
}
