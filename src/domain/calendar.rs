// ==========================================
// 医生排班预处理系统 - 日历领域模型
// ==========================================
// 职责: 日历原始记录、日配置（按日期覆写）、月份日期序列
// ==========================================

use crate::domain::types::{PreferenceCategory, StaffId};
use crate::error::CalendarMismatchError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// 日配置中对医生的引用: {"id": 1}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRef {
    pub id: StaffId,
}

// ==========================================
// DayConfiguration - 日配置
// ==========================================
// 每个日历日一条; 四个类别列表为该日的日期级覆写
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayConfiguration {
    pub day: u32, // 从 1 开始
    pub is_working_day: bool,
    pub wanted_shifts: Vec<StaffRef>,
    pub unwanted_shifts: Vec<StaffRef>,
    pub mandatory_shifts: Vec<StaffRef>,
    pub unavailable_shifts: Vec<StaffRef>,
}

impl DayConfiguration {
    /// 无覆写的日配置
    pub fn new(day: u32, is_working_day: bool) -> Self {
        Self {
            day,
            is_working_day,
            wanted_shifts: Vec::new(),
            unwanted_shifts: Vec::new(),
            mandatory_shifts: Vec::new(),
            unavailable_shifts: Vec::new(),
        }
    }

    /// 追加一条日期级覆写
    pub fn with_override(mut self, category: PreferenceCategory, staff_id: StaffId) -> Self {
        let list = match category {
            PreferenceCategory::Wanted => &mut self.wanted_shifts,
            PreferenceCategory::Unwanted => &mut self.unwanted_shifts,
            PreferenceCategory::Mandatory => &mut self.mandatory_shifts,
            PreferenceCategory::Unavailable => &mut self.unavailable_shifts,
        };
        list.push(StaffRef { id: staff_id });
        self
    }

    pub fn overrides(&self, category: PreferenceCategory) -> &[StaffRef] {
        match category {
            PreferenceCategory::Wanted => &self.wanted_shifts,
            PreferenceCategory::Unwanted => &self.unwanted_shifts,
            PreferenceCategory::Mandatory => &self.mandatory_shifts,
            PreferenceCategory::Unavailable => &self.unavailable_shifts,
        }
    }
}

// ==========================================
// CalendarRecord - 日历原始记录
// ==========================================
// 输入文件 calendar.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarRecord {
    pub year: i32,
    pub month: u32,
    pub day_configurations: Vec<DayConfiguration>,
}

// ==========================================
// CalendarSpec - 目标月份的日期序列
// ==========================================
// 仅用于 序号 -> 星期 的对齐
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarSpec {
    pub year: i32,
    pub month: u32,
    pub dates: Vec<NaiveDate>, // 升序,当月每天恰好一个
}

impl CalendarSpec {
    /// 枚举指定年月的所有日期
    ///
    /// # 错误
    /// - CalendarMismatchError::InvalidMonth: 年月不合法
    pub fn for_month(year: i32, month: u32) -> Result<Self, CalendarMismatchError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(CalendarMismatchError::InvalidMonth { year, month })?;

        let dates: Vec<NaiveDate> = first
            .iter_days()
            .take_while(|date| date.month() == month)
            .collect();

        Ok(Self { year, month, dates })
    }

    pub fn num_days(&self) -> usize {
        self.dates.len()
    }
}
