// ==========================================
// 场景构建器 - 用于集成测试
// ==========================================
// 默认月份: 2024-01 (31 天, 1 日为星期一), 全部为工作日
// ==========================================

use chrono::Weekday;
use shift_prep::domain::calendar::{CalendarRecord, CalendarSpec, DayConfiguration};
use shift_prep::domain::preference::{RecurringPreference, ShiftConfRecord, WeekdayEntry};
use shift_prep::domain::staff::StaffMember;
use shift_prep::domain::types::{weekday_name, PreferenceCategory, StaffId};
use shift_prep::engine::PreparationInput;

pub struct ScenarioBuilder {
    year: i32,
    month: u32,
    staff: Vec<StaffMember>,
    preferences: Vec<RecurringPreference>,
    day_confs: Vec<DayConfiguration>,
}

impl ScenarioBuilder {
    pub fn january_2024() -> Self {
        Self::month(2024, 1)
    }

    pub fn month(year: i32, month: u32) -> Self {
        let num_days = CalendarSpec::for_month(year, month).unwrap().num_days() as u32;
        Self {
            year,
            month,
            staff: Vec::new(),
            preferences: Vec::new(),
            day_confs: (1..=num_days)
                .map(|day| DayConfiguration::new(day, true))
                .collect(),
        }
    }

    /// 添加医生 (同时建立空的周期偏好)
    pub fn staff(mut self, id: StaffId, does_consultations: bool) -> Self {
        self.staff.push(StaffMember::new(id, does_consultations));
        self.preferences.push(RecurringPreference::new(id));
        self
    }

    /// 周期偏好
    pub fn recurring(mut self, id: StaffId, category: PreferenceCategory, weekday: Weekday) -> Self {
        let index = self
            .preferences
            .iter()
            .position(|p| p.staff_id == id)
            .expect("先调用 staff() 添加医生");
        let preference = std::mem::replace(&mut self.preferences[index], RecurringPreference::new(id));
        self.preferences[index] = preference.with(category, weekday);
        self
    }

    /// 日期级覆写
    pub fn day_override(mut self, day: u32, category: PreferenceCategory, id: StaffId) -> Self {
        let conf = self.take_day(day);
        self.day_confs[(day - 1) as usize] = conf.with_override(category, id);
        self
    }

    /// 标记非工作日
    pub fn non_working(mut self, day: u32) -> Self {
        self.day_confs[(day - 1) as usize].is_working_day = false;
        self
    }

    /// 删除某天的日配置 (构造日历不一致)
    pub fn drop_day(mut self, day: u32) -> Self {
        self.day_confs.retain(|conf| conf.day != day);
        self
    }

    pub fn build(self) -> PreparationInput {
        PreparationInput {
            staff: self.staff,
            preferences: self.preferences,
            calendar: CalendarSpec::for_month(self.year, self.month).unwrap(),
            day_confs: self.day_confs,
        }
    }

    /// 转为原始输入记录 (医生, 班次配置, 日历)
    pub fn build_records(self) -> (Vec<StaffMember>, Vec<ShiftConfRecord>, CalendarRecord) {
        let shift_confs = self
            .preferences
            .iter()
            .map(|preference| {
                let entries = |category: PreferenceCategory| -> Vec<WeekdayEntry> {
                    preference
                        .weekdays(category)
                        .iter()
                        .map(|&weekday| WeekdayEntry::new(weekday_name(weekday)))
                        .collect()
                };
                ShiftConfRecord {
                    doctor_id: preference.staff_id,
                    wanted_shifts: entries(PreferenceCategory::Wanted),
                    unwanted_shifts: entries(PreferenceCategory::Unwanted),
                    mandatory_shifts: entries(PreferenceCategory::Mandatory),
                    unavailable_shifts: entries(PreferenceCategory::Unavailable),
                }
            })
            .collect();

        let calendar = CalendarRecord {
            year: self.year,
            month: self.month,
            day_configurations: self.day_confs,
        };

        (self.staff, shift_confs, calendar)
    }

    fn take_day(&mut self, day: u32) -> DayConfiguration {
        let index = (day - 1) as usize;
        let placeholder = DayConfiguration::new(day, self.day_confs[index].is_working_day);
        std::mem::replace(&mut self.day_confs[index], placeholder)
    }
}
