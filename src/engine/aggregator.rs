// ==========================================
// 医生排班预处理系统 - 星期偏好聚合器
// ==========================================
// 职责: 把每位医生的周期偏好折叠为 7 个星期桶 (每个类别一组)
// 输入: RecurringPreference 列表 + 偏好类别对
// 输出: WeekdayBuckets
// ==========================================

use crate::domain::preference::RecurringPreference;
use crate::domain::types::{PreferencePair, StaffId};
use chrono::Weekday;
use std::collections::BTreeSet;

// ==========================================
// WeekdayBuckets - 星期桶
// ==========================================
// 下标 = num_days_from_monday()
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekdayBuckets {
    pub primary: [BTreeSet<StaffId>; 7],
    pub secondary: [BTreeSet<StaffId>; 7],
}

impl WeekdayBuckets {
    pub fn primary_on(&self, weekday: Weekday) -> &BTreeSet<StaffId> {
        &self.primary[weekday.num_days_from_monday() as usize]
    }

    pub fn secondary_on(&self, weekday: Weekday) -> &BTreeSet<StaffId> {
        &self.secondary[weekday.num_days_from_monday() as usize]
    }
}

// ==========================================
// WeekdayAggregator - 星期偏好聚合器
// ==========================================
// 星期名称已在边界校验,此处不会失败
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekdayAggregator;

impl WeekdayAggregator {
    pub fn new() -> Self {
        Self
    }

    /// 按星期聚合一对类别
    pub fn aggregate(
        &self,
        preferences: &[RecurringPreference],
        pair: PreferencePair,
    ) -> WeekdayBuckets {
        let mut buckets = WeekdayBuckets::default();

        for preference in preferences {
            for weekday in preference.weekdays(pair.primary) {
                buckets.primary[weekday.num_days_from_monday() as usize]
                    .insert(preference.staff_id);
            }
            for weekday in preference.weekdays(pair.secondary) {
                buckets.secondary[weekday.num_days_from_monday() as usize]
                    .insert(preference.staff_id);
            }
        }

        tracing::debug!("{} 按星期: {:?}", pair.primary, buckets.primary);
        tracing::debug!("{} 按星期: {:?}", pair.secondary, buckets.secondary);

        buckets
    }
}
