// ==========================================
// 医生排班预处理系统 - 日期覆写提取器
// ==========================================
// 职责: 读取某一天针对一对类别的日期级覆写
// ==========================================

use crate::domain::calendar::DayConfiguration;
use crate::domain::types::{PreferencePair, StaffId};
use std::collections::BTreeSet;

/// 某一天的日期级覆写
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayOverrides {
    pub primary: BTreeSet<StaffId>,
    pub secondary: BTreeSet<StaffId>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DayOverrideExtractor;

impl DayOverrideExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, day_conf: &DayConfiguration, pair: PreferencePair) -> DayOverrides {
        let overrides = DayOverrides {
            primary: day_conf
                .overrides(pair.primary)
                .iter()
                .map(|staff| staff.id)
                .collect(),
            secondary: day_conf
                .overrides(pair.secondary)
                .iter()
                .map(|staff| staff.id)
                .collect(),
        };

        tracing::debug!(
            day = day_conf.day,
            "日期级 {}: {:?}, {}: {:?}",
            pair.primary,
            overrides.primary,
            pair.secondary,
            overrides.secondary
        );

        overrides
    }
}
