// ==========================================
// 医生排班预处理系统 - 偏好解析引擎
// ==========================================
// 职责: 合并星期桶与日期级覆写,得到每天的 (primary, secondary) 集合
// 输入: 周期偏好 + 日配置 + 月份日期序列 + 偏好类别对
// 输出: ResolvedPreferenceTable + 冲突诊断
// 红线: 日期覆写优先 (override-wins); 冲突只报告不排除
// ==========================================

use crate::domain::calendar::{CalendarSpec, DayConfiguration};
use crate::domain::diagnostic::{ConflictScope, ConflictWarning};
use crate::domain::preference::RecurringPreference;
use crate::domain::resolved::{ResolvedDay, ResolvedPreferenceTable};
use crate::domain::types::{weekday_name, PreferencePair, StaffId, WEEKDAYS};
use crate::engine::aggregator::WeekdayAggregator;
use crate::engine::calendar_validation::CalendarValidator;
use crate::engine::conflict::ConflictDetector;
use crate::engine::extractor::DayOverrideExtractor;
use crate::error::PrepResult;
use chrono::Datelike;
use std::collections::BTreeSet;
use tracing::instrument;

/// 一次解析的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub table: ResolvedPreferenceTable,
    pub conflicts: Vec<ConflictWarning>,
}

// ==========================================
// PreferenceResolutionEngine - 偏好解析引擎
// ==========================================
// 对任意类别对通用; 每次运行调用两次 (请求 / 要求)
#[derive(Debug, Clone, Default)]
pub struct PreferenceResolutionEngine {
    aggregator: WeekdayAggregator,
    extractor: DayOverrideExtractor,
    detector: ConflictDetector,
    validator: CalendarValidator,
}

impl PreferenceResolutionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// 解析一对类别
    ///
    /// # 参数
    /// - preferences: 周期偏好
    /// - day_confs: 日配置 (顺序不限)
    /// - calendar: 目标月份的日期序列
    /// - pair: 偏好类别对
    ///
    /// # 错误
    /// - CalendarMismatchError: 日配置与月份不一致 (在任何解析之前)
    pub fn resolve(
        &self,
        preferences: &[RecurringPreference],
        day_confs: &[DayConfiguration],
        calendar: &CalendarSpec,
        pair: PreferencePair,
    ) -> PrepResult<Resolution> {
        let day_confs = self.validator.validate(calendar, day_confs)?;
        Ok(self.resolve_validated(preferences, &day_confs, calendar, pair))
    }

    /// 解析一对类别 (日配置已通过 CalendarValidator 校验并排序)
    #[instrument(skip_all, fields(pair = %pair))]
    pub(crate) fn resolve_validated(
        &self,
        preferences: &[RecurringPreference],
        day_confs: &[DayConfiguration],
        calendar: &CalendarSpec,
        pair: PreferencePair,
    ) -> Resolution {
        tracing::info!("解析偏好: {}", pair);

        // === 步骤 1: 按星期聚合 + 星期级冲突 ===
        let buckets = self.aggregator.aggregate(preferences, pair);
        let mut conflicts: Vec<ConflictWarning> = WEEKDAYS
            .iter()
            .filter_map(|&weekday| {
                self.detector.detect(
                    ConflictScope::Weekday(weekday),
                    pair,
                    buckets.primary_on(weekday),
                    buckets.secondary_on(weekday),
                )
            })
            .collect();

        // === 步骤 2: 逐日合并 (日期升序) ===
        let mut table = ResolvedPreferenceTable::new(pair);
        for (date, day_conf) in calendar.dates.iter().zip(day_confs) {
            let weekday = date.weekday();
            tracing::debug!(day = day_conf.day, "星期: {}", weekday_name(weekday));

            let overrides = self.extractor.extract(day_conf, pair);
            if let Some(conflict) = self.detector.detect(
                ConflictScope::Day(day_conf.day),
                pair,
                &overrides.primary,
                &overrides.secondary,
            ) {
                conflicts.push(conflict);
            }

            // 反向类别的日期覆写压过星期偏好
            let primary = merge_with_override(
                buckets.primary_on(weekday),
                &overrides.secondary,
                &overrides.primary,
            );
            let secondary = merge_with_override(
                buckets.secondary_on(weekday),
                &overrides.primary,
                &overrides.secondary,
            );
            tracing::debug!(
                day = day_conf.day,
                "合并后 {}: {:?}, {}: {:?}",
                pair.primary,
                primary,
                pair.secondary,
                secondary
            );

            table.insert(day_conf.day, ResolvedDay { primary, secondary });
        }

        tracing::info!(
            days = table.len(),
            conflicts = conflicts.len(),
            "偏好 {} 解析完成",
            pair
        );

        Resolution { table, conflicts }
    }
}

/// (星期集合 - 反向覆写) ∪ 同向覆写
fn merge_with_override(
    weekday_set: &BTreeSet<StaffId>,
    opposing: &BTreeSet<StaffId>,
    same: &BTreeSet<StaffId>,
) -> BTreeSet<StaffId> {
    weekday_set
        .difference(opposing)
        .chain(same.iter())
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::PreferenceCategory;
    use crate::error::{CalendarMismatchError, PrepError};
    use chrono::Weekday;

    // 2024-01: 1 日为星期一, 3 日为星期三
    fn january() -> (CalendarSpec, Vec<DayConfiguration>) {
        let calendar = CalendarSpec::for_month(2024, 1).unwrap();
        let confs = (1..=31).map(|day| DayConfiguration::new(day, true)).collect();
        (calendar, confs)
    }

    #[test]
    fn test_weekday_preferences_apply_to_every_occurrence() {
        let (calendar, confs) = january();
        let preferences =
            vec![RecurringPreference::new(1).with(PreferenceCategory::Wanted, Weekday::Mon)];

        let resolution = PreferenceResolutionEngine::new()
            .resolve(&preferences, &confs, &calendar, PreferencePair::REQUESTS)
            .unwrap();

        assert_eq!(resolution.table.len(), 31);
        for day in [1, 8, 15, 22, 29] {
            assert!(resolution.table.is_primary(day, 1), "第 {} 天", day);
        }
        assert!(!resolution.table.is_primary(2, 1));
        assert!(resolution.conflicts.is_empty());
    }

    #[test]
    fn test_opposing_override_suppresses_weekday_preference() {
        let (calendar, mut confs) = january();
        confs[0] = DayConfiguration::new(1, true).with_override(PreferenceCategory::Unwanted, 1);
        let preferences =
            vec![RecurringPreference::new(1).with(PreferenceCategory::Wanted, Weekday::Mon)];

        let table = PreferenceResolutionEngine::new()
            .resolve(&preferences, &confs, &calendar, PreferencePair::REQUESTS)
            .unwrap()
            .table;

        assert!(!table.is_primary(1, 1));
        assert!(table.is_secondary(1, 1));
        // 只影响当天
        assert!(table.is_primary(8, 1));
    }

    #[test]
    fn test_same_day_contradiction_keeps_both_sets() {
        let (calendar, mut confs) = january();
        confs[2] = DayConfiguration::new(3, true)
            .with_override(PreferenceCategory::Mandatory, 4)
            .with_override(PreferenceCategory::Unavailable, 4);

        let resolution = PreferenceResolutionEngine::new()
            .resolve(&[], &confs, &calendar, PreferencePair::REQUIREMENTS)
            .unwrap();

        assert!(resolution.table.is_primary(3, 4));
        assert!(resolution.table.is_secondary(3, 4));
        assert_eq!(resolution.conflicts.len(), 1);
        assert_eq!(resolution.conflicts[0].scope, ConflictScope::Day(3));
    }

    #[test]
    fn test_calendar_mismatch_before_output() {
        let (calendar, mut confs) = january();
        confs.pop();

        let err = PreferenceResolutionEngine::new()
            .resolve(&[], &confs, &calendar, PreferencePair::REQUESTS)
            .unwrap_err();

        assert!(matches!(
            err,
            PrepError::CalendarMismatch(CalendarMismatchError::DayCountMismatch { .. })
        ));
    }

    #[test]
    fn test_validated_entry_matches_public_resolve() {
        let (calendar, mut confs) = january();
        confs[4] = DayConfiguration::new(5, true).with_override(PreferenceCategory::Wanted, 2);
        let preferences =
            vec![RecurringPreference::new(1).with(PreferenceCategory::Unwanted, Weekday::Fri)];
        let engine = PreferenceResolutionEngine::new();

        let sorted = CalendarValidator::new().validate(&calendar, &confs).unwrap();
        let validated =
            engine.resolve_validated(&preferences, &sorted, &calendar, PreferencePair::REQUESTS);

        confs.reverse();
        let checked = engine
            .resolve(&preferences, &confs, &calendar, PreferencePair::REQUESTS)
            .unwrap();

        assert_eq!(validated, checked);
        assert!(validated.table.is_primary(5, 2));
        assert!(validated.table.is_secondary(5, 1));
    }

    #[test]
    fn test_merge_with_override() {
        let merged = merge_with_override(
            &BTreeSet::from([1, 2, 3]),
            &BTreeSet::from([2]),
            &BTreeSet::from([3, 9]),
        );
        assert_eq!(merged, BTreeSet::from([1, 3, 9]));
    }
}
