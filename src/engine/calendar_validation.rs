// ==========================================
// 医生排班预处理系统 - 日历形状校验
// ==========================================
// 红线: 任何解析与枚举之前执行; 失败即终止,不产生部分输出
// ==========================================

use crate::domain::calendar::{CalendarSpec, DayConfiguration};
use crate::error::CalendarMismatchError;
use chrono::Datelike;

#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarValidator;

impl CalendarValidator {
    pub fn new() -> Self {
        Self
    }

    /// 校验日配置与目标月份一一对应
    ///
    /// # 规则
    /// 1. 按日号升序排序
    /// 2. 条数 == 当月天数
    /// 3. 第 i 条的日号 == 第 i 个日期的日号
    ///
    /// # 返回
    /// - 按日号升序排列的日配置
    pub fn validate(
        &self,
        calendar: &CalendarSpec,
        day_confs: &[DayConfiguration],
    ) -> Result<Vec<DayConfiguration>, CalendarMismatchError> {
        let mut sorted = day_confs.to_vec();
        sorted.sort_by_key(|conf| conf.day);

        if sorted.len() != calendar.num_days() {
            let err = CalendarMismatchError::DayCountMismatch {
                year: calendar.year,
                month: calendar.month,
                expected: calendar.num_days(),
                actual: sorted.len(),
            };
            tracing::error!("{}", err);
            return Err(err);
        }

        for (date, conf) in calendar.dates.iter().zip(&sorted) {
            if date.day() != conf.day {
                let err = CalendarMismatchError::MissingDay {
                    expected: date.day(),
                    found: conf.day,
                };
                tracing::error!("{}", err);
                return Err(err);
            }
        }

        Ok(sorted)
    }
}
