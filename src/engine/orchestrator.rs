// ==========================================
// 医生排班预处理系统 - 预处理编排器
// ==========================================
// 职责: 校验输入 -> 解析请求 -> 解析要求 -> 枚举决策变量
// 输入: PreparationInput (纯内存数据,不读文件)
// 输出: PreparationOutput (交给外部求解器)
// 红线: 纯函数; 配置/日历错误在任何逐日处理之前抛出
// ==========================================

use crate::domain::calendar::{CalendarRecord, CalendarSpec, DayConfiguration};
use crate::domain::diagnostic::ConflictWarning;
use crate::domain::preference::{RecurringPreference, ShiftConfRecord};
use crate::domain::resolved::ResolvedPreferenceTable;
use crate::domain::staff::{ensure_unique_staff, StaffMember};
use crate::domain::types::PreferencePair;
use crate::domain::variable::DecisionVariableMap;
use crate::engine::calendar_validation::CalendarValidator;
use crate::engine::enumerator::DecisionVariableEnumerator;
use crate::engine::resolution::PreferenceResolutionEngine;
use crate::error::{ConfigurationError, PrepResult};
use serde::Serialize;
use uuid::Uuid;

// ==========================================
// PreparationInput - 一次运行的输入快照
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparationInput {
    pub staff: Vec<StaffMember>,
    pub preferences: Vec<RecurringPreference>,
    pub calendar: CalendarSpec,
    pub day_confs: Vec<DayConfiguration>,
}

impl PreparationInput {
    /// 由原始记录构建并完成边界校验
    ///
    /// # 错误
    /// - ConfigurationError: 医生 id 重复 / 星期名称非法
    /// - CalendarMismatchError::InvalidMonth: 年月非法
    pub fn from_records(
        staff: Vec<StaffMember>,
        shift_confs: &[ShiftConfRecord],
        calendar: CalendarRecord,
    ) -> PrepResult<Self> {
        ensure_unique_staff(&staff)?;

        let preferences = shift_confs
            .iter()
            .map(RecurringPreference::from_record)
            .collect::<Result<Vec<_>, ConfigurationError>>()?;

        let calendar_spec = CalendarSpec::for_month(calendar.year, calendar.month)?;

        Ok(Self {
            staff,
            preferences,
            calendar: calendar_spec,
            day_confs: calendar.day_configurations,
        })
    }
}

// ==========================================
// PreparationOutput - 交给求解器的数据
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparationOutput {
    pub year: i32,
    pub month: u32,
    pub requests: ResolvedPreferenceTable,     // 软约束: wanted / unwanted
    pub requirements: ResolvedPreferenceTable, // 硬约束: mandatory / unavailable
    pub variables: DecisionVariableMap,
    pub conflicts: Vec<ConflictWarning>,
}

// ==========================================
// PreparationOrchestrator - 预处理编排器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct PreparationOrchestrator {
    validator: CalendarValidator,
    resolution: PreferenceResolutionEngine,
    enumerator: DecisionVariableEnumerator,
}

impl PreparationOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 执行一次完整的预处理
    pub fn prepare(&self, input: &PreparationInput) -> PrepResult<PreparationOutput> {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "prepare",
            run_id = %run_id,
            year = input.calendar.year,
            month = input.calendar.month
        );
        let _guard = span.enter();

        tracing::info!(
            "生成 {}-{} 排班预处理数据",
            input.calendar.year,
            input.calendar.month
        );

        // === 步骤 1: 日历形状校验 (先于一切逐日处理, 只做一次) ===
        let day_confs = self.validator.validate(&input.calendar, &input.day_confs)?;

        // === 步骤 2: 请求 (wanted / unwanted) ===
        let requests = self.resolution.resolve_validated(
            &input.preferences,
            &day_confs,
            &input.calendar,
            PreferencePair::REQUESTS,
        );
        tracing::debug!("请求表: {:?}", requests.table.days);

        // === 步骤 3: 要求 (mandatory / unavailable) ===
        let requirements = self.resolution.resolve_validated(
            &input.preferences,
            &day_confs,
            &input.calendar,
            PreferencePair::REQUIREMENTS,
        );
        tracing::debug!("要求表: {:?}", requirements.table.days);

        // === 步骤 4: 决策变量 ===
        let variables = self.enumerator.enumerate(&input.staff, &day_confs);

        let mut conflicts = requests.conflicts;
        conflicts.extend(requirements.conflicts);

        tracing::info!(
            variables = variables.variable_count(),
            conflicts = conflicts.len(),
            "预处理完成"
        );

        Ok(PreparationOutput {
            year: input.calendar.year,
            month: input.calendar.month,
            requests: requests.table,
            requirements: requirements.table,
            variables,
            conflicts,
        })
    }
}
