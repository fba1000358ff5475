// ==========================================
// 医生排班预处理系统 - 决策变量枚举器
// ==========================================
// 职责: 为每个 (医生, 工作日) 分配值班变量,出门诊的医生再加门诊变量
// 红线: 非工作日不产生任何变量
// 顺序: 医生按输入顺序,日按日号升序
// ==========================================

use crate::domain::calendar::DayConfiguration;
use crate::domain::staff::StaffMember;
use crate::domain::types::VariableKind;
use crate::domain::variable::{DecisionVariable, DecisionVariableMap};
use tracing::instrument;

#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionVariableEnumerator;

impl DecisionVariableEnumerator {
    pub fn new() -> Self {
        Self
    }

    /// 枚举决策变量
    ///
    /// # 参数
    /// - staff: 医生列表
    /// - day_confs: 日配置 (调用方已按日号升序排列)
    #[instrument(skip_all, fields(staff = staff.len(), days = day_confs.len()))]
    pub fn enumerate(
        &self,
        staff: &[StaffMember],
        day_confs: &[DayConfiguration],
    ) -> DecisionVariableMap {
        let mut variables = DecisionVariableMap::new();

        for member in staff {
            for day_conf in day_confs.iter().filter(|conf| conf.is_working_day) {
                let mut slot = vec![DecisionVariable::new(
                    member.id,
                    day_conf.day,
                    VariableKind::Shift,
                )];
                if member.performs_consultations {
                    slot.push(DecisionVariable::new(
                        member.id,
                        day_conf.day,
                        VariableKind::Consultation,
                    ));
                }
                variables.insert(member.id, day_conf.day, slot);
            }
        }

        tracing::debug!(
            slots = variables.len(),
            variables = variables.variable_count(),
            "决策变量枚举完成"
        );

        variables
    }
}
