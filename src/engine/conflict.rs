// ==========================================
// 医生排班预处理系统 - 偏好冲突检测器
// ==========================================
// 职责: 同一范围内两侧集合求交集,非空则产生诊断
// 红线: 不修改输入集合,不中断处理
// ==========================================

use crate::domain::diagnostic::{ConflictScope, ConflictWarning};
use crate::domain::types::{PreferencePair, StaffId};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictDetector;

impl ConflictDetector {
    pub fn new() -> Self {
        Self
    }

    /// 检测一个范围内的冲突
    ///
    /// # 返回
    /// - Some(ConflictWarning): 存在同时位于两侧的医生
    /// - None: 无冲突
    pub fn detect(
        &self,
        scope: ConflictScope,
        pair: PreferencePair,
        primary: &BTreeSet<StaffId>,
        secondary: &BTreeSet<StaffId>,
    ) -> Option<ConflictWarning> {
        let staff_ids: BTreeSet<StaffId> = primary.intersection(secondary).copied().collect();
        if staff_ids.is_empty() {
            return None;
        }

        let warning = ConflictWarning {
            scope,
            primary: pair.primary,
            secondary: pair.secondary,
            staff_ids,
        };
        tracing::warn!("{}", warning);

        Some(warning)
    }
}
