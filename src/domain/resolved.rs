// ==========================================
// 医生排班预处理系统 - 解析后偏好表
// ==========================================
// 红线: 每个日历日恰好一条; 每个集合内医生 id 不重复
// ==========================================

use crate::domain::types::{PreferencePair, StaffId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// 某一天解析后的 (primary, secondary) 医生集合
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDay {
    pub primary: BTreeSet<StaffId>,
    pub secondary: BTreeSet<StaffId>,
}

// ==========================================
// ResolvedPreferenceTable - 解析后偏好表
// ==========================================
// 日号 -> ResolvedDay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPreferenceTable {
    pub pair: PreferencePair,
    pub days: BTreeMap<u32, ResolvedDay>,
}

impl ResolvedPreferenceTable {
    pub fn new(pair: PreferencePair) -> Self {
        Self {
            pair,
            days: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, day: u32, resolved: ResolvedDay) {
        self.days.insert(day, resolved);
    }

    pub fn get(&self, day: u32) -> Option<&ResolvedDay> {
        self.days.get(&day)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// 医生在某天是否属于 primary 集合
    pub fn is_primary(&self, day: u32, staff_id: StaffId) -> bool {
        self.get(day)
            .map(|resolved| resolved.primary.contains(&staff_id))
            .unwrap_or(false)
    }

    /// 医生在某天是否属于 secondary 集合
    pub fn is_secondary(&self, day: u32, staff_id: StaffId) -> bool {
        self.get(day)
            .map(|resolved| resolved.secondary.contains(&staff_id))
            .unwrap_or(false)
    }
}
