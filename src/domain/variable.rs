// ==========================================
// 医生排班预处理系统 - 决策变量领域模型
// ==========================================
// 红线: 仅工作日存在; 每个 (医生, 日) 1 个或 2 个变量
// 变量名由 (医生, 日, 种类) 确定性生成,求解器与测试可直接引用
// ==========================================

use crate::domain::types::{StaffId, VariableKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// DecisionVariable - 决策变量
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionVariable {
    pub staff_id: StaffId,
    pub day: u32,
    pub kind: VariableKind,
    pub name: String, // shift_doc{staff}_day{day}_{s|c}
}

impl DecisionVariable {
    pub fn new(staff_id: StaffId, day: u32, kind: VariableKind) -> Self {
        Self {
            staff_id,
            day,
            kind,
            name: Self::handle(staff_id, day, kind),
        }
    }

    /// 变量名
    pub fn handle(staff_id: StaffId, day: u32, kind: VariableKind) -> String {
        format!("shift_doc{}_day{}_{}", staff_id, day, kind.suffix())
    }
}

/// 一个 (医生, 日) 的变量组
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableSlot {
    pub staff_id: StaffId,
    pub day: u32,
    pub variables: Vec<DecisionVariable>,
}

// ==========================================
// DecisionVariableMap - 决策变量表
// ==========================================
// 保留枚举顺序 (医生输入顺序 × 日号升序),支持按 (医生, 日) 查找
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecisionVariableMap {
    slots: Vec<VariableSlot>,
    #[serde(skip)]
    index: HashMap<(StaffId, u32), usize>,
}

impl DecisionVariableMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入一个变量组; 同一 key 再次写入时覆盖原变量组
    pub fn insert(&mut self, staff_id: StaffId, day: u32, variables: Vec<DecisionVariable>) {
        let slot = VariableSlot {
            staff_id,
            day,
            variables,
        };
        match self.index.get(&(staff_id, day)) {
            Some(&position) => self.slots[position] = slot,
            None => {
                self.index.insert((staff_id, day), self.slots.len());
                self.slots.push(slot);
            }
        }
    }

    pub fn get(&self, staff_id: StaffId, day: u32) -> Option<&[DecisionVariable]> {
        self.index
            .get(&(staff_id, day))
            .map(|&position| self.slots[position].variables.as_slice())
    }

    pub fn contains(&self, staff_id: StaffId, day: u32) -> bool {
        self.index.contains_key(&(staff_id, day))
    }

    /// 按枚举顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = &VariableSlot> {
        self.slots.iter()
    }

    /// 变量组数量 (医生-日 对数)
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// 变量总数
    pub fn variable_count(&self) -> usize {
        self.slots.iter().map(|slot| slot.variables.len()).sum()
    }
}
