// ==========================================
// 医生排班预处理系统 - 员工领域模型
// ==========================================

use crate::domain::types::StaffId;
use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ==========================================
// StaffMember - 员工（医生）
// ==========================================
// 输入格式: {"id": 1, "doesConsultations": true}
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: StaffId,
    #[serde(rename = "doesConsultations")]
    pub performs_consultations: bool, // 是否出门诊
}

impl StaffMember {
    pub fn new(id: StaffId, performs_consultations: bool) -> Self {
        Self {
            id,
            performs_consultations,
        }
    }
}

/// 校验员工 id 唯一
pub fn ensure_unique_staff(staff: &[StaffMember]) -> Result<(), ConfigurationError> {
    let mut seen = HashSet::new();
    for member in staff {
        if !seen.insert(member.id) {
            return Err(ConfigurationError::DuplicateStaff(member.id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_names() {
        let staff: StaffMember =
            serde_json::from_str(r#"{"id": 3, "doesConsultations": true}"#).unwrap();
        assert_eq!(staff, StaffMember::new(3, true));
    }

    #[test]
    fn test_duplicate_staff_rejected() {
        let staff = vec![
            StaffMember::new(1, false),
            StaffMember::new(2, true),
            StaffMember::new(1, true),
        ];
        assert_eq!(
            ensure_unique_staff(&staff),
            Err(ConfigurationError::DuplicateStaff(1))
        );
        assert!(ensure_unique_staff(&staff[..2]).is_ok());
    }
}
