// ==========================================
// 医生排班预处理系统 - 领域模型层
// ==========================================
// 职责: 定义输入记录、校验后实体、输出结构
// 红线: 不含引擎逻辑,不含文件读取
// ==========================================

pub mod calendar;
pub mod diagnostic;
pub mod preference;
pub mod resolved;
pub mod staff;
pub mod types;
pub mod variable;

// 重导出核心类型
pub use calendar::{CalendarRecord, CalendarSpec, DayConfiguration, StaffRef};
pub use diagnostic::{ConflictScope, ConflictWarning};
pub use preference::{RecurringPreference, ShiftConfRecord, WeekdayEntry};
pub use resolved::{ResolvedDay, ResolvedPreferenceTable};
pub use staff::StaffMember;
pub use types::{PreferenceCategory, PreferencePair, StaffId, VariableKind};
pub use variable::{DecisionVariable, DecisionVariableMap, VariableSlot};
