// ==========================================
// 医生排班预处理系统 - 核心库
// ==========================================
// 职责: 月度排班求解前的数据准备
//   1. 周期偏好 + 日期覆写 -> 解析后偏好表 (请求 / 要求)
//   2. 医生 × 工作日 -> 决策变量
// 定位: 不做求解,不做最终排班
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 系统配置
pub mod config;

// 错误类型
pub mod error;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    CalendarRecord, CalendarSpec, ConflictScope, ConflictWarning, DayConfiguration,
    DecisionVariable, DecisionVariableMap, PreferenceCategory, PreferencePair,
    RecurringPreference, ResolvedDay, ResolvedPreferenceTable, ShiftConfRecord, StaffId,
    StaffMember, VariableKind,
};

// 引擎
pub use engine::{
    ConflictDetector, DayOverrideExtractor, DecisionVariableEnumerator, PreferenceResolutionEngine,
    PreparationInput, PreparationOrchestrator, PreparationOutput, WeekdayAggregator,
};

// 错误
pub use error::{CalendarMismatchError, ConfigurationError, PrepError, PrepResult};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "医生排班预处理系统";
