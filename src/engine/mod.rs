// ==========================================
// 医生排班预处理系统 - 引擎层
// ==========================================
// 职责: 偏好聚合、覆写提取、冲突检测、偏好解析、决策变量枚举
// 红线: 引擎不读文件,不持有可变状态
// ==========================================

pub mod aggregator;
pub mod calendar_validation;
pub mod conflict;
pub mod enumerator;
pub mod extractor;
pub mod orchestrator;
pub mod resolution;

// 重导出核心引擎
pub use aggregator::{WeekdayAggregator, WeekdayBuckets};
pub use calendar_validation::CalendarValidator;
pub use conflict::ConflictDetector;
pub use enumerator::DecisionVariableEnumerator;
pub use extractor::{DayOverrideExtractor, DayOverrides};
pub use orchestrator::{PreparationInput, PreparationOrchestrator, PreparationOutput};
pub use resolution::{PreferenceResolutionEngine, Resolution};
