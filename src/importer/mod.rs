// ==========================================
// 医生排班预处理系统 - 导入层
// ==========================================
// 职责: 外部输入读取,生成校验后的 PreparationInput
// 支持: JSON 文件
// ==========================================

// 模块声明
pub mod error;
pub mod input_loader_trait;
pub mod json_loader;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use json_loader::JsonFileLoader;

// 重导出 Trait 接口
pub use input_loader_trait::InputLoader;
