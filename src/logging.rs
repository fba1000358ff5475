// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 支持环境变量与配置文件配置日志级别、输出格式
// ==========================================

use crate::config::LogFormat;
use tracing_subscriber::{fmt, EnvFilter};

/// 以配置文件中的过滤器与格式初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 存在时优先于配置文件
///   例如: RUST_LOG=debug 或 RUST_LOG=shift_prep=trace
///
/// 过滤器语法非法时回退到 info
///
/// # 示例
/// ```no_run
/// use shift_prep::config::LogFormat;
/// use shift_prep::logging;
/// logging::init_with_filter("info", LogFormat::Text);
/// ```
pub fn init_with_filter(default_filter: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // 输出到 stderr, stdout 留给结果 JSON
    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .with_writer(std::io::stderr);

    let _ = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别，便于调试
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
