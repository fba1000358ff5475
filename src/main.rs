// ==========================================
// 医生排班预处理系统 - 命令行入口
// ==========================================
// 用法:
//   shift-prep [config_path]
//
// 读取配置与三个输入文件,执行预处理,结果 JSON 输出到 stdout
// ==========================================

use anyhow::Context;
use shift_prep::config::{ConfigManager, ConfigSource};
use shift_prep::engine::PreparationOrchestrator;
use shift_prep::importer::{InputLoader, JsonFileLoader};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(ConfigManager::default_config_path);

    let (config, source) = ConfigManager::load_with_source(&config_path)
        .with_context(|| format!("无法加载配置: {}", config_path.display()))?;

    // 初始化日志系统
    shift_prep::logging::init_with_filter(&config.log_filter, config.log_format);

    tracing::info!("==================================================");
    tracing::info!("{}", shift_prep::APP_NAME);
    tracing::info!("系统版本: {}", shift_prep::VERSION);
    tracing::info!("==================================================");

    match &source {
        ConfigSource::File(path) => tracing::info!("已加载配置文件: {}", path.display()),
        ConfigSource::Defaults(path) => {
            tracing::info!("配置文件不存在, 使用默认配置: {}", path.display())
        }
    }

    let loader = JsonFileLoader::from_config(&config);
    let input = loader.load_input().context("输入数据加载失败")?;

    let output = PreparationOrchestrator::new()
        .prepare(&input)
        .context("预处理失败")?;

    let json = if config.pretty_print {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", json);

    Ok(())
}
