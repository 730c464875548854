/// 日志工具模块
///
/// 提供日志初始化、格式化和输出的辅助函数
use crate::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 未设置 `RUST_LOG` 时使用的过滤规则
pub const DEFAULT_FILTER: &str = "mcq_sets=info,tower_http=info";

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，重复调用不会报错
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 试卷多套生成服务");
    info!(
        "启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🌐 监听地址: {}", config.bind_address);
    info!("📊 单次最多生成: {} 套", config.max_sets);
    info!("{}", "=".repeat(60));
}

/// 记录请求开始信息
///
/// # 参数
/// - `questions`: 题目数量
/// - `num_sets`: 请求的套数
pub fn log_request_start(questions: usize, num_sets: usize) {
    info!("\n{}", "─".repeat(60));
    info!("📥 收到出题请求: {} 道题, {} 套", questions, num_sets);
}

/// 记录请求完成信息
///
/// # 参数
/// - `num_sets`: 生成的套数
/// - `bytes`: 压缩包大小
/// - `elapsed_ms`: 耗时（毫秒）
pub fn log_request_complete(num_sets: usize, bytes: usize, elapsed_ms: u128) {
    info!(
        "✅ 生成完成: {} 套, {} 字节, 耗时 {} ms",
        num_sets, bytes, elapsed_ms
    );
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_can_be_called_twice() {
        init();
        init();
        assert_eq!(DEFAULT_FILTER.split(',').count(), 2);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdef", 3), "abc...");
        assert_eq!(truncate_text("巴黎是法国的首都", 2), "巴黎...");
    }
}
