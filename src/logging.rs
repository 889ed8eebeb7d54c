use tracing_subscriber::EnvFilter;

/// 初始化日志，输出到标准错误，避免与正常输出混在一起
///
/// 日志级别由 `RUST_LOG` 控制，默认只输出 warn 及以上。只能在 `main` 中调用一次。
pub fn init(ansi: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .init();
}
