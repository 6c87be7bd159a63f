use tracing_subscriber::EnvFilter;

/// stderr로 출력하는 tracing 구독자를 설치한다.
/// RUST_LOG가 있으면 그것을, 없으면 설정의 필터를 쓴다. 이미 설치돼 있으면 무시한다.
pub fn init(fallback_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
