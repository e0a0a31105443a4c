use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// stderr로 출력하는 tracing 구독자를 설치한다.
///
/// `RUST_LOG`가 있으면 그 필터를 쓰고, 없으면 verbose 여부에 따라 info/debug를 쓴다.
pub fn init(verbose: bool) {
    let fallback = if verbose {
        "rental_property_analyzer=debug"
    } else {
        "rental_property_analyzer=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    // 이미 설치된 구독자가 있으면 그대로 둔다.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
