use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn filter(verbose: bool) -> EnvFilter {
    let default_directive = if verbose {
        "approval_mapper=debug,info"
    } else {
        "approval_mapper=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Installs the global subscriber. `RUST_LOG` wins over `verbose`.
///
/// Compact lines for terminals; `json` emits one object per event for hosts
/// that collect stdout (containers, CI).
pub fn init_logger(verbose: bool, json: bool) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter(verbose));
    if json {
        registry.with(fmt_layer.json()).init();
    } else {
        registry.with(fmt_layer.compact()).init();
    }
}
