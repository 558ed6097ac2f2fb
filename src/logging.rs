// Log setup for the sketchpad binary. Our own events (target `sketchpad`, library and
// binary alike) are shown at `info`, or `debug` with debug logging on; minifb and the
// other dependencies only get through from `warn` up.

use tracing_subscriber::EnvFilter;

const CRATE_TARGET: &str = "sketchpad";

/// Directive string for the filter. With debug logging, `RUST_LOG` directives are
/// appended so they can narrow or widen individual targets.
pub fn filter_directives(debug: bool, env: Option<&str>) -> String {
    let level = if debug { "debug" } else { "info" };
    let mut directives = format!("warn,{CRATE_TARGET}={level}");
    if let Some(extra) = env.filter(|_| debug).map(str::trim).filter(|e| !e.is_empty()) {
        directives.push(',');
        directives.push_str(extra);
    }
    directives
}

pub fn init(debug: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::new(filter_directives(debug, env.as_deref()));

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .try_init();
}
