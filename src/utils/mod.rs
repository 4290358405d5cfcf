pub mod build_info;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
///
/// `RUST_LOG` directives are honoured; `finboard=info` is always added.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

        let filter = match "finboard=info".parse::<Directive>() {
            Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
            Err(_) => EnvFilter::from_default_env(),
        };

        // A subscriber installed by the host application wins.
        let _ = fmt().with_env_filter(filter).try_init();
    });
}
