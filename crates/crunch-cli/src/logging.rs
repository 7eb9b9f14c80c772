//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Filter used when `CRUNCH_LOG` is unset: crunch crates only.
pub const DEFAULT_DIRECTIVES: &str = "crunch=info,crunch_core=info,crunch_compactor=info";
const VERBOSE_DIRECTIVES: &str = "crunch=debug,crunch_core=debug,crunch_compactor=debug";

/// Directives for the given verbosity and `CRUNCH_LOG` value.
pub fn directives(verbose: bool, env: Option<&str>) -> String {
    match (verbose, env) {
        (true, _) => VERBOSE_DIRECTIVES.to_string(),
        (false, Some(env)) if !env.trim().is_empty() => env.to_string(),
        (false, _) => DEFAULT_DIRECTIVES.to_string(),
    }
}

/// Install the global subscriber.
///
/// Reads `CRUNCH_LOG` (e.g. `CRUNCH_LOG=crunch_compactor=debug`), falling
/// back to [`DEFAULT_DIRECTIVES`]. `verbose` forces `debug` for every crunch
/// crate.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let env = std::env::var("CRUNCH_LOG").ok();
        let filter = EnvFilter::try_new(directives(verbose, env.as_deref()))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
