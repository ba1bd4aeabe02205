use crate::Environment;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Install color-eyre with the project-standard configuration.
///
/// Call early in main(), before any fallible operation. Safe to call
/// more than once (later calls are ignored).
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize tracing with environment-aware output.
///
/// - Production (`APP_ENV=production`): JSON events for log aggregation,
///   module targets hidden.
/// - Development (default): pretty-printed human-readable output.
///
/// Both modes install an ErrorLayer so spans are captured into error
/// reports, and honor `RUST_LOG` when set.
///
/// Safe to call multiple times; re-initialization is silently skipped,
/// which keeps tests that share a process happy.
pub fn init_tracing(environment: &Environment) {
    let is_production = environment.is_production();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if is_production {
            EnvFilter::new("info")
        } else {
            EnvFilter::new("debug")
        }
    });

    let result = if is_production {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(_) => tracing::info!("Tracing initialized. Environment: {:?}", environment),
        Err(_) => tracing::debug!("Tracing already initialized, skipping"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_is_idempotent() {
        let env = Environment::Development;
        init_tracing(&env);
        init_tracing(&env);
        init_tracing(&Environment::Production);
    }

    #[test]
    fn init_tracing_honors_rust_log() {
        temp_env::with_var("RUST_LOG", Some("warn"), || {
            init_tracing(&Environment::Development);
        });
    }
}
