#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod response;
pub mod state;
pub mod telemetry;

// Re-exports for public API
pub use auth::claims::Claims;
pub use auth::jwt::verify_token;
pub use error::{AuthError, ConfigError};
pub use extractors::current_user::CurrentUser;
pub use middleware::auth_gate::AuthGate;
pub use response::{build_response, Envelope};
pub use state::security_config::SecurityConfig;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}
