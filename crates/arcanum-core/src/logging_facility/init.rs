//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Environment variable consulted by [`Profile::from_env`]
pub const PROFILE_ENV: &str = "ARCANUM_LOG_PROFILE";

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl Profile {
    /// Parse a profile name (`dev`, `development`, `prod`, `production`, `test`)
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dev" | "development" => Some(Profile::Development),
            "prod" | "production" => Some(Profile::Production),
            "test" => Some(Profile::Test),
            _ => None,
        }
    }

    /// Read the profile from `ARCANUM_LOG_PROFILE`, defaulting to Development
    pub fn from_env() -> Self {
        std::env::var(PROFILE_ENV)
            .ok()
            .and_then(|v| Self::parse(&v))
            .unwrap_or(Profile::Development)
    }

    fn default_directive(self) -> &'static str {
        match self {
            Profile::Development => "arcanum=debug",
            Profile::Production | Profile::Test => "arcanum=info",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Call once at application startup. Later calls are no-ops, and a
/// subscriber installed elsewhere first is left in place.
///
/// # Profiles
///
/// - **Development**: Human-readable logs with debug level
/// - **Production**: JSON structured logs with info level
/// - **Test**: Bare registry; use `init_test_capture()` to record events
///
/// `RUST_LOG` overrides the profile's default filter.
///
/// # Example
///
/// ```
/// use arcanum_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(profile.default_directive()));

        let installed = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .finish()
                .try_init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .finish()
                .try_init(),
            Profile::Test => tracing_subscriber::registry().try_init(),
        };

        if installed.is_err() {
            tracing::debug!(?profile, "global subscriber already set; keeping it");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        init(Profile::Test);
        init(Profile::Test);
        init(Profile::Production);
    }

    #[test]
    fn test_parse_profile_names() {
        assert_eq!(Profile::parse("dev"), Some(Profile::Development));
        assert_eq!(Profile::parse(" Production "), Some(Profile::Production));
        assert_eq!(Profile::parse("test"), Some(Profile::Test));
        assert_eq!(Profile::parse("verbose"), None);
    }
}
