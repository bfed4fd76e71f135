//! Subscriber installation

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Where and how log events are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Plain text on stderr, warnings and errors only
    Interactive,
    /// One JSON object per event on stderr, from info up
    Production,
    /// Nothing is rendered; tests install `init_test_capture` instead
    Test,
}

impl Profile {
    /// Filter used when `RUST_LOG` is unset or unparsable
    pub fn default_directive(self) -> &'static str {
        match self {
            Profile::Interactive => "hotelops=warn",
            Profile::Production => "hotelops=info",
            Profile::Test => "off",
        }
    }

    fn filter(self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.default_directive()))
    }
}

static INSTALLED: Once = Once::new();

/// Install the global subscriber for `profile`
///
/// Only the first call in a process has any effect. If another subscriber
/// is already installed (a test capture, for instance) it is left alone.
pub fn init(profile: Profile) {
    INSTALLED.call_once(|| {
        // a subscriber set elsewhere wins
        let _ = match profile {
            Profile::Interactive => tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(profile.filter())
                .finish()
                .try_init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(profile.filter())
                .finish()
                .try_init(),
            Profile::Test => tracing_subscriber::registry().try_init(),
        };
    });
}
