//! Redacting wrapper for credentials
//!
//! `ConnectionConfig` is `Debug`-logged on connect; its password field is a
//! `Sensitive<String>` so the value never reaches a log line.

use std::fmt;

const REDACTED: &str = "***REDACTED***";

/// Formats as `***REDACTED***` under both `{}` and `{:?}`
///
/// ```
/// use hotelops_core_types::Sensitive;
///
/// let password = Sensitive::new("pw".to_string());
/// assert_eq!(format!("{:?}", password), "***REDACTED***");
/// assert_eq!(password.expose(), "pw");
/// ```
#[derive(Clone, Default)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// The wrapped value; callers must not log it
    pub fn expose(&self) -> &T {
        &self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hidden_in_derived_debug() {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct Login {
            user: String,
            password: Sensitive<String>,
        }

        let login = Login {
            user: "operator".to_string(),
            password: Sensitive::new("letmein".to_string()),
        };

        let rendered = format!("{:?}", login);
        assert!(rendered.contains("operator"));
        assert!(rendered.contains(REDACTED));
        assert!(!rendered.contains("letmein"));
        assert_eq!(login.password.to_string(), REDACTED);
    }

    #[test]
    fn test_default_is_empty() {
        assert!(Sensitive::<String>::default().expose().is_empty());
    }
}
