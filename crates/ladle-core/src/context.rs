//! Per-process application context.
//!
//! The user code is the sole partition key for all remote reads and writes;
//! there is no authentication beyond possession of the code. It is resolved
//! exactly once at startup into an explicit context value that gets threaded
//! through the services, never a module-level global.

use rand::Rng;

/// Environment variable consulted when the config file carries no user code.
pub const USER_CODE_ENV: &str = "USER_CODE";

/// Startup-resolved application identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    /// The 4-digit code partitioning all remote state.
    pub user_code: String,
}

impl AppContext {
    /// Resolves the user code: configuration, then the `USER_CODE`
    /// environment variable, then a freshly generated random 4-digit code.
    ///
    /// A generated code is stable for the process lifetime only; it is not
    /// written back anywhere.
    pub fn resolve(configured: Option<String>) -> Self {
        let env_code = std::env::var(USER_CODE_ENV).ok();
        Self::resolve_with(configured, env_code)
    }

    /// Pure resolution logic, split out so precedence is testable without
    /// touching the process environment.
    pub fn resolve_with(configured: Option<String>, env_code: Option<String>) -> Self {
        let from = |source: Option<String>| {
            source
                .map(|code| code.trim().to_string())
                .filter(|code| !code.is_empty())
        };

        let user_code = from(configured).or_else(|| from(env_code)).unwrap_or_else(|| {
            let code = Self::random_code();
            tracing::info!(user_code = %code, "no user code configured, generated one for this run");
            code
        });

        Self { user_code }
    }

    fn random_code() -> String {
        rand::thread_rng().gen_range(1000..=9999).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_code_wins() {
        let ctx = AppContext::resolve_with(Some("1234".into()), Some("5678".into()));
        assert_eq!(ctx.user_code, "1234");
    }

    #[test]
    fn test_env_code_used_when_config_empty() {
        let ctx = AppContext::resolve_with(Some("  ".into()), Some("5678".into()));
        assert_eq!(ctx.user_code, "5678");
    }

    #[test]
    fn test_generated_code_is_four_digits() {
        let ctx = AppContext::resolve_with(None, None);
        assert_eq!(ctx.user_code.len(), 4);
        assert!(ctx.user_code.chars().all(|c| c.is_ascii_digit()));
        assert_ne!(ctx.user_code.chars().next(), Some('0'));
    }
}
