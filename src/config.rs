//! Run configuration for a timeline fetch.
//!
//! A run needs the user whose timeline is fetched and, optionally, a token
//! read from the `GH_TOKEN` environment variable. Validation happens here so
//! that a bad configuration fails before any network activity.

use crate::error::Error;

/// Public GitHub REST API root.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Environment variable holding the optional API token.
pub const TOKEN_ENV: &str = "GH_TOKEN";

/// Validated inputs for a single run.
///
/// # Examples
///
/// ```
/// use gh_activity::ActivityConfig;
///
/// let config = ActivityConfig::new(" octocat ", None,).expect("valid user",);
/// assert_eq!(config.user(), "octocat");
/// assert_eq!(config.first_page_url(), "https://api.github.com/users/octocat/events");
/// ```
#[derive(Clone, PartialEq, Eq,)]
pub struct ActivityConfig
{
    user:     String,
    token:    Option<String,>,
    api_base: String,
}

impl ActivityConfig
{
    /// Creates a configuration for `user`.
    ///
    /// Surrounding whitespace is trimmed from both values and an empty token
    /// is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when `user` is blank.
    pub fn new(user: &str, token: Option<&str,>,) -> Result<Self, Error,>
    {
        let user = user.trim();
        if user.is_empty() {
            return Err(Error::configuration("user is required to go on",),);
        }

        let token = token.map(str::trim,).filter(|value| !value.is_empty(),).map(str::to_owned,);

        Ok(Self {
            user: user.to_owned(),
            token,
            api_base: DEFAULT_API_BASE.to_owned(),
        },)
    }

    /// Creates a configuration for an optional `user`, reading the token from
    /// [`TOKEN_ENV`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when `user` is missing or blank.
    pub fn from_env(user: Option<&str,>,) -> Result<Self, Error,>
    {
        let user = user.ok_or_else(|| Error::configuration("user is required to go on",),)?;
        let token = std::env::var(TOKEN_ENV,).ok();

        Self::new(user, token.as_deref(),)
    }

    /// Overrides the API root, e.g. for GitHub Enterprise or a test server.
    ///
    /// Trailing slashes are removed so URLs can be joined verbatim.
    pub fn with_api_base(mut self, api_base: &str,) -> Self
    {
        self.api_base = api_base.trim_end_matches('/',).to_owned();
        self
    }

    /// User whose timeline is fetched.
    pub fn user(&self,) -> &str
    {
        &self.user
    }

    /// Token sent with every request, if any.
    pub fn token(&self,) -> Option<&str,>
    {
        self.token.as_deref()
    }

    /// API root without a trailing slash.
    pub fn api_base(&self,) -> &str
    {
        &self.api_base
    }

    /// URL of the first timeline page.
    pub fn first_page_url(&self,) -> String
    {
        format!("{}/users/{}/events", self.api_base, self.user)
    }
}

impl std::fmt::Debug for ActivityConfig
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_,>,) -> std::fmt::Result
    {
        f.debug_struct("ActivityConfig",)
            .field("user", &self.user,)
            .field("token", &self.token.as_ref().map(|_| "<redacted>",),)
            .field("api_base", &self.api_base,)
            .finish()
    }
}

#[cfg(test)]
mod tests
{
    use super::{ActivityConfig, DEFAULT_API_BASE};
    use crate::Error;

    #[test]
    fn blank_user_is_rejected()
    {
        for user in ["", "   "] {
            let error = ActivityConfig::new(user, None,).expect_err("expected configuration error",);
            assert!(matches!(error, Error::Configuration { .. }));
        }
    }

    #[test]
    fn missing_user_is_rejected()
    {
        let error = ActivityConfig::from_env(None,).expect_err("expected configuration error",);

        match error {
            Error::Configuration {
                message,
            } => assert_eq!(message, "user is required to go on"),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn empty_token_is_treated_as_absent()
    {
        let config = ActivityConfig::new("octocat", Some("  ",),).expect("valid config",);
        assert_eq!(config.token(), None);

        let config = ActivityConfig::new("octocat", Some("abc123",),).expect("valid config",);
        assert_eq!(config.token(), Some("abc123"));
    }

    #[test]
    fn api_base_override_is_joined_without_double_slash()
    {
        let config = ActivityConfig::new("octocat", None,)
            .expect("valid config",)
            .with_api_base("http://127.0.0.1:8080/",);

        assert_eq!(config.api_base(), "http://127.0.0.1:8080");
        assert_eq!(config.first_page_url(), "http://127.0.0.1:8080/users/octocat/events");
    }

    #[test]
    fn default_api_base_targets_github()
    {
        let config = ActivityConfig::new("octocat", None,).expect("valid config",);
        assert_eq!(config.api_base(), DEFAULT_API_BASE);
    }

    #[test]
    fn debug_output_redacts_token()
    {
        let config = ActivityConfig::new("octocat", Some("secret-token",),).expect("valid config",);
        let rendered = format!("{config:?}");

        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("<redacted>"));
    }
}
