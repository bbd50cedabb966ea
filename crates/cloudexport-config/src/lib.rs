pub mod error;

pub use error::*;

use serde::Deserialize;
use serde_json::Value;

/// Used when neither `apiurl` nor `KTAPI_URL` is set
pub const DEFAULT_API_URL: &str = "https://cloudexports.api.kentik.com";

pub const API_URL_ENV: &str = "KTAPI_URL";
pub const EMAIL_ENV: &str = "KTAPI_AUTH_EMAIL";
pub const TOKEN_ENV: &str = "KTAPI_AUTH_TOKEN";

/// Provider block as written by the user; every value may be left to the environment
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderSettings {
    #[serde(default)]
    pub apiurl: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl ProviderSettings {
    /// Read settings from the provider block attributes
    pub fn from_attributes(attrs: &serde_json::Map<String, Value>) -> Result<Self> {
        Ok(serde_json::from_value(Value::Object(attrs.clone()))?)
    }
}

/// API token; never printed
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

/// Resolved connection settings handed to the API client
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_url: String,
    pub email: String,
    pub token: ApiToken,
}

impl ProviderConfig {
    /// Resolve settings against the environment
    ///
    /// Each value is taken in this order:
    /// 1. Explicit value from the provider block
    /// 2. Environment variable (KTAPI_URL, KTAPI_AUTH_EMAIL, KTAPI_AUTH_TOKEN)
    /// 3. DEFAULT_API_URL, for apiurl only
    pub fn resolve(settings: ProviderSettings) -> Result<Self> {
        let api_url =
            setting(settings.apiurl, API_URL_ENV).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let email = setting(settings.email, EMAIL_ENV).ok_or(ConfigError::MissingSetting {
            attribute: "email",
            env: EMAIL_ENV,
        })?;
        let token = setting(settings.token, TOKEN_ENV).ok_or(ConfigError::MissingSetting {
            attribute: "token",
            env: TOKEN_ENV,
        })?;

        Ok(Self {
            api_url,
            email,
            token: ApiToken::new(token),
        })
    }
}

fn setting(explicit: Option<String>, env: &str) -> Option<String> {
    explicit
        .filter(|v| !v.is_empty())
        .or_else(|| std::env::var(env).ok().filter(|v| !v.is_empty()))
}
