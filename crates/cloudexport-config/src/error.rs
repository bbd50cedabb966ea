use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Authorization. Either {attribute} attribute or {env} environment variable is required")]
    MissingSetting {
        attribute: &'static str,
        env: &'static str,
    },

    #[error("Invalid provider settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
