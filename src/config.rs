//! Environment-driven configuration

use log::debug;

/// Model used when OPENAI_MODEL is not set
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";

/// API base used when OPENAI_API_BASE is not set
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Runtime configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config
{   /// Bearer credential for the API
    pub api_key: String
  , /// Model identifier sent with every request
    pub model: String
  , /// API base URL (override hook, mostly for tests)
    pub api_base: String
}

impl Config
{   /// Read configuration from the environment.
    /// A missing OPENAI_API_KEY is a fatal configuration error.
    pub fn from_env() -> Result<Self, crate::error::Error>
    {   let api_key = std::env::var("OPENAI_API_KEY")
          .map_err(|_| {
            crate::error::Error::MissingApiKey(
              "OPENAI_API_KEY".to_string()
            )
          })?;

        let model = std::env::var("OPENAI_MODEL")
          .unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let api_base = std::env::var("OPENAI_API_BASE")
          .unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        debug!(
          "Config: model={}, api_base={}",
          model, api_base
        );

        Ok(Config
        {   api_key
          , model
          , api_base
        })
    }
}
