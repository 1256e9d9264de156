//! Wire and result types for the Responses API

use serde::{Deserialize, Serialize};

/// Request body for POST /responses.
/// Optional fields are omitted from the payload entirely when None,
/// never sent as null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest
{   pub model: String
  , pub input: String
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>
}

/// One sweep call's outcome, held only for the current turn
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureResult
{   pub temperature: f64
  , pub response: String
}

/// Render a request temperature for labels and packed blocks.
/// One decimal keeps 0.0 distinct from a bare 0.
pub fn format_temperature(temperature: Option<f64>) -> String
{   match temperature
    {   Some(t) => format!("{:.1}", t)
      , None => "default".to_string()
    }
}
