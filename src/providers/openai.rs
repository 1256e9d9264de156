use log::{debug, trace, error};

use crate::request::{format_temperature, CompletionRequest};
use crate::spinner::Spinner;

// ===== OpenAI Responses Client =====

/// Client for the OpenAI Responses API.
/// Holds one reqwest client for the whole session; issuing requests
/// never mutates it.
pub struct OpenAiClient
{   http_client: reqwest::Client
  , config: crate::config::Config
}

impl OpenAiClient
{   pub fn new(config: crate::config::Config) -> Self
    {   debug!(
          "Creating OpenAiClient for model: {}",
          config.model
        );
        OpenAiClient
        {   http_client: reqwest::Client::new()
          , config
        }
    }

    pub fn model(&self) -> &str
    {   &self.config.model
    }

    /// POST the request and return the raw body text.
    /// Non-2xx bodies are returned as-is: the API reports errors in
    /// the body and the extractor renders them for display.
    async fn send(
      &self
    , request: &CompletionRequest
    ) -> Result<String, crate::error::Error>
    {   trace!("Responses request: {:?}", request);

        let response = self.http_client
          .post(format!("{}/responses", self.config.api_base))
          .header(
            "Authorization",
            format!("Bearer {}", self.config.api_key)
          )
          .header("Content-Type", "application/json")
          .json(request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::HttpError(e.to_string())
          })?;

        let status = response.status();
        trace!("Responses status: {}", status);

        response.text().await
          .map_err(|e| {
            error!("Failed to read response body: {}", e);
            crate::error::Error::HttpError(e.to_string())
          })
    }
}

impl crate::Completion for OpenAiClient
{   /// One authenticated call, decorated with a spinner that is
    /// stopped and joined on success and failure alike
    async fn complete(
      &self
    , input: &str
    , instructions: Option<&str>
    , temperature: Option<f64>
    , max_output_tokens: Option<u32>
    ) -> Result<String, crate::error::Error>
    {   let label = format_temperature(temperature);
        debug!(
          "Handling completion (temperature={})",
          label
        );

        let request = CompletionRequest
        {   model: self.config.model.clone()
          , input: input.to_string()
          , instructions: instructions.map(str::to_string)
          , temperature
          , max_output_tokens
        };

        let spinner = Spinner::start(
          format!("Запрос к модели (temperature={})", label)
        );
        let sent = self.send(&request).await;
        spinner.stop().await;

        let body = sent?;
        crate::extract::extract_output_text(&body)
    }
}
