//! tempsweep: run one prompt against the OpenAI Responses API at
//! temperatures 0.0, 0.7 and 1.2, then ask the same model for a short
//! structured comparison of its own three answers.
//!
//! Layout:
//!
//! ```text
//! tempsweep/
//! ├── Cargo.toml
//! ├── src/
//! │   ├── lib.rs          # Re-exports and the Completion seam
//! │   ├── error.rs        # Custom error types
//! │   ├── config.rs       # Environment configuration
//! │   ├── request.rs      # Wire and result types
//! │   ├── extract.rs      # Response body -> display text
//! │   ├── spinner.rs      # Per-call progress indicator
//! │   ├── sweep.rs        # Sweep + analysis orchestration
//! │   ├── repl.rs         # Interactive loop
//! │   ├── main.rs         # Binary entry point
//! │   └── providers/
//! │       ├── mod.rs
//! │       └── openai.rs   # Responses API client
//! └── tests/              # Integration tests
//! ```

pub mod error;
pub mod config;
pub mod request;
pub mod extract;
pub mod spinner;
pub mod providers;
pub mod sweep;
pub mod repl;

/// Seam between the sweep orchestrator and the HTTP client, so the
/// orchestration logic can run against a scripted fake in tests.
#[allow(async_fn_in_trait)]
pub trait Completion
{   async fn complete(
      &self
    , input: &str
    , instructions: Option<&str>
    , temperature: Option<f64>
    , max_output_tokens: Option<u32>
    ) -> Result<String, crate::error::Error>;
}

pub use config::Config;
pub use error::Error;
pub use providers::OpenAiClient;
pub use request::{CompletionRequest, TemperatureResult};
