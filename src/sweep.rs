//! Temperature sweep orchestration: three calls at fixed temperatures
//! plus the meta-call that compares their answers.

use log::{debug, info};

use crate::request::{format_temperature, TemperatureResult};
use crate::Completion;

/// Fixed sweep order; display and analysis packing follow it
pub const SWEEP_TEMPERATURES: [f64; 3] = [0.0, 0.7, 1.2];

pub const SWEEP_MAX_OUTPUT_TOKENS: u32 = 500;
pub const ANALYSIS_MAX_OUTPUT_TOKENS: u32 = 700;
pub const ANALYSIS_TEMPERATURE: f64 = 0.0;

/// Marker the API puts in its error text when the model rejects the
/// temperature parameter; matched case-insensitively
const UNSUPPORTED_TEMPERATURE_MARKER: &str
  = "unsupported parameter: 'temperature'";

/// Instruction template for the analysis call, literal content
pub const ANALYSIS_INSTRUCTIONS: &str = "\
Ты сравниваешь ответы одной и той же LLM при разных температурах.
Нужен короткий отчет на русском языке.

Формат:
1) Точность: сравни ответы между собой, отметь, где больше риск фактических ошибок.
2) Креативность: укажи, какой ответ самый творческий и почему.
3) Разнообразие: оцени насколько ответы отличаются по структуре/формулировкам.
4) Для каких задач лучше:
- temperature=0
- temperature=0.7
- temperature=1.2

Пиши конкретно и коротко.";

/// Run the prompt once per sweep temperature, in fixed order
pub async fn run_sweep(
  client: &impl Completion
, prompt: &str
) -> Result<Vec<TemperatureResult>, crate::error::Error>
{   let mut results = Vec::with_capacity(SWEEP_TEMPERATURES.len());
    for temperature in SWEEP_TEMPERATURES
    {   debug!("Sweep call at temperature={}", temperature);
        let response = client
          .complete(
            prompt,
            None,
            Some(temperature),
            Some(SWEEP_MAX_OUTPUT_TOKENS)
          )
          .await?;
        results.push(TemperatureResult
        {   temperature
          , response
        });
    }
    Ok(results)
}

/// True when any sweep answer carries the unsupported-temperature
/// error text; the turn must then skip display and analysis
pub fn has_unsupported_temperature(
  results: &[TemperatureResult]
) -> bool
{   results.iter().any(|result| {
      result.response
        .to_lowercase()
        .contains(UNSUPPORTED_TEMPERATURE_MARKER)
    })
}

/// Pack the original prompt and the three answers into the analysis
/// call's input, in sweep order
pub fn analysis_input(
  prompt: &str
, results: &[TemperatureResult]
) -> String
{   let mut packed = String::new();
    for result in results
    {   packed.push_str(&format!(
          "temperature={}\n",
          format_temperature(Some(result.temperature))
        ));
        packed.push_str(&result.response);
        packed.push_str("\n---\n");
    }

    format!(
      "Исходный запрос:\n{}\n\nОтветы:\n{}",
      prompt, packed
    )
}

/// The fourth, meta-level call: same model compares its own answers
pub async fn run_analysis(
  client: &impl Completion
, prompt: &str
, results: &[TemperatureResult]
) -> Result<String, crate::error::Error>
{   info!("Running analysis call over {} results", results.len());
    client
      .complete(
        &analysis_input(prompt, results),
        Some(ANALYSIS_INSTRUCTIONS),
        Some(ANALYSIS_TEMPERATURE),
        Some(ANALYSIS_MAX_OUTPUT_TOKENS)
      )
      .await
}
