//! Interactive loop: read a prompt, run the sweep, print the report

use std::io::Write;
use log::{debug, error, info};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::providers::OpenAiClient;
use crate::request::format_temperature;
use crate::sweep;

/// What one input line asks the loop to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand
{   Exit
  , Empty
  , Prompt(String)
}

/// Classify an input line. `exit` matches case-insensitively; blank
/// lines never trigger a request cycle.
pub fn parse_line(line: &str) -> ReplCommand
{   let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("exit")
    {   return ReplCommand::Exit;
    }
    if trimmed.is_empty()
    {   return ReplCommand::Empty;
    }
    ReplCommand::Prompt(trimmed.to_string())
}

/// Process-lifetime loop. Returns when the operator types `exit` or
/// stdin closes; the HTTP client is dropped on every exit path.
pub async fn run(config: crate::config::Config)
  -> Result<(), crate::error::Error>
{   let client = OpenAiClient::new(config);

    println!("День 4: температура в OpenAI Responses API");
    println!("Модель: {}", client.model());
    println!("Введи один и тот же запрос, а приложение выполнит его с temperature=0, 0.7 и 1.2.");
    println!("Для выхода введи 'exit'.");
    println!();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop
    {   print!("Запрос > ");
        let _ = std::io::stdout().flush();

        let line = match lines.next_line().await
        {   Ok(Some(line)) => line
          , Ok(None) => {
              debug!("stdin closed, leaving loop");
              break;
            }
          , Err(e) => {
              error!("Failed to read stdin: {}", e);
              return Err(crate::error::Error::Other(
                e.to_string()
              ));
            }
        };

        match parse_line(&line)
        {   ReplCommand::Exit => {
              info!("Exit requested");
              break;
            }
          , ReplCommand::Empty => continue
          , ReplCommand::Prompt(prompt) => {
              // Transport and parse failures end only this turn
              if let Err(e) = run_turn(&client, &prompt).await
              {   error!("Turn failed: {}", e);
                  println!("Ошибка: {}", e);
                  println!();
              }
            }
        }
    }

    Ok(())
}

/// One user turn: echo, sweep, unsupported-temperature check,
/// per-temperature display, analysis
async fn run_turn(
  client: &OpenAiClient
, prompt: &str
) -> Result<(), crate::error::Error>
{   println!();
    println!("=== Исходный запрос ===");
    println!("{}", prompt);
    println!();

    let results = sweep::run_sweep(client, prompt).await?;

    if sweep::has_unsupported_temperature(&results)
    {   println!(
          "Ошибка: модель '{}' не поддерживает temperature.",
          client.model()
        );
        println!("Установи модель, которая поддерживает temperature, например:");
        println!("export OPENAI_MODEL=\"gpt-4.1-mini\"");
        println!();
        return Ok(());
    }

    for (index, result) in results.iter().enumerate()
    {   println!(
          "=== Ответ {}: temperature={} ===",
          index + 1,
          format_temperature(Some(result.temperature))
        );
        println!("{}", result.response);
        println!();
    }

    let analysis
      = sweep::run_analysis(client, prompt, &results).await?;
    println!("{}", analysis);
    println!();

    Ok(())
}
