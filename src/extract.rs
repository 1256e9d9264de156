//! Extraction of display text from a Responses API body.
//!
//! The API answers in several shapes: a top-level `output_text`
//! convenience field, an `output` array of typed items, or an `error`
//! object. Extraction is a pure function of the body text.

use log::trace;
use serde_json::Value;

/// Extract the model's answer (or a displayable error string) from a
/// raw response body.
///
/// Priority: `error.message`, then `output_text`, then the `output`
/// array walk, then a diagnostic string naming the response status and
/// the number of output items.
pub fn extract_output_text(body: &str)
  -> Result<String, crate::error::Error>
{   let json: Value = serde_json::from_str(body)
      .map_err(|e| {
        crate::error::Error::ParseError(e.to_string())
      })?;

    let json = json.as_object().ok_or_else(|| {
      crate::error::Error::ParseError(
        "response body is not a JSON object".to_string()
      )
    })?;

    let error_message = text_value(
      json.get("error")
        .and_then(Value::as_object)
        .and_then(|e| e.get("message"))
    );
    if let Some(message) = error_message
    {   if !message.trim().is_empty()
        {   return Ok(format!("Ошибка API: {}", message));
        }
    }

    if let Some(text) = text_value(json.get("output_text"))
    {   if !text.trim().is_empty()
        {   return Ok(text);
        }
    }

    let answer = collect_output_fragments(json.get("output"));
    if !answer.trim().is_empty()
    {   return Ok(answer);
    }

    let status = text_value(json.get("status"))
      .unwrap_or_else(|| "null".to_string());
    let output_items = json.get("output")
      .and_then(Value::as_array)
      .map(|arr| arr.len())
      .unwrap_or(0);
    trace!(
      "No extractable text: status={}, output_items={}",
      status, output_items
    );
    Ok(format!(
      "Ошибка: не удалось извлечь текст ответа (status={}, output_items={})",
      status, output_items
    ))
}

/// Walk the `output` array, concatenating text fragments in order
/// with no separator.
fn collect_output_fragments(output: Option<&Value>) -> String
{   let mut answer = String::new();
    let output = match output.and_then(Value::as_array)
    {   Some(arr) => arr
      , None => return answer
    };

    for item in output
    {   let obj = match item.as_object()
        {   Some(obj) => obj
          , None => continue
        };

        let item_type = text_value(obj.get("type"));
        if item_type.as_deref() == Some("output_text")
        {   if let Some(text) = text_value(obj.get("text"))
            {   answer.push_str(&text);
            }
            continue;
        }

        if item_type.as_deref() != Some("message")
        {   continue;
        }
        let content = match obj.get("content")
          .and_then(Value::as_array)
        {   Some(arr) => arr
          , None => continue
        };
        for content_item in content
        {   let content_obj = match content_item.as_object()
            {   Some(obj) => obj
              , None => continue
            };
            let content_type = text_value(content_obj.get("type"));
            if content_type.as_deref() == Some("output_text")
              || content_type.as_deref() == Some("text")
            {   let text = text_value(content_obj.get("text"))
                  .or_else(|| text_value(content_obj.get("value")));
                if let Some(text) = text
                {   answer.push_str(&text);
                }
            }
        }
    }
    answer
}

/// Resolve a JSON value to its textual content.
/// Objects resolve recursively through their `value` field; strings,
/// numbers and bools yield their text; null and arrays yield None.
pub fn text_value(element: Option<&Value>) -> Option<String>
{   match element?
    {   Value::Object(obj) => text_value(obj.get("value"))
      , Value::String(s) => Some(s.clone())
      , Value::Number(n) => Some(n.to_string())
      , Value::Bool(b) => Some(b.to_string())
      , _ => None
    }
}
