use std::fmt;

/// Custom error type for tempsweep operations
/// Implements Clone for passing between turns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Required API key environment variable is unset
    MissingApiKey(String)
  , /// HTTP request error (DNS, connect, timeout)
    HttpError(String)
  , /// Failed to parse API response body as JSON
    ParseError(String)
  , /// Generic error
    Other(String)
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingApiKey(var) => {
              write!(f, "Set {} environment variable", var)
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::Other(msg) => {
              write!(f, "Error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<String> for Error
{   fn from(s: String) -> Self
    {   Error::Other(s)
    }
}

impl From<&str> for Error
{   fn from(s: &str) -> Self
    {   Error::Other(s.to_string())
    }
}
