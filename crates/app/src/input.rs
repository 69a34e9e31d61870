use std::path::Path;

use common::structure::Structure;
use tokio::io::AsyncReadExt;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a JSON document from `path`, or from stdin when `path`
///  is absent or `-`
pub async fn read_document(path: Option<&Path>) -> Result<Structure, InputError> {
    let text = match path {
        Some(path) if path != Path::new("-") => {
            tracing::debug!(path = %path.display(), "reading document");
            tokio::fs::read_to_string(path).await?
        }
        _ => {
            tracing::debug!("reading document from stdin");
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
    };
    Ok(serde_json::from_str(&text)?)
}

/// Interpret a command line value as JSON, falling back to a plain string
pub fn parse_inline(text: &str) -> Structure {
    serde_json::from_str(text).unwrap_or_else(|_| Structure::String(text.to_string()))
}

/// Serialize `value` for output
pub fn render(value: &Structure, pretty: bool) -> Result<String, InputError> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}
