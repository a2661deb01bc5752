use crate::error::NewsError;
use crate::models::{Entry, SourceInfo};
use serde::Serialize;
use serde_json::{Map, Value, json};
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{error, info, instrument};

fn render<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// `[{"path", "desc", "icon"?}, ...]`
pub fn render_sources(sources: &[SourceInfo], pretty: bool) -> Result<String, serde_json::Error> {
    render(sources, pretty)
}

/// One source's flat section/article stream.
pub fn render_entries(entries: &[Entry], pretty: bool) -> Result<String, serde_json::Error> {
    render(entries, pretty)
}

/// Several sources keyed by id. A failed source maps to `{"error": ...}`.
pub fn render_many(
    results: &[(String, Result<Vec<Entry>, NewsError>)],
    pretty: bool,
) -> Result<String, serde_json::Error> {
    let mut object = Map::new();
    for (id, result) in results {
        let value = match result {
            Ok(entries) => serde_json::to_value(entries)?,
            Err(e) => json!({ "error": e.to_string() }),
        };
        object.insert(id.clone(), value);
    }
    render(&Value::Object(object), pretty)
}

/// Write `json` to `path`, creating parent directories, or to stdout.
#[instrument(level = "info", skip_all, fields(path = ?path))]
pub async fn write_output(json: &str, path: Option<&str>) -> Result<(), Box<dyn Error>> {
    let Some(path) = path else {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(json.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
        return Ok(());
    };

    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent).await {
            error!(dir = %parent.display(), error = %e, "Failed to create output dir");
            return Err(e.into());
        }
    }
    fs::write(path, json).await?;
    info!(%path, bytes = json.len(), "Wrote JSON output");
    Ok(())
}
