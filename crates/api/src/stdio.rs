//! Line-delimited JSON transport.
//!
//! Each input line is `{"tool": name, "arguments": {...}}`; each output line
//! is `{"tool": name, "ok": true, "result": ...}` or
//! `{"tool": name, "ok": false, "error": CODE, "message": text}`.

use cashcast_shared::AppError;
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use crate::AppState;
use crate::tools;

#[derive(Debug, Deserialize)]
struct ToolCall {
    tool: String,
    #[serde(default)]
    arguments: Value,
}

/// Answers one request line.
#[must_use]
pub fn handle_line(state: &AppState, line: &str) -> Value {
    let call: ToolCall = match serde_json::from_str(line) {
        Ok(call) => call,
        Err(e) => {
            return failure(
                Value::Null,
                &AppError::Validation(format!("Malformed request: {e}")),
            );
        }
    };

    match tools::dispatch(state, &call.tool, call.arguments) {
        Ok(result) => json!({"tool": call.tool, "ok": true, "result": result}),
        Err(err) => {
            warn!(tool = %call.tool, error = %err, "Tool call failed");
            failure(Value::String(call.tool), &err)
        }
    }
}

fn failure(tool: Value, err: &AppError) -> Value {
    json!({
        "tool": tool,
        "ok": false,
        "error": err.error_code(),
        "message": err.to_string(),
    })
}

/// Serves requests from `reader` until end of input, one response per line.
///
/// # Errors
///
/// Returns an I/O error if reading or writing fails.
pub async fn serve<R, W>(state: &AppState, reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let response = handle_line(state, &line);
        writer.write_all(response.to_string().as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }
    Ok(())
}

/// Serves stdin/stdout.
///
/// # Errors
///
/// Returns an I/O error if stdin or stdout fails.
pub async fn serve_stdio(state: AppState) -> std::io::Result<()> {
    info!("Serving tools on stdio");
    serve(&state, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
}
