use log::{debug, warn};
use serde_json::Value;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinSet;

use super::events::JsonLineSink;
use super::protocol::{BAD_REQUEST, Request, Response, dispatch};
use crate::app::App;
use crate::release::FetchRelease;
use crate::runtime::Runtime;

/// Serve bound operations over a line-delimited JSON stream until EOF.
///
/// Each request runs on its own task and replies as soon as it finishes, so
/// a long download never holds up other calls. Replies may therefore arrive
/// out of order; the `id` ties them to their request. The background update
/// check is scheduled first and writes its event to the same sink. On EOF,
/// requests still in flight are awaited before returning.
pub async fn serve<R, F, I>(
    app: Arc<App<R, F>>,
    input: I,
    sink: Arc<JsonLineSink>,
) -> std::io::Result<()>
where
    R: Runtime + 'static,
    F: FetchRelease + 'static,
    I: AsyncBufRead + Unpin,
{
    let _auto_check = app.startup(sink.clone());
    let mut in_flight = JoinSet::new();

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let request = match serde_json::from_str::<Request>(&line) {
            Ok(request) => request,
            Err(e) => {
                let response = Response::err(
                    Value::Null,
                    BAD_REQUEST,
                    format!("Malformed request: {}", e),
                );
                sink.write_message(&response)?;
                continue;
            }
        };

        let app = app.clone();
        let sink = sink.clone();
        in_flight.spawn(async move {
            let response = dispatch(&app, request).await;
            if let Err(e) = sink.write_message(&response) {
                warn!("Failed to write reply for request {}: {}", response.id, e);
            }
        });
    }

    debug!(
        "Bridge input closed, waiting for {} requests",
        in_flight.len()
    );
    while let Some(joined) = in_flight.join_next().await {
        if let Err(e) = joined {
            warn!("Request task failed: {}", e);
        }
    }
    Ok(())
}
