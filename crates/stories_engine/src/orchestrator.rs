use stories_logging::{stories_info, stories_warn};

use crate::{EngineEvent, EventSink, Fetcher, RequestId};

/// Runs one request: `FetchInit` first, then exactly one of `FetchSucceeded`/`FetchFailed`.
pub async fn orchestrate_fetch(
    fetcher: &dyn Fetcher,
    request_id: RequestId,
    url: &str,
    sink: &dyn EventSink,
) {
    sink.emit(EngineEvent::FetchInit { request_id });

    match fetcher.fetch(url).await {
        Ok(hits) => {
            stories_info!(
                "Fetch request_id={} returned {} hits",
                request_id,
                hits.len()
            );
            sink.emit(EngineEvent::FetchSucceeded { request_id, hits });
        }
        Err(error) => {
            stories_warn!("Fetch request_id={} failed: {}", request_id, error);
            sink.emit(EngineEvent::FetchFailed { request_id, error });
        }
    }
}
