use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use stories_logging::{stories_debug, stories_warn};

use crate::fetch::{EventSink, FetchSettings, Fetcher, ReqwestFetcher};
use crate::orchestrator::orchestrate_fetch;
use crate::RequestId;

enum EngineCommand {
    Fetch { request_id: RequestId, url: String },
}

/// Handle to the background fetch thread. Dropping it stops the thread once
/// queued commands have been handed to the runtime.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings, sink: Arc<dyn EventSink>) -> io::Result<Self> {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings)), sink)
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>, sink: Arc<dyn EventSink>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("stories-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let fetcher = fetcher.clone();
                    let sink = sink.clone();
                    runtime.spawn(async move {
                        handle_command(fetcher.as_ref(), command, sink.as_ref()).await;
                    });
                }
                stories_debug!("Engine command channel closed");
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn fetch(&self, request_id: RequestId, url: impl Into<String>) {
        let command = EngineCommand::Fetch {
            request_id,
            url: url.into(),
        };
        if self.cmd_tx.send(command).is_err() {
            stories_warn!("Engine thread is gone; dropping request_id={}", request_id);
        }
    }
}

async fn handle_command(fetcher: &dyn Fetcher, command: EngineCommand, sink: &dyn EventSink) {
    match command {
        EngineCommand::Fetch { request_id, url } => {
            orchestrate_fetch(fetcher, request_id, &url, sink).await;
        }
    }
}
