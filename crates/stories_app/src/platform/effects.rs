use std::io;
use std::sync::{mpsc, Arc};

use stories_core::{Effect, FetchFailure, Msg, Story, StoryId};
use stories_engine::{
    EngineEvent, EngineHandle, EventSink, FailureKind, FetchSettings, RonFileStore, SearchHit,
    StorageState,
};
use stories_logging::{stories_debug, stories_warn};

pub struct EffectRunner {
    engine: EngineHandle,
    storage: StorageState<RonFileStore>,
}

impl EffectRunner {
    pub fn new(
        settings: FetchSettings,
        storage: StorageState<RonFileStore>,
        msg_tx: mpsc::Sender<Msg>,
    ) -> io::Result<Self> {
        let engine = EngineHandle::new(settings, Arc::new(MsgSink { tx: msg_tx }))?;
        Ok(Self { engine, storage })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PersistSearchTerm { key, value } => {
                    self.storage.set(&key, &value);
                }
                Effect::FetchStories { request_id, url } => {
                    stories_debug!("Handing request_id={} to engine", request_id);
                    self.engine.fetch(request_id, url);
                }
            }
        }
    }
}

/// Forwards engine events into the UI loop's inbox.
struct MsgSink {
    tx: mpsc::Sender<Msg>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        if self.tx.send(map_event(event)).is_err() {
            stories_warn!("UI loop is gone; dropping engine event");
        }
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FetchInit { request_id } => Msg::FetchStarted { request_id },
        EngineEvent::FetchSucceeded { request_id, hits } => Msg::FetchSucceeded {
            request_id,
            stories: hits.into_iter().map(map_hit).collect(),
        },
        EngineEvent::FetchFailed { request_id, error } => Msg::FetchFailed {
            request_id,
            failure: map_failure(&error.kind),
        },
    }
}

fn map_hit(hit: SearchHit) -> Story {
    Story {
        id: StoryId::new(hit.object_id),
        title: hit.title,
        url: hit.url,
        author: hit.author,
        num_comments: hit.num_comments,
        points: hit.points,
    }
}

fn map_failure(kind: &FailureKind) -> FetchFailure {
    match kind {
        FailureKind::HttpStatus(code) => FetchFailure::HttpStatus(*code),
        FailureKind::Decode => FetchFailure::Decode,
        FailureKind::InvalidUrl
        | FailureKind::Timeout
        | FailureKind::RedirectLimitExceeded
        | FailureKind::TooLarge { .. }
        | FailureKind::Network => FetchFailure::Network,
    }
}
