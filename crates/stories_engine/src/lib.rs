//! Hacker Stories engine: HTTP fetching, request orchestration and durable storage.
mod decode;
mod engine;
mod fetch;
mod orchestrator;
mod persist;
mod storage;
mod types;

pub use decode::{decode_hits, DecodeError};
pub use engine::EngineHandle;
pub use fetch::{EventSink, FetchSettings, Fetcher, ReqwestFetcher};
pub use orchestrator::orchestrate_fetch;
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use storage::{KeyValueStore, MemoryStore, RonFileStore, StorageState, STORE_FILENAME};
pub use types::{EngineEvent, FailureKind, FetchError, RequestId, SearchHit, SearchResponse};
