use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use stories_core::API_ENDPOINT;
use stories_engine::FetchSettings;

use super::logging::LogDestination;

/// Search Hacker News stories from the terminal.
#[derive(Parser, Debug)]
#[command(name = "hacker_stories")]
#[command(version)]
#[command(about = "Search Hacker News stories from the terminal", long_about = None)]
pub struct Cli {
    /// Search endpoint; the url-encoded search term is appended to it
    #[arg(long, default_value = API_ENDPOINT)]
    pub endpoint: String,

    /// Directory holding the persisted search term and the log file
    #[arg(long, default_value = ".")]
    pub state_dir: PathBuf,

    /// Where log output goes; terminal output draws over the UI, so keep it for debugging
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    /// Seconds allowed for establishing a connection
    #[arg(long, default_value_t = 10)]
    pub connect_timeout_secs: u64,

    /// Seconds allowed for a whole request
    #[arg(long, default_value_t = 30)]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub endpoint: String,
    pub state_dir: PathBuf,
    pub log: LogDestination,
    pub fetch: FetchSettings,
}

impl Cli {
    pub fn into_config(self) -> AppConfig {
        AppConfig {
            endpoint: self.endpoint,
            state_dir: self.state_dir,
            log: self.log,
            fetch: FetchSettings {
                connect_timeout: Duration::from_secs(self.connect_timeout_secs),
                request_timeout: Duration::from_secs(self.request_timeout_secs),
                ..FetchSettings::default()
            },
        }
    }
}
