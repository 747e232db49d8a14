//! Application State
//!
//! Shared state accessible by all API handlers.
//! Every view-model sits behind its own lock; mutations take the write lock.

use chrono::{Local, NaiveDate};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

use crate::config;
use crate::forum::{ForumPost, ForumThread, ForumTopic};
use crate::journal::Journal;
use crate::mood::MoodTracker;
use crate::resources::ResourceDirectory;
use crate::seed;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Forum topic list (read-only)
    pub topics: Arc<Vec<ForumTopic>>,
    /// The open discussion thread
    pub thread: Arc<RwLock<ForumThread>>,
    /// Mood tracker with its draft and selected date
    pub tracker: Arc<RwLock<MoodTracker>>,
    /// Journal entries, prompt and pane
    pub journal: Arc<RwLock<Journal>>,
    /// Resource catalog with like state
    pub resources: Arc<RwLock<ResourceDirectory>>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state from explicit view-models
    pub fn new(
        topics: Vec<ForumTopic>,
        thread: ForumThread,
        tracker: MoodTracker,
        journal: Journal,
        resources: ResourceDirectory,
        config: ApiConfig,
    ) -> Self {
        Self {
            topics: Arc::new(topics),
            thread: Arc::new(RwLock::new(thread)),
            tracker: Arc::new(RwLock::new(tracker)),
            journal: Arc::new(RwLock::new(journal)),
            resources: Arc::new(RwLock::new(resources)),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Create state populated with the built-in sample data
    pub fn seeded(config: ApiConfig) -> Self {
        Self::seeded_on(Local::now().date_naive(), config)
    }

    /// Sample data relative to a fixed "today"
    pub fn seeded_on(today: NaiveDate, config: ApiConfig) -> Self {
        Self::new(
            seed::forum_topics(),
            seed::forum_thread(),
            seed::mood_tracker(today),
            seed::journal(today),
            seed::resource_directory(),
            config,
        )
    }

    /// Create state with every collection empty.
    /// The forum still needs a post to comment on, so the seeded post is kept.
    pub fn empty(config: ApiConfig) -> Self {
        let post: ForumPost = seed::forum_thread().post().clone();
        Self::new(
            Vec::new(),
            ForumThread::new(post, Vec::new()),
            MoodTracker::new(Vec::new()),
            Journal::new(Vec::new()),
            ResourceDirectory::new(Vec::new()),
            config,
        )
    }

    /// Build state according to the `[seed]` section
    pub fn from_config(config: &config::Config) -> Self {
        let api = ApiConfig::from(&config.api);
        if config.seed.sample_data {
            Self::seeded(api)
        } else {
            Self::empty(api)
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Allowed CORS origins; empty allows any origin
    pub cors_origins: Vec<String>,
    /// Maximum request body size in bytes
    pub max_body_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8086,
            cors_origins: Vec::new(),
            max_body_size: 64 * 1024,
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl From<&config::ApiConfig> for ApiConfig {
    fn from(config: &config::ApiConfig) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
            cors_origins: config.cors_origins.clone(),
            ..Default::default()
        }
    }
}
