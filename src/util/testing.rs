// src/util/testing.rs

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{MetadataRepository, VersionIndex};
use crate::domain::{DomainError, MetadataRecord, ModelRef, RemoteVersion};
use crate::ports::dialog::{ActionButton, DialogHost, DialogView};

enum LookupBehavior {
    Found(RemoteVersion),
    NotFound,
    Status(u16, String),
}

/// Shared mock repository for testing use cases that depend on
/// MetadataRepository.
///
/// Records and failures are keyed by the `type/name` composite; an
/// unconfigured model fails the fetch, matching a service that has
/// never heard of the asset.
///
/// # Examples
///
/// ```
/// use modelview::util::testing::MockMetadataRepository;
/// use modelview::domain::ModelRef;
/// use serde_json::json;
///
/// let model = ModelRef::new("loras", "detail.safetensors");
/// let mock = MockMetadataRepository::builder()
///     .with_record(&model, json!({"pysssss.notes": "hi"}))
///     .build();
/// ```
pub struct MockMetadataRepository {
    records: HashMap<String, MetadataRecord>,
    failures: HashMap<String, String>,
}

impl MockMetadataRepository {
    pub fn builder() -> MockMetadataRepositoryBuilder {
        MockMetadataRepositoryBuilder::new()
    }
}

#[async_trait]
impl MetadataRepository for MockMetadataRepository {
    async fn get_metadata(&self, model: &ModelRef) -> Result<MetadataRecord, DomainError> {
        let key = model.composite();
        if let Some(reason) = self.failures.get(&key) {
            return Err(DomainError::MetadataUnavailable {
                model: model.to_string(),
                reason: reason.clone(),
            });
        }
        self.records
            .get(&key)
            .cloned()
            .ok_or_else(|| DomainError::MetadataUnavailable {
                model: model.to_string(),
                reason: "no record configured".to_string(),
            })
    }
}

/// Builder for MockMetadataRepository
pub struct MockMetadataRepositoryBuilder {
    records: HashMap<String, MetadataRecord>,
    failures: HashMap<String, String>,
}

impl MockMetadataRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            failures: HashMap::new(),
        }
    }

    /// Add a metadata record served for a model, given as JSON.
    pub fn with_record(mut self, model: &ModelRef, record: serde_json::Value) -> Self {
        let record: MetadataRecord =
            serde_json::from_value(record).expect("record fixture must be a JSON object");
        self.records.insert(model.composite(), record);
        self
    }

    /// Configure the fetch for a model to fail with the given reason.
    pub fn with_failure(mut self, model: &ModelRef, reason: impl Into<String>) -> Self {
        self.failures.insert(model.composite(), reason.into());
        self
    }

    pub fn build(self) -> MockMetadataRepository {
        MockMetadataRepository {
            records: self.records,
            failures: self.failures,
        }
    }
}

impl Default for MockMetadataRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared mock version index keyed by content hash. An unconfigured
/// hash answers "not found", like the real index.
pub struct MockVersionIndex {
    behaviors: HashMap<String, LookupBehavior>,
}

impl MockVersionIndex {
    pub fn builder() -> MockVersionIndexBuilder {
        MockVersionIndexBuilder::new()
    }
}

#[async_trait]
impl VersionIndex for MockVersionIndex {
    async fn find_by_hash(&self, hash: &str) -> Result<RemoteVersion, DomainError> {
        match self.behaviors.get(hash) {
            Some(LookupBehavior::Found(version)) => Ok(version.clone()),
            Some(LookupBehavior::Status(status, reason)) => Err(DomainError::LookupFailed {
                status: *status,
                reason: reason.clone(),
            }),
            Some(LookupBehavior::NotFound) | None => Err(DomainError::ModelNotFound),
        }
    }
}

/// Builder for MockVersionIndex
pub struct MockVersionIndexBuilder {
    behaviors: HashMap<String, LookupBehavior>,
}

impl MockVersionIndexBuilder {
    pub fn new() -> Self {
        Self {
            behaviors: HashMap::new(),
        }
    }

    /// Add a version found for a hash.
    pub fn with_version(mut self, hash: impl Into<String>, version: RemoteVersion) -> Self {
        self.behaviors
            .insert(hash.into(), LookupBehavior::Found(version));
        self
    }

    /// Configure a hash to answer 404.
    pub fn with_not_found(mut self, hash: impl Into<String>) -> Self {
        self.behaviors.insert(hash.into(), LookupBehavior::NotFound);
        self
    }

    /// Configure a hash to fail with an arbitrary status.
    pub fn with_status(
        mut self,
        hash: impl Into<String>,
        status: u16,
        reason: impl Into<String>,
    ) -> Self {
        self.behaviors
            .insert(hash.into(), LookupBehavior::Status(status, reason.into()));
        self
    }

    pub fn build(self) -> MockVersionIndex {
        MockVersionIndex {
            behaviors: self.behaviors,
        }
    }
}

impl Default for MockVersionIndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a dialog session pushed through its host, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Opened(DialogView),
    ActionAppended(ActionButton),
    Refreshed(DialogView),
    Closed,
}

/// Dialog host that records every call for later assertions.
///
/// With `dismiss_mid_fetch` set, `is_open` answers false as soon as the
/// dialog has been opened, simulating a user closing it while a fetch
/// is still in flight.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub events: Vec<HostEvent>,
    open: bool,
    dismiss_mid_fetch: bool,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dismissal_mid_fetch() -> Self {
        Self {
            dismiss_mid_fetch: true,
            ..Self::default()
        }
    }

    /// The view of the last refresh, if any refresh happened.
    pub fn last_refresh(&self) -> Option<&DialogView> {
        self.events.iter().rev().find_map(|e| match e {
            HostEvent::Refreshed(view) => Some(view),
            _ => None,
        })
    }

    pub fn refresh_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, HostEvent::Refreshed(_)))
            .count()
    }
}

impl DialogHost for RecordingHost {
    fn open(&mut self, view: &DialogView) {
        self.open = true;
        self.events.push(HostEvent::Opened(view.clone()));
    }

    fn append_action(&mut self, button: &ActionButton) {
        self.events.push(HostEvent::ActionAppended(button.clone()));
    }

    fn refresh(&mut self, view: &DialogView) {
        self.events.push(HostEvent::Refreshed(view.clone()));
    }

    fn close(&mut self) {
        self.open = false;
        self.events.push(HostEvent::Closed);
    }

    fn is_open(&self) -> bool {
        if self.dismiss_mid_fetch {
            return false;
        }
        self.open
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "mio", "want"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
