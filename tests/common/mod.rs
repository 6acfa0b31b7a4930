//! tests/common/mod.rs
//! Shared helpers: test configuration, fake author stores, error-log capture
//! and a server spawned on an ephemeral port.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response, Router};
use chrono::NaiveDate;
use tokio::net::TcpListener as TokioTcpListener;
use tower::ServiceExt;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use library_catalog_api::config::environment::EnvironmentVariables;
use library_catalog_api::config::state::AppState;
use library_catalog_api::core::server::create_app;
use library_catalog_api::database::{AuthorRepository, InMemoryAuthorRepository, RepositoryError};
use library_catalog_api::models::{Author, AuthorRecord, SortDirective};

pub fn test_environment() -> Arc<EnvironmentVariables> {
    let vars: HashMap<String, String> = [
        ("ENVIRONMENT", "test"),
        ("AUTHOR_STORE", "memory"),
        ("DEFAULT_TIMEOUT_SECONDS", "2"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    Arc::new(EnvironmentVariables::from_vars(&vars).expect("test configuration"))
}

pub fn state_with(repository: Arc<dyn AuthorRepository>) -> AppState {
    AppState::new(test_environment(), repository)
}

pub fn app_with(repository: Arc<dyn AuthorRepository>) -> Router {
    create_app(state_with(repository))
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// The four catalog entries used across the listing tests
pub fn fixture_records() -> Vec<AuthorRecord> {
    vec![
        AuthorRecord::new("Kim", "Woon", date(1958, 10, 10), Some(date(2020, 1, 1))),
        AuthorRecord::new("Moon", "Sen", date(1964, 5, 21), None),
        AuthorRecord::new("John", "Woon", date(1989, 1, 9), Some(date(2020, 1, 1))),
        AuthorRecord::new("Moon", "Sen", date(1992, 12, 27), None),
    ]
}

pub fn memory_repository(records: Vec<AuthorRecord>) -> Arc<dyn AuthorRepository> {
    Arc::new(InMemoryAuthorRepository::with_records(records))
}

/// Store that records every directive it receives
#[derive(Debug, Default)]
pub struct RecordingRepository {
    pub inner: InMemoryAuthorRepository,
    pub calls: Mutex<Vec<Option<SortDirective>>>,
}

impl RecordingRepository {
    pub fn new(records: Vec<AuthorRecord>) -> Self {
        Self {
            inner: InMemoryAuthorRepository::with_records(records),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Option<SortDirective>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthorRepository for RecordingRepository {
    async fn get_all_authors(
        &self,
        sort: Option<&SortDirective>,
    ) -> Result<Vec<Author>, RepositoryError> {
        self.calls.lock().unwrap().push(sort.cloned());
        self.inner.get_all_authors(sort).await
    }
}

/// Store whose every call fails
#[derive(Debug, Default)]
pub struct FailingRepository;

pub const FAILURE_DETAIL: &str = "connection refused by db-primary:5432";

#[async_trait]
impl AuthorRepository for FailingRepository {
    async fn get_all_authors(
        &self,
        _sort: Option<&SortDirective>,
    ) -> Result<Vec<Author>, RepositoryError> {
        Err(RepositoryError::Unavailable(FAILURE_DETAIL.to_string()))
    }
}

/// Counts ERROR events emitted by this crate
#[derive(Clone, Default)]
pub struct ErrorCounter(Arc<AtomicUsize>);

impl ErrorCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if *metadata.level() == Level::ERROR && metadata.target().starts_with("library_catalog_api") {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Installs an error counter as the thread's default subscriber.
/// Keep the guard alive for the duration of the test.
pub fn capture_errors() -> (ErrorCounter, tracing::subscriber::DefaultGuard) {
    let counter: ErrorCounter = ErrorCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let guard = tracing::subscriber::set_default(subscriber);
    (counter, guard)
}

/// Sends a GET through the router without a network hop
pub async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

/// Spawns the app on a random unused port and returns its base URL.
pub async fn spawn_app(repository: Arc<dyn AuthorRepository>) -> String {
    let app: Router = app_with(repository);

    let listener: TokioTcpListener = TokioTcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let addr: std::net::SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Server failed");
    });

    format!("http://{}", addr)
}
