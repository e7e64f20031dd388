//! Status and health check handlers for the SeoScribe HTTP service.
//!
//! This module provides HTTP endpoints for monitoring service health and
//! metrics:
//! - `/status` - Detailed service status with runtime metrics
//! - `/health` - Simple health check for systemd/load balancers
//! - `/ready`  - Readiness probe
//!
//! # Architecture
//!
//! ```text
//! HTTP Request ──> Axum Router ──> status_handler ──> AppState
//!                                        │                │
//!                                        ▼                ▼
//!                              StatusResponse    LatencyHistogram
//!                                        │         + Counters
//!                                        ▼
//!                                   JSON Response
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use hdrhistogram::Histogram;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use sysinfo::{Pid, ProcessesToUpdate, System};
use tracing::{debug, instrument};

use crate::pipeline::ArticlePipeline;

/// Service version from Cargo.toml
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Service name from Cargo.toml
pub const SERVICE_NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Response Types
// ============================================================================

/// Health check response for simple liveness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status (always "healthy" if responding)
    pub status: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// Detailed service status response with runtime metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Service version (from Cargo.toml)
    pub version: String,

    /// Service name
    pub name: String,

    /// Service uptime in seconds
    pub uptime_seconds: u64,

    /// Total number of articles generated
    pub articles_generated: u64,

    /// Number of generation pipelines currently in flight
    pub active_generations: u64,

    /// Memory usage metrics
    pub memory: MemoryMetrics,

    /// Request latency statistics (percentiles)
    pub latency: LatencyMetrics,

    /// Service status (always "running" if responding)
    pub status: String,

    /// ISO8601 timestamp of when status was generated
    pub timestamp: String,
}

/// Memory usage metrics collected from sysinfo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryMetrics {
    /// Resident Set Size - actual physical memory used (bytes)
    pub rss_bytes: u64,

    /// Virtual memory size (bytes)
    pub virtual_bytes: u64,

    /// CPU usage percentage (0.0 - 100.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_percent: Option<f32>,
}

/// Request latency percentile metrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatencyMetrics {
    /// 50th percentile (median) latency in milliseconds
    pub p50_ms: f64,

    /// 95th percentile latency in milliseconds
    pub p95_ms: f64,

    /// 99th percentile latency in milliseconds
    pub p99_ms: f64,

    /// Total number of requests recorded
    pub total_requests: u64,

    /// Mean latency in milliseconds
    pub mean_ms: f64,

    /// Maximum latency recorded in milliseconds
    pub max_ms: f64,
}

// ============================================================================
// Latency Histogram
// ============================================================================

/// Thread-safe latency histogram for recording request timings.
///
/// Uses HdrHistogram for efficient percentile calculations with minimal
/// memory. Tracks latencies from 1 microsecond to 10 minutes with 3
/// significant figures of precision — generation requests sit behind an LLM
/// call, so the upper bound is generous.
#[derive(Debug)]
pub struct LatencyHistogram {
    inner: RwLock<Histogram<u64>>,
}

impl LatencyHistogram {
    /// Create a new latency histogram.
    pub fn new() -> Self {
        let histogram =
            Histogram::new_with_bounds(1, 600_000_000, 3).expect("Failed to create histogram");
        Self {
            inner: RwLock::new(histogram),
        }
    }

    /// Record a latency value in microseconds.
    ///
    /// Values outside the histogram bounds are silently ignored.
    pub fn record(&self, latency_us: u64) {
        let mut hist = self.inner.write();
        let _ = hist.record(latency_us);
    }

    /// Record a latency duration.
    pub fn record_duration(&self, duration: std::time::Duration) {
        self.record(duration.as_micros() as u64);
    }

    /// Get a percentile value in microseconds (0 if empty).
    pub fn percentile(&self, percentile: f64) -> u64 {
        let hist = self.inner.read();
        hist.value_at_percentile(percentile)
    }

    /// Get the total count of recorded values.
    pub fn count(&self) -> u64 {
        let hist = self.inner.read();
        hist.len()
    }

    /// Get the mean latency in microseconds.
    pub fn mean(&self) -> f64 {
        let hist = self.inner.read();
        hist.mean()
    }

    /// Get complete latency metrics with percentiles in milliseconds.
    pub fn metrics(&self) -> LatencyMetrics {
        let hist = self.inner.read();
        LatencyMetrics {
            p50_ms: hist.value_at_percentile(50.0) as f64 / 1000.0,
            p95_ms: hist.value_at_percentile(95.0) as f64 / 1000.0,
            p99_ms: hist.value_at_percentile(99.0) as f64 / 1000.0,
            total_requests: hist.len(),
            mean_ms: hist.mean() / 1000.0,
            max_ms: hist.max() as f64 / 1000.0,
        }
    }

    /// Reset the histogram, clearing all recorded values.
    pub fn reset(&self) {
        let mut hist = self.inner.write();
        hist.reset();
    }
}

impl Default for LatencyHistogram {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Application State
// ============================================================================

/// Shared application state: the injected pipeline plus metrics counters.
///
/// One instance is created at startup and shared across requests. The
/// pipeline handle is read-only; every counter is thread-safe. No analyzer
/// or scorer state lives here — each request builds its reports fresh.
pub struct AppState {
    /// The article generation pipeline with its injected collaborators
    pipeline: ArticlePipeline,

    /// Service start time for uptime calculation
    start_time: Instant,

    /// Total number of articles generated (atomic for thread safety)
    articles_generated: AtomicU64,

    /// Current number of in-flight generation pipelines
    active_generations: AtomicU64,

    /// Request latency histogram for percentile calculations
    latency_histogram: LatencyHistogram,

    /// Total number of HTTP requests processed
    total_requests: AtomicU64,

    /// Total number of errors encountered
    error_count: AtomicU64,
}

impl AppState {
    /// Create a new AppState around an article pipeline.
    pub fn new(pipeline: ArticlePipeline) -> Self {
        Self {
            pipeline,
            start_time: Instant::now(),
            articles_generated: AtomicU64::new(0),
            active_generations: AtomicU64::new(0),
            latency_histogram: LatencyHistogram::new(),
            total_requests: AtomicU64::new(0),
            error_count: AtomicU64::new(0),
        }
    }

    /// The injected article pipeline.
    #[inline]
    pub fn pipeline(&self) -> &ArticlePipeline {
        &self.pipeline
    }

    /// Get the service uptime in seconds.
    #[inline]
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Get the total number of articles generated.
    #[inline]
    pub fn articles_generated(&self) -> u64 {
        self.articles_generated.load(Ordering::Relaxed)
    }

    /// Increment the article counter and return the new value.
    #[inline]
    pub fn record_article(&self) -> u64 {
        self.articles_generated.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Get the number of in-flight generations.
    #[inline]
    pub fn active_generations(&self) -> u64 {
        self.active_generations.load(Ordering::Relaxed)
    }

    /// Increment the in-flight generation gauge.
    #[inline]
    pub fn begin_generation(&self) -> u64 {
        self.active_generations.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Decrement the in-flight generation gauge.
    ///
    /// Uses a compare-exchange loop to prevent underflow.
    #[inline]
    pub fn end_generation(&self) -> u64 {
        loop {
            let current = self.active_generations.load(Ordering::Relaxed);
            if current == 0 {
                return 0;
            }
            match self.active_generations.compare_exchange_weak(
                current,
                current - 1,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return current - 1,
                Err(_) => continue,
            }
        }
    }

    /// Record a request latency duration.
    #[inline]
    pub fn record_latency(&self, duration: std::time::Duration) {
        self.latency_histogram.record_duration(duration);
        self.total_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the latency metrics.
    #[inline]
    pub fn latency_metrics(&self) -> LatencyMetrics {
        self.latency_histogram.metrics()
    }

    /// Get the total number of requests processed.
    #[inline]
    pub fn total_requests(&self) -> u64 {
        self.total_requests.load(Ordering::Relaxed)
    }

    /// Record an error.
    #[inline]
    pub fn record_error(&self) -> u64 {
        self.error_count.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Get the total error count.
    #[inline]
    pub fn error_count(&self) -> u64 {
        self.error_count.load(Ordering::Relaxed)
    }

    /// Reset all metrics (useful for testing).
    pub fn reset_metrics(&self) {
        self.articles_generated.store(0, Ordering::Relaxed);
        self.active_generations.store(0, Ordering::Relaxed);
        self.total_requests.store(0, Ordering::Relaxed);
        self.error_count.store(0, Ordering::Relaxed);
        self.latency_histogram.reset();
    }
}

// ============================================================================
// System Metrics Collection
// ============================================================================

/// Collect memory metrics for the current process using sysinfo.
///
/// Returns default (zero) values when the process cannot be found.
fn collect_memory_metrics() -> MemoryMetrics {
    let pid = Pid::from_u32(std::process::id());
    let mut system = System::new();

    system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);

    match system.process(pid) {
        Some(process) => MemoryMetrics {
            rss_bytes: process.memory(),
            virtual_bytes: process.virtual_memory(),
            cpu_percent: None, // CPU requires multiple samples, skip for status
        },
        None => {
            debug!("Could not find current process in sysinfo");
            MemoryMetrics::default()
        }
    }
}

// ============================================================================
// HTTP Handlers
// ============================================================================

/// Health check endpoint handler.
///
/// # Route
/// `GET /health`
#[instrument(skip_all)]
pub async fn health_handler() -> impl IntoResponse {
    debug!("Health check requested");
    (StatusCode::OK, Json(HealthResponse::default()))
}

/// Detailed status endpoint handler.
///
/// Returns version, uptime, generation counters, memory usage, and request
/// latency percentiles.
///
/// # Route
/// `GET /status`
#[instrument(skip_all)]
pub async fn status_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    debug!("Status check requested");

    let memory = collect_memory_metrics();
    let latency = state.latency_metrics();

    let response = StatusResponse {
        version: SERVICE_VERSION.to_string(),
        name: SERVICE_NAME.to_string(),
        uptime_seconds: state.uptime_seconds(),
        articles_generated: state.articles_generated(),
        active_generations: state.active_generations(),
        memory,
        latency,
        status: "running".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check endpoint handler.
///
/// # Route
/// `GET /ready`
#[instrument(skip_all)]
pub async fn readiness_handler() -> impl IntoResponse {
    debug!("Readiness check requested");
    (StatusCode::OK, Json(HealthResponse::default()))
}

// ============================================================================
// Router Setup
// ============================================================================

/// Create the status router with all health and status endpoints.
///
/// # Routes
/// - `GET /health` - Simple health check
/// - `GET /status` - Detailed status with metrics
/// - `GET /ready` - Readiness probe
pub fn status_router(state: Arc<AppState>) -> axum::Router<Arc<AppState>> {
    use axum::routing::get;

    axum::Router::new()
        .route("/health", get(health_handler))
        .route("/status", get(status_handler))
        .route("/ready", get(readiness_handler))
        .with_state(state)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerationError;
    use crate::generator::{ArticleGenerator, GeneratedArticle};
    use crate::scrape::LinkScraper;
    use async_trait::async_trait;

    struct NoopGenerator;

    #[async_trait]
    impl ArticleGenerator for NoopGenerator {
        async fn generate(
            &self,
            _prompt: &str,
        ) -> std::result::Result<GeneratedArticle, GenerationError> {
            Ok(GeneratedArticle::default())
        }

        fn model_name(&self) -> &str {
            "noop"
        }
    }

    fn test_state() -> AppState {
        AppState::new(ArticlePipeline::new(
            Arc::new(NoopGenerator),
            LinkScraper::new().unwrap(),
        ))
    }

    #[test]
    fn test_health_response_default() {
        let health = HealthResponse::default();
        assert_eq!(health.status, "healthy");
    }

    #[test]
    fn test_app_state_new() {
        let state = test_state();
        assert_eq!(state.articles_generated(), 0);
        assert_eq!(state.active_generations(), 0);
        assert!(state.uptime_seconds() < 1);
    }

    #[test]
    fn test_app_state_article_counter() {
        let state = test_state();

        assert_eq!(state.record_article(), 1);
        assert_eq!(state.record_article(), 2);
        assert_eq!(state.record_article(), 3);
        assert_eq!(state.articles_generated(), 3);
    }

    #[test]
    fn test_app_state_generation_gauge() {
        let state = test_state();

        assert_eq!(state.begin_generation(), 1);
        assert_eq!(state.begin_generation(), 2);
        assert_eq!(state.active_generations(), 2);

        assert_eq!(state.end_generation(), 1);
        assert_eq!(state.end_generation(), 0);

        // Underflow protection
        assert_eq!(state.end_generation(), 0);
        assert_eq!(state.active_generations(), 0);
    }

    #[test]
    fn test_latency_histogram() {
        let histogram = LatencyHistogram::new();

        histogram.record(1000); // 1ms
        histogram.record(5000); // 5ms
        histogram.record(50000); // 50ms

        assert_eq!(histogram.count(), 3);
        assert!(histogram.mean() > 0.0);
        assert!(histogram.percentile(50.0) > 0);

        let metrics = histogram.metrics();
        assert!(metrics.p50_ms > 0.0);
        assert!(metrics.p95_ms >= metrics.p50_ms);
        assert!(metrics.p99_ms >= metrics.p95_ms);
    }

    #[test]
    fn test_latency_histogram_reset() {
        let histogram = LatencyHistogram::new();

        histogram.record(1000);
        histogram.record(2000);
        assert_eq!(histogram.count(), 2);

        histogram.reset();
        assert_eq!(histogram.count(), 0);
    }

    #[test]
    fn test_app_state_reset_metrics() {
        let state = test_state();

        state.record_article();
        state.begin_generation();
        state.record_latency(std::time::Duration::from_millis(5));
        state.record_error();

        state.reset_metrics();

        assert_eq!(state.articles_generated(), 0);
        assert_eq!(state.active_generations(), 0);
        assert_eq!(state.total_requests(), 0);
        assert_eq!(state.error_count(), 0);
    }

    #[test]
    fn test_collect_memory_metrics() {
        // Should not panic; RSS should be non-zero for a running process.
        let metrics = collect_memory_metrics();
        assert!(metrics.rss_bytes > 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_status_handler() {
        let state = Arc::new(test_state());

        state.record_article();
        state.record_latency(std::time::Duration::from_millis(12));

        let response = status_handler(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_app_state_thread_safety() {
        use std::thread;

        let state = Arc::new(test_state());
        let mut handles = vec![];

        for _ in 0..8 {
            let state_clone = Arc::clone(&state);
            handles.push(thread::spawn(move || {
                for _ in 0..1000 {
                    state_clone.record_article();
                    state_clone.begin_generation();
                    state_clone.end_generation();
                    state_clone.record_latency(std::time::Duration::from_micros(1000));
                }
            }));
        }

        for handle in handles {
            handle.join().expect("Thread panicked");
        }

        assert_eq!(state.articles_generated(), 8_000);
        assert_eq!(state.total_requests(), 8_000);
        assert_eq!(state.active_generations(), 0);
    }
}
