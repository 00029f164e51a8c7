//! 可观测性模块
//!
//! 提供 Prometheus 文本格式指标、结构化日志和健康检查。

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::EnvFilter;

use crate::config::config::LoggingConfig;

// ===== Simple Metrics =====

/// 简单应用指标
#[derive(Debug, Default)]
pub struct AppMetrics {
    pub http_requests_total: AtomicU64,
    pub http_request_duration_sum: AtomicU64,
    pub chat_requests_total: AtomicU64,
    pub grading_requests_total: AtomicU64,
    pub correct_answers_total: AtomicU64,
    pub errors_total: AtomicU64,
}

impl AppMetrics {
    /// 记录 HTTP 请求
    pub fn record_http_request(&self, duration_ms: u64) {
        self.http_requests_total.fetch_add(1, Ordering::SeqCst);
        self.http_request_duration_sum
            .fetch_add(duration_ms, Ordering::SeqCst);
    }

    /// 记录聊天请求
    pub fn record_chat(&self) {
        self.chat_requests_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 记录判分请求
    pub fn record_grading(&self, correct: bool) {
        self.grading_requests_total.fetch_add(1, Ordering::SeqCst);
        if correct {
            self.correct_answers_total.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// 记录错误
    pub fn record_error(&self) {
        self.errors_total.fetch_add(1, Ordering::SeqCst);
    }

    /// 生成 Prometheus 格式指标
    pub fn gather(&self) -> String {
        format!(
            r#"# HELP http_requests_total Total HTTP requests
# TYPE http_requests_total counter
http_requests_total {}
# HELP http_request_duration_seconds HTTP request duration in seconds
# TYPE http_request_duration_seconds summary
http_request_duration_seconds_sum {}
http_request_duration_seconds_count {}
# HELP chat_requests_total Total chat messages answered
# TYPE chat_requests_total counter
chat_requests_total {}
# HELP grading_requests_total Total answer checks
# TYPE grading_requests_total counter
grading_requests_total {}
# HELP correct_answers_total Answer checks graded correct
# TYPE correct_answers_total counter
correct_answers_total {}
# HELP errors_total Total errors
# TYPE errors_total counter
errors_total {}
"#,
            self.http_requests_total.load(Ordering::SeqCst),
            self.http_request_duration_sum.load(Ordering::SeqCst) as f64 / 1000.0,
            self.http_requests_total.load(Ordering::SeqCst),
            self.chat_requests_total.load(Ordering::SeqCst),
            self.grading_requests_total.load(Ordering::SeqCst),
            self.correct_answers_total.load(Ordering::SeqCst),
            self.errors_total.load(Ordering::SeqCst),
        )
    }
}

// ===== Health Check =====

/// 健康检查状态
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub uptime_seconds: f64,
}

/// 可观测性状态
#[derive(Debug)]
pub struct ObservabilityState {
    pub metrics: Arc<AppMetrics>,
    pub start_time: DateTime<Utc>,
    pub version: String,
}

impl ObservabilityState {
    pub fn new(version: &str, metrics: Arc<AppMetrics>) -> Self {
        Self {
            metrics,
            start_time: Utc::now(),
            version: version.to_string(),
        }
    }

    /// 获取应用正常运行时间
    pub fn uptime_seconds(&self) -> f64 {
        (Utc::now() - self.start_time).num_seconds() as f64
    }
}

// ===== Health Check Handlers =====

/// 获取健康状态（无外部依赖，进程存活即健康）
pub async fn health_check(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    Json(HealthStatus {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: state.version.clone(),
        uptime_seconds: state.uptime_seconds(),
    })
}

/// 简单存活检查
pub async fn liveness() -> impl IntoResponse {
    "OK"
}

/// Prometheus 指标端点
pub async fn metrics(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    state.metrics.gather()
}

/// 版本信息端点
pub async fn version(State(state): State<Arc<ObservabilityState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "version": state.version,
        "uptime_seconds": state.uptime_seconds(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// 创建可观测性路由
pub fn create_observability_router(state: Arc<ObservabilityState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness))
        .route("/metrics", get(metrics))
        .route("/version", get(version))
        .with_state(state)
}

// ===== Structured Logging =====

/// 初始化日志；`RUST_LOG` 优先于配置中的级别
pub fn init_tracing(service_name: &str, logging: &LoggingConfig) {
    let level = if logging.level.is_empty() {
        "info"
    } else {
        logging.level.as_str()
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},{}={}", level, service_name, level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_line_number(true);

    let result = if logging.structured {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("tracing subscriber already installed: {}", e);
    }
}

// ===== Request Metrics Middleware =====

/// 记录请求指标的中间件
pub async fn metrics_middleware(
    State(metrics): State<Arc<AppMetrics>>,
    req: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    let start = std::time::Instant::now();

    let response = next.run(req).await;

    let duration_ms = start.elapsed().as_millis() as u64;
    metrics.record_http_request(duration_ms);
    if response.status().is_server_error() || response.status().is_client_error() {
        metrics.record_error();
    }

    response
}
