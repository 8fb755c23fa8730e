//! HTTP endpoint server using Axum

use axum::{
    extract::{Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

use crate::config::{ServiceConfig, Settings};
use crate::core::requests::{MarketBarInput, SignalRequest};
use crate::errors::StoreError;
use crate::indicators::compute_indicator_set;
use crate::integrations::broker::UnavailableBroker;
use crate::integrations::tradingview::{build_analysis_from_payload, TradingViewFeed};
use crate::metrics::Metrics;
use crate::models::market::MarketBar;
use crate::models::signal::{SignalDirection, SignalOutput};
use crate::services::market_data::{
    BrokerPriceProvider, BufferPriceProvider, CompositePriceProvider, FixedPriceProvider,
    PriceProvider,
};
use crate::services::realtime::RealTimeBuffer;
use crate::signals::engine::SignalEngine;
use crate::training::trainer::{OnlineTrainer, TrainerStats};
use crate::ui::dashboard_html;

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub engine: Arc<SignalEngine>,
    pub buffer: Arc<RealTimeBuffer>,
    pub price_provider: Arc<dyn PriceProvider>,
    pub trainer: Arc<OnlineTrainer>,
    pub tradingview: Arc<TradingViewFeed>,
}

impl AppState {
    /// Wire the engine and its collaborators from configuration
    pub async fn from_config(
        settings: Settings,
        config: &ServiceConfig,
        metrics: Arc<Metrics>,
    ) -> Result<Self, StoreError> {
        let buffer = Arc::new(
            RealTimeBuffer::with_persistence(config.buffer_capacity, config.realtime_path()).await?,
        );

        let mut providers: Vec<Arc<dyn PriceProvider>> = vec![
            Arc::new(BrokerPriceProvider::new(Arc::new(UnavailableBroker))),
            Arc::new(BufferPriceProvider::new(buffer.clone())),
        ];
        if config.fallback_price > 0.0 {
            providers.push(Arc::new(FixedPriceProvider::new(config.fallback_price)));
        }

        let trainer = OnlineTrainer::new(
            config.experience_path(),
            Duration::from_millis(config.trainer_poll_ms),
        )
        .with_metrics(metrics.clone());
        let tradingview = TradingViewFeed::new(config.tradingview_path()).await?;

        Ok(Self {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics,
            start_time: Arc::new(Instant::now()),
            engine: Arc::new(SignalEngine::new(settings)),
            buffer,
            price_provider: Arc::new(CompositePriceProvider::new(providers)),
            trainer: Arc::new(trainer),
            tradingview: Arc::new(tradingview),
        })
    }
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

type ApiError = (StatusCode, Json<Value>);

fn api_error(status: StatusCode, message: impl ToString) -> ApiError {
    (status, Json(json!({ "error": message.to_string() })))
}

fn store_failure(e: StoreError) -> ApiError {
    error!(error = %e, "Store operation failed");
    api_error(StatusCode::INTERNAL_SERVER_ERROR, e)
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "instrument": state.engine.settings().instrument,
        "uptime_seconds": uptime_seconds,
        "service": "xausignal"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

async fn dashboard() -> Html<&'static str> {
    Html(dashboard_html())
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();

    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();

    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

async fn generate_signal(
    State(state): State<AppState>,
    Json(request): Json<SignalRequest>,
) -> Result<Json<SignalOutput>, ApiError> {
    let input = request.into_input().map_err(|e| {
        warn!(error = %e, "Rejected signal request");
        api_error(StatusCode::UNPROCESSABLE_ENTITY, e)
    })?;

    let output = state.engine.infer(&input);
    state
        .metrics
        .signals_generated_total
        .with_label_values(&[output.signal.as_str()])
        .inc();
    info!(
        instrument = %output.instrument,
        signal = %output.signal,
        confidence = output.confidence,
        risk_fraction = output.risk_fraction,
        "Signal generated"
    );

    Ok(Json(output))
}

async fn ingest_bar(
    State(state): State<AppState>,
    Json(input): Json<MarketBarInput>,
) -> Result<Json<Value>, ApiError> {
    let bar = input
        .into_bar()
        .map_err(|e| api_error(StatusCode::UNPROCESSABLE_ENTITY, e))?;
    let buffer_size = state.buffer.append(bar).await.map_err(store_failure)?;
    state.metrics.bars_ingested_total.inc();

    Ok(Json(json!({ "ok": true, "buffer_size": buffer_size })))
}

#[derive(Debug, Deserialize)]
struct LatestQuery {
    n: Option<usize>,
}

async fn realtime_latest(
    State(state): State<AppState>,
    Query(params): Query<LatestQuery>,
) -> Json<Vec<MarketBar>> {
    Json(state.buffer.latest(params.n.unwrap_or(5)).await)
}

#[derive(Debug, Deserialize)]
struct IndicatorQuery {
    n: Option<usize>,
    signal: Option<String>,
}

async fn realtime_indicators(
    State(state): State<AppState>,
    Query(params): Query<IndicatorQuery>,
) -> Json<Value> {
    let settings = state.engine.settings();
    let bars = state
        .buffer
        .latest(params.n.unwrap_or(settings.lookback_bars))
        .await;
    let direction = params.signal.as_deref().map(SignalDirection::from_label);
    Json(json!(compute_indicator_set(&settings.instrument, &bars, direction)))
}

async fn market_price(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let symbol = &state.engine.settings().instrument;
    match state.price_provider.get_tick(symbol).await {
        Some(tick) => Ok(Json(json!(tick))),
        None => Err(api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            format!("no price available for {}", symbol),
        )),
    }
}

async fn training_start(State(state): State<AppState>) -> Json<Value> {
    let started = state.trainer.start().await;
    info!(started = started, "Training start requested");
    Json(json!({ "started": started }))
}

async fn training_stop(State(state): State<AppState>) -> Json<Value> {
    let stopped = state.trainer.stop().await;
    info!(stopped = stopped, "Training stop requested");
    Json(json!({ "stopped": stopped }))
}

async fn training_status(State(state): State<AppState>) -> Json<TrainerStats> {
    Json(state.trainer.status().await)
}

async fn tradingview_ingest(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let analysis = build_analysis_from_payload(&payload);
    state
        .tradingview
        .append(&analysis)
        .await
        .map_err(store_failure)?;
    info!(symbol = %analysis.symbol, timeframe = %analysis.timeframe, "TradingView analysis stored");

    Ok(Json(json!({ "ok": true, "analysis": analysis })))
}

async fn tradingview_latest(
    State(state): State<AppState>,
    Query(params): Query<LatestQuery>,
) -> Result<Json<Value>, ApiError> {
    let items = state
        .tradingview
        .latest(params.n.unwrap_or(20))
        .await
        .map_err(store_failure)?;
    Ok(Json(json!(items)))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/dashboard", get(dashboard))
        .route("/signal/xauusd", post(generate_signal))
        .route("/ingest/bar", post(ingest_bar))
        .route("/realtime/latest", get(realtime_latest))
        .route("/realtime/indicators", get(realtime_indicators))
        .route("/market/xauusd/price", get(market_price))
        .route("/training/start", post(training_start))
        .route("/training/stop", post(training_stop))
        .route("/training/status", get(training_status))
        .route("/tradingview/analysis", post(tradingview_ingest))
        .route("/tradingview/analysis/latest", get(tradingview_latest))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(
    settings: Settings,
    config: ServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let state = AppState::from_config(settings, &config, metrics).await?;
    let trainer = state.trainer.clone();

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    info!(port = config.port, data_dir = %config.data_dir.display(), "HTTP server listening on port {}", config.port);
    info!(
        "Dashboard available at http://0.0.0.0:{}/dashboard",
        config.port
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Failed to listen for shutdown signal");
            }
        })
        .await?;

    trainer.stop().await;
    info!("HTTP server stopped");
    Ok(())
}
