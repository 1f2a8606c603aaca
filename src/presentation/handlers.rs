// HTTP request handlers
use crate::domain::content;
use crate::domain::forms::{ContactForm, FeedbackForm, TaxiBookingRequest};
use crate::domain::metrics::LiveMetricsSnapshot;
use crate::domain::routes::{BusRoute, RouteFilter, RouteStatus, TransportKind};
use crate::domain::taxi::{TaxiArea, TaxiRoute, TaxiRouteFilter};
use crate::infrastructure::chunked_json::stream_response;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use crate::presentation::error::{ApiError, Notification};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use futures::StreamExt;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio_stream::wrappers::WatchStream;

#[derive(Debug, Default, Deserialize)]
pub struct RouteQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub kind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TaxiRouteQuery {
    pub search: Option<String>,
    pub area: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmissionResponse<T> {
    pub notification: Notification,
    /// The form after submission, reset to its empty values
    pub form: T,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub metrics: Vec<content::MetricCard>,
    pub recent_activity: Vec<content::Activity>,
    pub live: LiveMetricsSnapshot,
}

#[derive(Debug, Serialize)]
pub struct RouteList<T> {
    pub count: usize,
    pub routes: Vec<T>,
}

impl<T> From<Vec<T>> for RouteList<T> {
    fn from(routes: Vec<T>) -> Self {
        Self {
            count: routes.len(),
            routes,
        }
    }
}

/// Parse a select-box value; "all" or blank means no filter
fn parse_choice<T: DeserializeOwned>(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<T>, ApiError> {
    match value.as_deref().map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(raw) => serde_json::from_value(serde_json::Value::String(raw.to_lowercase()))
            .map(Some)
            .map_err(|_| ApiError::BadFilter {
                field,
                value: raw.to_string(),
            }),
    }
}

async fn respond<T: Serialize>(data: &T, headers: &HeaderMap) -> Result<Response, ApiError> {
    json_response(data, StatusCode::OK, accepts_brotli(headers))
        .await
        .map_err(ApiError::Encoding)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn home(headers: HeaderMap) -> Result<Response, ApiError> {
    respond(&content::home_page(), &headers).await
}

pub async fn about(headers: HeaderMap) -> Result<Response, ApiError> {
    respond(&content::about_page(), &headers).await
}

pub async fn contact_info(headers: HeaderMap) -> Result<Response, ApiError> {
    respond(&content::contact_info(), &headers).await
}

pub async fn feedback_page(headers: HeaderMap) -> Result<Response, ApiError> {
    respond(&content::feedback_page(), &headers).await
}

pub async fn dashboard(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let overview = DashboardOverview {
        metrics: content::metric_cards(),
        recent_activity: content::recent_activity(),
        live: state.live_metrics_service.initial_snapshot(),
    };
    respond(&overview, &headers).await
}

/// Stream live metrics for one dashboard view (progressive updates).
/// The simulator lives exactly as long as the response stream.
pub async fn live_metrics(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let session = state.live_metrics_service.open_session()?;
    let updates = session.subscribe();
    tracing::info!(seed = ?session.current(), "live metrics session opened");

    let stream = async_stream::stream! {
        let _session = session;
        let mut updates = WatchStream::new(updates);
        while let Some(snapshot) = updates.next().await {
            yield snapshot;
        }
    };

    Ok(stream_response(stream, accepts_brotli(&headers)).into_response())
}

pub async fn list_routes(
    Query(query): Query<RouteQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let filter = RouteFilter {
        search: query.search,
        status: parse_choice::<RouteStatus>("status", query.status)?,
        kind: parse_choice::<TransportKind>("kind", query.kind)?,
    };

    let routes: RouteList<BusRoute> = state.catalog_service.routes(&filter).into();
    respond(&routes, &headers).await
}

pub async fn list_taxi_routes(
    Query(query): Query<TaxiRouteQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let filter = TaxiRouteFilter {
        search: query.search,
        area: parse_choice::<TaxiArea>("area", query.area)?,
    };

    let routes: RouteList<TaxiRoute> = state.catalog_service.taxi_routes(&filter).into();
    respond(&routes, &headers).await
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(mut form) = payload?;
    let ack = state.submission_service.submit_contact(&mut form).await?;

    let response = SubmissionResponse {
        notification: ack.into(),
        form,
    };
    respond(&response, &headers).await
}

pub async fn submit_feedback(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<FeedbackForm>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(mut form) = payload?;
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let ack = state
        .submission_service
        .submit_feedback(&mut form, user_agent)
        .await?;

    let response = SubmissionResponse {
        notification: ack.into(),
        form,
    };
    respond(&response, &headers).await
}

pub async fn book_taxi(
    Path(route_id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let mut request = TaxiBookingRequest { route_id };
    let ack = state.submission_service.book_taxi(&mut request).await?;

    let response = SubmissionResponse {
        notification: ack.into(),
        form: request,
    };
    respond(&response, &headers).await
}
