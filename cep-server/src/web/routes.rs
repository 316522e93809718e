//! HTTP route handlers.

use std::convert::Infallible;

use askama::Template;
use axum::body::{Body, Bytes};
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use futures::{StreamExt, stream};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::domain::Uf;
use crate::lookup::LookupError;
use crate::query::{self, AreaCodeCard, QueryError};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

const CARD_RENDER_FAILED: &str = "Não foi possível exibir as cidades deste DDD.";

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/cep", get(search_cep))
        .route("/endereco", get(search_address))
        .route("/ddd/estado", get(list_state))
        .route("/ddd/cidade", get(resolve_city))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the four search tabs.
async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate::new()
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// How a response body is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Card fragments for the page script
    Html,
    /// JSON documents for other clients
    Json,
}

impl ResponseFormat {
    /// HTML when the request accepts it, JSON otherwise.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        if accepts_html(headers) {
            ResponseFormat::Html
        } else {
            ResponseFormat::Json
        }
    }
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

fn html_fragment(rendered: Result<String, askama::Error>) -> Result<Response, AppError> {
    let html = rendered.map_err(AppError::template)?;
    Ok(Html(html).into_response())
}

/// Look up a single postal code.
async fn search_cep(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<CepRequest>,
) -> Response {
    let format = ResponseFormat::from_headers(&headers);
    cep_response(&state, &req, format)
        .await
        .unwrap_or_else(|e| e.respond(format))
}

async fn cep_response(
    state: &AppState,
    req: &CepRequest,
    format: ResponseFormat,
) -> Result<Response, AppError> {
    let address = query::search_cep(&state.lookup, &req.cep).await?;
    match format {
        ResponseFormat::Html => html_fragment(render_addresses(std::slice::from_ref(&address))),
        ResponseFormat::Json => Ok(Json(address).into_response()),
    }
}

/// Search addresses by state, city and street.
async fn search_address(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<AddressRequest>,
) -> Response {
    let format = ResponseFormat::from_headers(&headers);
    address_response(&state, &req, format)
        .await
        .unwrap_or_else(|e| e.respond(format))
}

async fn address_response(
    state: &AppState,
    req: &AddressRequest,
    format: ResponseFormat,
) -> Result<Response, AppError> {
    let addresses = query::search_address(&state.lookup, &req.uf, &req.cidade, &req.rua).await?;
    match format {
        ResponseFormat::Html => html_fragment(render_addresses(&addresses)),
        ResponseFormat::Json => Ok(Json(AddressResponse { addresses }).into_response()),
    }
}

/// List the area codes of a state with their cities.
///
/// The HTML rendering is streamed: the header and one placeholder per area
/// code go out first, then each card as its lookup completes, in table order.
async fn list_state(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<StateRequest>,
) -> Response {
    let format = ResponseFormat::from_headers(&headers);
    listing_response(&state, &req, format)
        .await
        .unwrap_or_else(|e| e.respond(format))
}

async fn listing_response(
    state: &AppState,
    req: &StateRequest,
    format: ResponseFormat,
) -> Result<Response, AppError> {
    let Some(listing) = query::list_state(&state.lookup, &req.uf, &state.config)? else {
        return Ok(cleared());
    };

    match format {
        ResponseFormat::Html => {
            let header_html = render_state_header(&listing.header).map_err(AppError::template)?;
            let uf = listing.header.uf;
            let cards = listing
                .cards
                .map(move |card| card_fragment(uf, &card, render_area_code_card(&card, true)));
            let fragments = stream::once(async move { header_html })
                .chain(cards)
                .map(|html| Ok::<_, Infallible>(Bytes::from(html + FRAGMENT_END)));

            Ok((
                [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                Body::from_stream(fragments),
            )
                .into_response())
        }
        ResponseFormat::Json => {
            let (header, cards) = listing.collect().await;
            Ok(Json(StateListingResponse::from_listing(&header, &cards)).into_response())
        }
    }
}

/// The streamed fragment for one card. A card that fails to render still
/// replaces its placeholder, with an error card.
fn card_fragment(uf: Uf, card: &AreaCodeCard, rendered: Result<String, askama::Error>) -> String {
    rendered.unwrap_or_else(|e| {
        tracing::error!(%uf, ddd = %card.ddd(), error = %e, "card template failed");
        render_card_failure(card.ddd(), CARD_RENDER_FAILED).unwrap_or_default()
    })
}

/// Find the area codes that serve a city.
async fn resolve_city(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<CityRequest>,
) -> Response {
    let format = ResponseFormat::from_headers(&headers);
    city_response(&state, &req, format)
        .await
        .unwrap_or_else(|e| e.respond(format))
}

async fn city_response(
    state: &AppState,
    req: &CityRequest,
    format: ResponseFormat,
) -> Result<Response, AppError> {
    let resolution =
        query::resolve_city(&state.lookup, &req.uf, &req.cidade, &state.config).await?;
    match format {
        ResponseFormat::Html => html_fragment(render_city_resolution(&resolution)),
        ResponseFormat::Json => Ok(Json(CityResponse::from_resolution(&resolution)).into_response()),
    }
}

/// Nothing selected: the page empties and hides the results container.
fn cleared() -> Response {
    (StatusCode::NO_CONTENT, render_cleared()).into_response()
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Upstream { message: String },
    Internal { message: String },
}

impl AppError {
    fn template(e: askama::Error) -> Self {
        AppError::Internal {
            message: format!("Template error: {}", e),
        }
    }

    /// The HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The user-facing message.
    pub fn message(&self) -> &str {
        match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::Upstream { message }
            | AppError::Internal { message } => message,
        }
    }

    /// Render as an error card or as a JSON error document.
    pub fn respond(self, format: ResponseFormat) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(%status, message = self.message(), "request failed");
        } else {
            tracing::debug!(%status, message = self.message(), "request rejected");
        }

        match format {
            ResponseFormat::Html => match render_error(self.message()) {
                Ok(html) => (status, Html(html)).into_response(),
                Err(e) => (status, format!("Template error: {}", e)).into_response(),
            },
            ResponseFormat::Json => {
                let body = Json(ErrorResponse {
                    error: self.message().to_string(),
                });
                (status, body).into_response()
            }
        }
    }
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        let message = e.to_string();
        match e {
            QueryError::InvalidCep
            | QueryError::IncompleteAddress
            | QueryError::MissingCityQuery
            | QueryError::UnknownState(_)
            | QueryError::Lookup(LookupError::InvalidInput(_)) => AppError::BadRequest { message },
            QueryError::CepNotFound
            | QueryError::NoAddressFound
            | QueryError::NoAreaCodes
            | QueryError::CityNotFound { .. }
            | QueryError::Lookup(LookupError::NotFound | LookupError::NoResults) => {
                AppError::NotFound { message }
            }
            QueryError::Lookup(e) if e.is_upstream_failure() => AppError::Upstream { message },
            QueryError::Lookup(_) => AppError::Internal { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.respond(ResponseFormat::Json)
    }
}
