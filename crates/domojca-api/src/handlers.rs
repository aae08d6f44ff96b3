//! Route handler functions for all endpoints.
//!
//! Page handlers render HTML through `domojca-ui`; everything under `/api`
//! speaks JSON. Language comes from the `?lang=` query (pages) or the
//! request path/body (API), theme from the `theme` cookie.

use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domojca_chat::{ChatCommand, SessionSnapshot, SubmitOutcome};
use domojca_contact::{ContactCommand, ContactForm, ContactSnapshot};
use domojca_core::content::{
    latest_sermons, ministries, service_times, upcoming_events, BankAccount, Event, Ministry,
    Sermon, ServiceTime, BANK_ACCOUNT,
};
use domojca_core::{translations, Language, PageView, Theme, Translations};
use domojca_ui::{render_page, ViewContext, SITE_CSS, SITE_JS};

use crate::error::ApiError;
use crate::state::AppState;

/// Name of the cookie holding the visitor's theme preference.
pub const THEME_COOKIE: &str = "theme";

/// Client hint carrying the OS colour scheme.
pub const PREFERS_COLOR_SCHEME: &str = "sec-ch-prefers-color-scheme";

const THEME_COOKIE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

// =============================================================================
// Request helpers
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub lang: Option<String>,
}

/// Language from `?lang=`; unknown or missing codes use the site default.
fn page_language(state: &AppState, params: &PageParams) -> Language {
    params
        .lang
        .as_deref()
        .and_then(|code| code.parse().ok())
        .unwrap_or(state.config.site.default_language)
}

fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Resolve the theme for this request: cookie first, then the OS hint.
pub fn request_theme(headers: &HeaderMap) -> Theme {
    let prefers_dark = headers
        .get(PREFERS_COLOR_SCHEME)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim_matches('"').eq_ignore_ascii_case("dark"));
    Theme::resolve(cookie_value(headers, THEME_COOKIE), prefers_dark)
}

fn theme_cookie(theme: Theme) -> String {
    format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Lax",
        THEME_COOKIE,
        theme.as_str(),
        THEME_COOKIE_MAX_AGE_SECS
    )
}

// =============================================================================
// Pages and assets
// =============================================================================

fn render(state: &AppState, page: PageView, params: &PageParams, headers: &HeaderMap) -> Response {
    let ctx = ViewContext::new(page, page_language(state, params), request_theme(headers));
    let mut response = Html(render_page(&ctx)).into_response();
    response.headers_mut().insert(
        header::HeaderName::from_static("accept-ch"),
        HeaderValue::from_static("Sec-CH-Prefers-Color-Scheme"),
    );
    response
}

/// GET / - the home page.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
    headers: HeaderMap,
) -> Response {
    render(&state, PageView::Home, &params, &headers)
}

/// GET /{page} - any other top-level page.
pub async fn page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<PageParams>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let page: PageView = slug.parse()?;
    Ok(render(&state, page, &params, &headers))
}

/// GET /assets/site.css
pub async fn site_css() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        SITE_CSS,
    )
}

/// GET /assets/site.js
pub async fn site_js() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        SITE_JS,
    )
}

// =============================================================================
// Health and content
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub chat_sessions: usize,
    pub chat_configured: bool,
    pub contact_configured: bool,
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        chat_sessions: state.sessions.len(),
        chat_configured: state.config.chat.usable_api_key().is_some(),
        contact_configured: state.config.contact.is_complete(),
    })
}

#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub language: Language,
    pub events: Vec<Event>,
    pub sermons: Vec<Sermon>,
    pub ministries: Vec<Ministry>,
    pub service_times: Vec<ServiceTime>,
    pub bank_account: BankAccount,
}

/// GET /api/content/{lang}
pub async fn content(Path(lang): Path<String>) -> Result<Json<ContentResponse>, ApiError> {
    let language: Language = lang.parse()?;
    Ok(Json(ContentResponse {
        language,
        events: upcoming_events(language),
        sermons: latest_sermons(language),
        ministries: ministries(language),
        service_times: service_times(language),
        bank_account: BANK_ACCOUNT,
    }))
}

/// GET /api/translations/{lang}
pub async fn translation_bundle(
    Path(lang): Path<String>,
) -> Result<Json<&'static Translations>, ApiError> {
    let language: Language = lang.parse()?;
    Ok(Json(translations(language)))
}

// =============================================================================
// Chat
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionRequest {
    pub language: Option<Language>,
}

#[derive(Debug, Deserialize)]
pub struct ChangeLanguageRequest {
    pub language: Language,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub text: String,
}

/// Session state after a command; `result` is set only for submissions.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub result: Option<SubmitOutcome>,
    pub session: SessionSnapshot,
}

/// POST /api/chat/sessions - open a conversation seeded with the welcome line.
pub async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> (StatusCode, Json<SessionSnapshot>) {
    let language = req
        .language
        .unwrap_or(state.config.site.default_language);
    let session = state.sessions.create(language);
    (StatusCode::CREATED, Json(session.snapshot()))
}

/// GET /api/chat/sessions/{id}
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let session = state.sessions.get(id)?;
    Ok(Json(session.snapshot()))
}

/// PUT /api/chat/sessions/{id}/language - restart the conversation in a
/// different language. The current language is a no-op.
pub async fn change_language(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangeLanguageRequest>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let session = state.sessions.get(id)?;
    session
        .dispatch(ChatCommand::ChangeLanguage(req.language))
        .await;
    Ok(Json(session.snapshot()))
}

/// POST /api/chat/sessions/{id}/messages
///
/// Waits for the assistant. A rejected submission (blank, too long, or a
/// reply already pending) is still a 200; `result` says what happened.
pub async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SendMessageRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let session = state.sessions.get(id)?;
    let result = session.dispatch(ChatCommand::Submit(req.text)).await;
    tracing::debug!(session = %id, result = ?result, "Chat message handled");
    Ok(Json(ChatResponse {
        result,
        session: session.snapshot(),
    }))
}

/// POST /api/chat/sessions/{id}/commands - apply one tagged view command,
/// e.g. `{"type":"set_input","value":"..."}` or `{"type":"submit_pending"}`.
pub async fn send_command(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(command): Json<ChatCommand>,
) -> Result<Json<ChatResponse>, ApiError> {
    let session = state.sessions.get(id)?;
    let result = session.dispatch(command).await;
    Ok(Json(ChatResponse {
        result,
        session: session.snapshot(),
    }))
}

/// DELETE /api/chat/sessions/{id}
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.sessions.remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Contact
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    pub language: Option<Language>,
    pub name: String,
    pub email: String,
    pub message: String,
}

/// POST /api/contact - validate and deliver one contact message.
///
/// Invalid fields and delivery failures are reported through the
/// snapshot's `status` and `status_message`, not the HTTP status.
pub async fn contact(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<ContactSnapshot>, ApiError> {
    let language = req
        .language
        .unwrap_or(state.config.site.default_language);
    let form = ContactForm::new(
        language,
        state.delivery.clone(),
        Duration::from_secs(state.config.contact.timeout_secs),
    );
    form.dispatch(ContactCommand::SetName(req.name)).await?;
    form.dispatch(ContactCommand::SetEmail(req.email)).await?;
    form.dispatch(ContactCommand::SetMessage(req.message)).await?;

    let status = form.dispatch(ContactCommand::Submit).await?;
    tracing::info!(status = ?status, language = %language, "Contact form submitted");
    Ok(Json(form.snapshot()))
}

// =============================================================================
// Theme
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

/// POST /api/theme/toggle - flip and persist the theme preference.
pub async fn toggle_theme(headers: HeaderMap) -> impl IntoResponse {
    let theme = request_theme(&headers).toggled();
    (
        [(header::SET_COOKIE, theme_cookie(theme))],
        Json(ThemeResponse { theme }),
    )
}
