// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod session;
mod web;

use axum::{
    Json, Router,
    extract::{RawForm, State as AxumState},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use board_api::{
    ApiError, AuthError, AuthenticationService, MemberOutcome, PrincipalChange, SAVE_ID_COOKIE,
    SessionPolicy, login, login_page, logout, main_page, signup, signup_page,
};
use board_persistence::{Persistence, PersistenceError};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::session::CurrentSession;
use crate::web::WebError;

/// Board Server - HTTP server for board member login, logout, and signup
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Minutes of inactivity before a session expires
    #[arg(long, default_value_t = 30)]
    session_timeout_minutes: u32,

    /// Seconds between sweeps of expired sessions
    #[arg(long, default_value_t = 300)]
    session_sweep_seconds: u64,

    /// bcrypt work factor for newly stored passwords
    #[arg(long, default_value_t = 12)]
    bcrypt_cost: u32,
}

/// Application state shared across handlers.
///
/// The persistence layer sits behind a Mutex; handlers hold the lock only
/// for the duration of a synchronous database call.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for members and sessions.
    persistence: Arc<Mutex<Persistence>>,
    /// Session lifecycle policy.
    session_policy: SessionPolicy,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

/// Message returned for every 500; the detail only goes to the log.
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

impl HttpError {
    fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self::internal()
            }
        }
    }
}

impl From<AuthError> for HttpError {
    fn from(err: AuthError) -> Self {
        error!(error = %err, "Session error");
        Self::internal()
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self::internal()
    }
}

impl From<WebError> for HttpError {
    fn from(err: WebError) -> Self {
        error!(error = %err, "Response construction failed");
        Self::internal()
    }
}

/// Applies a controller outcome and builds the redirect.
///
/// Every header value that depends on request data is built before the
/// session store is written. If the session cookie itself cannot be built,
/// the new session is deleted again.
fn apply_outcome(
    persistence: &mut Persistence,
    policy: SessionPolicy,
    current: &CurrentSession,
    outcome: &MemberOutcome,
) -> Result<Response, HttpError> {
    let location: HeaderValue = web::location_header(outcome.navigation)?;

    let mut cookies: Vec<HeaderValue> = Vec::new();
    if let Some(save_id) = &outcome.save_id {
        cookies.push(web::cookie_header(&save_id.to_cookie())?);
    }
    if let Some(flash) = &outcome.flash {
        cookies.push(web::cookie_header(&web::flash_cookie(flash))?);
    }

    match &outcome.principal {
        PrincipalChange::Keep => {}
        PrincipalChange::Establish(member) => {
            let token: String = AuthenticationService::establish_session(
                persistence,
                member,
                policy,
                current.token.as_deref(),
            )?;
            match web::cookie_header(&web::session_cookie(&token)) {
                Ok(value) => cookies.push(value),
                Err(e) => {
                    AuthenticationService::invalidate(persistence, &token)?;
                    return Err(e.into());
                }
            }
        }
        PrincipalChange::Invalidate => {
            let cleared: HeaderValue = web::cookie_header(&web::clear_session_cookie())?;
            if let Some(token) = &current.token {
                AuthenticationService::invalidate(persistence, token)?;
            }
            cookies.push(cleared);
        }
    }

    Ok(web::redirect(location, cookies))
}

/// Handler for GET `/`.
#[allow(clippy::unused_async)]
async fn handle_main(
    current: CurrentSession,
    headers: HeaderMap,
) -> Result<Response, HttpError> {
    let had_flash: bool = web::read_cookie(&headers, web::FLASH_COOKIE).is_some();
    let view = main_page(current.member.as_ref(), web::take_flash(&headers));
    Ok(web::render_view(view, had_flash)?)
}

/// Handler for GET `/member/login`.
#[allow(clippy::unused_async)]
async fn handle_login_page(
    current: CurrentSession,
    headers: HeaderMap,
) -> Result<Response, HttpError> {
    let had_flash: bool = web::read_cookie(&headers, web::FLASH_COOKIE).is_some();
    let remembered: Option<String> =
        web::read_cookie(&headers, SAVE_ID_COOKIE).filter(|email| !email.is_empty());
    let view = login_page(
        current.member.as_ref(),
        web::take_flash(&headers),
        remembered.as_deref(),
    );
    Ok(web::render_view(view, had_flash)?)
}

/// Handler for GET `/member/signup`.
#[allow(clippy::unused_async)]
async fn handle_signup_page(
    current: CurrentSession,
    headers: HeaderMap,
) -> Result<Response, HttpError> {
    let had_flash: bool = web::read_cookie(&headers, web::FLASH_COOKIE).is_some();
    let view = signup_page(current.member.as_ref(), web::take_flash(&headers));
    Ok(web::render_view(view, had_flash)?)
}

/// Handler for POST `/member/login`.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    current: CurrentSession,
    RawForm(body): RawForm,
) -> Result<Response, HttpError> {
    let request = web::login_request(&web::parse_form(&body));

    let mut persistence = app_state.persistence.lock().await;
    let outcome: MemberOutcome = login(&mut *persistence, &request)?;
    apply_outcome(&mut persistence, app_state.session_policy, &current, &outcome)
}

/// Handler for GET `/member/logout`.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    current: CurrentSession,
) -> Result<Response, HttpError> {
    let outcome: MemberOutcome = logout();

    let mut persistence = app_state.persistence.lock().await;
    let response: Response =
        apply_outcome(&mut persistence, app_state.session_policy, &current, &outcome)?;
    drop(persistence);

    if let Some(member) = &current.member {
        info!(member_no = member.member_no, "Logged out");
    }

    Ok(response)
}

/// Handler for POST `/member/signup`.
async fn handle_signup(
    AxumState(app_state): AxumState<AppState>,
    current: CurrentSession,
    RawForm(body): RawForm,
) -> Result<Response, HttpError> {
    let request = web::signup_request(&web::parse_form(&body));

    let mut persistence = app_state.persistence.lock().await;
    let outcome: MemberOutcome = signup(&mut *persistence, &request)?;
    apply_outcome(&mut persistence, app_state.session_policy, &current, &outcome)
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_main))
        .route("/member/login", get(handle_login_page).post(handle_login))
        .route("/member/logout", get(handle_logout))
        .route("/member/signup", get(handle_signup_page).post(handle_signup))
        .with_state(app_state)
}

/// Periodically deletes expired sessions.
fn spawn_session_sweeper(app_state: AppState, every: std::time::Duration) {
    tokio::spawn(async move {
        let mut ticker: tokio::time::Interval = tokio::time::interval(every);
        loop {
            ticker.tick().await;
            let mut persistence = app_state.persistence.lock().await;
            match AuthenticationService::sweep_expired(&mut persistence) {
                Ok(removed) => debug!(removed, "Expired session sweep finished"),
                Err(e) => warn!(error = %e, "Expired session sweep failed"),
            }
        }
    });
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Board Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence.with_bcrypt_cost(args.bcrypt_cost))),
        session_policy: SessionPolicy::new(time::Duration::minutes(i64::from(
            args.session_timeout_minutes,
        ))),
    };

    spawn_session_sweeper(
        app_state.clone(),
        std::time::Duration::from_secs(args.session_sweep_seconds.max(1)),
    );

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests;
