//! HTTP view layer with HTMX support
//!
//! Routes are organized into modules:
//! - routes::accounts: Account list, creation form, per-account actions
//!
//! The JSON endpoints under /api proxy to the remote banking service
//! through the client crate; the page routes render the single-page
//! interface whose scripts consume those endpoints.

pub mod error;
pub mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use bankweb_client::ClientRef;
use bankweb_config::Config;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub client: ClientRef,
    pub config: Config,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::accounts::{
        api_account_create, api_account_deposit, api_account_detail, api_account_suspend,
        api_account_unsuspend, api_account_withdraw, api_accounts, htmx_accounts_list,
        page_accounts,
    };

    Router::new()
        // JSON API endpoints
        .route("/api/health", get(health_check))
        .route("/api/accounts", get(api_accounts).post(api_account_create))
        .route("/api/accounts/:id", get(api_account_detail))
        .route("/api/accounts/:id/deposit", post(api_account_deposit))
        .route("/api/accounts/:id/withdraw", post(api_account_withdraw))
        .route("/api/accounts/:id/suspend", post(api_account_suspend))
        .route("/api/accounts/:id/unsuspend", post(api_account_unsuspend))
        // Page routes
        .route("/", get(page_accounts))
        .route("/accounts", get(page_accounts))
        // HTMX partial routes
        .route("/accounts/list", get(htmx_accounts_list))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - Bankweb</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
        .htmx-request .htmx-indicator {{ opacity: 1; }}
    </style>
</head>
<body class="bg-gray-50 text-gray-900">
    {}
</body>
</html>"#,
        title, content
    )
}

/// Top bar shown on every full page
pub fn top_bar() -> String {
    String::from(
        "<header class='bg-white border-b shadow-sm'><div class='max-w-4xl mx-auto px-6 py-4'><h1 class='text-xl font-bold text-indigo-600'>Banking Operating System</h1></div></header>",
    )
}

/// Check if request is from HTMX (partial page update)
fn is_htmx_request(headers: &axum::http::HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// Wrap content for full page or HTMX partial
pub fn page_response(headers: &axum::http::HeaderMap, title: &str, inner_content: &str) -> String {
    if is_htmx_request(headers) {
        format!("<main class='max-w-4xl mx-auto p-6'>{}</main>", inner_content)
    } else {
        base_html(
            title,
            &format!(
                "{}<main class='max-w-4xl mx-auto p-6'>{}</main>",
                top_bar(),
                inner_content
            ),
        )
    }
}

/// Start the HTTP server
///
/// Binds to the configured address and serves the interface until the
/// process is stopped.
pub async fn start_server(config: Config, client: ClientRef) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState { client, config };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting bankweb on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - / (Account overview)");
    log::info!("  - /api/accounts (JSON API)");

    axum::serve(listener, router).await?;
    Ok(())
}
