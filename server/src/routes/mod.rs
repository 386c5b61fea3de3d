//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API (record proxy, image relay, health check)
//! and stitches it with Leptos SSR rendering under a single Axum router. The
//! record source is handed to Leptos as context so server-rendered pages can
//! read records directly instead of looping back through the proxy.

pub mod airtable;
pub mod image;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Landing path the root redirects to.
pub const DEFAULT_BROWSE_PATH: &str = "/browse/ios/apps";

/// API routes and the root redirect.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(redirect_root))
        .route("/api/airtable", get(airtable::list_records))
        .route("/api/image", get(image::proxy_image))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn redirect_root() -> Redirect {
    Redirect::permanent(DEFAULT_BROWSE_PATH)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Leptos SSR frontend: API routes + Leptos pages + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `[workspace.metadata.leptos]` section or `LEPTOS_*` environment).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let source = state.source.clone();
    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(source.clone()),
            {
                let opts = leptos_options.clone();
                move || client::app::shell(opts.clone())
            },
        )
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
