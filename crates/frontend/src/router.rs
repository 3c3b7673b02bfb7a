use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower::ServiceExt;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::pages::{find_page, is_hidden_path, HTML_DIR, PAGE_ROUTES};

/// Files reachable through the fallback.
#[derive(Clone)]
struct Site {
    html_dir: PathBuf,
    assets: ServeDir,
}

/// Build the frontend router rooted at `root`.
///
/// Each entry of [`PAGE_ROUTES`] serves its document from `root/html/`.
/// Anything else goes through [`serve_fallback`].
pub fn build_frontend_router(root: &Path) -> Router {
    let site = Arc::new(Site {
        html_dir: root.join(HTML_DIR),
        assets: ServeDir::new(root),
    });

    let pages = PAGE_ROUTES.iter().fold(Router::new(), |router, page| {
        router.route_service(page.path, ServeFile::new(site.html_dir.join(page.file)))
    });

    pages
        .fallback(serve_fallback)
        .with_state(site)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Resolve a path the page table did not match exactly.
///
/// Dotfiles answer `404`. Page paths differing only in case or a trailing
/// slash serve their page. Everything else is a static file lookup under
/// the root, `404` when no file matches.
async fn serve_fallback(State(site): State<Arc<Site>>, req: Request) -> Response {
    let path = req.uri().path();

    if is_hidden_path(path) {
        tracing::debug!(path, "Refusing hidden path");
        return StatusCode::NOT_FOUND.into_response();
    }

    if let Some(page) = find_page(path) {
        let file = ServeFile::new(site.html_dir.join(page.file));
        return match file.oneshot(req).await {
            Ok(response) => response.into_response(),
            Err(never) => match never {},
        };
    }

    match site.assets.clone().oneshot(req).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}
