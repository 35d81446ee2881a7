use std::path::{Component, Path, PathBuf};

use actix_files::NamedFile;
use actix_web::mime::{self, Mime};
use actix_web::{web, HttpRequest, HttpResponse};
use tracing::{debug, warn};

use super::AppState;

const NOT_FOUND_PAGE: &str = "<!DOCTYPE html><html><head><title>404 Not Found</title></head>\
<body><h1>404 - Asset not found</h1></body></html>";

/// Content type by file extension; anything unknown is an octet stream.
pub fn content_type_for(path: &Path) -> Mime {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => mime::IMAGE_PNG,
        Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG,
        Some("gif") => mime::IMAGE_GIF,
        Some("svg") => mime::IMAGE_SVG,
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}

/// Joins a request tail onto the assets directory, refusing anything that
/// could leave it.
pub fn resolve_asset_path(assets_dir: &Path, tail: &str) -> Option<PathBuf> {
    let relative = Path::new(tail);
    let mut resolved = assets_dir.to_path_buf();
    let mut depth = 0;

    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                resolved.push(part);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    (depth > 0).then_some(resolved)
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(NOT_FOUND_PAGE)
}

// Streams a file from the assets directory
pub async fn serve_asset(
    req: HttpRequest,
    tail: web::Path<String>,
    state: web::Data<AppState>,
) -> HttpResponse {
    let Some(path) = resolve_asset_path(&state.assets_dir, &tail) else {
        warn!(tail = %tail, "rejected asset path");
        return not_found();
    };

    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_file() => {}
        _ => {
            debug!(path = %path.display(), "asset not found");
            return not_found();
        }
    }

    match NamedFile::open_async(&path).await {
        Ok(file) => file
            .set_content_type(content_type_for(&path))
            .into_response(&req),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to open asset");
            not_found()
        }
    }
}
