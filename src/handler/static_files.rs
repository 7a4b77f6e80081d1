//! Static asset responder
//!
//! Serves files from the public directory when the request path matches one,
//! and otherwise lets the request fall through untouched.

use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve `path` from the public root if a file exists there.
///
/// Returns `None` when the request should continue to the page routes.
pub async fn try_serve(
    path: &str,
    public_dir: &str,
    is_head: bool,
) -> Option<Response<Full<Bytes>>> {
    let relative = sanitize_request_path(path)?;
    let (content, content_type) = load_public_file(public_dir, &relative).await?;
    Some(http::build_static_file_response(&content, content_type, is_head))
}

/// Strip the leading slashes and any parent-directory components.
///
/// An empty result means the request targets a page route, not an asset.
fn sanitize_request_path(path: &str) -> Option<String> {
    let clean = path.trim_start_matches('/').replace("..", "");
    if clean.is_empty() {
        None
    } else {
        Some(clean)
    }
}

async fn load_public_file(public_dir: &str, relative: &str) -> Option<(Vec<u8>, &'static str)> {
    let file_path = Path::new(public_dir).join(relative);

    // Resolve both ends and make sure the target stays inside the public root
    let public_canonical = Path::new(public_dir).canonicalize().ok()?;
    let file_canonical = file_path.canonicalize().ok()?;
    if !file_canonical.starts_with(&public_canonical) {
        logger::log_warning(&format!("Path traversal attempt blocked: {relative}"));
        return None;
    }

    if !file_canonical.is_file() {
        return None;
    }

    let content = fs::read(&file_canonical).await.ok()?;
    let content_type = mime::get_content_type(file_canonical.extension().and_then(|e| e.to_str()));
    Some((content, content_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_is_not_an_asset() {
        assert_eq!(sanitize_request_path("/"), None);
        assert_eq!(sanitize_request_path("//"), None);
    }

    #[test]
    fn plain_paths_pass_through() {
        assert_eq!(
            sanitize_request_path("/styles.css").as_deref(),
            Some("styles.css")
        );
        assert_eq!(
            sanitize_request_path("/img/logo.png").as_deref(),
            Some("img/logo.png")
        );
    }

    #[test]
    fn parent_components_are_stripped() {
        let cleaned = sanitize_request_path("/../server.log").unwrap();
        assert!(!cleaned.contains(".."));
    }
}
