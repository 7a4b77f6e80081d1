//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Stages run in order and each
//! either produces a response or lets the request fall through to the next.

use crate::config::AppState;
use crate::handler::{pages, static_files};
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let path = req.uri().path();
    let is_head = *method == Method::HEAD;

    // 1. Request log. Every request produces exactly one line and the
    //    pipeline continues whatever happens to the write.
    logger::log_request(method, path);

    // 2. Method check
    if let Some(resp) = check_http_method(method) {
        return Ok(resp);
    }

    // 3. Static assets match before the page routes
    if let Some(resp) =
        static_files::try_serve(path, &state.config.resources.public_dir, is_head).await
    {
        return Ok(resp);
    }

    // 4. Fixed page routes, then not-found
    Ok(dispatch_page(path, &state, is_head))
}

/// Check HTTP method and return an early response for non-GET/HEAD methods
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Map the fixed paths onto their handlers
fn dispatch_page(path: &str, state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    match path {
        "/" => pages::home(state, is_head),
        "/about" => pages::about(state, is_head),
        "/projects" => pages::projects(state, is_head),
        "/bad" => pages::bad(is_head),
        _ => http::build_404_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_head_pass_the_method_check() {
        assert!(check_http_method(&Method::GET).is_none());
        assert!(check_http_method(&Method::HEAD).is_none());
    }

    #[test]
    fn other_methods_are_rejected() {
        let resp = check_http_method(&Method::POST).unwrap();
        assert_eq!(resp.status(), 405);
        let resp = check_http_method(&Method::DELETE).unwrap();
        assert_eq!(resp.status(), 405);
    }
}
