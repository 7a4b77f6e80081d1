//! Page route handlers
//!
//! Each handler builds a fresh view-model, renders its template and produces
//! exactly one response. No handler delegates to another.

use crate::config::AppState;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use serde_json::json;

pub fn home(state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    render_page(
        state,
        "home",
        &json!({
            "pageTitle": "Home Page",
            "welcomeMessage": "Welcome to the home page!"
        }),
        is_head,
    )
}

pub fn about(state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    render_page(state, "about", &json!({ "pageTitle": "About Page" }), is_head)
}

pub fn projects(state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    render_page(state, "project", &json!({ "pageTitle": "Projects" }), is_head)
}

/// Simulated failure route; the payload is fixed.
pub fn bad(is_head: bool) -> Response<Full<Bytes>> {
    http::build_json_response(&error_payload(), is_head)
}

fn error_payload() -> serde_json::Value {
    json!({ "error": "Unable to handle request" })
}

/// Render a template against its view-model. A render failure is logged and
/// answered with the stack's plain 500.
fn render_page(
    state: &AppState,
    template: &str,
    view_model: &serde_json::Value,
    is_head: bool,
) -> Response<Full<Bytes>> {
    match state.templates.render(template, view_model) {
        Ok(html) => http::build_html_response(html, is_head),
        Err(err) => {
            logger::log_error(&format!("Template render failed ({template}): {err}"));
            http::build_500_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_route_payload_is_fixed() {
        assert_eq!(
            error_payload().to_string(),
            r#"{"error":"Unable to handle request"}"#
        );
    }

    #[test]
    fn bad_route_responds_json_with_200() {
        let resp = bad(false);
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "application/json"
        );
    }

    #[test]
    fn bad_route_head_has_empty_body_but_full_length() {
        let resp = bad(true);
        let expected = error_payload().to_string().len().to_string();
        assert_eq!(resp.headers().get("Content-Length").unwrap(), &expected);
    }
}
