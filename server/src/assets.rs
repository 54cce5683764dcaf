//! Serves the compiled frontend bundle embedded into the binary.
//!
//! `build.rs` copies `frontend/dist` into `static/dist`; every request path is
//! looked up there and unknown paths fall back to `index.html` so the
//! single-page app can handle them.

use actix_web::{web, HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

pub fn configure(cfg: &mut web::ServiceConfig) {
    if STATIC_DIR.get_file(INDEX).is_none() {
        log::warn!("no frontend bundle embedded; build the frontend before the server");
    }
    mount(cfg, &STATIC_DIR);
}

/// Answers every path not matched by another service from `dir`.
fn mount(cfg: &mut web::ServiceConfig, dir: &'static Dir<'static>) {
    cfg.default_service(
        web::route().to(move |req: HttpRequest| async move { respond(dir, req.path()) }),
    );
}

pub fn respond(dir: &Dir<'_>, path: &str) -> HttpResponse {
    let path = path.trim_start_matches('/');
    let file_path = if path.is_empty() { INDEX } else { path };

    match dir.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match dir.get_file(INDEX) {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};

    static FIXTURE: Dir = include_dir!("$CARGO_MANIFEST_DIR/tests/fixtures/site");

    fn content_type(resp: &HttpResponse) -> String {
        resp.headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    #[actix_web::test]
    async fn test_root_serves_index() {
        let resp = respond(&FIXTURE, "/");
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(content_type(&resp).starts_with("text/html"));
        let body = to_bytes(resp.into_body()).await.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("fixture"));
    }

    #[actix_web::test]
    async fn test_asset_uses_guessed_mime() {
        let resp = respond(&FIXTURE, "/assets/app.js");
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(content_type(&resp).contains("javascript"));
    }

    #[actix_web::test]
    async fn test_unknown_path_falls_back_to_index() {
        let resp = respond(&FIXTURE, "/records/42");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(content_type(&resp), "text/html; charset=utf-8");
    }

    #[actix_web::test]
    async fn test_empty_bundle_is_not_found() {
        let empty = Dir::new("", &[]);
        let resp = respond(&empty, "/");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_mounted_bundle_answers_deep_paths_with_index() {
        let app = test::init_service(App::new().configure(|cfg| mount(cfg, &FIXTURE))).await;

        let req = test::TestRequest::get().uri("/any/deep/path").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert!(String::from_utf8_lossy(&body).contains("fixture"));

        let req = test::TestRequest::get().uri("/assets/app.js").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let mime = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(mime.contains("javascript"));
    }
}
