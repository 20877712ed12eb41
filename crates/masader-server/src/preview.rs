//! Serve a built `dist/` directory together with the contact endpoint.

use std::path::{Path, PathBuf};

use axum::Router;
use tower_http::services::ServeDir;

use crate::contact::{contact_router, ContactApi};
use crate::server::ServerError;

/// Router serving static files from `dir`, with `POST /api/contact` mounted.
///
/// Everything lives under `base_url`, the same prefix the built pages use for
/// their assets and the contact form endpoint.
pub fn preview_router(dir: &Path, base_url: &str, api: ContactApi) -> Router {
    let site = contact_router(api).fallback_service(ServeDir::new(dir));

    match base_url.trim_matches('/') {
        "" => site,
        prefix => Router::new().nest(&format!("/{}", prefix), site),
    }
}

#[derive(Debug, Clone)]
pub struct PreviewServerConfig {
    pub dir: PathBuf,
    /// Prefix the site was built for (`[build] base_url`)
    pub base_url: String,
    pub host: String,
    pub port: u16,
    pub open: bool,
}

impl Default for PreviewServerConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("dist"),
            base_url: "/".to_string(),
            host: "127.0.0.1".to_string(),
            port: 4000,
            open: true,
        }
    }
}

/// Static preview of a production build.
pub struct PreviewServer {
    config: PreviewServerConfig,
    api: ContactApi,
}

impl PreviewServer {
    pub fn new(config: PreviewServerConfig, api: ContactApi) -> Self {
        Self { config, api }
    }

    pub async fn start(self) -> Result<(), ServerError> {
        let app = preview_router(&self.config.dir, &self.config.base_url, self.api);

        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = tokio::net::TcpListener::bind((self.config.host.as_str(), self.config.port))
            .await
            .map_err(|e| ServerError::BindError(addr.clone(), e.to_string()))?;

        let url = format!("http://{}{}", addr, self.config.base_url);
        tracing::info!("Serving {} at {}", self.config.dir.display(), url);

        if self.config.open {
            if let Err(e) = open::that(&url) {
                tracing::warn!("Could not open browser: {}", e);
            }
        }

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use masader_contact::LogHandler;
    use masader_content::{ServiceOption, SiteConfig};
    use masader_render::{RenderOptions, SiteRenderer};
    use std::fs;
    use std::sync::Arc;
    use tempfile::tempdir;
    use tower::ServiceExt;

    fn api() -> ContactApi {
        ContactApi::new(ServiceOption::default_catalog(), Arc::new(LogHandler))
    }

    #[tokio::test]
    async fn serves_built_files() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("index.html"), "<h1>مصادر</h1>").unwrap();

        let response = preview_router(temp.path(), "/", api())
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(String::from_utf8(bytes.to_vec()).unwrap(), "<h1>مصادر</h1>");
    }

    #[tokio::test]
    async fn missing_files_are_not_found() {
        let temp = tempdir().unwrap();

        let response = preview_router(temp.path(), "/", api())
            .oneshot(Request::get("/faq/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn contact_endpoint_is_mounted() {
        let temp = tempdir().unwrap();

        let response = preview_router(temp.path(), "/", api())
            .oneshot(
                Request::post("/api/contact")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name":"سعيد"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn form_endpoint_resolves_under_base_url() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("index.html"), "<h1>مصادر</h1>").unwrap();

        let options = RenderOptions {
            base_url: "/site/".to_string(),
            ..Default::default()
        };
        let html = SiteRenderer::new(SiteConfig::default().compose(), vec![], options)
            .unwrap()
            .render_home()
            .unwrap();
        let endpoint = html
            .split("data-endpoint=\"")
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .unwrap()
            .to_string();
        assert_eq!(endpoint, "/site/api/contact");

        let app = preview_router(temp.path(), "/site/", api());

        let response = app
            .clone()
            .oneshot(
                Request::post(endpoint.as_str())
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name":"سعيد"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = app
            .oneshot(Request::get("/site/index.html").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn defaults_to_dist_on_port_4000() {
        let config = PreviewServerConfig::default();
        assert_eq!(config.dir, PathBuf::from("dist"));
        assert_eq!(config.port, 4000);
        assert_eq!(config.base_url, "/");
    }
}
