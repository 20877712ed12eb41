//! Development server implementation.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path as UrlPath, State,
    },
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::sync::RwLock;

use masader_contact::{handler_from_settings, SubmissionError};
use masader_content::{load_site, ContentError, SiteConfig};
use masader_render::{AssetPipeline, RenderError, RenderOptions, SiteRenderer};

use crate::contact::{contact_router, ContactApi};
use crate::watcher::{FileWatcher, WatchEvent};
use crate::websocket::{reload_client_script, ReloadHub, ReloadMessage};

/// Configuration for the development server.
#[derive(Debug, Clone)]
pub struct DevServerConfig {
    /// Path to `site.toml`
    pub config_path: PathBuf,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("site.toml"),
            port: 7777,
            host: "127.0.0.1".to_string(),
            open: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind to {0}: {1}")]
    BindError(String, String),

    #[error("File watch error: {0}")]
    WatchError(String),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Invalid submission settings: {0}")]
    Submission(#[from] SubmissionError),
}

/// Shared server state.
struct DevState {
    config_path: PathBuf,
    renderer: RwLock<SiteRenderer>,
    styles: RwLock<Vec<PathBuf>>,
    reload: ReloadHub,
    contact: ContactApi,
}

impl DevState {
    /// Load `site.toml` and the documents into a fresh renderer.
    fn load(config_path: &std::path::Path) -> Result<(SiteConfig, SiteRenderer), ServerError> {
        let (config, documents) = load_site(config_path)?;
        let options = RenderOptions {
            base_url: "/".to_string(),
            styles: config
                .build
                .styles
                .iter()
                .map(|s| AssetPipeline::style_href("/", std::path::Path::new(s)))
                .collect(),
            live_reload: true,
        };
        let renderer = SiteRenderer::new(config.compose(), documents, options)?;
        Ok((config, renderer))
    }

    /// Reload content after a change; keeps the previous site if loading fails.
    async fn refresh(&self) -> Result<(), ServerError> {
        let (config, renderer) = Self::load(&self.config_path)?;

        self.contact.set_catalog(config.contact.services.clone());
        *self.styles.write().await = config.build.styles.iter().map(PathBuf::from).collect();
        *self.renderer.write().await = renderer;
        Ok(())
    }
}

/// Development server.
pub struct DevServer {
    config: DevServerConfig,
}

impl DevServer {
    /// Create a new development server.
    pub fn new(config: DevServerConfig) -> Self {
        Self { config }
    }

    /// Start the development server.
    pub async fn start(self) -> Result<(), ServerError> {
        let (site_config, renderer) = DevState::load(&self.config.config_path)?;

        let handler = handler_from_settings(&site_config.submission)?;
        let contact = ContactApi::new(site_config.contact.services.clone(), handler);

        let state = Arc::new(DevState {
            config_path: self.config.config_path.clone(),
            renderer: RwLock::new(renderer),
            styles: RwLock::new(
                site_config
                    .build
                    .styles
                    .iter()
                    .map(PathBuf::from)
                    .collect(),
            ),
            reload: ReloadHub::new(),
            contact: contact.clone(),
        });

        let watch_paths = vec![
            self.config.config_path.clone(),
            site_config.build.content_dir.clone(),
        ];

        let (watcher, mut rx) =
            FileWatcher::new(&watch_paths).map_err(|e| ServerError::WatchError(e.to_string()))?;

        let state_clone = Arc::clone(&state);
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                handle_watch_event(&state_clone, event).await;
            }
            // Keep watcher alive
            drop(watcher);
        });

        let app = router(state, contact);

        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = tokio::net::TcpListener::bind((self.config.host.as_str(), self.config.port))
            .await
            .map_err(|e| ServerError::BindError(addr.clone(), e.to_string()))?;

        tracing::info!("Starting dev server at http://{}", addr);

        if self.config.open {
            let url = format!("http://{}", addr);
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

fn router(state: Arc<DevState>, contact: ContactApi) -> Router {
    Router::new()
        .route("/assets/main.css", get(css_handler))
        .route("/assets/main.js", get(js_handler))
        .route("/assets/{file}", get(style_handler))
        .route("/__reload", get(ws_handler))
        .route("/__reload.js", get(reload_script_handler))
        .fallback(page_handler)
        .with_state(state)
        .merge(contact_router(contact))
}

/// Handle file watch events.
async fn handle_watch_event(state: &Arc<DevState>, event: WatchEvent) {
    match &event {
        WatchEvent::ConfigModified(path) => {
            tracing::info!("Config modified: {}", path.display());
        }
        WatchEvent::ContentModified(path) => {
            tracing::info!("Content modified: {}", path.display());
        }
        WatchEvent::Created(path) | WatchEvent::Deleted(path) | WatchEvent::Modified(path) => {
            tracing::debug!("Changed: {}", path.display());
        }
    }

    match state.refresh().await {
        Ok(()) => state.reload.send(ReloadMessage::Reload),
        Err(e) => {
            tracing::error!("Failed to reload site: {}", e);
            state.reload.send(ReloadMessage::Error {
                message: e.to_string(),
            });
        }
    }
}

/// Render the page at the request path.
async fn page_handler(State(state): State<Arc<DevState>>, uri: Uri) -> Response {
    let renderer = state.renderer.read().await;

    match renderer.render_path(uri.path()) {
        Ok(Some(html)) => Html(html).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render {}: {}", uri.path(), e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

const NOT_FOUND_PAGE: &str = r#"<!DOCTYPE html>
<html lang="ar" dir="rtl">
<body>
<h1>الصفحة غير موجودة</h1>
<p><a href="/">العودة إلى الرئيسية</a></p>
<script src="/__reload.js"></script>
</body>
</html>
"#;

async fn css_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        AssetPipeline::generate_css(),
    )
}

async fn js_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        AssetPipeline::generate_js(),
    )
}

/// Serve one of the extra stylesheets listed in `[build] styles`.
async fn style_handler(
    State(state): State<Arc<DevState>>,
    UrlPath(file): UrlPath<String>,
) -> Response {
    let source = state
        .styles
        .read()
        .await
        .iter()
        .find(|p| p.file_name().and_then(|f| f.to_str()) == Some(file.as_str()))
        .cloned();

    let Some(source) = source else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match tokio::fs::read_to_string(&source).await {
        Ok(css) => ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], css).into_response(),
        Err(e) => {
            tracing::warn!("Failed to read stylesheet {}: {}", source.display(), e);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// Handler for the reload WebSocket endpoint.
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<DevState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Forward reload messages to one browser.
async fn handle_ws(mut socket: WebSocket, state: Arc<DevState>) {
    let mut rx = state.reload.subscribe();

    if send_json(&mut socket, &ReloadMessage::Connected).await.is_err() {
        return;
    }

    while let Ok(msg) = rx.recv().await {
        if send_json(&mut socket, &msg).await.is_err() {
            break;
        }
    }
}

async fn send_json(socket: &mut WebSocket, msg: &ReloadMessage) -> Result<(), axum::Error> {
    let json = serde_json::to_string(msg).map_err(axum::Error::new)?;
    socket.send(Message::Text(json.into())).await
}

async fn reload_script_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        reload_client_script(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use std::fs;
    use tempfile::{tempdir, TempDir};
    use tower::ServiceExt;

    fn dev_state(temp: &TempDir, toml: &str) -> Arc<DevState> {
        let config_path = temp.path().join("site.toml");
        fs::write(&config_path, toml).unwrap();
        let (config, renderer) = DevState::load(&config_path).unwrap();
        let handler = handler_from_settings(&config.submission).unwrap();

        Arc::new(DevState {
            config_path,
            renderer: RwLock::new(renderer),
            styles: RwLock::new(config.build.styles.iter().map(PathBuf::from).collect()),
            reload: ReloadHub::new(),
            contact: ContactApi::new(config.contact.services.clone(), handler),
        })
    }

    async fn get(state: &Arc<DevState>, path: &str) -> (StatusCode, String) {
        let app = router(Arc::clone(state), state.contact.clone());
        let response = app
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[test]
    fn creates_server_with_default_config() {
        let server = DevServer::new(DevServerConfig::default());
        assert_eq!(server.config.port, 7777);
        assert_eq!(server.config.config_path, PathBuf::from("site.toml"));
    }

    #[tokio::test]
    async fn serves_home_with_reload_script() {
        let temp = tempdir().unwrap();
        let state = dev_state(&temp, "");

        let (status, body) = get(&state, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("id=\"contact\""));
        assert!(body.contains("/__reload.js"));
    }

    #[tokio::test]
    async fn serves_documents_and_404s() {
        let temp = tempdir().unwrap();
        let state = dev_state(&temp, "");

        let (status, body) = get(&state, "/return-policy/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("سياسة الإرجاع"));

        let (status, _) = get(&state, "/nope/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn serves_assets_and_reload_client() {
        let temp = tempdir().unwrap();
        let state = dev_state(&temp, "");

        let (status, css) = get(&state, "/assets/main.css").await;
        assert_eq!(status, StatusCode::OK);
        assert!(css.contains(".site-header"));

        let (status, js) = get(&state, "/__reload.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(js.contains("/__reload"));
    }

    #[tokio::test]
    async fn serves_configured_stylesheets() {
        let temp = tempdir().unwrap();
        let style = temp.path().join("brand.css");
        fs::write(&style, ".brand { color: red; }").unwrap();
        let state = dev_state(
            &temp,
            &format!("[build]\nstyles = [{:?}]\n", style.display().to_string()),
        );

        let (status, css) = get(&state, "/assets/brand.css").await;
        assert_eq!(status, StatusCode::OK);
        assert!(css.contains("color: red"));

        let (_, home) = get(&state, "/").await;
        assert!(home.contains("/assets/brand.css"));

        let (status, _) = get(&state, "/assets/other.css").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn refresh_picks_up_config_changes() {
        let temp = tempdir().unwrap();
        let state = dev_state(&temp, "");
        let mut rx = state.reload.subscribe();

        fs::write(
            temp.path().join("site.toml"),
            "[hero]\ntitle = \"عنوان جديد\"\n",
        )
        .unwrap();
        handle_watch_event(&state, WatchEvent::ConfigModified(temp.path().join("site.toml"))).await;

        assert_eq!(rx.try_recv().unwrap(), ReloadMessage::Reload);
        let (_, body) = get(&state, "/").await;
        assert!(body.contains("عنوان جديد"));
    }

    #[tokio::test]
    async fn broken_config_keeps_previous_site() {
        let temp = tempdir().unwrap();
        let state = dev_state(&temp, "");
        let mut rx = state.reload.subscribe();

        fs::write(temp.path().join("site.toml"), "[hero\n").unwrap();
        handle_watch_event(&state, WatchEvent::ConfigModified(temp.path().join("site.toml"))).await;

        assert!(matches!(rx.try_recv().unwrap(), ReloadMessage::Error { .. }));
        let (status, _) = get(&state, "/").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn mounts_contact_api() {
        let temp = tempdir().unwrap();
        let state = dev_state(&temp, "[submission]\nhandler = \"log\"\n");
        let app = router(Arc::clone(&state), state.contact.clone());

        let response = app
            .oneshot(
                Request::post("/api/contact")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        r#"{"name":"سعيد","phone":"0551234567","email":"a@b.com","service":"driver","message":"استفسار"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
