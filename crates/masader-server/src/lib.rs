//! Development and preview server for the Masader website.
//!
//! The dev server renders pages on request, watches `site.toml` and the
//! content directory, and tells open browsers to reload over a WebSocket.
//! Both servers mount the contact API at `POST /api/contact`.

pub mod contact;
pub mod preview;
pub mod server;
pub mod watcher;
pub mod websocket;

pub use contact::{contact_router, ContactApi, ContactResponse, OutcomeKind};
pub use preview::{preview_router, PreviewServer, PreviewServerConfig};
pub use server::{DevServer, DevServerConfig, ServerError};
pub use watcher::{FileWatcher, WatchEvent};
pub use websocket::{reload_client_script, ReloadHub, ReloadMessage};
