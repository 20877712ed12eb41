//! WebSocket live reload.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Messages sent to connected browsers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReloadMessage {
    /// Full page reload
    Reload,

    /// Site content failed to load; the page stays as it is
    Error { message: String },

    /// Connection established
    Connected,
}

/// Hub for broadcasting reload messages to all connected clients.
#[derive(Debug, Clone)]
pub struct ReloadHub {
    sender: broadcast::Sender<ReloadMessage>,
}

impl ReloadHub {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(100);
        Self { sender }
    }

    /// Send a message to all connected clients.
    pub fn send(&self, msg: ReloadMessage) {
        // No receivers is fine
        let _ = self.sender.send(msg);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ReloadMessage> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ReloadHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Client-side reload script. Connects back to whichever host served the page.
pub fn reload_client_script() -> &'static str {
    RELOAD_CLIENT
}

const RELOAD_CLIENT: &str = r#"(function () {
  'use strict';

  var attempts = 0;
  var maxAttempts = 10;

  function connect() {
    var scheme = location.protocol === 'https:' ? 'wss://' : 'ws://';
    var ws = new WebSocket(scheme + location.host + '/__reload');

    ws.onopen = function () {
      attempts = 0;
    };

    ws.onmessage = function (event) {
      var msg = JSON.parse(event.data);
      switch (msg.type) {
        case 'reload':
          location.reload();
          break;
        case 'error':
          console.error('[reload]', msg.message);
          break;
        case 'connected':
          console.log('[reload] connected');
          break;
      }
    };

    ws.onclose = function () {
      if (attempts < maxAttempts) {
        attempts++;
        setTimeout(connect, 1000 * attempts);
      }
    };
  }

  connect();
})();
"#;
