/// Client configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// Point the URLs at a deployed backend via environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// HTTP API base URL (default: `http://localhost:5000/api/`).
    pub api_url: String,
    /// Notification push endpoint (default: `ws://localhost:5000/ws`).
    pub ws_url: String,
    /// Path of the cached-session file (default: `.gigboard-session.json`).
    pub session_file: String,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var        | Default                      |
    /// |----------------|------------------------------|
    /// | `API_URL`      | `http://localhost:5000/api/` |
    /// | `WS_URL`       | `ws://localhost:5000/ws`     |
    /// | `SESSION_FILE` | `.gigboard-session.json`     |
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:5000/api/".into());
        let ws_url = std::env::var("WS_URL").unwrap_or_else(|_| "ws://localhost:5000/ws".into());
        let session_file =
            std::env::var("SESSION_FILE").unwrap_or_else(|_| ".gigboard-session.json".into());

        Self {
            api_url,
            ws_url,
            session_file,
        }
    }
}
