use std::path::PathBuf;

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Directory for the redb snapshot database.
    pub data_dir: PathBuf,
    /// Directory for uploaded images.
    pub uploads_dir: PathBuf,
    /// Base URL of the external chat agent; empty disables the proxy and
    /// every chat request gets the canned fallback reply.
    pub chat_agent_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let data_dir = std::env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        let uploads_dir = std::env::var("UPLOADS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("uploads"));
        let chat_agent_url = std::env::var("CHAT_AGENT_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());

        Self {
            host,
            port,
            data_dir,
            uploads_dir,
            chat_agent_url,
        }
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn snapshot_db_path(&self) -> PathBuf {
        self.data_dir.join("snapshots.redb")
    }
}
