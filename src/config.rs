use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the backend service orders are proxied to.
    pub backend_base_url: String,
    /// Secret the session tokens are signed with.
    pub session_secret: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let backend_base_url = env::var("API_BASE_URL")?.trim_end_matches('/').to_string();
        let session_secret = env::var("SESSION_SECRET")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        Ok(Self {
            backend_base_url,
            session_secret,
            host,
            port,
        })
    }
}
