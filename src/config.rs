use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub app_password: String,
    pub session_secret: String,
    pub secure_cookies: bool,
    pub storage_backend: Option<String>,
    pub kv_database_url: Option<String>,
    pub blob_url: Option<String>,
    pub blob_token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let app_password = env::var("APP_PASSWORD").unwrap_or_else(|_| "devmeetup".to_string());
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            session_secret: non_empty_var("SESSION_SECRET").unwrap_or_else(|| app_password.clone()),
            app_password,
            secure_cookies: env::var("APP_ENV")
                .map(|v| v.eq_ignore_ascii_case("production"))
                .unwrap_or(false),
            storage_backend: non_empty_var("STORAGE_BACKEND").map(|v| v.to_lowercase()),
            kv_database_url: non_empty_var("KV_DATABASE_URL"),
            blob_url: non_empty_var("BLOB_URL"),
            blob_token: non_empty_var("BLOB_READ_WRITE_TOKEN"),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
