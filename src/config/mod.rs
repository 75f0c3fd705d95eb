use crate::errors::{HeadlinesError, HeadlinesResult};
use crate::sources::NewsApiConfig;

pub const DEFAULT_NEWS_API_URL: &str = "https://newsapi.org/v2";

#[derive(Debug, Clone)]
pub struct Config {
    /// Absent keys are not rejected here, the fetcher reports them per call.
    pub news_api_key: Option<String>,
    pub news_api_url: String,
    pub db_path: String,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> HeadlinesResult<Self> {
        let exe_dir = Self::exe_dir();

        // Try to load .env from executable's directory first
        if let Some(ref dir) = exe_dir {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        let news_api_key = std::env::var("NEWS_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let news_api_url = std::env::var("NEWS_API_URL")
            .unwrap_or_else(|_| DEFAULT_NEWS_API_URL.to_string());
        url::Url::parse(&news_api_url)
            .map_err(|e| HeadlinesError::Config(format!("NEWS_API_URL: {}", e)))?;

        // Default db_path is relative to executable directory
        let db_path = std::env::var("HEADLINES_DB_PATH").unwrap_or_else(|_| {
            exe_dir
                .map(|d| d.join("headlines.db").to_string_lossy().into_owned())
                .unwrap_or_else(|| "./headlines.db".to_string())
        });

        Ok(Self {
            news_api_key,
            news_api_url,
            db_path,
        })
    }

    pub fn news_api(&self) -> NewsApiConfig {
        NewsApiConfig::new(&self.news_api_url, self.news_api_key.clone())
    }
}
