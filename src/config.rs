use std::env;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_BODY_MB: usize = 25;

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model_id: String,
    pub base_url: String,
    pub parallel_variants: bool,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            api_key: None,
            model_id: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            parallel_variants: false,
        }
    }
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Blank values count
    /// as unset, so `GOOGLE_API_KEY=` in a `.env` file still reads as missing.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        GeminiConfig {
            api_key: non_blank("GOOGLE_API_KEY"),
            model_id: non_blank("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: non_blank("GEMINI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            parallel_variants: non_blank("GENERATION_PARALLEL").map_or(false, |val| val == "true"),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_parallel_variants(mut self, enabled: bool) -> Self {
        self.parallel_variants = enabled;
        self
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub max_body_mb: usize,
    pub json_logs: bool,
    pub log_file: Option<String>,
    pub gemini: GeminiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            max_body_mb: DEFAULT_MAX_BODY_MB,
            json_logs: false,
            log_file: None,
            gemini: GeminiConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();
        let host = var("HOST").unwrap_or(defaults.host);
        let port = var("PORT")
            .and_then(|port| port.parse().ok())
            .unwrap_or(defaults.port);
        let max_body_mb = var("MAX_BODY_MB")
            .and_then(|mb| mb.parse().ok())
            .unwrap_or(defaults.max_body_mb);
        let json_logs = var("LOG_FORMAT").map_or(false, |val| val == "json");
        let log_file = var("LOG_FILE").filter(|path| !path.trim().is_empty());

        Config {
            host,
            port,
            max_body_mb,
            json_logs,
            log_file,
            gemini: GeminiConfig::from_vars(&var),
        }
    }

    pub fn max_body_bytes(&self) -> usize {
        self.max_body_mb * 1024 * 1024
    }
}
