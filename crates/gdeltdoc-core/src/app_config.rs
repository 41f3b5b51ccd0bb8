/// Production endpoint of the GDELT DOC 2.0 API.
pub const DEFAULT_BASE_URL: &str = "https://api.gdeltproject.org/api/v2/doc/doc";

/// Default number of sanitization passes the JSON repair loop may run.
pub const DEFAULT_JSON_PARSE_DEPTH: usize = 100;

/// Settings shared by the client library and the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub json_parse_depth: usize,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: "gdeltdoc/0.1 (news-search)".to_string(),
            json_parse_depth: DEFAULT_JSON_PARSE_DEPTH,
            log_level: "info".to_string(),
        }
    }
}
