#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Env {
    pub listen: String,
    pub port: String,
    pub url: String,
}
impl Default for Env {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0".to_string(),
            port: "3000".to_string(),
            url: "http://localhost:3000".to_string(),
        }
    }
}
impl Env {
    pub fn environment(default: Self) -> Self {
        Self {
            listen: std::env::var("LISTEN").unwrap_or(default.listen),
            port: std::env::var("PORT").unwrap_or(default.port),
            url: std::env::var("URL").unwrap_or(default.url),
        }
    }

    pub fn bind(&self) -> String {
        format!("{}:{}", self.listen, self.port)
    }

    /// Public base used to derive each todo's `url`.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}
