use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_RELAY_TIMEOUT_SECS: u64 = 30 * 60;
pub const DEFAULT_REQUEST_BODY_LIMIT: usize = 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    #[serde(default = "default_generator_url")]
    pub generator_url: String,
    pub relay_timeout_secs: Option<u64>,

    pub request_body_limit: Option<usize>,
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_generator_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

impl Envy {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn relay_timeout(&self) -> Duration {
        Duration::from_secs(self.relay_timeout_secs.unwrap_or(DEFAULT_RELAY_TIMEOUT_SECS))
    }

    pub fn request_body_limit(&self) -> usize {
        self.request_body_limit.unwrap_or(DEFAULT_REQUEST_BODY_LIMIT)
    }

    /// Joins the generator base address with an operation path.
    pub fn generator_endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.generator_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for Envy {
    fn default() -> Self {
        Self {
            app_env: default_app_env(),
            port: None,
            generator_url: default_generator_url(),
            relay_timeout_secs: None,
            request_body_limit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let envy: Envy = envy::from_iter(Vec::<(String, String)>::new()).unwrap();

        assert_eq!(envy.app_env, "development");
        assert_eq!(envy.port(), 5000);
        assert_eq!(envy.generator_url, "http://127.0.0.1:8000");
        assert_eq!(envy.relay_timeout(), Duration::from_secs(1800));
        assert_eq!(envy.request_body_limit(), 1024 * 1024);
    }

    #[test]
    fn reads_overrides_from_environment() {
        let vars = vec![
            ("APP_ENV".to_string(), "production".to_string()),
            ("PORT".to_string(), "8080".to_string()),
            ("GENERATOR_URL".to_string(), "http://gen:9000/".to_string()),
            ("RELAY_TIMEOUT_SECS".to_string(), "5".to_string()),
        ];
        let envy: Envy = envy::from_iter(vars).unwrap();

        assert_eq!(envy.app_env, "production");
        assert_eq!(envy.port(), 8080);
        assert_eq!(envy.relay_timeout(), Duration::from_secs(5));
        assert_eq!(
            envy.generator_endpoint("/generate-story"),
            "http://gen:9000/generate-story"
        );
    }
}
