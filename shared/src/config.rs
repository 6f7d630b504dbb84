use serde::{Deserialize, Serialize};

pub const CONFIG_PATH: &str = "/config.json";
pub const DEFAULT_API_URL: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_url: String,
    /// Realtime server root. Empty means the page's own origin.
    pub socket_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            socket_url: String::new(),
        }
    }
}

/// Shape of the runtime `config.json`. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    #[serde(rename = "API_URL", default)]
    pub api_url: Option<String>,
    #[serde(rename = "SOCKET_URL", default)]
    pub socket_url: Option<String>,
}

impl ClientConfig {
    pub fn merged(mut self, file: ConfigFile) -> Self {
        if let Some(api_url) = non_blank(file.api_url) {
            self.api_url = api_url;
        }
        if let Some(socket_url) = non_blank(file.socket_url) {
            self.socket_url = socket_url;
        }
        self
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(json: &str) -> ConfigFile {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn recognized_keys_override_defaults() {
        let config = ClientConfig::default().merged(file(
            r#"{"API_URL": "https://votes.example/api/", "SOCKET_URL": "https://votes.example", "THEME": "dark"}"#,
        ));
        assert_eq!(config.api_url, "https://votes.example/api");
        assert_eq!(config.socket_url, "https://votes.example");
        assert_eq!(config.endpoint("/votes"), "https://votes.example/api/votes");
    }

    #[test]
    fn missing_or_blank_keys_keep_defaults() {
        let config = ClientConfig::default().merged(file(r#"{"API_URL": "  ", "SOCKET_URL": null}"#));
        assert_eq!(config, ClientConfig::default());
        assert_eq!(ClientConfig::default().merged(file("{}")), ClientConfig::default());
    }
}
