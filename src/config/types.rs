use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}

/// Where the catalog server lives.
///
/// A single origin drives every endpoint: REST requests use it as-is and
/// the stats feed swaps in the matching push scheme. There is no separate
/// feed address to configure or to drift out of sync.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base origin (scheme + host + port), e.g. "http://127.0.0.1:8000".
    #[serde(default = "default_origin")]
    pub origin: String,
    /// Connection timeout in seconds, for REST connects and the feed
    /// handshake alike (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

fn default_origin() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl ServerConfig {
    /// Base URL for REST requests: the origin without any trailing slash.
    pub fn rest_base_url(&self) -> String {
        self.origin.trim_end_matches('/').to_string()
    }

    /// Stats feed URL: same host and port, push scheme, fixed `/ws` path.
    /// `http` becomes `ws` and `https` becomes `wss`.
    pub fn feed_url(&self) -> String {
        let base = self.rest_base_url();
        let switched = match base.strip_prefix("https://") {
            Some(rest) => format!("wss://{rest}"),
            None => match base.strip_prefix("http://") {
                Some(rest) => format!("ws://{rest}"),
                None => base,
            },
        };
        format!("{switched}/ws")
    }
}
