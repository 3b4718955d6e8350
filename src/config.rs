use std::str::FromStr;
use std::time::Duration;

use crate::error::{Result, ViewerError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    /// Append the next page whenever the sentinel scrolls into view.
    Infinite,
    /// Fetch page 0 once and never paginate.
    Single,
}

impl FromStr for ScrollMode {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "infinite" => Ok(ScrollMode::Infinite),
            "single" => Ok(ScrollMode::Single),
            other => Err(ViewerError::Config(format!("unknown scroll mode '{}'", other))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Address the viewer binds to
    pub host: String,
    pub port: u16,

    /// Base URL of the service exposing `/api/orders`
    pub api_base: String,
    pub page_size: u32,
    pub scroll_mode: ScrollMode,

    /// Vertical margin added around the viewport before the sentinel counts as visible
    pub root_margin_px: u32,
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_api_base() -> String {
    "http://localhost:8080".to_string()
}

fn default_page_size() -> u32 {
    20
}

fn default_scroll_mode() -> ScrollMode {
    ScrollMode::Infinite
}

fn default_root_margin() -> u32 {
    200
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_base: default_api_base(),
            page_size: default_page_size(),
            scroll_mode: default_scroll_mode(),
            root_margin_px: default_root_margin(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ViewerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            host: lookup("VIEWER_HOST").unwrap_or_else(default_host),
            port: parse_var(&lookup, "VIEWER_PORT")?.unwrap_or_else(default_port),
            api_base: lookup("ORDERS_API_BASE").unwrap_or_else(default_api_base),
            page_size: parse_var(&lookup, "ORDERS_PAGE_SIZE")?.unwrap_or_else(default_page_size),
            scroll_mode: parse_var(&lookup, "ORDERS_SCROLL_MODE")?
                .unwrap_or_else(default_scroll_mode),
            root_margin_px: parse_var(&lookup, "SENTINEL_ROOT_MARGIN_PX")?
                .unwrap_or_else(default_root_margin),
            request_timeout_secs: parse_var(&lookup, "ORDERS_REQUEST_TIMEOUT_SECS")?
                .unwrap_or_else(default_request_timeout),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(ViewerError::Config("page size must be greater than zero".into()));
        }
        Ok(())
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ViewerError::Config(format!("{} has invalid value '{}'", key, raw))),
    }
}
