//! Location API
//!
//! window.location: URL component fields over a parsed `url::Url`,
//! with navigation reduced to re-parsing.

use thiserror::Error;
use url::Url;

/// Location errors
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// window.location state
#[derive(Debug, Clone)]
pub struct Location {
    url: Url,
}

impl Location {
    pub fn new(url_str: &str) -> Result<Self, LocationError> {
        Ok(Self {
            url: Url::parse(url_str)?,
        })
    }

    /// Full URL
    pub fn href(&self) -> String {
        self.url.to_string()
    }

    /// Set href (navigate)
    pub fn set_href(&mut self, url: &str) -> Result<(), LocationError> {
        self.url = Url::parse(url)?;
        Ok(())
    }

    /// Protocol including the trailing colon, e.g. `https:`
    pub fn protocol(&self) -> String {
        format!("{}:", self.url.scheme())
    }

    /// Host with a non-default port appended
    pub fn host(&self) -> String {
        let hostname = self.hostname();
        match self.url.port() {
            Some(port) => format!("{hostname}:{port}"),
            None => hostname,
        }
    }

    /// Hostname only
    pub fn hostname(&self) -> String {
        self.url.host_str().unwrap_or("").to_string()
    }

    /// Port as a string, empty for the scheme default
    pub fn port(&self) -> String {
        self.url.port().map(|p| p.to_string()).unwrap_or_default()
    }

    /// Path component
    pub fn pathname(&self) -> &str {
        self.url.path()
    }

    /// Query string including the leading `?`, empty when absent
    pub fn search(&self) -> String {
        self.url
            .query()
            .map(|q| format!("?{q}"))
            .unwrap_or_default()
    }

    /// Fragment including the leading `#`, empty when absent
    pub fn hash(&self) -> String {
        self.url
            .fragment()
            .map(|f| format!("#{f}"))
            .unwrap_or_default()
    }

    /// Origin
    pub fn origin(&self) -> String {
        self.url.origin().ascii_serialization()
    }

    /// Navigate to a new URL
    pub fn assign(&mut self, url: &str) -> Result<(), LocationError> {
        tracing::info!(url, "location.assign");
        self.set_href(url)
    }

    /// Navigate, replacing the current entry
    pub fn replace(&mut self, url: &str) -> Result<(), LocationError> {
        tracing::info!(url, "location.replace");
        self.set_href(url)
    }

    /// Reload is a logging stub
    pub fn reload(&self) {
        tracing::info!("location.reload() called");
    }
}
