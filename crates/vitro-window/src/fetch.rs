//! Fetch family stubs
//!
//! Headers, Request and Response containers plus a `fetch` that never
//! touches the network: it logs the call and synthesizes a constant
//! 200 response carrying an `x-vitro-stub` marker header.

use tracing::info;

/// Header list: case-insensitive names, insertion order preserved,
/// repeated names allowed and combined on read, like the browser
/// Headers API
#[derive(Debug, Clone, Default)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header, keeping any existing values for the name
    pub fn append(&mut self, name: &str, value: &str) {
        self.entries
            .push((name.to_ascii_lowercase(), value.to_string()));
    }

    /// Replace all values for a name with a single one
    pub fn set(&mut self, name: &str, value: &str) {
        let lower = name.to_ascii_lowercase();
        self.entries.retain(|(n, _)| *n != lower);
        self.entries.push((lower, value.to_string()));
    }

    /// Combined value for a name, comma-joined across appends
    pub fn get(&self, name: &str) -> Option<String> {
        let lower = name.to_ascii_lowercase();
        let values: Vec<&str> = self
            .entries
            .iter()
            .filter(|(n, _)| *n == lower)
            .map(|(_, v)| v.as_str())
            .collect();
        if values.is_empty() {
            None
        } else {
            Some(values.join(", "))
        }
    }

    pub fn has(&self, name: &str) -> bool {
        let lower = name.to_ascii_lowercase();
        self.entries.iter().any(|(n, _)| *n == lower)
    }

    /// Drop every value for a name
    pub fn delete(&mut self, name: &str) {
        let lower = name.to_ascii_lowercase();
        self.entries.retain(|(n, _)| *n != lower);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate (lowercased name, value) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// Request container
#[derive(Debug, Clone)]
pub struct Request {
    pub method: String,
    pub url: String,
    pub headers: Headers,
    pub body: Option<String>,
}

impl Request {
    /// A GET request with no headers or body
    pub fn new(url: &str) -> Self {
        Self {
            method: "GET".to_string(),
            url: url.to_string(),
            headers: Headers::new(),
            body: None,
        }
    }
}

/// Response container
#[derive(Debug, Clone)]
pub struct Response {
    pub url: String,
    pub status: u16,
    pub status_text: String,
    pub headers: Headers,
    body: String,
}

impl Response {
    /// Whether the status is in the 2xx range
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text
    pub fn text(&self) -> String {
        self.body.clone()
    }
}

/// Stubbed fetch: logs the call and returns an empty 200 response
pub fn fetch(request: &Request) -> Response {
    info!(method = %request.method, url = %request.url, "fetch (stub, no network)");

    let mut headers = Headers::new();
    headers.append("content-type", "text/plain");
    headers.append("x-vitro-stub", "1");

    Response {
        url: request.url.clone(),
        status: 200,
        status_text: "OK".to_string(),
        headers,
        body: String::new(),
    }
}
