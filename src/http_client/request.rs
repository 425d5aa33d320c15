use std::fmt::{self, Display};

use url::Url;

/// A bodyless GET request. Method, headers and body are fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub url: Url,
}

impl Request {
    pub fn get(url: Url) -> Self {
        Self { url }
    }
}

impl Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GET {}", self.url)
    }
}
