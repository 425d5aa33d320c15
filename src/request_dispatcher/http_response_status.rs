use crate::status_classifier::{status_category::StatusCategory, status_classifier::classify};

/// Outcome of a completed request. `category` is present exactly when `code`
/// is, and always equals `classify(code)`. Local `file:` reads carry neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponseStatus {
    code: Option<u16>,
    category: Option<StatusCategory>,
    has_body: bool,
}

impl HttpResponseStatus {
    pub fn classified(code: u16, has_body: bool) -> Self {
        Self {
            code: Some(code),
            category: Some(classify(i32::from(code))),
            has_body,
        }
    }

    pub fn unclassified(has_body: bool) -> Self {
        Self {
            code: None,
            category: None,
            has_body,
        }
    }

    pub fn code(&self) -> Option<u16> {
        self.code
    }

    pub fn category(&self) -> Option<StatusCategory> {
        self.category
    }

    pub fn has_body(&self) -> bool {
        self.has_body
    }
}
