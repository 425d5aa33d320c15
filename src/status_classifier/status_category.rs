use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    Success,
    Redirection,
    InvalidRequest,
    AuthenticationRequired,
    Forbidden,
    NotFound,
    ClientError,
    ServerError,
    Unknown,
}

impl StatusCategory {
    pub const ALL: [StatusCategory; 9] = [
        StatusCategory::Success,
        StatusCategory::Redirection,
        StatusCategory::InvalidRequest,
        StatusCategory::AuthenticationRequired,
        StatusCategory::Forbidden,
        StatusCategory::NotFound,
        StatusCategory::ClientError,
        StatusCategory::ServerError,
        StatusCategory::Unknown,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusCategory::Success => "Success",
            StatusCategory::Redirection => "Redirection",
            StatusCategory::InvalidRequest => "Invalid request",
            StatusCategory::AuthenticationRequired => "Authentication required",
            StatusCategory::Forbidden => "Forbidden",
            StatusCategory::NotFound => "Not found",
            StatusCategory::ClientError => "Client error",
            StatusCategory::ServerError => "Server error",
            StatusCategory::Unknown => "Unknown status",
        }
    }
}

impl Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::status_classifier::status_category::StatusCategory;

    #[test]
    fn status_category_to_string() {
        let expected = [
            "Success",
            "Redirection",
            "Invalid request",
            "Authentication required",
            "Forbidden",
            "Not found",
            "Client error",
            "Server error",
            "Unknown status",
        ];

        for (category, &expected_str) in StatusCategory::ALL.iter().zip(expected.iter()) {
            assert_eq!(category.to_string(), expected_str);
            assert_eq!(category.label(), expected_str);
        }
    }

    #[test]
    fn labels_are_distinct() {
        let labels: HashSet<&str> = StatusCategory::ALL.iter().map(|c| c.label()).collect();

        assert_eq!(labels.len(), StatusCategory::ALL.len());
    }
}
