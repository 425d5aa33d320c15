use crate::status_classifier::status_category::StatusCategory;

/// Maps an HTTP status code to its category. Ranges are checked in order and
/// every integer, including negative and out-of-range values, gets a category.
pub fn classify(code: i32) -> StatusCategory {
    match code {
        200..=299 => StatusCategory::Success,
        300..=399 => StatusCategory::Redirection,
        400 => StatusCategory::InvalidRequest,
        401 => StatusCategory::AuthenticationRequired,
        403 => StatusCategory::Forbidden,
        404 => StatusCategory::NotFound,
        402 | 405..=499 => StatusCategory::ClientError,
        500..=599 => StatusCategory::ServerError,
        _ => StatusCategory::Unknown,
    }
}
