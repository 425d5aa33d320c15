pub mod status_category;
pub mod status_classifier;
