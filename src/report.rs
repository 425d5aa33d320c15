use http_status_probe::request_dispatcher::{
    dispatch_error::DispatchError, pending_dispatch::DispatchOutcome,
};

pub(crate) const EMPTY_INPUT_MESSAGE: &str = "The URL field is required.";
pub(crate) const INVALID_URL_MESSAGE: &str = "The format is invalid.";
pub(crate) const NO_RESPONSE_MESSAGE: &str = "ERROR: No response.";
pub(crate) const RESULTS_HEADER: &str = "HTTP request results";

/// Renders a dispatch outcome as the lines shown to the user.
pub(crate) fn render(outcome: &DispatchOutcome) -> Vec<String> {
    match outcome {
        Err(DispatchError::EmptyInput) => vec![EMPTY_INPUT_MESSAGE.to_string()],
        Err(DispatchError::InvalidUrl(_)) => vec![INVALID_URL_MESSAGE.to_string()],
        Err(DispatchError::Transport(_) | DispatchError::NoRuntime(_)) => {
            vec![NO_RESPONSE_MESSAGE.to_string()]
        }
        Ok(status) => {
            let label = status.category().map_or("Unknown", |category| category.label());

            let message = if status.has_body() {
                format!("{}. Data available", label)
            } else {
                label.to_string()
            };

            vec![
                RESULTS_HEADER.to_string(),
                format!("Code: {}", status.code().unwrap_or(0)),
                message,
            ]
        }
    }
}

/// 0 when a response arrived, 2 when the input was rejected, 1 otherwise.
pub(crate) fn exit_code(outcome: &DispatchOutcome) -> u8 {
    match outcome {
        Ok(_) => 0,
        Err(err) if err.is_validation() => 2,
        Err(_) => 1,
    }
}
