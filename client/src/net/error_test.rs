use super::*;

#[test]
fn network_failure_uses_no_response_message() {
    assert_eq!(
        ApiError::Network.user_message("Failed to fetch jobs"),
        "No response from server - please try again later"
    );
}

#[test]
fn timeout_uses_timeout_message() {
    assert_eq!(ApiError::Timeout.user_message("x"), TIMEOUT_MESSAGE);
}

#[test]
fn server_message_is_shown_verbatim() {
    let err = ApiError::from_response(400, "Bad Request", r#"{"message":"Title is required"}"#);
    assert_eq!(err.user_message("Failed to create job"), "Title is required");
}

#[test]
fn server_without_message_falls_back_to_status_text() {
    let err = ApiError::from_response(500, "Internal Server Error", "<html>oops</html>");
    assert_eq!(err.user_message("Failed to fetch jobs"), "Internal Server Error");
}

#[test]
fn server_without_message_or_status_text_uses_fallback() {
    let err = ApiError::from_response(502, "", r#"{"message":"   "}"#);
    assert_eq!(err.user_message("Failed to fetch jobs"), "Failed to fetch jobs");
}

#[test]
fn from_response_keeps_status() {
    let err = ApiError::from_response(404, "Not Found", "");
    assert_eq!(
        err,
        ApiError::Server { status: 404, status_text: "Not Found".to_owned(), message: None }
    );
}

#[test]
fn invalid_credentials_has_generic_message() {
    assert_eq!(ApiError::InvalidCredentials.user_message("x"), "Invalid email or password");
}

#[test]
fn decode_and_unavailable_use_fallback() {
    assert_eq!(ApiError::Decode("eof".to_owned()).user_message("fb"), "fb");
    assert_eq!(ApiError::Unavailable.user_message("fb"), "fb");
}

