use crate::login::data::dto::LoginRequest;

/// Build the transport shape from raw credentials.
///
/// Pure construction, no validation; empty fields are rejected by the view
/// model before this point.
pub fn to_login_request(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}
