use serde::Serialize;

/// Wire shape of the sign-in request.
///
/// Built fresh per request by the mapper and owned by the data-source
/// boundary; discarded after transmission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
