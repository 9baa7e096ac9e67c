use serde::Deserialize;

use crate::login::domain::LoginSession;

/// Wire shape of a successful sign-in response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

impl LoginResponse {
    /// Convert the wire model into the domain entity.
    pub fn into_entity(self) -> LoginSession {
        LoginSession {
            access_token: self.access_token,
            token_type: self.token_type,
            expires_in: self.expires_in,
        }
    }
}
