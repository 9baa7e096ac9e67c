/// Authenticated-session descriptor produced by a successful sign-in.
///
/// Independent of the wire shape; owned by the use-case caller and dropped
/// once the caller has acted on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSession {
    /// Bearer token for subsequent authenticated calls.
    pub access_token: String,
    /// Token scheme, normally "Bearer".
    pub token_type: String,
    /// Seconds until the token expires, when the API reports it.
    pub expires_in: Option<u64>,
}
