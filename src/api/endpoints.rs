//! Catalogue of remote operations the console can call.

/// One remote operation, addressed relative to the API base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Path relative to the base URL, without a leading slash.
    pub path: &'static str,
    /// Whether requests must carry a bearer token.
    pub requires_auth: bool,
}

/// Sign-in; the only call made without a token.
pub const LOGIN: Endpoint = Endpoint {
    path: "auth/login",
    requires_auth: false,
};

/// Console user listing.
pub const USERS: Endpoint = Endpoint {
    path: "users",
    requires_auth: true,
};

/// Customer order listing.
pub const ORDERS: Endpoint = Endpoint {
    path: "orders",
    requires_auth: true,
};
