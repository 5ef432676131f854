//! Authentication gate.

/// Whether this client is currently treated as an authenticated administrator.
///
/// Starts anonymous. Only the login handler moves it, and there is no logout:
/// the server-side session lives in the HTTP client's cookie store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    /// A fresh, anonymous session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            authenticated: false,
        }
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Record a 2xx login response.
    pub(crate) const fn authenticate(&mut self) {
        self.authenticated = true;
    }

    /// Record a failed login attempt.
    pub(crate) const fn reject(&mut self) {
        self.authenticated = false;
    }
}
