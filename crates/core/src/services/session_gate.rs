use crate::models::session::Session;

/// Read access to the host's credential storage (localStorage, keyring,
/// in-memory — the host decides). This library never writes a token.
pub trait SessionStore: Send + Sync {
    /// The stored token, if any.
    fn token(&self) -> Option<String>;
}

/// Navigation seam for the login redirect. The host wires this to its
/// router; tests count the calls.
pub trait AuthNavigator: Send + Sync {
    fn redirect_to_login(&self);
}

/// Verifies a credential exists before any data fetch and owns the
/// redirect-to-login side effect.
///
/// Two paths lead to a redirect: no stored token at all, or a server
/// rejection of the token mid-flight (`handle_rejection`). No other
/// failure redirects, and a rejected request is never retried.
pub struct SessionGate {
    store: Box<dyn SessionStore>,
    navigator: Box<dyn AuthNavigator>,
}

impl SessionGate {
    pub fn new(store: Box<dyn SessionStore>, navigator: Box<dyn AuthNavigator>) -> Self {
        Self { store, navigator }
    }

    /// Returns the session if a token is stored; otherwise triggers the
    /// login redirect and returns `None`, short-circuiting every
    /// dependent fetch.
    pub fn ensure_session(&self) -> Option<Session> {
        match self.store.token() {
            Some(token) => Some(Session::new(token)),
            None => {
                self.navigator.redirect_to_login();
                None
            }
        }
    }

    /// The server rejected the token on a dependent request: redirect.
    pub fn handle_rejection(&self) {
        self.navigator.redirect_to_login();
    }
}

/// Simple in-memory `SessionStore`, mainly for tests and native hosts
/// without a platform store.
#[derive(Default)]
pub struct MemorySessionStore {
    token: std::sync::RwLock<Option<String>>,
}

impl MemorySessionStore {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: std::sync::RwLock::new(token),
        }
    }

    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = token;
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }
}
